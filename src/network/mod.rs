//! # 网络模块
//!
//! 客户端与 EnglishMate Web 服务器之间的通信：
//!
//! - `relay_client` - 调用 `/api/cohere` 和 `/api/translate` 中继的 HTTP 客户端

pub mod relay_client;

// Re-export commonly used items for convenience
pub use relay_client::RelayClient;
