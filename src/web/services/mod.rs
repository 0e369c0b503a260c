//! Web服务层模块
//!
//! 与第三方 API 通信的上游客户端：
//!
//! - `mymemory` - 翻译上游（MyMemory）
//! - `cohere` - 文本生成上游（Cohere chat）

pub mod cohere;
pub mod mymemory;
