//! # EnglishMate Library
//!
//! 双语英语辅导服务：会话场景、语法主题和词汇课程，逐行附带译文，并可与语言模型自由对话。
//!
//! ## 模块组织
//!
//! - `tutor` - 辅导逻辑（分页去重、双语格式化、视图状态、聊天记录）
//! - `network` - 调用服务器中继的 HTTP 客户端
//! - `env` - 类型安全的环境变量配置
//! - `utils` - 工具函数和实用程序
//! - `cli` - 终端前端（可选）
//! - `web` - Web服务器与中继（可选）

#[cfg(feature = "cli")]
pub mod cli;
pub mod env;
pub mod network;
pub mod tutor;
pub mod utils;
#[cfg(feature = "web")]
pub mod web;

// Re-export commonly used items for convenience
pub use network::*;
pub use tutor::*;
