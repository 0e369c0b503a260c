//! # 工具模块
//!
//! - `logging` - 二进制程序共用的日志初始化

#[cfg(feature = "tracing-subscriber")]
pub mod logging;
