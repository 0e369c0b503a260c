//! 日志初始化

use std::str::FromStr;

use tracing::Level;

/// 解析日志级别，无法识别时回退到 `INFO`
pub fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::INFO)
}

/// 安装全局 fmt 订阅者，日志输出到 stderr
pub fn init(level: &str) {
    tracing_subscriber::fmt()
        .with_max_level(parse_level(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
