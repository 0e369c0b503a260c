//! 终端前端
//!
//! - `commands` - 命令解析
//! - `render` - 视图渲染
//! - `repl` - 交互式循环

pub mod commands;
pub mod render;
pub mod repl;

pub use commands::{parse_command, Command, USAGE};
pub use repl::run;
