//! # 辅导模块
//!
//! 双语辅导的客户端逻辑：
//!
//! - `loader` - 分页加载与去重
//! - `formatter` - 拆分文本并逐单元并发翻译
//! - `session` - 视图状态、选择操作和聊天记录
//! - `content` - 提示词和静态课程目录
//! - `provider` - 生成 / 翻译服务接口

pub mod content;
pub mod error;
pub mod formatter;
pub mod loader;
pub mod ordered_set;
pub mod provider;
pub mod session;

// Re-export commonly used items for convenience
pub use content::{lesson_catalog, prompts, Lesson, DEFAULT_TARGET_LANG};
pub use error::{TutorError, TutorResult};
pub use formatter::{format_bilingual, split_units, BilingualLine, Segmentation};
pub use loader::{parse_page, ListLoader, PageOutcome};
pub use ordered_set::OrderedSet;
pub use provider::{Generator, Translator};
pub use session::{
    LessonDetail, LessonView, ListView, Message, Selection, Sender, SessionConfig, TutorSession,
    View,
};
