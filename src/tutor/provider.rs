//! 生成与翻译服务的抽象接口
//!
//! 辅导会话只依赖这两个 trait；`network::RelayClient` 通过 HTTP 中继实现它们，
//! 测试中可以替换为脚本化的实现。

use async_trait::async_trait;

use crate::tutor::error::TutorResult;

/// 文本生成服务（语言模型）
#[async_trait]
pub trait Generator: Send + Sync {
    /// 根据提示词生成原始文本
    async fn generate(&self, prompt: &str) -> TutorResult<String>;
}

/// 翻译服务
#[async_trait]
pub trait Translator: Send + Sync {
    /// 将一段文本翻译为目标语言
    async fn translate(&self, text: &str, target_lang: &str) -> TutorResult<String>;
}
