//! 辅导客户端统一错误处理

use thiserror::Error;

/// 辅导客户端错误类型
///
/// 需要 `Clone`，因为逐单元翻译结果会作为数据保存在视图中。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TutorError {
    /// 网络错误（无法连接到服务器）
    #[error("network error: {0}")]
    Network(String),

    /// 服务器返回的错误
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    /// 响应格式错误
    #[error("unexpected response: {0}")]
    Decode(String),

    /// 请求的条目不存在
    #[error("not found: {0}")]
    NotFound(String),

    /// 当前视图不支持该操作
    #[error("not available in the {actual} view (requires {expected})")]
    InvalidView {
        expected: &'static str,
        actual: &'static str,
    },
}

impl TutorError {
    /// 检查错误是否来自网络层
    pub fn is_network(&self) -> bool {
        matches!(self, TutorError::Network(_))
    }

    /// 服务器返回的 HTTP 状态码（如果有）
    pub fn status(&self) -> Option<u16> {
        match self {
            TutorError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TutorError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            TutorError::Decode(error.to_string())
        } else {
            TutorError::Network(error.to_string())
        }
    }
}

impl From<serde_json::Error> for TutorError {
    fn from(error: serde_json::Error) -> Self {
        TutorError::Decode(error.to_string())
    }
}

/// 辅导客户端结果类型
pub type TutorResult<T> = Result<T, TutorError>;
