//! API 处理器

pub mod generation;
pub mod translation;

pub use generation::*;
pub use translation::*;

use crate::web::error::RelayError;

/// 非 POST 请求的统一处理器
pub async fn method_not_allowed() -> RelayError {
    tracing::warn!("不允许的请求方法");
    RelayError::MethodNotAllowed
}
