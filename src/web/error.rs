//! 中继错误类型
//!
//! 每个变体对应一个 HTTP 状态码，响应体统一为 `{ "error": "<message>" }`。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// 中继错误
#[derive(Error, Debug)]
pub enum RelayError {
    /// 请求方法不被允许
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// 缺少必需参数
    #[error("{0}")]
    MissingParameters(&'static str),

    /// 上游返回非 2xx 状态码，原样转发该状态码
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    /// 上游返回 2xx 但响应格式不符合预期
    #[error("{0}")]
    UnexpectedFormat(&'static str),

    /// 无法连接上游
    #[error("{message}")]
    Transport {
        message: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// 服务未配置
    #[error("{0}")]
    NotConfigured(&'static str),
}

impl RelayError {
    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::MissingParameters(_) => StatusCode::BAD_REQUEST,
            RelayError::Upstream { status, .. } => *status,
            RelayError::UnexpectedFormat(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::Transport { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::NotConfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 根据上游状态码构造错误
    pub fn upstream(service: &str, status: StatusCode) -> Self {
        RelayError::Upstream {
            status,
            message: format!(
                "{} API error: {}",
                service,
                status.canonical_reason().unwrap_or("Unknown error")
            ),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
