//! Web 路由定义

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::web::{handlers::*, types::AppState};

/// 创建路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        // 中继端点只接受 POST，其余方法统一返回 405 JSON
        .route(
            "/api/translate",
            post(translate_text).fallback(method_not_allowed),
        )
        .route("/api/cohere", post(generate_text).fallback(method_not_allowed))
}
