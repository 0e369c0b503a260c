//! Web 服务器模块
//!
//! 提供翻译中继、文本生成中继、主页重定向和静态落地页

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod types;

pub use config::*;
pub use error::RelayError;
pub use routes::*;
pub use types::*;

use std::io;
use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, services::ServeDir};

/// Web 服务器
pub struct WebServer {
    config: WebConfig,
}

impl WebServer {
    /// 创建新的 Web 服务器
    pub fn new(config: WebConfig) -> Self {
        Self { config }
    }

    /// 启动 Web 服务器
    pub async fn start(&self) -> io::Result<()> {
        let app = build_app(&self.config);

        let listener = tokio::net::TcpListener::bind(self.config.listen_address()).await?;

        tracing::info!(
            "Web server starting at http://{}",
            self.config.listen_address()
        );
        tracing::info!("翻译上游: {}", self.config.translation.api_url);
        tracing::info!(
            "生成上游: {} (model: {})",
            self.config.generation.api_url,
            self.config.generation.model
        );

        axum::serve(listener, app).await
    }
}

/// 根据配置创建完整的应用路由
pub fn build_app(config: &WebConfig) -> Router {
    let app_state = Arc::new(AppState::new(config));
    create_router(app_state, config)
}

/// 创建路由器
fn create_router(app_state: Arc<AppState>, config: &WebConfig) -> Router {
    let mut app = create_routes().with_state(app_state);

    // 添加静态文件服务（如果配置了）
    if let Some(static_dir) = &config.static_dir {
        app = app.fallback_service(ServeDir::new(static_dir));
    }

    // 添加CORS支持
    app.layer(CorsLayer::permissive())
}
