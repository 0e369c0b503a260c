//! 页面处理器

use axum::response::Redirect;

/// 落地页路径
pub const LANDING_PAGE: &str = "/landing.html";

/// 主页处理器：临时重定向到静态落地页
pub async fn index() -> Redirect {
    Redirect::temporary(LANDING_PAGE)
}
