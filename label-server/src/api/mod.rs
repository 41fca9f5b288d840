//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`labels`] - 标签生成、预览、打印文档接口
//! - [`history`] - 历史记录接口
//! - [`counter`] - 条码计数器接口

pub mod counter;
pub mod health;
pub mod history;
pub mod labels;

use axum::Router;
use axum::response::Html;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::core::AppState;

/// Assemble the full application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .merge(health::router())
        .merge(labels::router())
        .merge(history::router())
        .merge(counter::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The embedded form page
async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
