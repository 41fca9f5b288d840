//! History API 模块

mod handler;

pub use handler::ConfirmRequest;

use axum::{Router, routing::get};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/history",
        get(handler::list).delete(handler::clear),
    )
}
