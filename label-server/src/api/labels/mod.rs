//! Label API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/labels", label_routes())
}

fn label_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/{id}/preview", get(handler::preview))
        .route("/{id}/document", get(handler::document))
        .route("/{id}/print", post(handler::print))
}
