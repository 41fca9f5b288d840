//! Counter API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/counter", get(handler::get_counter).put(handler::set_counter))
        .route("/api/counter/reset", post(handler::reset_counter))
}
