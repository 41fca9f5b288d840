//! Health check handler

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthInfo {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /api/health - 服务健康检查
pub async fn check() -> Json<HealthInfo> {
    Json(HealthInfo {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
