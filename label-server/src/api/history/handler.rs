//! History API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use crate::core::AppState;
use shared::AppResult;
use shared::models::product::ProductRecord;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    /// Display cap override, bounded by the configured limit
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct HistoryPage {
    pub records: Vec<ProductRecord>,
    /// Total retained in storage (may exceed the display cap)
    pub total: usize,
}

/// GET /api/history - 最近的历史记录 (显示上限 10 条, 存储不限)
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Json<HistoryPage> {
    let cap = state.config.history_display_limit;
    let limit = query.limit.map_or(cap, |l| l.min(cap));

    Json(HistoryPage {
        records: state.store.history(Some(limit)),
        total: state.store.history_len(),
    })
}

/// Confirm/cancel gate payload for destructive actions
#[derive(Debug, Default, Deserialize)]
pub struct ConfirmRequest {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize)]
pub struct ClearResult {
    pub cleared: bool,
    pub total: usize,
}

/// DELETE /api/history - 清空历史 (需要 confirm=true, 否则不做任何事)
pub async fn clear(
    State(state): State<AppState>,
    request: Option<Json<ConfirmRequest>>,
) -> AppResult<Json<ClearResult>> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    if !request.confirm {
        return Ok(Json(ClearResult {
            cleared: false,
            total: state.store.history_len(),
        }));
    }

    state.store.clear_history()?;
    Ok(Json(ClearResult {
        cleared: true,
        total: 0,
    }))
}
