//! Label API Handlers
//!
//! The generation flow: `create` validates the form payload and assigns the
//! next sequential barcode; `preview` returns the record with its rendered
//! symbol; `document` builds the printable HTML; `print` builds it and hands
//! it to the host print facility.

use axum::{
    Json,
    extract::{Path, State},
    response::Html,
};
use serde::Serialize;

use crate::core::AppState;
use crate::document::LabelPreview;
use shared::models::product::{ProductDraft, ProductRecord};
use shared::{AppError, AppResult};

const RESOURCE_LABEL: &str = "label";

/// POST /api/labels - 生成标签 (分配下一个条码)
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> AppResult<Json<ProductRecord>> {
    let record = state.store.record_product(draft)?;
    Ok(Json(record))
}

/// GET /api/labels/{id}/preview - 标签预览 (记录 + 条码符号)
pub async fn preview(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<LabelPreview>> {
    let record = find_record(&state, id)?;
    let symbol_svg = state.renderer.render(&record.barcode.to_string())?;
    Ok(Json(LabelPreview::new(record, symbol_svg)))
}

/// GET /api/labels/{id}/document - 打印文档 (HTML)
pub async fn document(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let record = find_record(&state, id)?;
    let symbol_svg = state.renderer.render(&record.barcode.to_string())?;
    let doc = state.builder.build(&record, &symbol_svg)?;
    Ok(Html(doc))
}

/// Print job receipt
#[derive(Debug, Serialize)]
pub struct PrintJob {
    pub barcode: u64,
    pub copies: u32,
    pub spool_path: String,
}

/// POST /api/labels/{id}/print - 构建并交给主机打印
pub async fn print(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<PrintJob>> {
    let record = find_record(&state, id)?;
    let symbol_svg = state.renderer.render(&record.barcode.to_string())?;
    let doc = state.builder.build(&record, &symbol_svg)?;

    let job_name = format!("label-{}", record.barcode);
    let path = state.dispatcher.dispatch(&job_name, &doc).await?;

    Ok(Json(PrintJob {
        barcode: record.barcode,
        copies: record.print_quantity,
        spool_path: path.display().to_string(),
    }))
}

fn find_record(state: &AppState, id: i64) -> AppResult<ProductRecord> {
    state
        .store
        .find(id)
        .ok_or_else(|| AppError::not_found(RESOURCE_LABEL))
}
