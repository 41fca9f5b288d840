//! Counter API Handlers
//!
//! The counter field on the form is free text, so `set_counter` accepts any
//! JSON value and parses it leniently: anything that is not a non-negative
//! integer silently resets the counter to the default constant.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::history::ConfirmRequest;
use crate::core::AppState;
use shared::AppResult;

#[derive(Debug, Serialize)]
pub struct CounterInfo {
    /// The value the upcoming product will be assigned
    pub value: u64,
    /// What the form shows as "next product will use"
    pub next: u64,
}

impl CounterInfo {
    fn new(value: u64) -> Self {
        Self {
            value,
            // The counter can sit at u64::MAX; the hint must not wrap
            next: value.saturating_add(1),
        }
    }
}

/// GET /api/counter - 当前计数器
pub async fn get_counter(State(state): State<AppState>) -> Json<CounterInfo> {
    Json(CounterInfo::new(state.store.counter()))
}

#[derive(Debug, Default, Deserialize)]
pub struct SetCounterRequest {
    #[serde(default)]
    pub value: Option<Value>,
}

/// PUT /api/counter - 覆盖计数器 (无效输入回退到默认值)
pub async fn set_counter(
    State(state): State<AppState>,
    request: Option<Json<SetCounterRequest>>,
) -> AppResult<Json<CounterInfo>> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    let parsed = request.value.as_ref().and_then(parse_counter_value);
    let effective = state.store.set_counter(parsed)?;
    Ok(Json(CounterInfo::new(effective)))
}

#[derive(Debug, Serialize)]
pub struct ResetResult {
    pub reset: bool,
    pub value: u64,
}

/// POST /api/counter/reset - 重置计数器 (需要 confirm=true, 否则不做任何事)
pub async fn reset_counter(
    State(state): State<AppState>,
    request: Option<Json<ConfirmRequest>>,
) -> AppResult<Json<ResetResult>> {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    if !request.confirm {
        return Ok(Json(ResetResult {
            reset: false,
            value: state.store.counter(),
        }));
    }

    let value = state.store.reset_counter()?;
    Ok(Json(ResetResult { reset: true, value }))
}

/// Parse a counter override from a JSON number or string
///
/// `None` for anything that is not a non-negative integer.
fn parse_counter_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_counter_value() {
        assert_eq!(parse_counter_value(&json!(1000000000000u64)), Some(1_000_000_000_000));
        assert_eq!(parse_counter_value(&json!("42")), Some(42));
        assert_eq!(parse_counter_value(&json!(" 7 ")), Some(7));
        assert_eq!(parse_counter_value(&json!(-5)), None);
        assert_eq!(parse_counter_value(&json!(1.5)), None);
        assert_eq!(parse_counter_value(&json!("abc")), None);
        assert_eq!(parse_counter_value(&json!("")), None);
        assert_eq!(parse_counter_value(&json!(null)), None);
    }

    #[test]
    fn test_counter_info_next_saturates() {
        assert_eq!(CounterInfo::new(42).next, 43);
        assert_eq!(CounterInfo::new(u64::MAX).next, u64::MAX);
    }
}
