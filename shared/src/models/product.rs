//! Product Record Model

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Counter value for a fresh install, and the value a reset returns to
pub const DEFAULT_COUNTER: u64 = 1_000_000_000_000;

/// Hard cap on copies per print job
pub const MAX_PRINT_QUANTITY: u32 = 100;

/// How many history entries are shown (storage keeps all of them)
pub const HISTORY_DISPLAY_LIMIT: usize = 10;

/// One generated label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Display/list key only, no uniqueness enforced
    pub id: i64,
    pub company_name: String,
    pub product_name: String,
    /// Non-negative, normalized to two decimals
    pub amount: Decimal,
    /// Counter value assigned at creation, immutable
    pub barcode: u64,
    pub print_quantity: u32,
    /// Human-readable creation timestamp
    pub date: String,
}

/// Label generation payload
///
/// Mirrors the form surface: amount and print quantity arrive as whatever the
/// client typed, so both fields deserialize leniently. An unparseable print
/// quantity becomes `None` (the store then defaults it to 1); an unparseable
/// amount becomes `None` and fails validation as a missing required field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_decimal")]
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "de_lenient_u32")]
    pub print_quantity: Option<u32>,
}

fn de_lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(decimal_from_value))
}

fn de_lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(u32_from_value))
}

/// Parse a decimal from a JSON number or string, `None` when unparseable
pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                Decimal::from_str(s).ok()
            }
        }
        _ => None,
    }
}

/// Parse a u32 from a JSON number or string, `None` when unparseable
pub fn u32_from_value(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
