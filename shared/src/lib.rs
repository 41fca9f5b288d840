//! Shared types for the label station
//!
//! Common types used by the server and its tests: the product record model,
//! unified error types, response structures, and ID/time utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::product::{ProductDraft, ProductRecord};
