//! Unified error handling for the label station
//!
//! - [`ErrorCode`] - structured u16 error codes, grouped by category range
//! - [`ErrorCategory`] - coarse classification derived from the code range
//! - [`AppError`] - the application error type carried through handlers
//! - [`ApiResponse`] - the response envelope returned by the HTTP API

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::ErrorCode;
pub use types::{ApiResponse, AppError, AppResult};
