//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound => StatusCode::NOT_FOUND,

            // 400 Bad Request
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::ValueOutOfRange => StatusCode::BAD_REQUEST,

            // 409 Conflict (label state not ready for the requested action)
            Self::SymbolUnavailable | Self::DocumentBuildFailed => StatusCode::CONFLICT,

            // 500 Internal Server Error
            Self::Unknown
            | Self::PrintDispatchFailed
            | Self::InternalError
            | Self::DatabaseError
            | Self::IoError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
