//! Unified error codes for the label station
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 6xxx: Label errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 6xxx: Label ====================
    /// No barcode symbol markup is available for the requested label
    SymbolUnavailable = 6001,
    /// Building the print document failed
    DocumentBuildFailed = 6002,
    /// Handing the document to the host print facility failed
    PrintDispatchFailed = 6003,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Database/storage error
    DatabaseError = 9002,
    /// IO error
    IoError = 9003,
}

impl ErrorCode {
    /// Get the numeric value of this error code
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidFormat => "Invalid format",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",
            Self::SymbolUnavailable => "Barcode symbol not available",
            Self::DocumentBuildFailed => "Failed to build print document",
            Self::PrintDispatchFailed => "Failed to dispatch print job",
            Self::InternalError => "Internal error",
            Self::DatabaseError => "Database error",
            Self::IoError => "IO error",
        }
    }

    /// Get the category this error code belongs to
    pub fn category(&self) -> super::ErrorCategory {
        super::ErrorCategory::from_code(self.code())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code as u16
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            5 => Self::InvalidRequest,
            6 => Self::InvalidFormat,
            7 => Self::RequiredField,
            8 => Self::ValueOutOfRange,
            6001 => Self::SymbolUnavailable,
            6002 => Self::DocumentBuildFailed,
            6003 => Self::PrintDispatchFailed,
            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            9003 => Self::IoError,
            _ => return Err(format!("Unknown error code: {}", value)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::RequiredField,
            ErrorCode::SymbolUnavailable,
            ErrorCode::DatabaseError,
        ] {
            let value: u16 = code.into();
            assert_eq!(ErrorCode::try_from(value).unwrap(), code);
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert!(ErrorCode::try_from(4242).is_err());
    }
}
