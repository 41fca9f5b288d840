//! Error category classification

use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the code range:
/// - 0xxx: General errors
/// - 6xxx: Label errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Label errors (6xxx)
    Label,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            6000..7000 => Self::Label,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Label => "label",
            Self::System => "system",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(2), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::Label);
        assert_eq!(ErrorCategory::from_code(9002), ErrorCategory::System);
    }
}
