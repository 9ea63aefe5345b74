//! Validation error types

use std::fmt;

/// Validation error for request parameters
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Numeric field exceeds its allowed maximum
    OutOfRange {
        field: &'static str,
        max: u32,
        got: u32,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { field, max, got } => {
                write!(f, "{} must be at most {}, got {}", field, max, got)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::OutOfRange {
            field: "limit",
            max: 50,
            got: 51,
        };
        assert_eq!(err.to_string(), "limit must be at most 50, got 51");
    }
}
