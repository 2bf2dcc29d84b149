//! # Error Types
//!
//! Boundary validation errors for craftledger-core.
//!
//! ## Where Errors Live
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  craftledger-core (this file)                                          │
//! │  └── ValidationError  - Raw-input validation at the boundary           │
//! │                                                                         │
//! │  craftledger-db (separate crate)                                       │
//! │  └── StoreError       - Persistence and payload-migration failures     │
//! │                                                                         │
//! │  The calculation engine itself NEVER errors: invalid numeric           │
//! │  inputs degrade to a $0 contribution inside the calculators.           │
//! │  ValidationError exists for the presentation layer, which checks       │
//! │  user-entered records before handing them to the engine so it can      │
//! │  surface messages like "name is required".                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Raw-input validation errors.
///
/// These occur when user-entered records don't meet requirements.
/// Used by callers for early validation; the calculators never
/// produce them.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is outside the expected range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "percentage".to_string(),
            min: 0.0,
            max: 100.0,
        };
        assert_eq!(err.to_string(), "percentage must be between 0 and 100");
    }
}
