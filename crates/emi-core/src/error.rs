//! # Error Types
//!
//! Domain-specific error types for emi-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  emi-core errors (this file)                                           │
//! │  └── ValidationError  - Input cannot produce a loan result             │
//! │                                                                         │
//! │  emi-cli errors (app)                                                  │
//! │  └── ShellError       - What the user sees                             │
//! │                                                                         │
//! │  Flow: ValidationError → ShellError → "Please enter valid ..." prompt  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant names the offending field
//! 3. All variants collapse to one prompt for the end user

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The calculation either succeeds fully or fails with one of these; no
/// partial result is ever produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Field is NaN or infinite (empty or non-numeric text once parsed).
    #[error("{field} must be a number")]
    NotFinite { field: &'static str },

    /// Field must be strictly greater than zero.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },

    /// Field must be zero or greater.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: &'static str },

    /// A schedule needs a whole number of months.
    #[error("{field} must be a whole number of months, got {value}")]
    NotWholeMonths { field: &'static str, value: f64 },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
    },

    /// The computed amount does not fit in two-decimal money.
    ///
    /// ## When This Occurs
    /// - Principal so large that `emi * tenure` overflows
    /// - Amounts beyond `i64::MAX` minor units
    #[error("{field} is too large to represent")]
    Unrepresentable { field: &'static str },
}

impl ValidationError {
    /// The single prompt shown to the user for any validation failure.
    pub const USER_PROMPT: &'static str = "Please enter valid positive numbers for all fields.";

    /// Name of the field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NotFinite { field }
            | ValidationError::MustBePositive { field }
            | ValidationError::MustNotBeNegative { field }
            | ValidationError::NotWholeMonths { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::Unrepresentable { field } => field,
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result type for validation and computation.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive { field: "principal" };
        assert_eq!(err.to_string(), "principal must be positive");

        let err = ValidationError::NotFinite {
            field: "tenure_months",
        };
        assert_eq!(err.to_string(), "tenure_months must be a number");

        let err = ValidationError::OutOfRange {
            field: "tenure_months",
            min: 1,
            max: 1200,
        };
        assert_eq!(err.to_string(), "tenure_months must be between 1 and 1200");
    }

    #[test]
    fn test_field_accessor() {
        let err = ValidationError::NotWholeMonths {
            field: "tenure_months",
            value: 12.5,
        };
        assert_eq!(err.field(), "tenure_months");
        assert_eq!(
            err.to_string(),
            "tenure_months must be a whole number of months, got 12.5"
        );
    }
}
