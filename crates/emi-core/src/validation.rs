//! # Validation Module
//!
//! Input rules for the EMI calculator.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell (emi-cli)                                              │
//! │  ├── Text → f64 (unparseable text becomes NaN)                         │
//! │  └── No judgement on values                                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── finite?                                                           │
//! │  ├── principal > 0, tenure > 0                                         │
//! │  └── rate >= 0 (zero takes the interest-free branch)                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: calculator / schedule                                        │
//! │  └── Result must fit in Money                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::LoanInput;
use crate::MAX_SCHEDULE_MONTHS;

/// Field names as reported in errors.
pub const FIELD_PRINCIPAL: &str = "principal";
pub const FIELD_ANNUAL_RATE: &str = "annual_rate_percent";
pub const FIELD_TENURE: &str = "tenure_months";

// =============================================================================
// Field Validators
// =============================================================================

/// Checks that a value is neither NaN nor infinite.
pub fn validate_finite(field: &'static str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }

    Ok(())
}

/// Checks that a value is finite and strictly greater than zero.
///
/// ## Example
/// ```rust
/// use emi_core::validation::validate_positive;
///
/// assert!(validate_positive("principal", 100.0).is_ok());
/// assert!(validate_positive("principal", 0.0).is_err());
/// assert!(validate_positive("principal", f64::NAN).is_err());
/// ```
pub fn validate_positive(field: &'static str, value: f64) -> ValidationResult<()> {
    validate_finite(field, value)?;

    if value <= 0.0 {
        return Err(ValidationError::MustBePositive { field });
    }

    Ok(())
}

/// Checks that a value is finite and zero or greater.
pub fn validate_non_negative(field: &'static str, value: f64) -> ValidationResult<()> {
    validate_finite(field, value)?;

    if value < 0.0 {
        return Err(ValidationError::MustNotBeNegative { field });
    }

    Ok(())
}

// =============================================================================
// Loan Validators
// =============================================================================

/// Validates the three form values before computing.
///
/// ## Rules
/// - principal: finite, > 0
/// - annual rate: finite, >= 0
/// - tenure: finite, > 0
///
/// Fields are checked in form order; the first failure is returned.
pub fn validate_loan_input(input: &LoanInput) -> ValidationResult<()> {
    validate_positive(FIELD_PRINCIPAL, input.principal)?;
    validate_non_negative(FIELD_ANNUAL_RATE, input.annual_rate_percent)?;
    validate_positive(FIELD_TENURE, input.tenure_months)?;
    Ok(())
}

/// Validates that a tenure can be laid out month by month.
///
/// ## Returns
/// The tenure as a month count.
pub fn validate_schedule_tenure(tenure_months: f64) -> ValidationResult<u32> {
    validate_positive(FIELD_TENURE, tenure_months)?;

    if tenure_months.fract() != 0.0 {
        return Err(ValidationError::NotWholeMonths {
            field: FIELD_TENURE,
            value: tenure_months,
        });
    }

    if tenure_months > MAX_SCHEDULE_MONTHS as f64 {
        return Err(ValidationError::OutOfRange {
            field: FIELD_TENURE,
            min: 1,
            max: MAX_SCHEDULE_MONTHS,
        });
    }

    Ok(tenure_months as u32)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_loan_input_accepts_valid() {
        assert!(validate_loan_input(&LoanInput::new(100_000.0, 8.5, 120.0)).is_ok());
        assert!(validate_loan_input(&LoanInput::new(0.01, 0.0, 0.5)).is_ok());
    }

    #[test]
    fn test_validate_loan_input_rejects_non_positive() {
        assert_eq!(
            validate_loan_input(&LoanInput::new(-100.0, 5.0, 12.0)),
            Err(ValidationError::MustBePositive { field: FIELD_PRINCIPAL })
        );
        assert_eq!(
            validate_loan_input(&LoanInput::new(100.0, 5.0, 0.0)),
            Err(ValidationError::MustBePositive { field: FIELD_TENURE })
        );
        assert_eq!(
            validate_loan_input(&LoanInput::new(100.0, -0.5, 12.0)),
            Err(ValidationError::MustNotBeNegative { field: FIELD_ANNUAL_RATE })
        );
    }

    #[test]
    fn test_validate_loan_input_rejects_non_finite() {
        assert_eq!(
            validate_loan_input(&LoanInput::new(f64::NAN, 5.0, 12.0)),
            Err(ValidationError::NotFinite { field: FIELD_PRINCIPAL })
        );
        assert_eq!(
            validate_loan_input(&LoanInput::new(100.0, f64::INFINITY, 12.0)),
            Err(ValidationError::NotFinite { field: FIELD_ANNUAL_RATE })
        );
        assert_eq!(
            validate_loan_input(&LoanInput::new(100.0, 5.0, f64::NEG_INFINITY)),
            Err(ValidationError::NotFinite { field: FIELD_TENURE })
        );
    }

    #[test]
    fn test_first_failing_field_wins() {
        let err = validate_loan_input(&LoanInput::new(0.0, f64::NAN, -1.0)).unwrap_err();
        assert_eq!(err.field(), FIELD_PRINCIPAL);
    }

    #[test]
    fn test_validate_schedule_tenure() {
        assert_eq!(validate_schedule_tenure(120.0), Ok(120));
        assert_eq!(validate_schedule_tenure(1200.0), Ok(1200));
        assert!(matches!(
            validate_schedule_tenure(12.5),
            Err(ValidationError::NotWholeMonths { .. })
        ));
        assert!(matches!(
            validate_schedule_tenure(1201.0),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(validate_schedule_tenure(0.0).is_err());
    }
}
