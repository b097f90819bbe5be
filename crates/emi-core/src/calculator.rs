//! # EMI Calculator
//!
//! The closed-form amortization formula.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  R   = annual% / 12 / 100                                               │
//! │                                                                         │
//! │                P × R × (1+R)^N                                          │
//! │  EMI      =   ─────────────────      (R > 0)                            │
//! │                 (1+R)^N − 1                                             │
//! │                                                                         │
//! │  EMI      =   P / N                  (R == 0)                           │
//! │                                                                         │
//! │  Interest =   EMI × N − P                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Numerical Form
//! Dividing through by `(1+R)^N` gives `P × R / (1 − (1+R)^−N)`, evaluated as
//! `P × R / −expm1(−N × ln1p(R))`. This never overflows for long tenures and
//! keeps full precision when `R` is so small that `1 + R == 1`.

use tracing::debug;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{LoanInput, LoanResult};
use crate::validation::{validate_loan_input, FIELD_PRINCIPAL};

/// Computes the EMI, total interest and normalized principal for a loan.
///
/// ## Example
/// ```rust
/// use emi_core::{compute, LoanInput, ValidationError};
///
/// let result = compute(&LoanInput::new(50_000.0, 0.0, 10.0)).unwrap();
/// assert_eq!(result.emi.to_string(), "5000.00");
/// assert!(result.total_interest.is_zero());
///
/// let err = compute(&LoanInput::new(-100.0, 5.0, 12.0)).unwrap_err();
/// assert!(matches!(err, ValidationError::MustBePositive { .. }));
/// ```
///
/// ## Errors
/// - Any field non-finite, principal or tenure `<= 0`, rate `< 0`
/// - A result too large for [`Money`]
pub fn compute(input: &LoanInput) -> ValidationResult<LoanResult> {
    validate_loan_input(input)?;

    let principal = input.principal;
    let months = input.tenure_months;
    let rate = input.monthly_rate();

    let (emi, total_interest) = if rate == 0.0 {
        (principal / months, 0.0)
    } else {
        let emi = principal * rate / -(-months * rate.ln_1p()).exp_m1();
        // float noise at tiny rates can land a hair below zero
        let interest = (emi * months - principal).max(0.0);
        (emi, interest)
    };

    let result = LoanResult {
        principal: to_money(FIELD_PRINCIPAL, principal)?,
        emi: to_money("emi", emi)?,
        total_interest: to_money("total_interest", total_interest)?,
    };

    // every total derived from the result (schedule sums included) stays below this
    if result.principal.checked_add(result.total_interest).is_none() {
        return Err(ValidationError::Unrepresentable {
            field: "total_payable",
        });
    }

    debug!(
        principal = %result.principal,
        emi = %result.emi,
        total_interest = %result.total_interest,
        monthly_rate = rate,
        months,
        "EMI computed"
    );

    Ok(result)
}

fn to_money(field: &'static str, value: f64) -> ValidationResult<Money> {
    Money::from_major(value).ok_or(ValidationError::Unrepresentable { field })
}

// =============================================================================
// Unit Tests
// =============================================================================
