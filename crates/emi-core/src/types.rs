//! # Domain Types
//!
//! Value types passed between the shell and the calculator.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐   compute()   ┌──────────────────────┐       │
//! │  │      LoanInput       │ ────────────► │      LoanResult      │       │
//! │  │  ──────────────────  │               │  ──────────────────  │       │
//! │  │  principal (f64)     │               │  principal (Money)   │       │
//! │  │  annual_rate_percent │               │  emi (Money)         │       │
//! │  │  tenure_months (f64) │               │  total_interest      │       │
//! │  └──────────────────────┘               └──────────────────────┘       │
//! │                                                                         │
//! │  Both are transient: no identity, no persistence, one call long.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::MONTHS_PER_YEAR;

// =============================================================================
// Loan Input
// =============================================================================

/// The three numbers a user types into the form.
///
/// Raw `f64` on purpose: text that fails to parse arrives here as NaN and
/// is rejected by validation, not by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LoanInput {
    /// Loan amount in major currency units.
    pub principal: f64,

    /// Annual interest rate as a percentage (8.5 = 8.5% p.a.).
    pub annual_rate_percent: f64,

    /// Number of monthly instalments.
    pub tenure_months: f64,
}

impl LoanInput {
    pub const fn new(principal: f64, annual_rate_percent: f64, tenure_months: f64) -> Self {
        LoanInput {
            principal,
            annual_rate_percent,
            tenure_months,
        }
    }

    /// Monthly rate as a fraction: `annual / 12 / 100`.
    ///
    /// ## Example
    /// ```rust
    /// use emi_core::LoanInput;
    ///
    /// let input = LoanInput::new(1000.0, 12.0, 12.0);
    /// assert!((input.monthly_rate() - 0.01).abs() < 1e-15);
    /// ```
    #[inline]
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / MONTHS_PER_YEAR / 100.0
    }
}

// =============================================================================
// Loan Result
// =============================================================================

/// Outcome of a successful EMI computation, every field rounded to 2 decimals.
///
/// ## Invariant
/// `emi * tenure ≈ principal + total_interest`; exact equality can be lost
/// to the 2-decimal rounding of each field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LoanResult {
    /// Principal as entered, normalized to 2 decimals.
    pub principal: Money,

    /// Equated Monthly Instalment.
    pub emi: Money,

    /// Interest paid over the whole tenure.
    pub total_interest: Money,
}

impl LoanResult {
    /// Principal plus interest.
    #[inline]
    pub fn total_payable(&self) -> Money {
        self.principal + self.total_interest
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_rate() {
        let input = LoanInput::new(100_000.0, 8.5, 120.0);
        assert!((input.monthly_rate() - 0.0070833333333).abs() < 1e-12);

        let zero = LoanInput::new(50_000.0, 0.0, 10.0);
        assert_eq!(zero.monthly_rate(), 0.0);
    }

    #[test]
    fn test_total_payable() {
        let result = LoanResult {
            principal: Money::from_minor(10_000_000),
            emi: Money::from_minor(123986),
            total_interest: Money::from_minor(4878283),
        };
        assert_eq!(result.total_payable().minor(), 14878283);
    }

    #[test]
    fn test_serde_camel_case() {
        let input = LoanInput::new(1000.0, 7.5, 24.0);
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(
            json,
            r#"{"principal":1000.0,"annualRatePercent":7.5,"tenureMonths":24.0}"#
        );

        let result = LoanResult {
            principal: Money::from_minor(100000),
            emi: Money::from_minor(4500),
            total_interest: Money::from_minor(8000),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"principal":100000,"emi":4500,"totalInterest":8000}"#);
    }
}
