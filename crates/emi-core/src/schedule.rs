//! # Amortization Schedule
//!
//! Month-by-month breakdown of a computed loan.
//!
//! ## How a Row Is Built
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  opening balance ──► interest = round(balance × R)                      │
//! │                      principal = EMI − interest                         │
//! │                      closing = opening − principal                      │
//! │                                                                         │
//! │  Last month: principal = whole remaining balance                        │
//! │  (absorbs the rounding residue so the loan closes at exactly 0.00)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::types::{LoanInput, LoanResult};
use crate::validation::{validate_loan_input, validate_schedule_tenure};

/// One instalment in the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRow {
    /// 1-based instalment number.
    pub month: u32,
    pub opening_balance: Money,
    /// Amount paid this month (EMI, except possibly the last row).
    pub payment: Money,
    pub interest: Money,
    pub principal: Money,
    pub closing_balance: Money,
}

/// Full repayment table for a loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationSchedule {
    pub rows: Vec<ScheduleRow>,
}

impl AmortizationSchedule {
    /// Sum of all payments.
    pub fn total_paid(&self) -> Money {
        self.rows.iter().map(|row| row.payment).sum()
    }

    /// Sum of the interest portions.
    pub fn total_interest(&self) -> Money {
        self.rows.iter().map(|row| row.interest).sum()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

const UNREPRESENTABLE: ValidationError = ValidationError::Unrepresentable {
    field: "total_paid",
};

/// Lays out the repayment of `result` over the tenure in `input`.
///
/// ## Example
/// ```rust
/// use emi_core::{amortize, compute, LoanInput};
///
/// let input = LoanInput::new(100.0, 0.0, 3.0);
/// let result = compute(&input).unwrap();
/// let schedule = amortize(&input, &result).unwrap();
///
/// let payments: Vec<String> = schedule.rows.iter().map(|r| r.payment.to_string()).collect();
/// assert_eq!(payments, ["33.33", "33.33", "33.34"]);
/// ```
///
/// ## Errors
/// - Anything [`compute`](crate::compute) rejects
/// - Tenure that is fractional or longer than [`MAX_SCHEDULE_MONTHS`](crate::MAX_SCHEDULE_MONTHS)
/// - Payments whose running total leaves the `i64` range
pub fn amortize(input: &LoanInput, result: &LoanResult) -> ValidationResult<AmortizationSchedule> {
    validate_loan_input(input)?;
    let months = validate_schedule_tenure(input.tenure_months)?;
    let rate = input.monthly_rate();

    let mut rows = Vec::with_capacity(months as usize);
    let mut balance = result.principal;
    let mut total_paid = Money::zero();

    for month in 1..=months {
        let interest = balance.apply_rate(rate);

        let principal = if month == months {
            balance
        } else {
            // EMI barely above interest can round below it on long tenures
            (result.emi - interest).max(Money::zero()).min(balance)
        };

        let payment = interest.checked_add(principal).ok_or(UNREPRESENTABLE)?;
        total_paid = total_paid.checked_add(payment).ok_or(UNREPRESENTABLE)?;

        let closing_balance = balance - principal;
        rows.push(ScheduleRow {
            month,
            opening_balance: balance,
            payment,
            interest,
            principal,
            closing_balance,
        });
        balance = closing_balance;
    }

    debug!(months, principal = %result.principal, "Amortization schedule built");

    Ok(AmortizationSchedule { rows })
}

// =============================================================================
// Unit Tests
// =============================================================================
