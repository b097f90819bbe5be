//! # Form State
//!
//! The three input fields and the conditional result panel.
//!
//! ## Calculate Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  loan_amount  ─┐                                                        │
//! │  interest_rate ├─► parse (bad text → NaN) ─► compute()                  │
//! │  loan_tenure  ─┘                               │                        │
//! │                                   ┌────────────┴─────────────┐          │
//! │                                   ▼                          ▼          │
//! │                       result = Some(new)        ValidationError         │
//! │                                                 result kept, or cleared │
//! │                                                 if clear_on_error       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use emi_core::{compute, LoanInput, LoanResult, ValidationError};
use tracing::warn;

use super::ShellConfig;

/// Form fields as typed, plus the last successful result.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub loan_amount: String,
    pub interest_rate: String,
    pub loan_tenure: String,
    result: Option<LoanResult>,
}

impl FormState {
    pub fn new() -> Self {
        FormState::default()
    }

    /// Sets whichever fields are given, leaving the rest untouched.
    pub fn prefill(&mut self, amount: Option<&str>, rate: Option<&str>, tenure: Option<&str>) {
        if let Some(amount) = amount {
            self.loan_amount = amount.to_string();
        }
        if let Some(rate) = rate {
            self.interest_rate = rate.to_string();
        }
        if let Some(tenure) = tenure {
            self.loan_tenure = tenure.to_string();
        }
    }

    /// The fields as numbers.
    pub fn input(&self) -> LoanInput {
        LoanInput::new(
            parse_field(&self.loan_amount),
            parse_field(&self.interest_rate),
            parse_field(&self.loan_tenure),
        )
    }

    /// One press of "Calculate EMI".
    ///
    /// On failure the previous result stays unless `clear_on_error` is set.
    pub fn calculate(&mut self, config: &ShellConfig) -> Result<LoanResult, ValidationError> {
        match compute(&self.input()) {
            Ok(result) => {
                self.result = Some(result);
                Ok(result)
            }
            Err(err) => {
                warn!(field = err.field(), %err, "Calculation rejected");
                if config.clear_on_error {
                    self.result = None;
                }
                Err(err)
            }
        }
    }

    /// The result panel contents, if any.
    pub fn result(&self) -> Option<&LoanResult> {
        self.result.as_ref()
    }
}

/// Parses a field the way a numeric form input would.
///
/// Surrounding whitespace is ignored; empty or non-numeric text yields NaN.
pub fn parse_field(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}
