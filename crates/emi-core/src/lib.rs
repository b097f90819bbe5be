//! # emi-core: Pure Loan Math for the EMI Calculator
//!
//! This crate is the **heart** of the EMI calculator. It turns three numbers
//! (principal, annual rate, tenure) into an Equated Monthly Instalment with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       EMI Calculator Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Shell (emi-cli)                              │   │
//! │  │   Loan Amount ──► Interest Rate ──► Tenure ──► [Calculate]     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ LoanInput                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ emi-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────┐  ┌──────────┐  │   │
//! │  │   │   types   │  │   money   │  │ calculator │  │ schedule │  │   │
//! │  │   │ LoanInput │  │   Money   │  │  compute   │  │ amortize │  │   │
//! │  │   │LoanResult │  │  rounding │  │            │  │          │  │   │
//! │  │   └───────────┘  └───────────┘  └────────────┘  └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Loan input/output value types
//! - [`money`] - Two-decimal money in integer minor units
//! - [`error`] - Validation error type
//! - [`validation`] - Input rules
//! - [`calculator`] - The EMI formula
//! - [`schedule`] - Month-by-month amortization table
//!
//! ## Example Usage
//!
//! ```rust
//! use emi_core::{compute, LoanInput};
//!
//! let input = LoanInput::new(100_000.0, 8.5, 120.0);
//! let result = compute(&input).unwrap();
//!
//! assert_eq!(result.emi.to_string(), "1239.86");
//! assert_eq!(result.total_interest.to_string(), "48782.83");
//! ```

pub mod calculator;
pub mod error;
pub mod money;
pub mod schedule;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::compute;
pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use schedule::{amortize, AmortizationSchedule, ScheduleRow};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Months in a year, used to derive the monthly rate.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Longest tenure (100 years) for which a month-by-month schedule is built.
///
/// `compute` itself accepts any finite tenure; only the table is capped.
pub const MAX_SCHEDULE_MONTHS: u32 = 1200;
