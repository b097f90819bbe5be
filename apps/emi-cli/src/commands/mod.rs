//! # Commands Module
//!
//! What the user can do with the form.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  calculate        one press of "Calculate EMI", renders the outcome     │
//! │  run_interactive  prompt loop: fields → calculate → repeat until EOF    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod calculate;
pub mod interactive;

pub use calculate::{
    calculate, render_panel, render_schedule, CalculateOptions, CalculationResponse, ErrorResponse,
    Outcome,
};
pub use interactive::run_interactive;
