//! # State Module
//!
//! State owned by the shell between button presses.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────────────────────┐      ┌──────────────────────────┐        │
//! │  │       FormState          │      │       ShellConfig        │        │
//! │  │  loan_amount   (text)    │      │  currency_symbol         │        │
//! │  │  interest_rate (text)    │      │  clear_on_error          │        │
//! │  │  loan_tenure   (text)    │      │                          │        │
//! │  │  result: Option<..>      │      │  read-only after start   │        │
//! │  └──────────────────────────┘      └──────────────────────────┘        │
//! │                                                                         │
//! │  Single-threaded: both are plain owned values, no locks.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod form;

pub use config::{ShellConfig, ENV_CLEAR_ON_ERROR, ENV_CURRENCY_SYMBOL};
pub use form::{parse_field, FormState};
