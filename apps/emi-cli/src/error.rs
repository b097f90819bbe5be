//! # Shell Error Type
//!
//! Unified error type for the CLI.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the EMI Shell                          │
//! │                                                                         │
//! │  [Calculate EMI]                                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Validation failed? ── ValidationError ──► prompt, form stays usable   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  stdout/stdin broken? ── Io ─────────────► abort run                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  JSON encoding failed? ── Json ──────────► abort run                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use emi_core::ValidationError;
use thiserror::Error;

/// Errors surfaced by the shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Input rejected by the calculator.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Result could not be encoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShellError {
    /// Text to show the user.
    ///
    /// Every validation failure maps to the same prompt; the detailed cause
    /// goes to the log.
    pub fn user_message(&self) -> String {
        match self {
            ShellError::Validation(_) => ValidationError::USER_PROMPT.to_string(),
            other => other.to_string(),
        }
    }
}

/// Convenience type alias for shell results.
pub type ShellResult<T> = Result<T, ShellError>;
