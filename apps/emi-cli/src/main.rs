//! # EMI Calculator Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          emi (terminal)                                 │
//! │                                                                         │
//! │  main.rs ────► Parses arguments                                        │
//! │                                                                         │
//! │  lib.rs ─────► Sets up logging, config, form state; picks the mode     │
//! │                                                                         │
//! │  commands/ ──► calculate (one-shot), interactive (prompt loop)         │
//! │                                                                         │
//! │  state/ ─────► FormState, ShellConfig                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```text
//! emi --amount 100000 --rate 8.5 --tenure 120
//! emi -a 50000 -r 0 -t 10 --json
//! emi                      # interactive form
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use emi_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // The actual setup is in lib.rs for better testability
    match emi_cli::run(cli) {
        Ok(code) => code,
        Err(err) => {
            error!(cause = %err, "{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}
