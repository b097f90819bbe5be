//! # EMI CLI Library
//!
//! Shell around `emi-core`: owns the form, renders the result panel.
//!
//! ## Module Organization
//! ```text
//! emi_cli/
//! ├── lib.rs              ◄─── You are here (arguments, logging, run)
//! ├── state/
//! │   ├── mod.rs          ◄─── State type exports
//! │   ├── form.rs         ◄─── Three text fields + result panel
//! │   └── config.rs       ◄─── Currency symbol, stale-result policy
//! ├── commands/
//! │   ├── mod.rs          ◄─── Command exports
//! │   ├── calculate.rs    ◄─── One "Calculate EMI" press + rendering
//! │   └── interactive.rs  ◄─── Prompt loop over stdin
//! └── error.rs            ◄─── ShellError
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::{CalculateOptions, Outcome};
use error::ShellError;
use state::{FormState, ShellConfig};

/// Command-line arguments.
///
/// Values are taken as text so that non-numeric input reaches validation
/// exactly as it would from a form field.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "emi", version, about = "Equated Monthly Instalment calculator")]
pub struct Cli {
    /// Loan amount
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Annual interest rate in percent (e.g. 8.5)
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: Option<String>,

    /// Loan tenure in months
    #[arg(short, long, allow_hyphen_values = true)]
    pub tenure: Option<String>,

    /// Print the result as JSON instead of the result panel
    #[arg(long)]
    pub json: bool,

    /// Also print the month-by-month amortization schedule
    #[arg(long)]
    pub schedule: bool,

    /// Currency symbol shown before amounts (overrides EMI_CURRENCY_SYMBOL)
    #[arg(long)]
    pub currency_symbol: Option<String>,

    /// Hide the previous result when a calculation fails
    #[arg(long)]
    pub clear_on_error: bool,
}

impl Cli {
    /// True when all three fields were given on the command line.
    pub fn is_one_shot(&self) -> bool {
        self.amount.is_some() && self.rate.is_some() && self.tenure.is_some()
    }

    fn options(&self) -> CalculateOptions {
        CalculateOptions {
            json: self.json,
            schedule: self.schedule,
        }
    }
}

/// Runs the calculator.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging (stderr, RUST_LOG or "warn,emi_cli=info")        │
/// │  2. Load ShellConfig from EMI_* env vars, apply CLI overrides           │
/// │  3. Pre-fill FormState with any field given on the command line         │
/// │  4. All three given?  ── yes ──► one calculation, exit code reflects it │
/// │                       └─ no ───► interactive prompt loop until EOF      │
/// │                                  (prompts on stderr with --json)        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> Result<ExitCode, ShellError> {
    init_tracing();

    let config = ShellConfig::from_env().with_overrides(&cli);
    info!(?config, "Starting EMI calculator");

    let mut form = FormState::new();
    form.prefill(cli.amount.as_deref(), cli.rate.as_deref(), cli.tenure.as_deref());

    if cli.is_one_shot() {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let outcome = commands::calculate(&mut form, &config, cli.options(), &mut out)?;
        out.flush()?;
        return Ok(match outcome {
            Outcome::Computed => ExitCode::SUCCESS,
            Outcome::Rejected => ExitCode::FAILURE,
        });
    }

    // with --json, stdout carries nothing but JSON documents
    let mut prompts: Box<dyn Write> = if cli.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let stdin = io::stdin();
    commands::run_interactive(
        stdin.lock(),
        &mut io::stdout(),
        &mut prompts,
        &mut form,
        &config,
        cli.options(),
    )?;
    Ok(ExitCode::SUCCESS)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every computation
/// - `RUST_LOG=emi_core=trace` - Core crate only
/// - Default: warnings, plus info from this crate
///
/// Logs go to stderr; stdout carries only results.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,emi_cli=info"));

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
