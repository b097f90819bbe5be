//! # Calculate Command
//!
//! One press of "Calculate EMI": run the form, render the outcome.
//!
//! ## Output
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Success (text)                  │  Failure (text)                      │
//! │  ──────────────                  │  ──────────────                      │
//! │  Loan Details                    │  Please enter valid positive ...     │
//! │  Loan Amount: ₹ 100000.00        │  (previous panel, if still shown)    │
//! │  Equated Monthly ...: ₹ 1239.86  │                                      │
//! │  Total Interest ...: ₹ 48782.83  │                                      │
//! │                                                                         │
//! │  --json: CalculationResponse / ErrorResponse on stdout                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Write as _;
use std::io::Write;

use serde::Serialize;
use tracing::{debug, warn};

use emi_core::{amortize, AmortizationSchedule, LoanInput, LoanResult, ScheduleRow, ValidationError};

use crate::error::ShellResult;
use crate::state::{FormState, ShellConfig};

/// Rendering switches taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculateOptions {
    pub json: bool,
    pub schedule: bool,
}

/// Whether the press produced a new result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Computed,
    Rejected,
}

/// JSON body for a successful calculation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    pub input: LoanInput,
    pub result: LoanResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<ScheduleRow>>,
    /// Why a requested schedule is missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_error: Option<String>,
}

/// JSON body for a rejected calculation.
///
/// ```json
/// { "code": "VALIDATION_ERROR", "field": "principal", "message": "..." }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: &'static str,
    pub field: &'static str,
    pub message: &'static str,
}

impl From<&ValidationError> for ErrorResponse {
    fn from(err: &ValidationError) -> Self {
        ErrorResponse {
            code: "VALIDATION_ERROR",
            field: err.field(),
            message: ValidationError::USER_PROMPT,
        }
    }
}

/// Runs one calculation from the current form fields and writes the outcome.
pub fn calculate<W: Write>(
    form: &mut FormState,
    config: &ShellConfig,
    options: CalculateOptions,
    out: &mut W,
) -> ShellResult<Outcome> {
    debug!(
        amount = %form.loan_amount,
        rate = %form.interest_rate,
        tenure = %form.loan_tenure,
        "calculate command"
    );

    let result = match form.calculate(config) {
        Ok(result) => result,
        Err(err) => {
            write_rejection(&err, form, config, options, out)?;
            return Ok(Outcome::Rejected);
        }
    };

    let input = form.input();
    let (schedule, schedule_error) = if options.schedule {
        match amortize(&input, &result) {
            Ok(schedule) => (Some(schedule), None),
            Err(err) => {
                warn!(%err, "Schedule unavailable");
                if !options.json {
                    writeln!(out, "Schedule unavailable: {err}")?;
                }
                (None, Some(err.to_string()))
            }
        }
    } else {
        (None, None)
    };

    if options.json {
        let response = CalculationResponse {
            input,
            result,
            schedule: schedule.map(|s| s.rows),
            schedule_error,
        };
        serde_json::to_writer_pretty(&mut *out, &response)?;
        writeln!(out)?;
    } else {
        out.write_all(render_panel(&result, config).as_bytes())?;
        if let Some(schedule) = &schedule {
            writeln!(out)?;
            out.write_all(render_schedule(schedule, config).as_bytes())?;
        }
    }

    Ok(Outcome::Computed)
}

fn write_rejection<W: Write>(
    err: &ValidationError,
    form: &FormState,
    config: &ShellConfig,
    options: CalculateOptions,
    out: &mut W,
) -> ShellResult<()> {
    if options.json {
        serde_json::to_writer_pretty(&mut *out, &ErrorResponse::from(err))?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", ValidationError::USER_PROMPT)?;

    // the panel of an earlier press is still on screen
    if let Some(previous) = form.result() {
        writeln!(out)?;
        out.write_all(render_panel(previous, config).as_bytes())?;
    }

    Ok(())
}

/// Renders the "Loan Details" panel.
pub fn render_panel(result: &LoanResult, config: &ShellConfig) -> String {
    format!(
        "Loan Details\n\
         Loan Amount: {}\n\
         Equated Monthly Instalment (EMI): {}\n\
         Total Interest to be Paid: {}\n",
        config.format_currency(result.principal),
        config.format_currency(result.emi),
        config.format_currency(result.total_interest),
    )
}

/// Renders the amortization table with right-aligned columns.
pub fn render_schedule(schedule: &AmortizationSchedule, config: &ShellConfig) -> String {
    let headers = ["Month", "Payment", "Interest", "Principal", "Balance"];

    let cells: Vec<[String; 5]> = schedule
        .rows
        .iter()
        .map(|row| {
            [
                row.month.to_string(),
                config.format_currency(row.payment),
                config.format_currency(row.interest),
                config.format_currency(row.principal),
                config.format_currency(row.closing_balance),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut table = String::new();
    push_line(&mut table, &headers.map(String::from), &widths);
    for row in &cells {
        push_line(&mut table, row, &widths);
    }
    let _ = writeln!(
        table,
        "Total paid: {}  Total interest: {}",
        config.format_currency(schedule.total_paid()),
        config.format_currency(schedule.total_interest()),
    );
    table
}

fn push_line(table: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", " ".repeat(pad), cell)
        })
        .collect();
    table.push_str(&line.join("  "));
    table.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(amount: &str, rate: &str, tenure: &str) -> FormState {
        let mut form = FormState::new();
        form.prefill(Some(amount), Some(rate), Some(tenure));
        form
    }

    fn run(form: &mut FormState, options: CalculateOptions) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = calculate(form, &ShellConfig::default(), options, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_renders_panel() {
        let (outcome, text) = run(&mut form("100000", "8.5", "120"), CalculateOptions::default());
        assert_eq!(outcome, Outcome::Computed);
        assert_eq!(
            text,
            "Loan Details\n\
             Loan Amount: ₹ 100000.00\n\
             Equated Monthly Instalment (EMI): ₹ 1239.86\n\
             Total Interest to be Paid: ₹ 48782.83\n"
        );
    }

    #[test]
    fn test_rejection_prints_prompt() {
        let (outcome, text) = run(&mut form("-100", "5", "12"), CalculateOptions::default());
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(text, "Please enter valid positive numbers for all fields.\n");
    }

    #[test]
    fn test_rejection_reprints_stale_panel() {
        let mut form = form("50000", "0", "10");
        run(&mut form, CalculateOptions::default());

        form.interest_rate = "x".to_string();
        let (outcome, text) = run(&mut form, CalculateOptions::default());
        assert_eq!(outcome, Outcome::Rejected);
        assert!(text.starts_with("Please enter valid positive numbers"));
        assert!(text.contains("Equated Monthly Instalment (EMI): ₹ 5000.00"));
    }

    #[test]
    fn test_json_success() {
        let options = CalculateOptions {
            json: true,
            schedule: false,
        };
        let (_, text) = run(&mut form("50000", "0", "10"), options);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["result"]["emi"], 500000);
        assert_eq!(value["result"]["totalInterest"], 0);
        assert_eq!(value["input"]["tenureMonths"], 10.0);
        assert!(value.get("schedule").is_none());
        assert!(value.get("scheduleError").is_none());
    }

    #[test]
    fn test_json_rejection() {
        let options = CalculateOptions {
            json: true,
            schedule: false,
        };
        let (outcome, text) = run(&mut form("100", "5", "0"), options);
        assert_eq!(outcome, Outcome::Rejected);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["code"], "VALIDATION_ERROR");
        assert_eq!(value["field"], "tenure_months");
    }

    #[test]
    fn test_schedule_table() {
        let options = CalculateOptions {
            json: false,
            schedule: true,
        };
        let (_, text) = run(&mut form("100", "0", "3"), options);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[5], "Month  Payment  Interest  Principal  Balance");
        assert_eq!(lines[6], "    1  ₹ 33.33    ₹ 0.00    ₹ 33.33  ₹ 66.67");
        assert_eq!(lines[8], "    3  ₹ 33.34    ₹ 0.00    ₹ 33.34   ₹ 0.00");
        assert_eq!(lines[9], "Total paid: ₹ 100.00  Total interest: ₹ 0.00");
    }

    #[test]
    fn test_fractional_tenure_skips_schedule() {
        let options = CalculateOptions {
            json: false,
            schedule: true,
        };
        let (outcome, text) = run(&mut form("1000", "10", "6.5"), options);
        assert_eq!(outcome, Outcome::Computed);
        assert!(text.starts_with("Schedule unavailable:"));
        assert!(text.contains("Loan Details"));
    }

    #[test]
    fn test_json_reports_schedule_error() {
        let options = CalculateOptions {
            json: true,
            schedule: true,
        };
        let (outcome, text) = run(&mut form("1000", "10", "6.5"), options);
        assert_eq!(outcome, Outcome::Computed);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(value.get("schedule").is_none());
        assert_eq!(
            value["scheduleError"],
            "tenure_months must be a whole number of months, got 6.5"
        );
        assert_eq!(value["result"]["principal"], 100000);
    }

    #[test]
    fn test_json_includes_schedule_rows() {
        let options = CalculateOptions {
            json: true,
            schedule: true,
        };
        let (_, text) = run(&mut form("100", "0", "3"), options);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["schedule"].as_array().unwrap().len(), 3);
        assert_eq!(value["schedule"][2]["closingBalance"], 0);
        assert!(value.get("scheduleError").is_none());
    }
}
