//! # Interactive Command
//!
//! Terminal version of the form: prompt for the three fields, calculate,
//! repeat until end of input.
//!
//! ```text
//! Loan Amount (₹) [100000]: ⏎          empty line keeps the current value
//! Annual Interest Rate (%) [8.5]: 9
//! Loan Tenure (in months) [120]: ⏎
//! Loan Details
//! ...
//! ```
//!
//! Prompts and results take separate writers so that `--json` output can
//! stay a clean stream of JSON documents while the questions go elsewhere.

use std::io::{BufRead, Write};

use tracing::info;

use crate::commands::calculate::{calculate, CalculateOptions};
use crate::error::ShellResult;
use crate::state::{FormState, ShellConfig};

/// Runs the prompt loop. Returns when the reader hits end of input.
///
/// Questions are written to `prompts`, calculation output to `out`.
pub fn run_interactive<R: BufRead, W: Write, P: Write>(
    mut reader: R,
    out: &mut W,
    prompts: &mut P,
    form: &mut FormState,
    config: &ShellConfig,
    options: CalculateOptions,
) -> ShellResult<()> {
    let amount_label = format!("Loan Amount ({})", config.currency_symbol);
    let mut presses = 0usize;

    loop {
        let Some(amount) = prompt(&mut reader, prompts, &amount_label, &form.loan_amount)? else {
            break;
        };
        let Some(rate) = prompt(&mut reader, prompts, "Annual Interest Rate (%)", &form.interest_rate)?
        else {
            break;
        };
        let Some(tenure) = prompt(&mut reader, prompts, "Loan Tenure (in months)", &form.loan_tenure)?
        else {
            break;
        };

        form.prefill(Some(&amount), Some(&rate), Some(&tenure));
        calculate(form, config, options, out)?;
        writeln!(out)?;
        out.flush()?;
        presses += 1;
    }

    info!(presses, "Input closed");
    Ok(())
}

/// Asks for one field. `None` on end of input; an empty answer keeps `current`.
fn prompt<R: BufRead, P: Write>(
    reader: &mut R,
    prompts: &mut P,
    label: &str,
    current: &str,
) -> ShellResult<Option<String>> {
    if current.is_empty() {
        write!(prompts, "{label}: ")?;
    } else {
        write!(prompts, "{label} [{current}]: ")?;
    }
    prompts.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let answer = line.trim();
    Ok(Some(if answer.is_empty() {
        current.to_string()
    } else {
        answer.to_string()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns (output, prompts).
    fn session_with(input: &str, form: &mut FormState, options: CalculateOptions) -> (String, String) {
        let mut out = Vec::new();
        let mut prompts = Vec::new();
        run_interactive(
            input.as_bytes(),
            &mut out,
            &mut prompts,
            form,
            &ShellConfig::default(),
            options,
        )
        .unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(prompts).unwrap())
    }

    fn session(input: &str, form: &mut FormState) -> (String, String) {
        session_with(input, form, CalculateOptions::default())
    }

    #[test]
    fn test_single_press() {
        let mut form = FormState::new();
        let (text, prompts) = session("100000\n8.5\n120\n", &mut form);

        assert_eq!(
            prompts,
            "Loan Amount (₹): Annual Interest Rate (%): Loan Tenure (in months): \
             Loan Amount (₹) [100000]: "
        );
        assert!(text.starts_with("Loan Details\n"));
        assert!(text.contains("Equated Monthly Instalment (EMI): ₹ 1239.86"));
        assert_eq!(form.result().unwrap().emi.to_string(), "1239.86");
    }

    #[test]
    fn test_empty_answer_keeps_field() {
        let mut form = FormState::new();
        let (_, prompts) = session("50000\n0\n10\n\n\n20\n", &mut form);

        assert!(prompts.contains("Loan Amount (₹) [50000]: "));
        assert!(prompts.contains("Loan Tenure (in months) [10]: "));
        assert_eq!(form.loan_tenure, "20");
        assert_eq!(form.result().unwrap().emi.to_string(), "2500.00");
    }

    #[test]
    fn test_invalid_press_keeps_going() {
        let mut form = FormState::new();
        let (text, _) = session("abc\n5\n12\n1200\n\n\n", &mut form);

        assert!(text.contains("Please enter valid positive numbers for all fields."));
        assert_eq!(form.loan_amount, "1200");
        assert!(form.result().is_some());
    }

    #[test]
    fn test_eof_mid_form_stops_cleanly() {
        let mut form = FormState::new();
        let (text, prompts) = session("100000\n", &mut form);

        assert!(text.is_empty());
        assert!(prompts.ends_with("Annual Interest Rate (%): "));
        assert!(form.result().is_none());
        assert!(form.loan_amount.is_empty());
    }

    #[test]
    fn test_json_output_stays_parseable() {
        let options = CalculateOptions {
            json: true,
            schedule: false,
        };
        let mut form = FormState::new();
        let (text, prompts) = session_with("50000\n0\n10\n-1\n\n\n", &mut form, options);

        let values: Vec<serde_json::Value> = serde_json::Deserializer::from_str(&text)
            .into_iter::<serde_json::Value>()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0]["result"]["emi"], 500000);
        assert_eq!(values[1]["code"], "VALIDATION_ERROR");

        assert!(!text.contains("Loan Amount"));
        assert!(prompts.starts_with("Loan Amount (₹): "));
    }
}
