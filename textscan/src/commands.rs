// textscan/src/commands.rs
//! Implementations of the `extract`, `validate`, and `replace` subcommands.
//! All of the scanning logic lives in `textscan-core`; this module only
//! gathers input, dispatches, and formats output.
//! License: MIT OR Apache-2.0

use std::io::{self, Read};

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use owo_colors::OwoColorize;
use serde::Serialize;

use textscan_core::{
    extract, validate_email, validate_ip_address, validate_phone_number, DateFormat,
    PatternMatch,
};

use crate::cli::{ExtractCommand, ExtractKind, ReplaceCommand, ValidateCommand, ValidateKind};

/// JSON report emitted by `extract --json`.
#[derive(Debug, Serialize)]
struct ExtractReport {
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<DateFormat>,
    occurrences: usize,
    matches: Vec<PatternMatch>,
}

fn read_input(text: Option<&String>) -> Result<String> {
    match text {
        Some(text) => Ok(text.clone()),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read input text from stdin")?;
            Ok(buffer)
        }
    }
}

/// Runs the `extract` subcommand.
pub fn run_extract(cmd: &ExtractCommand) -> Result<()> {
    let text = read_input(cmd.text.as_ref())?;

    let (kind, format, matches) = match cmd.kind {
        ExtractKind::Emails => ("emails", None, extract::find_emails(&text)),
        ExtractKind::Phones => ("phones", None, extract::find_phone_numbers(&text)),
        ExtractKind::Dates => {
            let format: DateFormat = cmd
                .format
                .parse()
                .with_context(|| format!("Invalid --format value '{}'", cmd.format))?;
            ("dates", Some(format), extract::find_dates(&text, format))
        }
        ExtractKind::Ips => ("ips", None, extract::find_ip_addresses(&text)),
    };
    info!("Extracted {} {} match(es).", matches.len(), kind);

    if cmd.json {
        let report = ExtractReport {
            kind,
            format,
            occurrences: matches.len(),
            matches,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for m in &matches {
            println!("{}", m.text);
        }
    }
    Ok(())
}

/// Runs the `validate` subcommand. Returns whether the value was valid;
/// the caller maps that onto the process exit code.
pub fn run_validate(cmd: &ValidateCommand) -> Result<bool> {
    let valid = match cmd.kind {
        ValidateKind::Email => validate_email(&cmd.value),
        ValidateKind::Phone => validate_phone_number(&cmd.value),
        ValidateKind::Ip => validate_ip_address(&cmd.value),
    };

    let verdict = if valid { "valid" } else { "invalid" };
    if io::stdout().is_terminal() {
        if valid {
            println!("{}: {}", cmd.value, verdict.green());
        } else {
            println!("{}: {}", cmd.value, verdict.red());
        }
    } else {
        println!("{}: {}", cmd.value, verdict);
    }
    Ok(valid)
}

/// Runs the `replace` subcommand.
pub fn run_replace(cmd: &ReplaceCommand) -> Result<()> {
    let text = read_input(cmd.text.as_ref())?;
    let rewritten = textscan_core::replace_pattern(&text, &cmd.pattern, &cmd.replacement)
        .with_context(|| format!("Failed to apply pattern '{}'", cmd.pattern))?;
    print!("{rewritten}");
    if !rewritten.ends_with('\n') {
        println!();
    }
    Ok(())
}
