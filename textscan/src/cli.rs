// textscan/src/cli.rs
//! This file defines the command-line interface (CLI) for the textscan
//! application, including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand, ValueEnum};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "textscan",
    author = "TextScan Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Extract, validate, and replace structured data in free-form text",
    long_about = "Textscan is a command-line utility for scanning free-form text for common \
structured data formats: email addresses, US phone numbers, dates, and IPv4 addresses. It can \
extract every occurrence, validate a single value against a whole-string grammar, or replace \
all occurrences of an arbitrary pattern, which makes it handy for PII redaction, log scrubbing, \
and data cleaning.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for 'textscan' crate to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `textscan` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extracts every occurrence of a format from the input text.
    #[command(about = "Extracts every occurrence of a format from the input text.")]
    Extract(ExtractCommand),

    /// Validates a single value against the whole-string grammar for a format.
    #[command(about = "Validates a single value against the whole-string grammar for a format.")]
    Validate(ValidateCommand),

    /// Replaces every occurrence of an arbitrary pattern in the input text.
    #[command(about = "Replaces every occurrence of an arbitrary pattern in the input text.")]
    Replace(ReplaceCommand),
}

/// The formats the `extract` command can scan for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExtractKind {
    /// Email addresses
    Emails,
    /// US phone numbers
    Phones,
    /// Dates (layout chosen with --format)
    Dates,
    /// IPv4 addresses (syntactic)
    Ips,
}

/// Arguments for the `extract` command.
#[derive(Parser, Debug)]
pub struct ExtractCommand {
    /// Which format to scan for.
    #[arg(value_enum)]
    pub kind: ExtractKind,

    /// Text to scan (reads from stdin if not provided).
    pub text: Option<String>,

    /// Date layout token, used only with `dates`.
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "MM/DD/YYYY",
        help = "Date layout token: \"MM/DD/YYYY\" or \"YYYY-MM-DD\"."
    )]
    pub format: String,

    /// Emit a JSON report with byte spans instead of plain lines.
    #[arg(long, help = "Emit a JSON report with byte spans instead of plain lines.")]
    pub json: bool,
}

/// The formats the `validate` command can check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValidateKind {
    /// Email address
    Email,
    /// US phone number
    Phone,
    /// IPv4 address (syntax plus 0-255 octet range)
    Ip,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug)]
pub struct ValidateCommand {
    /// Which format grammar to validate against.
    #[arg(value_enum)]
    pub kind: ValidateKind,

    /// The value to validate.
    pub value: String,
}

/// Arguments for the `replace` command.
#[derive(Parser, Debug)]
pub struct ReplaceCommand {
    /// The pattern to search for (full regex syntax).
    pub pattern: String,

    /// The literal replacement text.
    pub replacement: String,

    /// Text to rewrite (reads from stdin if not provided).
    pub text: Option<String>,
}
