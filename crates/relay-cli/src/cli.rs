//! CLI argument definitions for Lead Relay.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use relay_transform::DEFAULT_SERIAL_CUTOFF;

#[derive(Parser)]
#[command(
    name = "lead-relay",
    version,
    about = "Lead Relay - Normalize lead spreadsheets and relay them to a CRM endpoint",
    long_about = "Decode a delimited lead file, normalize reference dates to the\n\
                  canonical YYYY-MM-DD HH:MM:SS form, stamp CRM metadata fields,\n\
                  and deliver each record to the remote ingestion endpoint\n\
                  one request at a time."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow row-level lead values (PII) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode, enrich, and relay a lead file to the ingestion endpoint.
    Send(SendArgs),

    /// Decode and enrich a lead file, writing the JSON artifact only.
    Export(ExportArgs),

    /// Decode a lead file and report its headers and row count.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct SendArgs {
    /// Path to the lead file (CSV).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Remote ingestion endpoint URL.
    #[arg(long, env = "LEAD_RELAY_ENDPOINT", value_name = "URL")]
    pub endpoint: String,

    /// Authorization header value, forwarded verbatim (e.g. "Basic ...").
    #[arg(long, env = "LEAD_RELAY_AUTH", value_name = "VALUE", hide_env_values = true)]
    pub auth: Option<String>,

    /// Upper bound of the spreadsheet-serial date heuristic.
    #[arg(
        long = "serial-cutoff",
        value_name = "N",
        default_value_t = DEFAULT_SERIAL_CUTOFF
    )]
    pub serial_cutoff: f64,

    /// Also write the enriched records as a JSON artifact next to FILE.
    #[arg(long)]
    pub export: bool,

    /// Decode and enrich without sending anything.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the lead file (CSV).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Artifact path (default: FILE with its extension replaced by .json).
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Upper bound of the spreadsheet-serial date heuristic.
    #[arg(
        long = "serial-cutoff",
        value_name = "N",
        default_value_t = DEFAULT_SERIAL_CUTOFF
    )]
    pub serial_cutoff: f64,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the lead file (CSV).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
