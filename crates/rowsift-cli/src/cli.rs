//! CLI argument definitions for rowsift.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "rowsift",
    version,
    about = "Filter, aggregate and order the rows of a CSV file",
    long_about = "Load a CSV file with a header row, then optionally filter rows,\n\
                  aggregate one column and order the result before printing it.\n\n\
                  Operations run in the order filter, aggregate, order-by."
)]
pub struct Cli {
    /// Path to the CSV file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Keep rows where COLUMN compares to VALUE (operators: eq, lt, gt).
    ///
    /// Each operation flag may be given once; a repeated flag replaces the
    /// earlier one.
    #[arg(
        long = "filter",
        num_args = 3,
        action = ArgAction::Set,
        overrides_with = "filter",
        value_names = ["COLUMN", "OPERATOR", "VALUE"],
        allow_hyphen_values = true
    )]
    pub filter: Option<Vec<String>>,

    /// Aggregate a column (types: avg, min, max).
    ///
    /// `avg` prints the mean; `min` and `max` keep every row holding the
    /// extreme value.
    #[arg(
        long = "aggregate",
        num_args = 2,
        action = ArgAction::Set,
        overrides_with = "aggregate",
        value_names = ["COLUMN", "AGG_TYPE"]
    )]
    pub aggregate: Option<Vec<String>>,

    /// Order rows by a column (order: asc, desc).
    #[arg(
        long = "order-by",
        num_args = 2,
        action = ArgAction::Set,
        overrides_with = "order_by",
        value_names = ["COLUMN", "ORDER"]
    )]
    pub order_by: Option<Vec<String>>,

    /// How to print the resulting rows.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputFormatArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Result output choices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Bordered table.
    #[default]
    Table,
    /// JSON document with observations and rows.
    Json,
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
