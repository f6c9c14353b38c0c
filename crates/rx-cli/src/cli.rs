//! CLI argument definitions for the drug cost report.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pharmacy-counting",
    version,
    about = "Rank prescription drugs by total cost",
    long_about = "Aggregate prescriber drug-cost records into per-drug statistics.\n\n\
                  Counts unique prescribers and sums cost for every drug, then writes\n\
                  a report ordered by total cost (highest first)."
)]
pub struct Cli {
    #[command(flatten)]
    pub report: ReportArgs,

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

#[derive(Args)]
pub struct ReportArgs {
    /// Input file of prescription records (first line is a header).
    #[arg(
        short = 'i',
        long = "input",
        value_name = "PATH",
        default_value = "input/itcont.txt"
    )]
    pub input: PathBuf,

    /// Report file to write; missing directories are created.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        default_value = "output/top_cost_drug.txt"
    )]
    pub output: PathBuf,

    /// Drug-name order applied when total costs are equal.
    #[arg(long = "tie-break", value_enum, default_value = "asc")]
    pub tie_break: TieBreakArg,

    /// Aggregate and print the summary without writing the report.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Number of ranked drugs shown in the terminal summary.
    #[arg(long = "top", value_name = "N", default_value_t = 10)]
    pub top: usize,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TieBreakArg {
    Asc,
    Desc,
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
