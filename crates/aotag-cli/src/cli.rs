//! CLI argument definitions for the AO acquisition indexer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "aotag",
    version,
    about = "AOTag - Index AO imaging acquisitions by filename",
    long_about = "Index adaptive-optics imaging acquisitions by filename.\n\n\
                  Filename formats come from a JSON processing configuration and\n\
                  classify files as video, mask, image, query location, or metadata,\n\
                  extracting the tags each format's template captures."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Index an acquisition directory against the configured formats.
    Index(IndexArgs),

    /// Show the filename formats a configuration defines.
    Formats(FormatsArgs),
}

#[derive(Parser)]
pub struct IndexArgs {
    /// Directory containing acquisition files.
    #[arg(value_name = "DIR")]
    pub directory: PathBuf,

    /// Path to the JSON processing configuration.
    #[arg(long = "config", value_name = "JSON")]
    pub config: PathBuf,

    /// Configuration group holding the format entries (default: document root).
    #[arg(long = "group", value_name = "NAME")]
    pub group: Option<String>,

    /// Descend into subdirectories.
    #[arg(long = "recursive", short = 'r')]
    pub recursive: bool,

    /// Write the index table to a CSV file.
    #[arg(long = "output", value_name = "CSV")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct FormatsArgs {
    /// Path to the JSON processing configuration.
    #[arg(long = "config", value_name = "JSON")]
    pub config: PathBuf,

    /// Configuration group holding the format entries (default: document root).
    #[arg(long = "group", value_name = "NAME")]
    pub group: Option<String>,
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
