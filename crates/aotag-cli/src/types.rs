//! Result types shared between commands and the summary printer.

use std::path::PathBuf;

use polars::prelude::DataFrame;

use aotag_model::FormatType;

/// Outcome of indexing one acquisition directory.
#[derive(Debug)]
pub struct IndexResult {
    /// Directory that was indexed.
    pub root: PathBuf,
    /// Whether subdirectories were walked.
    pub recursive: bool,
    /// The assembled index table.
    pub frame: DataFrame,
    /// File counts per format, in priority order.
    pub format_counts: Vec<(FormatType, usize)>,
    /// Extensions the configured formats imply.
    pub extensions: Vec<String>,
    /// Where the table was written, when an output path was given.
    pub output: Option<PathBuf>,
}
