//! Error types for filename-tag ingestion.

use std::path::PathBuf;
use thiserror::Error;

use aotag_model::{ConfigError, FormatType};

/// Errors that can occur while building a parser or indexing a directory.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Template Errors ===
    /// Template text could not be compiled into a matcher.
    #[error("invalid {format} template '{template}': {message}")]
    Template {
        format: FormatType,
        template: String,
        message: String,
    },

    /// Template does not end in a recognizable file extension.
    #[error("{format} template '{template}' does not end in a '.'-delimited extension")]
    TemplateExtension {
        format: FormatType,
        template: String,
    },

    // === Configuration Errors ===
    /// Configuration JSON did not have the expected shape.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failed to read a configuration file.
    #[error("failed to read configuration {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON.
    #[error("failed to parse configuration {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Table Errors ===
    /// Failed to assemble the index table.
    #[error("index table assembly failed: {message}")]
    Frame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::Frame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
