//! Filename tag parsing and directory indexing.
//!
//! [`TagParser`] holds one compiled matcher per configured format type and
//! classifies filenames by trying the matchers in [`FormatType::PRIORITY`]
//! order. The first match decides the format, so a mask template never
//! shadows a video template no matter how the configuration orders its keys.
//! All state lives in the parser instance; independent parsers never share
//! or overwrite each other's formats.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use aotag_model::{FormatConfig, FormatType};

use crate::error::{IngestError, Result};
use crate::table::{MatchRecord, records_to_frame};
use crate::template::FilenamePattern;
use crate::walker::list_files_with_suffix;

/// Compiled per-format filename matchers plus the extensions they imply.
#[derive(Debug, Clone)]
pub struct TagParser {
    config: FormatConfig,
    matchers: Vec<(FormatType, Option<FilenamePattern>)>,
    extensions: Vec<String>,
}

impl TagParser {
    /// Compiles every configured template up front.
    ///
    /// Fails on the first template that does not compile, so a parser that
    /// constructs successfully can never fail to match for syntax reasons
    /// later on.
    pub fn new(config: FormatConfig) -> Result<TagParser> {
        let mut matchers = Vec::with_capacity(FormatType::PRIORITY.len());
        let mut extensions: Vec<String> = Vec::new();
        for format in FormatType::PRIORITY {
            let pattern = match config.template(format) {
                Some(template) => Some(FilenamePattern::compile(format, template)?),
                None => None,
            };
            if let Some(pattern) = &pattern {
                if !extensions.iter().any(|ext| ext == pattern.extension()) {
                    extensions.push(pattern.extension().to_string());
                }
            }
            matchers.push((format, pattern));
        }
        Ok(TagParser {
            config,
            matchers,
            extensions,
        })
    }

    /// Builds a parser from a parsed JSON document.
    ///
    /// Returns `Ok(None)` when `root_group` is given but absent from the
    /// document, meaning tag parsing is disabled for this configuration.
    pub fn from_value(value: &Value, root_group: Option<&str>) -> Result<Option<TagParser>> {
        match FormatConfig::from_value(value, root_group)? {
            Some(config) => Ok(Some(TagParser::new(config)?)),
            None => Ok(None),
        }
    }

    /// Reads a JSON configuration file and builds a parser from it.
    pub fn from_json_file(path: &Path, root_group: Option<&str>) -> Result<Option<TagParser>> {
        let raw = fs::read_to_string(path).map_err(|e| IngestError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let value: Value = serde_json::from_str(&raw).map_err(|e| IngestError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        TagParser::from_value(&value, root_group)
    }

    /// Classifies a bare filename against the configured formats.
    ///
    /// Tries matchers in priority order and stops at the first match,
    /// returning the format and the captured vocabulary fields. Formats
    /// without a template are skipped. A filename no format recognizes
    /// yields `(None, empty)`.
    pub fn parse_filename(&self, filename: &str) -> (Option<FormatType>, BTreeMap<String, String>) {
        for (format, pattern) in &self.matchers {
            let Some(pattern) = pattern else {
                continue;
            };
            if let Some(fields) = pattern.matches(filename) {
                return (Some(*format), fields);
            }
        }
        (None, BTreeMap::new())
    }

    /// Indexes an acquisition directory into a table, one row per file a
    /// configured format recognizes.
    ///
    /// The directory is listed once per configured extension; a file whose
    /// name carries several matching extensions is still recorded once.
    /// Files no format recognizes are skipped. An empty result is legal and
    /// comes back as a zero-row table with the full schema.
    pub fn index_directory(&self, root: &Path, recursive: bool) -> Result<DataFrame> {
        if !root.is_dir() {
            return Err(IngestError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut records: Vec<MatchRecord> = Vec::new();
        let mut recorded: BTreeSet<PathBuf> = BTreeSet::new();
        for extension in &self.extensions {
            for path in list_files_with_suffix(root, extension, recursive)? {
                let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                    continue;
                };
                let (format, fields) = self.parse_filename(name);
                let Some(format) = format else {
                    trace!(file = %path.display(), "no format template matched");
                    continue;
                };
                if !recorded.insert(path.clone()) {
                    continue;
                }
                records.push(MatchRecord::new(format, path, fields));
            }
        }

        debug!(
            root = %root.display(),
            rows = records.len(),
            "indexed acquisition directory"
        );
        records_to_frame(&records)
    }

    /// The configuration this parser was built from.
    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Loader parameters of the metadata subgroup, when configured.
    pub fn metadata_params(&self) -> Option<&Map<String, Value>> {
        self.config.metadata.as_ref().map(|m| &m.params)
    }

    /// File extensions of the configured formats, in priority order of
    /// first appearance, duplicates removed.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// The compiled matcher for `format`, if that format is configured.
    pub fn pattern(&self, format: FormatType) -> Option<&FilenamePattern> {
        self.matchers
            .iter()
            .find(|(f, _)| *f == format)
            .and_then(|(_, pattern)| pattern.as_ref())
    }
}
