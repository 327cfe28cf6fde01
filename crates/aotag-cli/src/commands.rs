//! Command implementations for the indexer CLI.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use comfy_table::Table;
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::{info, info_span};

use aotag_ingest::{FilenamePattern, TagParser};
use aotag_model::{DataTag, FormatType};

use crate::cli::{FormatsArgs, IndexArgs};
use crate::summary::apply_table_style;
use crate::types::IndexResult;

pub fn run_index(args: &IndexArgs) -> Result<IndexResult> {
    let parser = load_parser(&args.config, args.group.as_deref())?;
    let span = info_span!("index", root = %args.directory.display());
    let _guard = span.enter();

    let frame = parser
        .index_directory(&args.directory, args.recursive)
        .with_context(|| format!("index {}", args.directory.display()))?;
    let format_counts = count_by_format(&frame)?;
    info!(rows = frame.height(), "indexing complete");

    let output = match &args.output {
        Some(path) => {
            write_csv(&frame, path)?;
            info!(path = %path.display(), "wrote index table");
            Some(path.clone())
        }
        None => None,
    };

    Ok(IndexResult {
        root: args.directory.clone(),
        recursive: args.recursive,
        frame,
        format_counts,
        extensions: parser.extensions().to_vec(),
        output,
    })
}

pub fn run_formats(args: &FormatsArgs) -> Result<()> {
    let parser = load_parser(&args.config, args.group.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec!["Format", "Template", "Extension", "Fields"]);
    apply_table_style(&mut table);
    for format in FormatType::PRIORITY {
        match parser.pattern(format) {
            Some(pattern) => {
                table.add_row(vec![
                    format.to_string(),
                    pattern.template().to_string(),
                    pattern.extension().to_string(),
                    vocabulary_fields(pattern).join(", "),
                ]);
            }
            None => {
                table.add_row(vec![
                    format.to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                ]);
            }
        }
    }
    println!("{table}");
    Ok(())
}

/// Placeholders the listing reports, restricted to the tag vocabulary the
/// matcher actually extracts.
fn vocabulary_fields(pattern: &FilenamePattern) -> Vec<&str> {
    pattern
        .fields()
        .iter()
        .filter(|field| DataTag::from_name(field.name()).is_some())
        .map(|field| field.name())
        .collect()
}

fn load_parser(config: &Path, group: Option<&str>) -> Result<TagParser> {
    TagParser::from_json_file(config, group)
        .with_context(|| format!("load formats from {}", config.display()))?
        .ok_or_else(|| match group {
            Some(group) => anyhow!("group '{}' not found in {}", group, config.display()),
            None => anyhow!("configuration {} defines no formats", config.display()),
        })
}

fn count_by_format(frame: &DataFrame) -> Result<Vec<(FormatType, usize)>> {
    let mut counts: BTreeMap<FormatType, usize> = BTreeMap::new();
    if frame.height() > 0 {
        let column = frame.column(FormatType::COLUMN)?.str()?;
        for value in column.into_iter().flatten() {
            if let Ok(format) = value.parse::<FormatType>() {
                *counts.entry(format).or_insert(0) += 1;
            }
        }
    }
    Ok(FormatType::PRIORITY
        .iter()
        .map(|format| (*format, counts.get(format).copied().unwrap_or(0)))
        .collect())
}

fn write_csv(frame: &DataFrame, path: &Path) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("create output file {}", path.display()))?;
    let mut frame = frame.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut frame)
        .with_context(|| format!("write index table to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aotag_ingest::{MatchRecord, records_to_frame};

    fn frame() -> DataFrame {
        let records = vec![
            MatchRecord::new(FormatType::Video, "/d/a.avi".into(), BTreeMap::new()),
            MatchRecord::new(FormatType::Video, "/d/b.avi".into(), BTreeMap::new()),
            MatchRecord::new(FormatType::Mask, "/d/a_mask.avi".into(), BTreeMap::new()),
        ];
        records_to_frame(&records).expect("build frame")
    }

    #[test]
    fn formats_listing_names_only_vocabulary_fields() {
        let pattern =
            FilenamePattern::compile(FormatType::Video, "{subject}_{rig}_{vidnum:d}.avi")
                .expect("template compiles");
        assert_eq!(vocabulary_fields(&pattern), ["subject", "vidnum"]);
    }

    #[test]
    fn counts_rows_per_format() {
        let counts = count_by_format(&frame()).expect("count formats");
        assert_eq!(counts.len(), 5);
        assert!(counts.contains(&(FormatType::Video, 2)));
        assert!(counts.contains(&(FormatType::Mask, 1)));
        assert!(counts.contains(&(FormatType::Image, 0)));
    }

    #[test]
    fn empty_frame_counts_are_all_zero() {
        let frame = records_to_frame(&[]).expect("build frame");
        let counts = count_by_format(&frame).expect("count formats");
        assert!(counts.iter().all(|(_, count)| *count == 0));
    }

    #[test]
    fn csv_output_includes_header_and_rows() {
        let dir = tempfile::TempDir::new().expect("create temp dir");
        let path = dir.path().join("index.csv");
        write_csv(&frame(), &path).expect("write csv");
        let text = std::fs::read_to_string(&path).expect("read csv");
        let mut lines = text.lines();
        let header = lines.next().expect("header line");
        assert!(header.starts_with("Format_Type,Data_Path,Base_Path,Dataset"));
        assert_eq!(lines.count(), 3);
    }
}
