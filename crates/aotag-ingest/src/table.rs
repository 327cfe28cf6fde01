//! Index table assembly.

use std::collections::BTreeMap;
use std::path::PathBuf;

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use aotag_model::{AcquisiTag, DataTag, FormatType};

use crate::error::Result;

/// One matched file, ready to become a table row.
#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub format: FormatType,
    pub path: PathBuf,
    pub fields: BTreeMap<String, String>,
}

impl MatchRecord {
    pub fn new(format: FormatType, path: PathBuf, fields: BTreeMap<String, String>) -> Self {
        Self {
            format,
            path,
            fields,
        }
    }

    fn base_path(&self) -> String {
        self.path
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }
}

/// Column names of the index table in order: bookkeeping columns first,
/// then the full tag vocabulary.
pub fn index_columns() -> Vec<&'static str> {
    let mut names = vec![
        FormatType::COLUMN,
        AcquisiTag::DataPath.as_str(),
        AcquisiTag::BasePath.as_str(),
        AcquisiTag::Dataset.as_str(),
    ];
    names.extend(DataTag::ALL.iter().map(|tag| tag.as_str()));
    names
}

/// Builds the index table out of matched records.
///
/// The schema is fixed: every vocabulary tag gets a column whether or not
/// any template captures it. A cell is null where the row's template does
/// not define the tag, and the empty string where an optional field matched
/// nothing. Zero records produce a zero-row table with the full schema.
pub fn records_to_frame(records: &[MatchRecord]) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(4 + DataTag::ALL.len());

    let formats: Vec<&str> = records.iter().map(|r| r.format.as_str()).collect();
    columns.push(Series::new(FormatType::COLUMN.into(), formats).into());

    let data_paths: Vec<String> = records
        .iter()
        .map(|r| r.path.display().to_string())
        .collect();
    columns.push(Series::new(AcquisiTag::DataPath.as_str().into(), data_paths).into());

    let base_paths: Vec<String> = records.iter().map(|r| r.base_path()).collect();
    columns.push(Series::new(AcquisiTag::BasePath.as_str().into(), base_paths).into());

    // Reserved for downstream loaders that attach dataset handles.
    let datasets: Vec<Option<String>> = vec![None; records.len()];
    columns.push(Series::new(AcquisiTag::Dataset.as_str().into(), datasets).into());

    for tag in DataTag::ALL {
        let values: Vec<Option<&str>> = records
            .iter()
            .map(|r| r.fields.get(tag.as_str()).map(String::as_str))
            .collect();
        columns.push(Series::new(tag.as_str().into(), values).into());
    }

    let frame = DataFrame::new(columns)?;
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(format: FormatType, path: &str, fields: &[(&str, &str)]) -> MatchRecord {
        let fields = fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        MatchRecord::new(format, PathBuf::from(path), fields)
    }

    #[test]
    fn empty_input_keeps_the_full_schema() {
        let frame = records_to_frame(&[]).expect("build empty frame");
        assert_eq!(frame.height(), 0);
        let names: Vec<String> = frame
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, index_columns());
    }

    #[test]
    fn rows_carry_paths_and_format() {
        let records = vec![
            record(
                FormatType::Video,
                "/data/session/11101_0001.avi",
                &[("subject", "11101"), ("vidnum", "0001")],
            ),
            record(FormatType::Image, "/data/session/avg.tif", &[]),
        ];
        let frame = records_to_frame(&records).expect("build frame");
        assert_eq!(frame.height(), 2);

        let format = frame.column(FormatType::COLUMN).unwrap().str().unwrap();
        assert_eq!(format.get(0), Some("video"));
        assert_eq!(format.get(1), Some("image"));

        let data_path = frame
            .column(AcquisiTag::DataPath.as_str())
            .unwrap()
            .str()
            .unwrap();
        assert_eq!(data_path.get(0), Some("/data/session/11101_0001.avi"));

        let base_path = frame
            .column(AcquisiTag::BasePath.as_str())
            .unwrap()
            .str()
            .unwrap();
        assert_eq!(base_path.get(0), Some("/data/session"));
        assert_eq!(base_path.get(1), Some("/data/session"));
    }

    #[test]
    fn dataset_column_is_always_null() {
        let records = vec![record(FormatType::Video, "/d/a.avi", &[("subject", "s1")])];
        let frame = records_to_frame(&records).expect("build frame");
        let dataset = frame
            .column(AcquisiTag::Dataset.as_str())
            .unwrap()
            .str()
            .unwrap();
        assert_eq!(dataset.get(0), None);
    }

    #[test]
    fn uncaptured_tags_are_null_and_empty_captures_stay_empty() {
        let records = vec![record(
            FormatType::QueryLoc,
            "/d/coords.csv",
            &[("subject", "11101"), ("queryloc", "")],
        )];
        let frame = records_to_frame(&records).expect("build frame");

        let queryloc = frame.column("queryloc").unwrap().str().unwrap();
        assert_eq!(queryloc.get(0), Some(""));

        let eye = frame.column("eye").unwrap().str().unwrap();
        assert_eq!(eye.get(0), None);
    }
}
