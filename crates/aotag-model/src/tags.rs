//! Fixed vocabulary of tags an acquisition filename can carry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named fields a filename template may capture. The names double as
/// column headers in index tables and as placeholder names in templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataTag {
    /// Subject or participant identifier.
    Subject,
    /// Free-form acquisition identifier.
    #[serde(rename = "id")]
    DataId,
    /// Full acquisition date as written in the filename.
    Date,
    Year,
    Month,
    Day,
    /// Imaged eye, typically OD or OS.
    Eye,
    /// Horizontal retinal location of the acquisition.
    LocX,
    /// Vertical retinal location of the acquisition.
    LocY,
    FovWidth,
    FovHeight,
    /// Imaging modality, e.g. confocal or split detection.
    Modality,
    /// Per-session video number.
    #[serde(rename = "vidnum")]
    VidNum,
    /// Query location label tying a file to a fixation target.
    #[serde(rename = "queryloc")]
    QueryLoc,
}

impl DataTag {
    /// Every tag, in index-table column order.
    pub const ALL: [DataTag; 14] = [
        DataTag::Subject,
        DataTag::DataId,
        DataTag::Date,
        DataTag::Year,
        DataTag::Month,
        DataTag::Day,
        DataTag::Eye,
        DataTag::LocX,
        DataTag::LocY,
        DataTag::FovWidth,
        DataTag::FovHeight,
        DataTag::Modality,
        DataTag::VidNum,
        DataTag::QueryLoc,
    ];

    /// Returns the column and placeholder name for this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataTag::Subject => "subject",
            DataTag::DataId => "id",
            DataTag::Date => "date",
            DataTag::Year => "year",
            DataTag::Month => "month",
            DataTag::Day => "day",
            DataTag::Eye => "eye",
            DataTag::LocX => "loc_x",
            DataTag::LocY => "loc_y",
            DataTag::FovWidth => "fov_width",
            DataTag::FovHeight => "fov_height",
            DataTag::Modality => "modality",
            DataTag::VidNum => "vidnum",
            DataTag::QueryLoc => "queryloc",
        }
    }

    /// Looks a tag up by its placeholder name. Names outside the vocabulary
    /// return `None` and are ignored by the extraction engine.
    pub fn from_name(name: &str) -> Option<DataTag> {
        DataTag::ALL.iter().copied().find(|tag| tag.as_str() == name)
    }
}

impl fmt::Display for DataTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Bookkeeping columns every index table carries alongside the tag columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AcquisiTag {
    /// Dataset handle, reserved for downstream loaders. Always null here.
    Dataset,
    /// Path of the matched file as discovered.
    DataPath,
    /// Directory containing the matched file.
    BasePath,
}

impl AcquisiTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            AcquisiTag::Dataset => "Dataset",
            AcquisiTag::DataPath => "Data_Path",
            AcquisiTag::BasePath => "Base_Path",
        }
    }
}

impl fmt::Display for AcquisiTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
