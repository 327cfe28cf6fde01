use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kinds of acquisition file an AO imaging session produces.
/// Each kind carries its own filename format in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    /// Raw acquisition video (the primary capture).
    Video,
    /// Per-frame acceptance mask accompanying a video.
    Mask,
    /// Averaged or otherwise processed still image.
    Image,
    /// Query location file naming fixation targets.
    QueryLoc,
    /// Sidecar metadata file for an acquisition.
    Metadata,
}

impl FormatType {
    /// Match order used when classifying a filename. A name matched by an
    /// earlier format is never reported as a later one.
    pub const PRIORITY: [FormatType; 5] = [
        FormatType::Video,
        FormatType::Mask,
        FormatType::Image,
        FormatType::QueryLoc,
        FormatType::Metadata,
    ];

    /// Column under which the matched format is reported in index tables.
    pub const COLUMN: &'static str = "Format_Type";

    /// Returns the canonical lowercase name used in tables and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatType::Video => "video",
            FormatType::Mask => "mask",
            FormatType::Image => "image",
            FormatType::QueryLoc => "queryloc",
            FormatType::Metadata => "metadata",
        }
    }

    /// Returns the configuration key holding this format's template.
    pub fn config_key(&self) -> &'static str {
        match self {
            FormatType::Video => "video_format",
            FormatType::Mask => "mask_format",
            FormatType::Image => "image_format",
            FormatType::QueryLoc => "queryloc_format",
            FormatType::Metadata => "metadata_format",
        }
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FormatType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "video" => Ok(FormatType::Video),
            "mask" => Ok(FormatType::Mask),
            "image" => Ok(FormatType::Image),
            "queryloc" => Ok(FormatType::QueryLoc),
            "metadata" => Ok(FormatType::Metadata),
            _ => Err(format!("Unknown format type: {}", s)),
        }
    }
}
