//! Filename-format configuration as it appears in processing JSON files.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::format::FormatType;

/// Key under which metadata settings nest inside a format section.
pub const METADATA_GROUP: &str = "metadata";

/// Metadata parameter naming the sidecar fields downstream loaders should read.
pub const FIELDS_TO_LOAD: &str = "fields_to_load";

/// One filename template per format type, as read from configuration.
/// A missing or null entry disables that format.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormatConfig {
    #[serde(rename = "video_format")]
    pub video: Option<String>,
    #[serde(rename = "mask_format")]
    pub mask: Option<String>,
    #[serde(rename = "image_format")]
    pub image: Option<String>,
    #[serde(rename = "queryloc_format")]
    pub queryloc: Option<String>,
    #[serde(default)]
    pub metadata: Option<MetadataConfig>,
}

/// Metadata subgroup: the sidecar filename template plus loader parameters
/// that are carried through untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetadataConfig {
    #[serde(rename = "metadata_format")]
    pub format: Option<String>,
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

impl FormatConfig {
    /// Reads a format configuration out of a parsed JSON document.
    ///
    /// With a `root_group`, the configuration is looked up under that key and
    /// a missing or null entry yields `Ok(None)`, meaning tag parsing is
    /// disabled for this document. Without one, the document root is read
    /// directly, with a null document disabling parsing the same way.
    pub fn from_value(
        value: &Value,
        root_group: Option<&str>,
    ) -> Result<Option<FormatConfig>, ConfigError> {
        let section = match root_group {
            Some(group) => match value.get(group) {
                Some(section) => section,
                None => return Ok(None),
            },
            None => value,
        };
        if section.is_null() {
            return Ok(None);
        }
        if !section.is_object() {
            return Err(ConfigError::GroupNotObject {
                group: root_group.unwrap_or("(root)").to_string(),
            });
        }
        let config = serde_json::from_value(section.clone())?;
        Ok(Some(config))
    }

    /// Returns the template configured for `format`, if any.
    pub fn template(&self, format: FormatType) -> Option<&str> {
        match format {
            FormatType::Video => self.video.as_deref(),
            FormatType::Mask => self.mask.as_deref(),
            FormatType::Image => self.image.as_deref(),
            FormatType::QueryLoc => self.queryloc.as_deref(),
            FormatType::Metadata => self.metadata.as_ref().and_then(|m| m.format.as_deref()),
        }
    }

    /// True when no format carries a template.
    pub fn is_empty(&self) -> bool {
        FormatType::PRIORITY.iter().all(|f| self.template(*f).is_none())
    }
}

impl MetadataConfig {
    /// Convenience accessor for the `fields_to_load` loader parameter.
    pub fn fields_to_load(&self) -> Option<&Value> {
        self.params.get(FIELDS_TO_LOAD)
    }
}
