pub mod config;
pub mod error;
pub mod format;
pub mod tags;

pub use config::{FIELDS_TO_LOAD, FormatConfig, METADATA_GROUP, MetadataConfig};
pub use error::{ConfigError, Result};
pub use format::FormatType;
pub use tags::{AcquisiTag, DataTag};
