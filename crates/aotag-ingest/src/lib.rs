pub mod error;
pub mod parser;
pub mod table;
pub mod template;
pub mod walker;

pub use error::{IngestError, Result};
pub use parser::TagParser;
pub use table::{MatchRecord, index_columns, records_to_frame};
pub use template::{FilenamePattern, TemplateField};
pub use walker::list_files_with_suffix;
