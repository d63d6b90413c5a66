//! Data types for the merge pipeline.

pub mod record;
pub mod source;
pub mod table;

pub use record::CanonicalRecord;
pub use source::{load_sources, FailureRecord, FormatHint, SourceDescriptor, SourceType};
pub use table::RawTable;
