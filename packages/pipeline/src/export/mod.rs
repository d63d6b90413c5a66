//! Exporters for the canonical merged table.

pub mod csv;
pub mod json;

pub use csv::{write_failure_queue, write_standard_csv};
pub use json::{write_public_json, PublicRecord, PublicRegion};
