//! Typed errors for the merge pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! Two tiers: [`IngestError`] covers a single configured source and is
//! always downgraded to a failure record by the run loop, while
//! [`PipelineError`] covers faults that abort the whole run (unreadable
//! base listing, output I/O).

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort the whole pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Base listing CSV could not be read or parsed.
    #[error("failed to read base listing {path}: {source}")]
    BaseRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Source configuration CSV could not be parsed.
    #[error("failed to read source configuration {path}: {source}")]
    SourceConfig {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Filesystem error (output directories, export files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error during export.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error during export.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors scoped to a single configured source.
///
/// These never propagate past the per-source boundary: the run loop
/// converts them to a `FailureRecord` and continues with the next source.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The source has neither a data URL nor a list URL.
    #[error("missing-url")]
    MissingUrl,

    /// PDF retrieval succeeded but no candidate lines were extracted.
    #[error("pdf-parse-failed")]
    PdfParseFailed,

    /// Remote content whose format cannot be interpreted as tabular data.
    #[error("unsupported tabular source: {locator}")]
    UnsupportedFormat { locator: String },

    /// Network retrieval failed (connect, status, timeout).
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Structured parse failed (CSV, spreadsheet, PDF extraction tool).
    #[error("parse error: {0}")]
    Parse(String),

    /// Local file error (downloaded temp file, local source path).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pipeline-fatal operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Result type alias for per-source ingestion.
pub type IngestResult<T> = std::result::Result<T, IngestError>;
