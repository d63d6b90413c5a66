//! Restaurant Listing Merge Pipeline
//!
//! Ingests a curated base listing plus an open set of secondary sources
//! (franchise and municipal operators) publishing in heterogeneous
//! formats, normalizes them into one tabular schema, deduplicates by
//! identity, enriches missing fields via rule-based inference, and emits
//! a canonical CSV and a denormalized JSON feed.
//!
//! # Design
//!
//! - Per-source resilience: ingestion failures are values
//!   ([`error::IngestError`]), converted to failure records at the run
//!   loop; one broken source never aborts the batch.
//! - Rule tables (gazetteer, classification patterns, column renames) are
//!   fixed ordered configuration, built once and passed explicitly into
//!   the components that use them. Order is a behavioral contract.
//! - Enrichment is a pure per-record transform; nothing mutates a shared
//!   table across passes.
//! - External retrieval sits behind the narrow [`fetch::Fetcher`] seam so
//!   the whole pipeline runs against canned content in tests.
//!
//! # Modules
//!
//! - [`text`] / [`region`] / [`classify`] - normalization and inference
//! - [`fetch`] / [`ingest`] - retrieval seam and format dispatch
//! - [`unify`] / [`enrich`] / [`merge`] - schema unification to canonical
//!   records
//! - [`export`] - CSV / JSON / review-queue emission
//! - [`run`] - batch orchestration

pub mod classify;
pub mod enrich;
pub mod error;
pub mod export;
pub mod fetch;
pub mod ingest;
pub mod merge;
pub mod region;
pub mod run;
pub mod schema;
pub mod text;
pub mod types;
pub mod unify;

// Re-export core types at crate root
pub use error::{IngestError, PipelineError};
pub use fetch::{FetchedContent, Fetcher, HttpFetcher, MockFetcher};
pub use region::{Region, RegionParser};
pub use run::{run_pipeline, RunConfig, RunSummary};
pub use types::{
    load_sources, CanonicalRecord, FailureRecord, FormatHint, RawTable, SourceDescriptor,
    SourceType,
};

pub use classify::{Classification, Classifier, ClassifyInput};
pub use enrich::{enrich_table, map_search_url, Provenance};
pub use export::{write_failure_queue, write_public_json, write_standard_csv, PublicRecord};
pub use ingest::ingest_source;
pub use merge::dedup_first_wins;
pub use unify::unify_columns;
