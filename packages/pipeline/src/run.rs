//! Batch run orchestration: base listing -> secondary sources -> merge ->
//! export.
//!
//! Sources are ingested sequentially in configured order. A failing
//! source is recorded once in the manual-review queue and skipped; only
//! base-listing and output I/O errors abort the run.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::classify::Classifier;
use crate::enrich::{enrich_table, Provenance};
use crate::error::{PipelineError, Result};
use crate::export::{write_failure_queue, write_public_json, write_standard_csv};
use crate::fetch::Fetcher;
use crate::ingest::{ingest_source, tabular::csv_table_from_reader};
use crate::merge::dedup_first_wins;
use crate::region::RegionParser;
use crate::schema::{
    BASE_SOURCE_TYPE, COL_BADGE, COL_EVIDENCE_TEXT, COL_EVIDENCE_URL, COL_SOURCE_TYPE,
    PRIMARY_BADGE, REQUIRED_BASE_COLUMNS,
};
use crate::types::{load_sources, FailureRecord, RawTable};
use crate::unify::unify_columns;

/// Filename of the manual-review queue, written next to the canonical CSV.
const FAILURE_QUEUE_FILENAME: &str = "pdf_manual_review_queue.csv";

/// Input and output paths for one batch run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub base_csv: PathBuf,
    pub franchise_csv: PathBuf,
    pub municipality_csv: PathBuf,
    pub output_csv: PathBuf,
    pub output_json: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            base_csv: PathBuf::from("input/base.csv"),
            franchise_csv: PathBuf::from("input/sources/franchise_sources.csv"),
            municipality_csv: PathBuf::from("input/sources/municipality_sources.csv"),
            output_csv: PathBuf::from("output/ozicme_restaurants_merged.csv"),
            output_json: PathBuf::from("output/public-restaurants.json"),
        }
    }
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Records in the canonical output after deduplication.
    pub merged_records: usize,
    /// Rows contributed by the base listing before deduplication.
    pub base_rows: usize,
    /// Secondary sources successfully ingested.
    pub sources_ingested: usize,
    /// Sources skipped with a recorded reason.
    pub failures: Vec<FailureRecord>,
}

impl RunSummary {
    /// Whether every configured source was ingested.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Execute one batch run against the given fetcher.
pub async fn run_pipeline(config: &RunConfig, fetcher: &dyn Fetcher) -> Result<RunSummary> {
    for output in [&config.output_csv, &config.output_json] {
        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let run_date = chrono::Local::now().format("%Y-%m-%d").to_string();
    let regions = RegionParser::new();
    let classifier = Classifier::new();

    // Base listing: unreadable input aborts the run.
    let mut base_table = read_base_table(&config.base_csv)?;
    prepare_base_table(&mut base_table);
    let base_provenance = Provenance::new(BASE_SOURCE_TYPE, "", "", PRIMARY_BADGE);
    let mut records = enrich_table(&base_table, &base_provenance, &run_date, &regions, &classifier);
    let base_rows = records.len();
    info!(rows = base_rows, path = %config.base_csv.display(), "base listing prepared");

    let sources = load_sources(&config.franchise_csv, &config.municipality_csv)?;
    let temp_dir = config
        .output_csv
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .to_path_buf();

    let mut summary = RunSummary {
        base_rows,
        ..Default::default()
    };

    for source in &sources {
        match ingest_source(fetcher, source, &temp_dir).await {
            Ok(mut table) => {
                unify_columns(&mut table);
                let provenance = Provenance::new(
                    source.source_type.as_str(),
                    source.evidence_url.as_str(),
                    source.evidence_text.as_str(),
                    "",
                );
                let mut enriched =
                    enrich_table(&table, &provenance, &run_date, &regions, &classifier);
                // Secondary provenance is authoritative: the descriptor
                // overrides whatever the source table claimed, and badges
                // are reserved for the curated base.
                for record in &mut enriched {
                    record.source_type = source.source_type.as_str().to_string();
                    record.evidence_url = source.evidence_url.clone();
                    record.evidence_text = source.evidence_text.clone();
                    record.badge.clear();
                }

                info!(
                    source_id = %source.source_id,
                    org = %source.org_name,
                    rows = enriched.len(),
                    "source ingested"
                );
                summary.sources_ingested += 1;
                records.extend(enriched);
            }
            Err(error) => {
                warn!(
                    source_id = %source.source_id,
                    org = %source.org_name,
                    error = %error,
                    "source skipped"
                );
                summary.failures.push(FailureRecord {
                    source_id: source.source_id.clone(),
                    org_name: source.org_name.clone(),
                    error: error.to_string(),
                });
            }
        }
    }

    let merged = dedup_first_wins(records);
    summary.merged_records = merged.len();

    write_standard_csv(&config.output_csv, &merged)?;
    write_public_json(&config.output_json, &merged)?;

    if !summary.failures.is_empty() {
        let queue_path = temp_dir.join(FAILURE_QUEUE_FILENAME);
        write_failure_queue(&queue_path, &summary.failures)?;
    }

    info!(
        merged = summary.merged_records,
        sources = summary.sources_ingested,
        failures = summary.failures.len(),
        "run completed"
    );
    Ok(summary)
}

fn read_base_table(path: &Path) -> Result<RawTable> {
    let base_err = |source| PipelineError::BaseRead {
        path: path.to_path_buf(),
        source,
    };
    let file = std::fs::File::open(path).map_err(|e| base_err(csv::Error::from(e)))?;
    csv_table_from_reader(file).map_err(base_err)
}

/// Drop spreadsheet index artifacts and guarantee the required base
/// columns plus an authoritative base provenance.
fn prepare_base_table(table: &mut RawTable) {
    table.drop_columns_with_prefix("Unnamed");
    for column in REQUIRED_BASE_COLUMNS {
        table.ensure_column(column, "");
    }
    table.set_column(COL_SOURCE_TYPE, BASE_SOURCE_TYPE);
    table.set_column(COL_EVIDENCE_URL, "");
    table.set_column(COL_EVIDENCE_TEXT, "");
    table.set_column(COL_BADGE, PRIMARY_BADGE);
}
