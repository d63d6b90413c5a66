//! Source configuration: descriptors for external listing feeds and the
//! failure records produced when one cannot be ingested.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PipelineError, Result};
use crate::text::normalize_space;

/// Kind of organization operating a secondary source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Franchise,
    Municipality,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Franchise => "franchise",
            SourceType::Municipality => "municipality",
        }
    }
}

/// Declared content format of a source, steering dispatcher branch
/// selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatHint {
    #[default]
    Html,
    Pdf,
    Csv,
    Xls,
    Xlsx,
    /// Unknown declared value; the dispatcher infers from the locator.
    Unspecified,
}

impl FormatHint {
    /// Parse a declared hint; empty defaults to HTML, unknown values fall
    /// through to locator-extension inference.
    pub fn parse(value: &str) -> Self {
        match normalize_space(value).to_lowercase().as_str() {
            "" | "html" => FormatHint::Html,
            "pdf" => FormatHint::Pdf,
            "csv" => FormatHint::Csv,
            "xls" => FormatHint::Xls,
            "xlsx" | "excel" => FormatHint::Xlsx,
            _ => FormatHint::Unspecified,
        }
    }
}

/// One configured external source. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct SourceDescriptor {
    pub source_id: String,
    pub source_type: SourceType,
    pub org_name: String,
    pub list_url: String,
    pub data_url: String,
    pub format_hint: FormatHint,
    pub evidence_url: String,
    pub evidence_text: String,
}

impl SourceDescriptor {
    /// Locator to fetch: the data URL when present, else the list URL.
    pub fn target_url(&self) -> Option<&str> {
        if !self.data_url.is_empty() {
            Some(&self.data_url)
        } else if !self.list_url.is_empty() {
            Some(&self.list_url)
        } else {
            None
        }
    }
}

/// A source that failed ingestion; written to the manual-review queue,
/// never merged into canonical output.
#[derive(Debug, Clone, Serialize)]
pub struct FailureRecord {
    pub source_id: String,
    pub org_name: String,
    pub error: String,
}

/// Load the configured sources, franchise rows first then municipality
/// rows. A missing configuration file contributes no sources; a malformed
/// one is a fatal error.
pub fn load_sources(franchise_csv: &Path, municipality_csv: &Path) -> Result<Vec<SourceDescriptor>> {
    let mut sources = Vec::new();

    if franchise_csv.exists() {
        for_each_config_row(franchise_csv, |get| {
            sources.push(SourceDescriptor {
                source_id: get("source_id"),
                source_type: SourceType::Franchise,
                org_name: get("브랜드명"),
                list_url: get("매장리스트URL"),
                data_url: get("매장데이터URL"),
                format_hint: FormatHint::parse(&get("데이터형식")),
                evidence_url: get("좋은쌀근거URL"),
                evidence_text: get("좋은쌀근거문구"),
            });
        })?;
    }

    if municipality_csv.exists() {
        for_each_config_row(municipality_csv, |get| {
            let list_url = get("리스트URL");
            sources.push(SourceDescriptor {
                source_id: get("source_id"),
                source_type: SourceType::Municipality,
                org_name: get("지자체명"),
                evidence_url: list_url.clone(),
                list_url,
                data_url: String::new(),
                format_hint: FormatHint::parse(&get("형식")),
                evidence_text: get("근거문구키워드"),
            });
        })?;
    }

    debug!(count = sources.len(), "loaded source descriptors");
    Ok(sources)
}

/// Read a config CSV, handing each row to `build` as a normalized
/// column-name lookup.
fn for_each_config_row(
    path: &Path,
    mut build: impl FnMut(&dyn Fn(&str) -> String),
) -> Result<()> {
    let map_err = |source| PipelineError::SourceConfig {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(map_err)?;
    let headers = reader.headers().map_err(map_err)?.clone();

    for record in reader.records() {
        let record = record.map_err(map_err)?;
        let get = |name: &str| -> String {
            headers
                .iter()
                .position(|h| h == name)
                .and_then(|i| record.get(i))
                .map(normalize_space)
                .unwrap_or_default()
        };
        build(&get);
    }
    Ok(())
}
