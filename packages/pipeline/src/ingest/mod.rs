//! Source ingestion dispatcher.
//!
//! Resolves a source descriptor to raw tabular content: pick the locator,
//! dispatch on the declared format hint (or infer from the locator's
//! extension), and parse. Every failure comes back as a classified
//! [`IngestError`] so the run loop can record it and move on; one bad
//! source never halts ingestion of the others.

pub mod html;
pub mod pdf;
pub mod tabular;

use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, IngestResult};
use crate::fetch::Fetcher;
use crate::types::{FormatHint, RawTable, SourceDescriptor};

/// Retrieve and parse one configured source into the common tabular shape.
pub async fn ingest_source(
    fetcher: &dyn Fetcher,
    source: &SourceDescriptor,
    temp_dir: &Path,
) -> IngestResult<RawTable> {
    let target = source.target_url().ok_or(IngestError::MissingUrl)?;
    debug!(
        source_id = %source.source_id,
        hint = ?source.format_hint,
        target = %target,
        "dispatching source"
    );

    match source.format_hint {
        FormatHint::Html => fetch_html_table(fetcher, target).await,
        FormatHint::Pdf => pdf::ingest_pdf(fetcher, &source.source_id, target, temp_dir).await,
        FormatHint::Csv | FormatHint::Xls | FormatHint::Xlsx => {
            tabular::ingest_tabular(fetcher, target).await
        }
        FormatHint::Unspecified => {
            let lower = target.to_lowercase();
            if lower.ends_with(".pdf") {
                pdf::ingest_pdf(fetcher, &source.source_id, target, temp_dir).await
            } else if [".csv", ".xls", ".xlsx"].iter().any(|e| lower.ends_with(e)) {
                tabular::ingest_tabular(fetcher, target).await
            } else {
                fetch_html_table(fetcher, target).await
            }
        }
    }
}

async fn fetch_html_table(fetcher: &dyn Fetcher, target: &str) -> IngestResult<RawTable> {
    let content = fetcher.fetch(target).await?;
    Ok(html::parse_html_table(&content.text()))
}
