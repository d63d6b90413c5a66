//! Canonical CSV export and the manual-review failure queue.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::schema::STANDARD_COLUMNS;
use crate::types::{CanonicalRecord, FailureRecord};

/// Write the merged table in the fixed 17-column standard order.
///
/// The file starts with a UTF-8 byte-order marker so spreadsheet tools
/// pick up the encoding.
pub fn write_standard_csv(path: &Path, records: &[CanonicalRecord]) -> Result<()> {
    let mut writer = bom_writer(path)?;
    writer.write_record(STANDARD_COLUMNS)?;

    for r in records {
        writer.write_record([
            r.name.as_str(),
            r.address.as_str(),
            r.naver_place_url.as_str(),
            r.map_url.as_str(),
            r.reservation_url.as_str(),
            r.region.sido.as_str(),
            r.region.sigungu.as_str(),
            r.region.eupmyeondong.as_str(),
            r.category.as_str(),
            r.category_detail.as_str(),
            r.main_dish.as_str(),
            r.search_tags.as_str(),
            r.badge.as_str(),
            r.source_type.as_str(),
            r.evidence_url.as_str(),
            r.evidence_text.as_str(),
            r.updated_at.as_str(),
        ])?;
    }
    writer.flush()?;

    info!(path = %path.display(), records = records.len(), "wrote canonical CSV");
    Ok(())
}

/// Write the manual-review queue for sources that failed ingestion.
pub fn write_failure_queue(path: &Path, failures: &[FailureRecord]) -> Result<()> {
    let mut writer = bom_writer(path)?;
    writer.write_record(["source_id", "org_name", "error"])?;
    for f in failures {
        writer.write_record([f.source_id.as_str(), f.org_name.as_str(), f.error.as_str()])?;
    }
    writer.flush()?;

    info!(path = %path.display(), failures = failures.len(), "wrote manual-review queue");
    Ok(())
}

fn bom_writer(path: &Path) -> Result<csv::Writer<File>> {
    let mut file = File::create(path)?;
    file.write_all("\u{feff}".as_bytes())?;
    Ok(csv::Writer::from_writer(file))
}
