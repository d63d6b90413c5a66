//! PDF candidate extraction.
//!
//! Municipal sources often publish their lists as PDF documents. Text is
//! extracted with Poppler's `pdftotext` and each line is reduced to a
//! (name, address) candidate pair by splitting at the first space. Lines
//! whose remainder carries no 시/군/구 marker are dropped. The first-space
//! split mis-handles multi-word restaurant names; rejected lines end up in
//! the manual-review queue via the per-source error path.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{IngestError, IngestResult};
use crate::fetch::Fetcher;
use crate::schema::{COL_ADDRESS, COL_NAME};
use crate::text::normalize_space;
use crate::types::RawTable;

/// Characters marking an address-like remainder.
const ADDRESS_MARKERS: [char; 3] = ['시', '군', '구'];

/// Ingest a PDF source into a name/address table.
///
/// Remote documents are downloaded to a per-source temp file under
/// `temp_dir` (kept for debugging, as the whole run is single-threaded);
/// local paths are read in place. An extraction yielding no candidate
/// lines is a `pdf-parse-failed` error.
pub async fn ingest_pdf(
    fetcher: &dyn Fetcher,
    source_id: &str,
    target: &str,
    temp_dir: &Path,
) -> IngestResult<RawTable> {
    let path = if target.starts_with("http") {
        let content = fetcher.fetch(target).await?;
        let path = temp_file_path(temp_dir, source_id);
        std::fs::create_dir_all(temp_dir)?;
        std::fs::write(&path, &content.bytes)?;
        debug!(target = %target, path = %path.display(), "PDF downloaded");
        path
    } else {
        PathBuf::from(target)
    };

    let text = extract_text(&path).await?;
    let lines = text
        .lines()
        .map(normalize_space)
        .filter(|line| !line.is_empty());
    let candidates = candidate_rows(lines);

    if candidates.is_empty() {
        warn!(target = %target, "no candidate lines extracted from PDF");
        return Err(IngestError::PdfParseFailed);
    }

    let rows = candidates
        .into_iter()
        .map(|(name, address)| vec![name, address])
        .collect();
    Ok(RawTable::from_rows(
        vec![COL_NAME.to_string(), COL_ADDRESS.to_string()],
        rows,
    ))
}

/// Split normalized lines into (name, address) candidates.
///
/// A line qualifies when it contains a space and the remainder after the
/// first space carries a 시/군/구 marker character.
pub fn candidate_rows(lines: impl Iterator<Item = String>) -> Vec<(String, String)> {
    lines
        .filter_map(|line| {
            let (name, address) = line.split_once(' ')?;
            if address.chars().any(|c| ADDRESS_MARKERS.contains(&c)) {
                Some((name.to_string(), address.to_string()))
            } else {
                None
            }
        })
        .collect()
}

/// Per-source temp filename; source ids are sanitized for the filesystem.
fn temp_file_path(temp_dir: &Path, source_id: &str) -> PathBuf {
    let safe: String = source_id
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    let safe = if safe.is_empty() {
        "source".to_string()
    } else {
        safe
    };
    temp_dir.join(format!("tmp_{}.pdf", safe))
}

/// Extract document text via `pdftotext`.
async fn extract_text(path: &Path) -> IngestResult<String> {
    which::which("pdftotext")
        .map_err(|_| IngestError::Parse("pdftotext not found on PATH".to_string()))?;

    let output = tokio::process::Command::new("pdftotext")
        .args(["-enc", "UTF-8"])
        .arg(path)
        .arg("-")
        .output()
        .await?;

    if !output.status.success() {
        return Err(IngestError::Parse(format!(
            "pdftotext failed on {}: {}",
            path.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(values: &[&str]) -> std::vec::IntoIter<String> {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_candidate_rows_keep_marker_lines() {
        let rows = candidate_rows(lines(&[
            "본죽 서울특별시 강남구 역삼동 1",
            "좋은쌀사용업소목록",
            "페이지 2",
        ]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, "본죽");
        assert_eq!(rows[0].1, "서울특별시 강남구 역삼동 1");
    }

    #[test]
    fn test_candidate_rows_first_space_split() {
        // Known heuristic limit: multi-word names lose their tail to the
        // address side.
        let rows = candidate_rows(lines(&["본죽 강남점 서울특별시 강남구"]));
        assert_eq!(rows[0].0, "본죽");
        assert_eq!(rows[0].1, "강남점 서울특별시 강남구");
    }

    #[test]
    fn test_candidate_rows_require_space() {
        assert!(candidate_rows(lines(&["서울특별시강남구"])).is_empty());
    }

    #[test]
    fn test_temp_file_path_sanitizes_source_id() {
        let path = temp_file_path(Path::new("output"), "m/1 seoul");
        assert_eq!(path, Path::new("output").join("tmp_m-1-seoul.pdf"));
        let fallback = temp_file_path(Path::new("output"), "...");
        assert_eq!(fallback, Path::new("output").join("tmp_source.pdf"));
    }
}
