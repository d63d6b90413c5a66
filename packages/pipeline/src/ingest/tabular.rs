//! Structured tabular parsing: CSV and spreadsheet sources.

use std::io::Cursor;
use std::path::Path;

use calamine::Reader;
use tracing::debug;

use crate::error::{IngestError, IngestResult};
use crate::fetch::Fetcher;
use crate::text::normalize_space;
use crate::types::RawTable;

/// Ingest a tabular source (remote or local path).
///
/// Remote `.csv` and `.xls(x)` locators are fetched directly; any other
/// remote locator is sniffed by its declared content type and must be
/// `text/csv`, otherwise an unsupported-format error is raised (not
/// silently skipped). Local paths dispatch on extension.
pub async fn ingest_tabular(fetcher: &dyn Fetcher, target: &str) -> IngestResult<RawTable> {
    if target.starts_with("http") {
        let lower = target.to_lowercase();
        let content = fetcher.fetch(target).await?;

        if lower.ends_with(".csv") {
            return parse_csv_text(&content.text());
        }
        if lower.ends_with(".xls") || lower.ends_with(".xlsx") {
            return parse_workbook_bytes(content.bytes);
        }
        if content.content_type_contains("text/csv") {
            debug!(target = %target, "content-type sniffed as CSV");
            return parse_csv_text(&content.text());
        }
        return Err(IngestError::UnsupportedFormat {
            locator: target.to_string(),
        });
    }

    let path = Path::new(target);
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("csv") => {
            let text = std::fs::read_to_string(path)?;
            parse_csv_text(&text)
        }
        Some("xls") | Some("xlsx") => {
            let bytes = std::fs::read(path)?;
            parse_workbook_bytes(bytes)
        }
        _ => Err(IngestError::UnsupportedFormat {
            locator: target.to_string(),
        }),
    }
}

/// Parse CSV text into a raw table; the first record is the header.
pub fn parse_csv_text(text: &str) -> IngestResult<RawTable> {
    csv_table_from_reader(text.as_bytes()).map_err(|e| IngestError::Parse(e.to_string()))
}

/// Shared CSV-to-table reader; also used for the base listing.
pub(crate) fn csv_table_from_reader<R: std::io::Read>(
    reader: R,
) -> std::result::Result<RawTable, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(normalize_space)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(RawTable::from_rows(columns, rows))
}

/// Parse XLS/XLSX bytes; the first sheet's first row is the header.
fn parse_workbook_bytes(bytes: Vec<u8>) -> IngestResult<RawTable> {
    let mut workbook = calamine::open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| IngestError::Parse(e.to_string()))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(Ok(range)) => range,
        Some(Err(e)) => return Err(IngestError::Parse(e.to_string())),
        None => return Ok(RawTable::new()),
    };

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(|cell| normalize_space(&cell.to_string())).collect::<Vec<_>>());
    let Some(header) = rows.next() else {
        return Ok(RawTable::new());
    };
    Ok(RawTable::from_rows(header, rows.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::MockFetcher;

    #[tokio::test]
    async fn test_remote_csv_by_extension() {
        let fetcher = MockFetcher::new().with_text(
            "https://example.com/stores.csv",
            "상호명,주소\n본죽,서울특별시 강남구\n",
        );
        let table = ingest_tabular(&fetcher, "https://example.com/stores.csv")
            .await
            .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records().next().unwrap()["상호명"], "본죽");
    }

    #[tokio::test]
    async fn test_remote_generic_url_sniffed_as_csv() {
        let fetcher = MockFetcher::new().with_typed(
            "https://example.com/export?id=3",
            "상호명,주소\n밥집,부산광역시 해운대구\n".as_bytes(),
            "text/csv; charset=utf-8",
        );
        let table = ingest_tabular(&fetcher, "https://example.com/export?id=3")
            .await
            .unwrap();
        assert_eq!(table.len(), 1);
    }

    #[tokio::test]
    async fn test_remote_generic_url_unsupported() {
        let fetcher = MockFetcher::new().with_typed(
            "https://example.com/export",
            b"<html></html>",
            "text/html",
        );
        let err = ingest_tabular(&fetcher, "https://example.com/export")
            .await
            .unwrap_err();
        assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_parse_csv_text_ragged_rows() {
        let table = parse_csv_text("a,b\n1\n2,3,4\n").unwrap();
        let rows: Vec<_> = table.records().collect();
        assert_eq!(rows[0]["b"], "");
        assert_eq!(rows[1]["b"], "3");
    }
}
