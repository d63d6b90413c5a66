//! HTML table extraction.

use scraper::{Html, Selector};

use crate::text::normalize_space;
use crate::types::RawTable;

/// Parse the first `<table>` element of an HTML document.
///
/// The first row supplies the header; body rows are padded/truncated to
/// the header width. A document with no table, or a table with fewer than
/// two rows, yields an empty table rather than an error.
pub fn parse_html_table(html: &str) -> RawTable {
    let document = Html::parse_document(html);

    // Selector strings are static and known-valid.
    let table_selector = Selector::parse("table").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("th, td").unwrap();

    let Some(table) = document.select(&table_selector).next() else {
        return RawTable::new();
    };

    let mut rows: Vec<Vec<String>> = Vec::new();
    for tr in table.select(&row_selector) {
        let cells: Vec<String> = tr
            .select(&cell_selector)
            .map(|cell| normalize_space(&cell.text().collect::<Vec<_>>().join(" ")))
            .collect();
        if cells.is_empty() {
            continue;
        }
        rows.push(cells);
    }

    if rows.len() < 2 {
        return RawTable::new();
    }

    let header = rows.remove(0);
    RawTable::from_rows(header, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_table_header_and_body() {
        let html = r#"
            <html><body>
            <table>
              <tr><th>상호명</th><th>주소</th></tr>
              <tr><td>  본죽   강남점  </td><td>서울특별시 강남구 역삼동 1</td></tr>
              <tr><td>밥집</td><td>부산광역시 해운대구</td><td>extra</td></tr>
            </table>
            <table><tr><td>second table ignored</td></tr></table>
            </body></html>
        "#;

        let table = parse_html_table(html);
        assert_eq!(table.columns(), ["상호명", "주소"]);
        assert_eq!(table.len(), 2);
        let rows: Vec<_> = table.records().collect();
        assert_eq!(rows[1]["상호명"], "밥집");
    }

    #[test]
    fn test_whitespace_collapsed_in_cells() {
        let html = "<table><tr><th>n</th></tr><tr><td>  a \n b  </td></tr></table>";
        let table = parse_html_table(html);
        assert_eq!(table.records().next().unwrap()["n"], "a b");
    }

    #[test]
    fn test_header_only_table_is_empty() {
        let html = "<table><tr><th>상호명</th></tr></table>";
        assert!(parse_html_table(html).is_empty());
    }

    #[test]
    fn test_no_table_is_empty() {
        assert!(parse_html_table("<html><p>nothing here</p></html>").is_empty());
    }
}
