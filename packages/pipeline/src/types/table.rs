//! Raw tabular shape shared by all ingestion branches.

use indexmap::IndexMap;

/// A column-ordered table of string cells, the common output shape of
/// every ingestion branch before unification.
///
/// Rows are kept padded/truncated to the header width on construction, so
/// downstream code can index cells by column position safely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create an empty table (no columns, no rows).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a header and body rows, padding or truncating
    /// each row to the header width.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.truncate(width);
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Rename a column in place; no-op when the old name is absent.
    ///
    /// When the new name already exists the old column keeps its cells and
    /// the rename is skipped, so a source cannot clobber its own data by
    /// carrying both spellings.
    pub fn rename_column(&mut self, from: &str, to: &str) {
        if self.has_column(to) {
            return;
        }
        if let Some(idx) = self.column_index(from) {
            self.columns[idx] = to.to_string();
        }
    }

    /// Add a column filled with `value` on every row, only if absent.
    pub fn ensure_column(&mut self, name: &str, value: &str) {
        if self.has_column(name) {
            return;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(value.to_string());
        }
    }

    /// Set a column to `value` on every row, adding it if absent.
    pub fn set_column(&mut self, name: &str, value: &str) {
        match self.column_index(name) {
            Some(idx) => {
                for row in &mut self.rows {
                    row[idx] = value.to_string();
                }
            }
            None => self.ensure_column(name, value),
        }
    }

    /// Drop every column whose name starts with `prefix`.
    pub fn drop_columns_with_prefix(&mut self, prefix: &str) {
        let keep: Vec<usize> = (0..self.columns.len())
            .filter(|&i| !self.columns[i].starts_with(prefix))
            .collect();
        if keep.len() == self.columns.len() {
            return;
        }
        self.columns = keep.iter().map(|&i| self.columns[i].clone()).collect();
        self.rows = self
            .rows
            .iter()
            .map(|row| keep.iter().map(|&i| row[i].clone()).collect())
            .collect();
    }

    /// Iterate rows as ordered column-name -> cell maps.
    pub fn records(&self) -> impl Iterator<Item = IndexMap<&str, &str>> + '_ {
        self.rows.iter().map(move |row| {
            self.columns
                .iter()
                .map(String::as_str)
                .zip(row.iter().map(String::as_str))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RawTable {
        RawTable::from_rows(
            vec!["a".into(), "b".into()],
            vec![
                vec!["1".into(), "2".into(), "overflow".into()],
                vec!["3".into()],
            ],
        )
    }

    #[test]
    fn test_rows_padded_and_truncated() {
        let table = sample();
        let rows: Vec<_> = table.records().collect();
        assert_eq!(rows[0]["b"], "2");
        assert_eq!(rows[1]["b"], "");
    }

    #[test]
    fn test_rename_and_ensure() {
        let mut table = sample();
        table.rename_column("a", "name");
        table.ensure_column("extra", "x");
        table.ensure_column("name", "ignored");
        let rows: Vec<_> = table.records().collect();
        assert_eq!(rows[0]["name"], "1");
        assert_eq!(rows[0]["extra"], "x");
    }

    #[test]
    fn test_rename_keeps_existing_target() {
        let mut table = sample();
        table.rename_column("a", "b");
        assert_eq!(table.columns(), ["a", "b"]);
    }

    #[test]
    fn test_set_column_overwrites() {
        let mut table = sample();
        table.set_column("b", "fixed");
        assert!(table.records().all(|r| r["b"] == "fixed"));
    }

    #[test]
    fn test_drop_columns_with_prefix() {
        let mut table = RawTable::from_rows(
            vec!["Unnamed: 0".into(), "keep".into()],
            vec![vec!["x".into(), "y".into()]],
        );
        table.drop_columns_with_prefix("Unnamed");
        assert_eq!(table.columns(), ["keep"]);
        assert_eq!(table.records().next().unwrap()["keep"], "y");
    }
}
