//! Search and column filtering over a tabular listing.
//!
//! Neither operation mutates the table; both return the rows that stay
//! visible, in their original order.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("column {column} is out of range (table has {columns} columns)")]
    ColumnOutOfRange { column: usize, columns: usize },
    #[error("unknown column '{0}'")]
    UnknownColumn(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Case-insensitive index lookup by header name.
    pub fn column_index(&self, name: &str) -> Result<usize, TableError> {
        self.columns
            .iter()
            .position(|column| column.eq_ignore_ascii_case(name))
            .ok_or_else(|| TableError::UnknownColumn(name.to_string()))
    }

    /// Rows whose text contains `text`, ignoring case.
    ///
    /// The cells of a row are matched as one concatenated string, so a
    /// query may span adjacent cells. An empty query matches every row.
    pub fn search(&self, text: &str) -> Vec<&[String]> {
        let needle = text.to_lowercase();
        self.rows
            .iter()
            .filter(|row| row.concat().to_lowercase().contains(&needle))
            .map(Vec::as_slice)
            .collect()
    }

    /// Rows whose cell at `column` equals `value` exactly.
    /// An empty `value` matches every row.
    pub fn filter(&self, column: usize, value: &str) -> Result<Vec<&[String]>, TableError> {
        if column >= self.columns.len() {
            return Err(TableError::ColumnOutOfRange {
                column,
                columns: self.columns.len(),
            });
        }

        Ok(self
            .rows
            .iter()
            .filter(|row| value.is_empty() || row.get(column).is_some_and(|cell| cell == value))
            .map(Vec::as_slice)
            .collect())
    }

    /// Applies a search and an optional column filter together.
    pub fn query(
        &self,
        search: Option<&str>,
        filter: Option<(usize, &str)>,
    ) -> Result<Vec<&[String]>, TableError> {
        let filtered = match filter {
            Some((column, value)) => self.filter(column, value)?,
            None => self.rows.iter().map(Vec::as_slice).collect(),
        };

        let needle = search.unwrap_or_default().to_lowercase();
        Ok(filtered
            .into_iter()
            .filter(|row| row.concat().to_lowercase().contains(&needle))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let row = |cells: &[&str]| cells.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        Table::new(
            row(&["Name", "Role", "Status"]),
            vec![
                row(&["Maria Santos", "Admin", "Active"]),
                row(&["Juan Cruz", "Cashier", "Active"]),
                row(&["Ana Reyes", "Cashier", "Inactive"]),
            ],
        )
    }

    fn first_cells(rows: &[&[String]]) -> Vec<String> {
        rows.iter().map(|row| row[0].clone()).collect()
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let table = sample();
        assert_eq!(first_cells(&table.search("CRUZ")), vec!["Juan Cruz"]);
        assert_eq!(first_cells(&table.search("cashier")), vec!["Juan Cruz", "Ana Reyes"]);
        assert!(table.search("nobody").is_empty());
    }

    #[test]
    fn empty_search_shows_everything() {
        assert_eq!(sample().search("").len(), 3);
    }

    #[test]
    fn filter_matches_exact_cell_text() {
        let table = sample();
        let active = table.filter(2, "Active").unwrap();
        assert_eq!(first_cells(&active), vec!["Maria Santos", "Juan Cruz"]);

        // exact: "Inactive" contains "active" but must not match
        assert_eq!(table.filter(2, "active").unwrap().len(), 0);
        assert_eq!(table.filter(2, "").unwrap().len(), 3);
    }

    #[test]
    fn filter_rejects_missing_column() {
        assert_eq!(
            sample().filter(7, "x"),
            Err(TableError::ColumnOutOfRange { column: 7, columns: 3 })
        );
    }

    #[test]
    fn query_combines_search_and_filter() {
        let table = sample();
        let role = table.column_index("role").unwrap();
        let rows = table.query(Some("reyes"), Some((role, "Cashier"))).unwrap();
        assert_eq!(first_cells(&rows), vec!["Ana Reyes"]);

        assert!(matches!(
            table.column_index("email"),
            Err(TableError::UnknownColumn(_))
        ));
    }
}
