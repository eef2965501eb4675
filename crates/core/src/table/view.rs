//! Table view rendering

use std::sync::Arc;

use serde::Serialize;
use trackboard_domain::FieldAccess;

use super::column::Column;
use super::sort::{compare_values, SortConfig, SortDirection};

/// Message shown when rendering an empty record set.
pub const NO_DATA_PLACEHOLDER: &str = "No data available";

/// A rendered table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Row {
    /// One record: the extracted key plus one rendered cell per column.
    Data { key: String, cells: Vec<String> },
    /// Empty-state row spanning every column.
    Placeholder { message: String, colspan: usize },
}

/// A rendered header cell. `sort` is set only on the actively sorted column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    pub label: String,
    pub sortable: bool,
    pub sort: Option<SortDirection>,
}

/// Generic table view over records of type `T`.
///
/// Owns the column list, the row-key extractor and the current sort state.
/// Rendering performs no I/O and cannot fail.
pub struct TableView<T> {
    columns: Vec<Column<T>>,
    key_extractor: Arc<dyn Fn(&T) -> String + Send + Sync>,
    sort: Option<SortConfig>,
}

impl<T: FieldAccess> TableView<T> {
    pub fn new(
        columns: Vec<Column<T>>,
        key_extractor: impl Fn(&T) -> String + Send + Sync + 'static,
    ) -> Self {
        Self { columns, key_extractor: Arc::new(key_extractor), sort: None }
    }

    pub fn columns(&self) -> &[Column<T>] {
        &self.columns
    }

    pub fn sort(&self) -> Option<&SortConfig> {
        self.sort.as_ref()
    }

    /// Toggle sorting on a column header.
    ///
    /// First touch sorts ascending; touching the actively ascending column
    /// flips to descending, and touching it again returns to ascending;
    /// once touched, a column never goes back to unsorted. Touching a
    /// different column replaces the previous sort. Columns that are not
    /// sortable (derived, or not opted in) are ignored.
    pub fn toggle_sort(&mut self, column: &str) {
        if !self.is_sortable_column(column) {
            return;
        }

        let direction = match &self.sort {
            Some(current) if current.column == column
                && current.direction == SortDirection::Ascending =>
            {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };

        self.sort = Some(SortConfig { column: column.to_string(), direction });
    }

    /// Set the sort state directly (stateless callers restoring a previous
    /// toggle). Non-sortable columns are ignored, like [`Self::toggle_sort`].
    pub fn set_sort(&mut self, column: &str, direction: SortDirection) {
        if !self.is_sortable_column(column) {
            return;
        }
        self.sort = Some(SortConfig { column: column.to_string(), direction });
    }

    /// Render the header row.
    pub fn header(&self) -> Vec<HeaderCell> {
        self.columns
            .iter()
            .map(|column| HeaderCell {
                label: column.header().to_string(),
                sortable: column.is_sortable(),
                sort: self.sort.as_ref().and_then(|sort| {
                    (column.sort_key() == Some(sort.column.as_str())).then_some(sort.direction)
                }),
            })
            .collect()
    }

    /// Render one row per record in the current sort order.
    ///
    /// Zero records produce exactly one placeholder row spanning every
    /// column.
    pub fn rows(&self, records: &[T]) -> Vec<Row> {
        if records.is_empty() {
            return vec![Row::Placeholder {
                message: NO_DATA_PLACEHOLDER.to_string(),
                colspan: self.columns.len(),
            }];
        }

        let mut ordered: Vec<&T> = records.iter().collect();
        if let Some(sort) = &self.sort {
            ordered.sort_by(|a, b| {
                compare_values(&a.field(&sort.column), &b.field(&sort.column), sort.direction)
            });
        }

        ordered
            .into_iter()
            .map(|record| Row::Data {
                key: (self.key_extractor)(record),
                cells: self.columns.iter().map(|column| column.cell(record)).collect(),
            })
            .collect()
    }

    fn is_sortable_column(&self, column: &str) -> bool {
        self.columns.iter().any(|candidate| candidate.sort_key() == Some(column))
    }
}
