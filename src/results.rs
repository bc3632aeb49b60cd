use std::collections::HashMap;
use std::sync::Arc;

use crate::types::RowValues;

/// A single row from a query result, with access to both column names and
/// values. Column names are shared across all rows of one result set.
#[derive(Debug, Clone)]
pub struct CqlRow {
    /// The column names for this row (shared across the result set)
    pub column_names: Arc<Vec<String>>,
    /// The values for this row, in column order
    pub values: Vec<RowValues>,
    // Cache of column name to index, to avoid repeated string scans
    #[doc(hidden)]
    column_index_cache: Arc<HashMap<String, usize>>,
}

impl CqlRow {
    #[must_use]
    pub fn new(column_names: Arc<Vec<String>>, values: Vec<RowValues>) -> Self {
        let cache = Arc::new(
            column_names
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), i))
                .collect::<HashMap<_, _>>(),
        );

        Self {
            column_names,
            values,
            column_index_cache: cache,
        }
    }

    /// Get the index of a column by name.
    #[must_use]
    pub fn get_column_index(&self, column_name: &str) -> Option<usize> {
        if let Some(&idx) = self.column_index_cache.get(column_name) {
            return Some(idx);
        }

        self.column_names.iter().position(|col| col == column_name)
    }

    /// Get a value by column name, or None if the column is absent.
    #[must_use]
    pub fn get(&self, column_name: &str) -> Option<&RowValues> {
        self.get_column_index(column_name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Get a value by column index.
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&RowValues> {
        self.values.get(index)
    }
}

/// The rows returned by a query, in the order the driver produced them.
///
/// A zero-row result set is a normal, successful value here; only
/// [`crate::client::CqlClient::find_by_id`] treats it as a failure.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    /// The rows returned by the query
    pub rows: Vec<CqlRow>,
    // Column names shared by all rows (avoids duplicating per row)
    column_names: Option<Arc<Vec<String>>>,
}

impl ResultSet {
    /// Create a result set with a known row capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> ResultSet {
        ResultSet {
            rows: Vec::with_capacity(capacity),
            column_names: None,
        }
    }

    /// Number of rows in the result set.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Set the column names shared by all rows of this result set.
    pub fn set_column_names(&mut self, column_names: Arc<Vec<String>>) {
        self.column_names = Some(column_names);
    }

    #[must_use]
    pub fn get_column_names(&self) -> Option<&Arc<Vec<String>>> {
        self.column_names.as_ref()
    }

    /// Append a row built from values in column order. Requires
    /// `set_column_names` to have been called first; values are dropped
    /// otherwise.
    pub fn add_row_values(&mut self, values: Vec<RowValues>) {
        if let Some(column_names) = &self.column_names {
            let row = CqlRow::new(column_names.clone(), values);
            self.rows.push(row);
        }
    }

    /// Append an already-built row. If column names haven't been set yet,
    /// adopts the ones from this row.
    pub fn add_row(&mut self, row: CqlRow) {
        if self.column_names.is_none() {
            self.column_names = Some(row.column_names.clone());
        }

        self.rows.push(row);
    }

    /// Consume the result set, yielding the first row if any.
    #[must_use]
    pub fn into_first_row(self) -> Option<CqlRow> {
        self.rows.into_iter().next()
    }
}
