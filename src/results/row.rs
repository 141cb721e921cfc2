use std::collections::HashMap;
use std::sync::Arc;

use crate::types::Value;

/// One row of a reader result.
///
/// Column names and the name-to-index map are shared across every row of the
/// owning [`RowSet`](super::RowSet), so a row is two `Arc` clones plus its
/// values.
#[derive(Debug, Clone)]
pub struct Row {
    pub(crate) column_names: Arc<Vec<String>>,
    pub(crate) values: Vec<Value>,
    pub(crate) column_index: Arc<HashMap<String, usize>>,
}

impl Row {
    /// Get a value by column name, or `None` if the column does not exist.
    #[must_use]
    pub fn get(&self, column_name: &str) -> Option<&Value> {
        self.column_index
            .get(column_name)
            .and_then(|&idx| self.values.get(idx))
    }

    /// Get a value by positional index, or `None` if out of bounds.
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// The column names, in result order.
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// The values, in result order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
