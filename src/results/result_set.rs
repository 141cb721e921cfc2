use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use super::row::Row;
use crate::types::Value;

/// An ordered sequence of row mappings from a reader statement.
///
/// Column names are stored once and shared by every row, along with a
/// name-to-index map built a single time at construction.
#[derive(Debug, Clone)]
pub struct RowSet {
    rows: Vec<Row>,
    column_names: Arc<Vec<String>>,
    column_index: Arc<HashMap<String, usize>>,
}

impl RowSet {
    /// Create an empty row set over the given columns.
    #[must_use]
    pub fn new(column_names: Arc<Vec<String>>) -> Self {
        let column_index = Arc::new(
            column_names
                .iter()
                .enumerate()
                .map(|(i, name)| (name.clone(), i))
                .collect::<HashMap<_, _>>(),
        );
        Self {
            rows: Vec::new(),
            column_names,
            column_index,
        }
    }

    /// Append a row; values must be in column order.
    pub fn add_row(&mut self, values: Vec<Value>) {
        self.rows.push(Row {
            column_names: Arc::clone(&self.column_names),
            values,
            column_index: Arc::clone(&self.column_index),
        });
    }

    /// The rows, in result order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The column names, in result order.
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl IntoIterator for RowSet {
    type Item = Row;
    type IntoIter = std::vec::IntoIter<Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

/// Summary of a writer statement's effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MutationSummary {
    /// Rowid of the most recently inserted row on this connection
    pub inserted_row_id: i64,
    /// Number of rows changed by the statement
    pub changed_row_count: usize,
}

/// What `execute` hands back: rows for a reader statement, a mutation
/// summary for a writer statement. The branch is decided by the statement's
/// result-column count, never by its SQL text.
#[derive(Debug, Clone)]
pub enum ExecutionResult {
    Rows(RowSet),
    Mutation(MutationSummary),
}

impl ExecutionResult {
    /// The row payload, or `None` for a mutation result.
    #[must_use]
    pub fn as_rows(&self) -> Option<&RowSet> {
        if let ExecutionResult::Rows(rows) = self {
            Some(rows)
        } else {
            None
        }
    }

    /// The mutation summary, or `None` for a row result.
    #[must_use]
    pub fn as_mutation(&self) -> Option<&MutationSummary> {
        if let ExecutionResult::Mutation(summary) = self {
            Some(summary)
        } else {
            None
        }
    }

    /// Consume the result, keeping the row payload.
    #[must_use]
    pub fn into_rows(self) -> Option<RowSet> {
        if let ExecutionResult::Rows(rows) = self {
            Some(rows)
        } else {
            None
        }
    }
}
