use std::sync::Arc;

use crate::driver::RunOutcome;
use crate::error::SqliteCompatError;
use crate::results::RowSet;
use crate::types::Value;

use super::connection::{SharedConnection, run_blocking};
use super::values::{bind_value, collect_rows, result_column_names};

/// Everything a compiled statement handle carries: the shared connection,
/// the SQL text, the column count recorded at compile time, and the
/// row-shaping modes inherited from the connection.
///
/// The compiled form itself lives in rusqlite's statement cache keyed by the
/// SQL text, so execution re-fetches it instead of holding a borrow of the
/// connection across awaits.
pub(crate) struct StatementParts {
    conn: SharedConnection,
    sql: Arc<String>,
    column_count: usize,
    wide: bool,
    expand_columns: bool,
}

impl StatementParts {
    pub(crate) fn new(
        conn: SharedConnection,
        sql: Arc<String>,
        column_count: usize,
        wide: bool,
        expand_columns: bool,
    ) -> Self {
        Self {
            conn,
            sql,
            column_count,
            wide,
            expand_columns,
        }
    }

    pub(crate) fn column_count(&self) -> usize {
        self.column_count
    }

    pub(crate) fn set_wide(&mut self, wide: bool) {
        self.wide = wide;
    }

    /// Fetch all rows, collection convention: the whole ordered collection
    /// is handed to the execute call at once.
    pub(crate) async fn query_with_collection(
        &self,
        values: Vec<Value>,
    ) -> Result<RowSet, SqliteCompatError> {
        let sql = Arc::clone(&self.sql);
        let wide = self.wide;
        let expand = self.expand_columns;
        let converted: Vec<rusqlite::types::Value> = values.iter().map(bind_value).collect();
        run_blocking(Arc::clone(&self.conn), move |guard| {
            let mut stmt = guard.prepare_cached(&sql)?;
            let names = result_column_names(&stmt, expand);
            let mut rows = stmt.query(rusqlite::params_from_iter(converted))?;
            collect_rows(&mut rows, names, wide)
        })
        .await
    }

    /// Run to completion, collection convention.
    pub(crate) async fn run_with_collection(
        &self,
        values: Vec<Value>,
    ) -> Result<RunOutcome, SqliteCompatError> {
        let sql = Arc::clone(&self.sql);
        let converted: Vec<rusqlite::types::Value> = values.iter().map(bind_value).collect();
        run_blocking(Arc::clone(&self.conn), move |guard| {
            let mut stmt = guard.prepare_cached(&sql)?;
            let changes = stmt.execute(rusqlite::params_from_iter(converted))?;
            Ok(RunOutcome {
                last_insert_rowid: guard.last_insert_rowid(),
                changes,
            })
        })
        .await
    }

    /// Fetch all rows, positional convention: each value is bound separately
    /// at its 1-based ordinal before the statement steps.
    pub(crate) async fn query_with_spread(
        &self,
        pairs: Vec<(usize, Value)>,
    ) -> Result<RowSet, SqliteCompatError> {
        let sql = Arc::clone(&self.sql);
        let wide = self.wide;
        let expand = self.expand_columns;
        let converted: Vec<(usize, rusqlite::types::Value)> = pairs
            .iter()
            .map(|(ordinal, value)| (*ordinal, bind_value(value)))
            .collect();
        run_blocking(Arc::clone(&self.conn), move |guard| {
            let mut stmt = guard.prepare_cached(&sql)?;
            let names = result_column_names(&stmt, expand);
            for (ordinal, value) in &converted {
                stmt.raw_bind_parameter(*ordinal, value)?;
            }
            let mut rows = stmt.raw_query();
            collect_rows(&mut rows, names, wide)
        })
        .await
    }

    /// Run to completion, positional convention.
    pub(crate) async fn run_with_spread(
        &self,
        pairs: Vec<(usize, Value)>,
    ) -> Result<RunOutcome, SqliteCompatError> {
        let sql = Arc::clone(&self.sql);
        let converted: Vec<(usize, rusqlite::types::Value)> = pairs
            .iter()
            .map(|(ordinal, value)| (*ordinal, bind_value(value)))
            .collect();
        run_blocking(Arc::clone(&self.conn), move |guard| {
            let mut stmt = guard.prepare_cached(&sql)?;
            for (ordinal, value) in &converted {
                stmt.raw_bind_parameter(*ordinal, value)?;
            }
            let changes = stmt.raw_execute()?;
            Ok(RunOutcome {
                last_insert_rowid: guard.last_insert_rowid(),
                changes,
            })
        })
        .await
    }
}
