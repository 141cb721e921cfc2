use crate::driver::{BindingArgs, DriverStatement, RunOutcome};
use crate::error::SqliteCompatError;
use crate::results::RowSet;

/// A driver statement plus the reader/writer classification derived from it.
///
/// The wrapper computes `is_reader` once, immediately after compilation, by
/// introspecting the statement's result-column count. The attribute is
/// exposed read-only; for a given compiled SQL text it never changes across
/// executions with different bindings. Classification is strictly by column
/// count: a zero-column statement is a writer even when its text resembles a
/// SELECT, and a mutation with a RETURNING clause is a reader because
/// RETURNING adds result columns.
pub struct PreparedStatement {
    inner: Box<dyn DriverStatement>,
    is_reader: bool,
}

impl PreparedStatement {
    pub(crate) fn new(inner: Box<dyn DriverStatement>) -> Self {
        let is_reader = inner.column_count() > 0;
        Self { inner, is_reader }
    }

    /// Whether execution yields a result set rather than a change count.
    #[must_use]
    pub fn is_reader(&self) -> bool {
        self.is_reader
    }

    /// Result-column count of the compiled statement.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.inner.column_count()
    }

    pub(crate) fn driver_mut(&mut self) -> &mut dyn DriverStatement {
        self.inner.as_mut()
    }

    /// Fetch every result row. Bindings must already be in the owning
    /// driver's calling convention.
    ///
    /// # Errors
    /// Any driver failure propagates unchanged.
    pub async fn fetch_all(&mut self, bindings: BindingArgs) -> Result<RowSet, SqliteCompatError> {
        self.inner.fetch_all(bindings).await
    }

    /// Run the statement to completion. Bindings must already be in the
    /// owning driver's calling convention.
    ///
    /// # Errors
    /// Any driver failure propagates unchanged.
    pub async fn run(&mut self, bindings: BindingArgs) -> Result<RunOutcome, SqliteCompatError> {
        self.inner.run(bindings).await
    }
}

impl std::fmt::Debug for PreparedStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreparedStatement")
            .field("is_reader", &self.is_reader)
            .field("column_count", &self.inner.column_count())
            .finish()
    }
}
