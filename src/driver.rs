//! Capability traits for the underlying SQLite drivers.
//!
//! The adapter consumes drivers through these object-safe traits and never
//! touches a concrete driver type. The traits model the three points where
//! real driver surfaces diverge: how a prepared statement reports its
//! result-column count, which calling convention execution operations take
//! their bindings in, and which of two names the integer-width toggle is
//! published under.

use async_trait::async_trait;

use crate::config::SqliteConfig;
use crate::error::SqliteCompatError;
use crate::results::RowSet;
use crate::types::Value;

/// How a driver's execution operations expect their bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingConvention {
    /// One ordered collection of values per call
    Collection,
    /// Each value bound separately at its 1-based position
    Positional,
}

/// Which name a driver publishes its integer-width toggle under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WideIntegerStyle {
    /// [`DriverStatement::safe_integers`]
    SafeIntegers,
    /// [`DriverStatement::set_read_big_ints`]
    ReadBigInts,
}

/// What a driver connection reports about its native surface. Probed once
/// at acquisition, never re-probed per call.
#[derive(Debug, Clone, Copy)]
pub struct DriverCapabilities {
    pub binding_convention: BindingConvention,
    /// `None` when the driver version has no integer-width toggle at all;
    /// requests asking for one are then silently left on the default mode.
    pub wide_integer_style: Option<WideIntegerStyle>,
}

/// Bindings converted into a driver's calling convention. Order and count
/// always match the canonical binding list exactly.
#[derive(Debug, Clone, PartialEq)]
pub enum BindingArgs {
    Collection(Vec<Value>),
    Spread(Vec<(usize, Value)>),
}

impl BindingArgs {
    /// Number of bindings carried, independent of convention.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            BindingArgs::Collection(values) => values.len(),
            BindingArgs::Spread(pairs) => pairs.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What a driver's run-to-completion operation reports back.
#[derive(Debug, Clone, Copy)]
pub struct RunOutcome {
    /// Rowid of the most recently inserted row on the connection
    pub last_insert_rowid: i64,
    /// Rows changed by the statement
    pub changes: usize,
}

/// Opens database sessions. One implementation per concrete driver.
#[async_trait]
pub trait SqliteDriver: Send + Sync {
    /// Open a connection for `config`. Open failures (bad path, locked
    /// file, permissions) propagate the driver's native error unchanged.
    async fn open(
        &self,
        config: &SqliteConfig,
    ) -> Result<Box<dyn DriverConnection>, SqliteCompatError>;
}

/// One open database session, as the driver exposes it.
///
/// Beyond statement preparation this carries the enhancement operations
/// (`pragma`, the transaction trio, `pluck`, `raw_exec`, `expand`) that the
/// connection handle passes through without interpreting.
#[async_trait]
pub trait DriverConnection: Send {
    fn capabilities(&self) -> DriverCapabilities;

    /// Compile `sql` into a statement. The statement's result-column count
    /// must be available immediately after compilation.
    async fn prepare(&mut self, sql: &str) -> Result<Box<dyn DriverStatement>, SqliteCompatError>;

    /// Run a `PRAGMA` body, e.g. `"user_version"` or `"journal_mode = WAL"`.
    async fn pragma(&mut self, pragma: &str) -> Result<RowSet, SqliteCompatError>;

    async fn begin(&mut self) -> Result<(), SqliteCompatError>;
    async fn commit(&mut self) -> Result<(), SqliteCompatError>;
    async fn rollback(&mut self) -> Result<(), SqliteCompatError>;

    /// Run a query and return only the first column of its first row.
    async fn pluck(
        &mut self,
        sql: &str,
        bindings: &[Value],
    ) -> Result<Option<Value>, SqliteCompatError>;

    /// Execute a batch of semicolon-separated statements, no bindings.
    async fn raw_exec(&mut self, sql: &str) -> Result<(), SqliteCompatError>;

    /// Toggle the driver's expanded result-column naming for statements
    /// prepared afterwards.
    fn expand(&mut self, on: bool);

    /// Close the session. Callers close explicitly; nothing closes a
    /// connection implicitly.
    async fn close(&mut self) -> Result<(), SqliteCompatError>;
}

/// One compiled statement, scoped to the connection that prepared it.
#[async_trait]
pub trait DriverStatement: Send {
    /// Result-column count of the compiled statement. Fixed for a given SQL
    /// text; zero for plain mutations, nonzero for anything that yields rows
    /// (including mutations with a RETURNING clause).
    fn column_count(&self) -> usize;

    /// Fetch every result row. Bindings must arrive in this driver's native
    /// convention.
    async fn fetch_all(&mut self, bindings: BindingArgs) -> Result<RowSet, SqliteCompatError>;

    /// Run the statement to completion and report its mutation outcome.
    /// Bindings must arrive in this driver's native convention.
    async fn run(&mut self, bindings: BindingArgs) -> Result<RunOutcome, SqliteCompatError>;

    /// Integer-width toggle, first recognized name. Drivers that speak it
    /// override this; the default body does nothing.
    fn safe_integers(&mut self, _wide: bool) {}

    /// Integer-width toggle, second recognized name. Drivers that speak it
    /// override this; the default body does nothing.
    fn set_read_big_ints(&mut self, _wide: bool) {}
}
