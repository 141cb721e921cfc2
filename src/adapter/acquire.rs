use std::path::{Path, PathBuf};

use crate::config::SqliteConfig;
use crate::driver::{BindingConvention, DriverConnection, SqliteDriver};
use crate::error::SqliteCompatError;
use crate::results::RowSet;
use crate::types::Value;

use super::statement::PreparedStatement;
use super::wide_int::WideIntegerBridge;

/// Open a session through `driver` and return the enhanced handle the
/// execution contract runs against.
///
/// The driver's capability report is probed here, exactly once: the binding
/// convention and the integer-width bridge recorded on the handle are never
/// re-probed per call. Open failures propagate the driver's native error
/// unchanged.
///
/// # Errors
/// Whatever the driver's open operation fails with.
pub async fn acquire_connection(
    driver: &dyn SqliteDriver,
    config: SqliteConfig,
) -> Result<ConnectionHandle, SqliteCompatError> {
    let conn = driver.open(&config).await?;
    let capabilities = conn.capabilities();
    let wide_bridge = WideIntegerBridge::probe(&capabilities);

    tracing::debug!(
        path = %config.filename.display(),
        read_only = config.read_only,
        convention = ?capabilities.binding_convention,
        wide_integer_bridge = ?wide_bridge,
        "acquired sqlite connection"
    );

    Ok(ConnectionHandle {
        conn: Some(conn),
        path: config.filename,
        read_only: config.read_only,
        convention: capabilities.binding_convention,
        wide_bridge,
    })
}

/// One open database session, exclusively owned by the caller that acquired
/// it.
///
/// The handle owns the boxed driver connection plus the two facts probed at
/// acquisition (binding convention, integer-width bridge). Statement
/// preparation is wrapped so every [`PreparedStatement`] carries its
/// is-reader attribute; the enhancement operations (`pragma`, the
/// transaction trio, `pluck`, `raw_exec`, `expand`) pass through to the
/// driver untouched. The handle is closed only by an explicit [`close`]
/// call, never implicitly.
///
/// [`close`]: ConnectionHandle::close
pub struct ConnectionHandle {
    conn: Option<Box<dyn DriverConnection>>,
    path: PathBuf,
    read_only: bool,
    convention: BindingConvention,
    wide_bridge: WideIntegerBridge,
}

impl ConnectionHandle {
    pub(crate) fn conn_mut(
        &mut self,
    ) -> Result<&mut Box<dyn DriverConnection>, SqliteCompatError> {
        self.conn
            .as_mut()
            .ok_or_else(|| SqliteCompatError::InvalidRequest("connection is closed".into()))
    }

    pub(crate) fn convention(&self) -> BindingConvention {
        self.convention
    }

    pub(crate) fn wide_bridge(&self) -> WideIntegerBridge {
        self.wide_bridge
    }

    /// Whether the handle still owns its connection.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn read_only(&self) -> bool {
        self.read_only
    }

    /// Compile `sql` and wrap it with its reader/writer classification. All
    /// other preparation behavior is the driver's, unchanged.
    ///
    /// # Errors
    /// Compilation failures propagate the driver's native error unchanged.
    pub async fn prepare(&mut self, sql: &str) -> Result<PreparedStatement, SqliteCompatError> {
        let stmt = self.conn_mut()?.prepare(sql).await?;
        Ok(PreparedStatement::new(stmt))
    }

    /// Execute a request against this connection. See
    /// [`execute()`](crate::adapter::execute()).
    ///
    /// # Errors
    /// `InvalidRequest` for an empty SQL text or a closed handle; driver
    /// failures propagate unchanged.
    pub async fn execute(
        &mut self,
        request: &crate::request::ExecutionRequest,
    ) -> Result<crate::results::ExecutionResult, SqliteCompatError> {
        super::execute::execute(self, request).await
    }

    /// Run a `PRAGMA` body, passed through to the driver.
    ///
    /// # Errors
    /// Driver failures propagate unchanged.
    pub async fn pragma(&mut self, pragma: &str) -> Result<RowSet, SqliteCompatError> {
        self.conn_mut()?.pragma(pragma).await
    }

    /// Begin a transaction on the driver connection.
    ///
    /// # Errors
    /// Driver failures propagate unchanged.
    pub async fn begin_transaction(&mut self) -> Result<(), SqliteCompatError> {
        self.conn_mut()?.begin().await
    }

    /// Commit the open transaction.
    ///
    /// # Errors
    /// Driver failures propagate unchanged.
    pub async fn commit(&mut self) -> Result<(), SqliteCompatError> {
        self.conn_mut()?.commit().await
    }

    /// Roll back the open transaction.
    ///
    /// # Errors
    /// Driver failures propagate unchanged.
    pub async fn rollback(&mut self) -> Result<(), SqliteCompatError> {
        self.conn_mut()?.rollback().await
    }

    /// Run a query and return only the first column of its first row.
    ///
    /// # Errors
    /// Driver failures propagate unchanged.
    pub async fn pluck(
        &mut self,
        sql: &str,
        bindings: &[Value],
    ) -> Result<Option<Value>, SqliteCompatError> {
        self.conn_mut()?.pluck(sql, bindings).await
    }

    /// Execute a batch of semicolon-separated statements, no bindings.
    ///
    /// # Errors
    /// Driver failures propagate unchanged.
    pub async fn raw_exec(&mut self, sql: &str) -> Result<(), SqliteCompatError> {
        self.conn_mut()?.raw_exec(sql).await
    }

    /// Toggle the driver's expanded result-column naming.
    ///
    /// # Errors
    /// `InvalidRequest` if the handle is closed.
    pub fn expand(&mut self, on: bool) -> Result<(), SqliteCompatError> {
        self.conn_mut()?.expand(on);
        Ok(())
    }

    /// Close the session. Idempotent; subsequent operations on the handle
    /// fail with `InvalidRequest`.
    ///
    /// # Errors
    /// Driver failures while closing propagate unchanged.
    pub async fn close(&mut self) -> Result<(), SqliteCompatError> {
        if let Some(mut conn) = self.conn.take() {
            conn.close().await?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for ConnectionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionHandle")
            .field("path", &self.path)
            .field("read_only", &self.read_only)
            .field("open", &self.conn.is_some())
            .field("convention", &self.convention)
            .field("wide_bridge", &self.wide_bridge)
            .finish()
    }
}
