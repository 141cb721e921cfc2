use std::sync::Arc;

use rusqlite::OpenFlags;
use tokio::sync::Mutex;

use crate::config::SqliteConfig;
use crate::error::SqliteCompatError;
use crate::results::RowSet;
use crate::types::Value;

use super::statement::StatementParts;
use super::values::{bind_value, column_value};

pub(crate) type SharedConnection = Arc<Mutex<rusqlite::Connection>>;

pub(crate) async fn run_blocking<F, R>(
    conn: SharedConnection,
    func: F,
) -> Result<R, SqliteCompatError>
where
    F: FnOnce(&mut rusqlite::Connection) -> Result<R, SqliteCompatError> + Send + 'static,
    R: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut guard = conn.blocking_lock();
        func(&mut guard)
    })
    .await
    .map_err(|e| {
        SqliteCompatError::ConnectionError(format!("sqlite spawn_blocking join error: {e}"))
    })?
}

/// Connection core shared by both rusqlite front-ends: the open session,
/// the transaction state, and the connection-level defaults statements
/// inherit at compile time.
pub(crate) struct NativeConnection {
    conn: Option<SharedConnection>,
    in_transaction: bool,
    expand_columns: bool,
    default_wide: bool,
}

impl NativeConnection {
    /// Open the database file. Open failures carry rusqlite's native error
    /// unchanged.
    pub(crate) async fn open(config: &SqliteConfig) -> Result<Self, SqliteCompatError> {
        let path = config.filename.clone();
        let read_only = config.read_only;
        let conn = tokio::task::spawn_blocking(move || {
            let flags = if read_only {
                OpenFlags::SQLITE_OPEN_READ_ONLY
                    | OpenFlags::SQLITE_OPEN_URI
                    | OpenFlags::SQLITE_OPEN_NO_MUTEX
            } else {
                OpenFlags::SQLITE_OPEN_READ_WRITE
                    | OpenFlags::SQLITE_OPEN_CREATE
                    | OpenFlags::SQLITE_OPEN_URI
                    | OpenFlags::SQLITE_OPEN_NO_MUTEX
            };
            rusqlite::Connection::open_with_flags(path, flags)
        })
        .await
        .map_err(|e| {
            SqliteCompatError::ConnectionError(format!("sqlite spawn_blocking join error: {e}"))
        })??;

        Ok(Self {
            conn: Some(Arc::new(Mutex::new(conn))),
            in_transaction: false,
            expand_columns: false,
            default_wide: config.wide_integers.unwrap_or(false),
        })
    }

    fn shared(&self) -> Result<SharedConnection, SqliteCompatError> {
        self.conn
            .as_ref()
            .map(Arc::clone)
            .ok_or_else(|| SqliteCompatError::ConnectionError("connection is closed".into()))
    }

    /// Compile `sql`, recording its result-column count, and hand back the
    /// pieces a statement handle needs. The compiled form stays in
    /// rusqlite's statement cache; execution re-fetches it from there.
    pub(crate) async fn compile(&self, sql: &str) -> Result<StatementParts, SqliteCompatError> {
        let shared = self.shared()?;
        let sql = Arc::new(sql.to_owned());
        let sql_for_prepare = Arc::clone(&sql);
        let column_count = run_blocking(Arc::clone(&shared), move |guard| {
            let stmt = guard.prepare_cached(&sql_for_prepare)?;
            Ok(stmt.column_count())
        })
        .await?;

        Ok(StatementParts::new(
            shared,
            sql,
            column_count,
            self.default_wide,
            self.expand_columns,
        ))
    }

    /// Run a `PRAGMA` body. Classified by result-column count like any other
    /// statement: query pragmas yield rows, assignment pragmas that report
    /// nothing yield an empty set.
    pub(crate) async fn pragma(&self, pragma: &str) -> Result<RowSet, SqliteCompatError> {
        let parts = self.compile(&format!("PRAGMA {pragma}")).await?;
        if parts.column_count() > 0 {
            parts.query_with_collection(Vec::new()).await
        } else {
            parts.run_with_collection(Vec::new()).await?;
            Ok(RowSet::new(Arc::new(Vec::new())))
        }
    }

    pub(crate) async fn begin(&mut self) -> Result<(), SqliteCompatError> {
        if self.in_transaction {
            return Err(SqliteCompatError::ExecutionError(
                "SQLite transaction already in progress".into(),
            ));
        }
        run_blocking(self.shared()?, |guard| Ok(guard.execute_batch("BEGIN")?)).await?;
        self.in_transaction = true;
        Ok(())
    }

    pub(crate) async fn commit(&mut self) -> Result<(), SqliteCompatError> {
        if !self.in_transaction {
            return Err(SqliteCompatError::ExecutionError(
                "SQLite transaction not active".into(),
            ));
        }
        run_blocking(self.shared()?, |guard| Ok(guard.execute_batch("COMMIT")?)).await?;
        self.in_transaction = false;
        Ok(())
    }

    pub(crate) async fn rollback(&mut self) -> Result<(), SqliteCompatError> {
        if !self.in_transaction {
            return Err(SqliteCompatError::ExecutionError(
                "SQLite transaction not active".into(),
            ));
        }
        run_blocking(self.shared()?, |guard| Ok(guard.execute_batch("ROLLBACK")?)).await?;
        self.in_transaction = false;
        Ok(())
    }

    /// First column of the first row, or `None` for an empty result.
    pub(crate) async fn pluck(
        &self,
        sql: &str,
        bindings: &[Value],
    ) -> Result<Option<Value>, SqliteCompatError> {
        let sql_owned = sql.to_owned();
        let converted: Vec<rusqlite::types::Value> = bindings.iter().map(bind_value).collect();
        let wide = self.default_wide;
        run_blocking(self.shared()?, move |guard| {
            let mut stmt = guard.prepare_cached(&sql_owned)?;
            let mut rows = stmt.query(rusqlite::params_from_iter(converted))?;
            match rows.next()? {
                Some(row) => {
                    let raw: rusqlite::types::Value = row.get(0)?;
                    Ok(Some(column_value(raw, wide)))
                }
                None => Ok(None),
            }
        })
        .await
    }

    pub(crate) async fn raw_exec(&self, sql: &str) -> Result<(), SqliteCompatError> {
        let sql_owned = sql.to_owned();
        run_blocking(self.shared()?, move |guard| {
            Ok(guard.execute_batch(&sql_owned)?)
        })
        .await
    }

    pub(crate) fn expand(&mut self, on: bool) {
        self.expand_columns = on;
    }

    /// Release the session. If statement handles still share the underlying
    /// connection it is dropped when the last of them goes away; otherwise
    /// it is closed here and close failures carry rusqlite's error.
    pub(crate) async fn close(&mut self) -> Result<(), SqliteCompatError> {
        let Some(shared) = self.conn.take() else {
            return Ok(());
        };
        tokio::task::spawn_blocking(move || match Arc::try_unwrap(shared) {
            Ok(mutex) => mutex
                .into_inner()
                .close()
                .map_err(|(_conn, e)| SqliteCompatError::SqliteError(e)),
            Err(_still_shared) => Ok(()),
        })
        .await
        .map_err(|e| {
            SqliteCompatError::ConnectionError(format!("sqlite spawn_blocking join error: {e}"))
        })?
    }
}
