use thiserror::Error;

/// Errors surfaced by the compatibility layer.
///
/// Driver-level failures pass through verbatim: callers see `rusqlite`'s own
/// error type and message text, so assertions written against the driver's
/// wording keep holding with the adapter in between.
#[derive(Debug, Error)]
pub enum SqliteCompatError {
    /// Rejected before any driver call: empty SQL text, or a connection
    /// handle that has already been closed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    SqliteError(#[from] rusqlite::Error),

    /// Driver plumbing failed without a native error value, e.g. a blocking
    /// task could not be joined or the underlying connection is gone.
    #[error("connection error: {0}")]
    ConnectionError(String),

    /// Bindings arrived in a calling convention the statement does not speak.
    /// Indicates a wiring bug between adapter and driver, never a bad query.
    #[error("parameter conversion error: {0}")]
    ParameterError(String),

    #[error("SQL execution error: {0}")]
    ExecutionError(String),
}
