//! Convenient imports for common functionality.
//!
//! This module re-exports the most commonly used types and functions
//! to make it easier to get started with the library.

pub use crate::adapter::{
    ConnectionHandle, PreparedStatement, acquire_connection, execute, spread_bindings,
};
pub use crate::config::SqliteConfig;
pub use crate::driver::{
    BindingArgs, BindingConvention, DriverCapabilities, DriverConnection, DriverStatement,
    RunOutcome, SqliteDriver, WideIntegerStyle,
};
pub use crate::error::SqliteCompatError;
pub use crate::native::{CollectionDriver, PositionalDriver};
pub use crate::request::{ExecOptions, ExecutionRequest};
pub use crate::results::{ExecutionResult, MutationSummary, Row, RowSet};
pub use crate::types::Value;
