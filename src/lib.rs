//! Compatibility layer between a generic SQLite query contract and drivers
//! with divergent native surfaces.
//!
//! A caller hands over `{sql, bindings, options}` and gets back either an
//! ordered sequence of row mappings or a mutation summary. In between, the
//! adapter bridges the three points where real driver surfaces differ:
//! whether a prepared statement returns rows (decided by result-column
//! count, never by SQL text), which calling convention bindings travel in
//! (one ordered collection vs. separate positional binds), and which of two
//! names the 64-bit integer-width toggle is published under.
//!
//! ```rust,no_run
//! use sqlite_compat::prelude::*;
//!
//! # async fn demo() -> Result<(), SqliteCompatError> {
//! let driver = CollectionDriver;
//! let mut conn = acquire_connection(&driver, SqliteConfig::new("app.db")).await?;
//!
//! let insert = ExecutionRequest::new(
//!     "INSERT INTO users(name) VALUES (?1)",
//!     vec![Value::Text("alice".into())],
//! );
//! let summary = conn.execute(&insert).await?;
//! # let _ = summary;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod config;
pub mod driver;
pub mod error;
pub mod native;
pub mod prelude;
pub mod request;
pub mod results;
pub mod types;

pub use adapter::{
    ConnectionHandle, PreparedStatement, acquire_connection, execute, spread_bindings,
};
pub use config::SqliteConfig;
pub use error::SqliteCompatError;
pub use native::{CollectionDriver, PositionalDriver};
pub use request::{ExecOptions, ExecutionRequest};
pub use results::{ExecutionResult, MutationSummary, Row, RowSet};
pub use types::Value;
