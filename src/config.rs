use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Connection configuration recognized by [`acquire_connection`].
///
/// [`acquire_connection`]: crate::adapter::acquire_connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteConfig {
    /// Path of the database file (or `:memory:`)
    pub filename: PathBuf,
    /// Open the database read-only
    pub read_only: bool,
    /// Default integer-width mode for the connection. `None` keeps the
    /// driver's own default; `Some(true)` makes every statement return
    /// precision-preserving 64-bit integers unless overridden per request.
    pub wide_integers: Option<bool>,
}

impl SqliteConfig {
    #[must_use]
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            read_only: false,
            wide_integers: None,
        }
    }

    #[must_use]
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    #[must_use]
    pub fn wide_integers(mut self, wide: bool) -> Self {
        self.wide_integers = Some(wide);
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.filename
    }
}
