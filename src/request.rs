use crate::types::Value;

/// A SQL text, its ordered bindings, and per-request execution options,
/// bundled as the unit the adapter executes.
#[derive(Debug, Clone)]
pub struct ExecutionRequest {
    /// The SQL text
    pub sql: String,
    /// The bindings for the statement's positional placeholders, in order
    pub bindings: Vec<Value>,
    /// Per-request execution options
    pub options: ExecOptions,
}

impl ExecutionRequest {
    /// Create a new request with the given SQL text and bindings.
    pub fn new(sql: impl Into<String>, bindings: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            bindings,
            options: ExecOptions::default(),
        }
    }

    /// Create a new request with no bindings.
    pub fn new_without_bindings(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            bindings: Vec::new(),
            options: ExecOptions::default(),
        }
    }

    /// Override the integer-width mode for this request only. Leaving the
    /// option unset keeps the connection's default mode.
    #[must_use]
    pub fn with_wide_integers(mut self, wide: bool) -> Self {
        self.options.wide_integers = Some(wide);
        self
    }
}

/// Execution options recognized per request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecOptions {
    /// `Some(true)` asks the driver for precision-preserving 64-bit integer
    /// results, `Some(false)` for its native numeric representation, `None`
    /// leaves the driver's default mode untouched.
    pub wide_integers: Option<bool>,
}
