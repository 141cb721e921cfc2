use chrono::NaiveDateTime;
use serde_json::Value as JsonValue;

/// Canonical value for query bindings and result columns.
///
/// One enum on both sides of the adapter, so callers never touch driver
/// types:
/// ```rust
/// use sqlite_compat::prelude::*;
///
/// let bindings = vec![
///     Value::Integer(1),
///     Value::Text("alice".into()),
///     Value::Bool(true),
/// ];
/// # let _ = bindings;
/// ```
///
/// Integer columns come back as either [`Value::Integer`] (wide mode, full
/// 64-bit precision) or [`Value::Number`] (the driver's default numeric
/// representation, lossy above 2^53) depending on the integer-width mode in
/// effect for the statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit integer, precision-preserving
    Integer(i64),
    /// Driver-native numeric value (64-bit float)
    Number(f64),
    /// Text/string value
    Text(String),
    /// Boolean value, bound as 0/1
    Bool(bool),
    /// Timestamp value, bound as formatted text
    Timestamp(NaiveDateTime),
    /// JSON value, bound as serialized text
    Json(JsonValue),
    /// Binary data
    Blob(Vec<u8>),
    /// NULL value
    Null,
}

impl Value {
    /// Check if this value is NULL
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        if let Value::Number(value) = self {
            Some(*value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let Value::Text(value) = self {
            Some(value)
        } else {
            None
        }
    }

    /// Booleans stored by the driver come back as 0/1 integers; accept both
    /// representations here.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            Value::Integer(1) => Some(true),
            Value::Integer(0) => Some(false),
            _ => None,
        }
    }

    /// Timestamps round-trip through text; parse the formats the drivers
    /// emit.
    #[must_use]
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        if let Value::Timestamp(value) = self {
            return Some(*value);
        } else if let Some(s) = self.as_text() {
            // Try "YYYY-MM-DD HH:MM:SS"
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
                return Some(dt);
            }
            // Try "YYYY-MM-DD HH:MM:SS.SSS"
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S.%3f") {
                return Some(dt);
            }
        }
        None
    }

    #[must_use]
    pub fn as_blob(&self) -> Option<&[u8]> {
        if let Value::Blob(bytes) = self {
            Some(bytes)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_accessor_accepts_integer_storage() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Integer(1).as_bool(), Some(true));
        assert_eq!(Value::Integer(0).as_bool(), Some(false));
        assert_eq!(Value::Integer(7).as_bool(), None);
        assert_eq!(Value::Text("true".into()).as_bool(), None);
    }

    #[test]
    fn timestamp_accessor_parses_driver_text() {
        let dt = Value::Text("2024-01-01 08:00:01".into());
        assert_eq!(
            dt.as_timestamp(),
            NaiveDateTime::parse_from_str("2024-01-01 08:00:01", "%Y-%m-%d %H:%M:%S").ok()
        );
        assert!(Value::Text("not a date".into()).as_timestamp().is_none());
    }
}
