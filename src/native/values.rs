use std::collections::HashMap;
use std::sync::Arc;

use crate::error::SqliteCompatError;
use crate::results::RowSet;
use crate::types::Value;

/// Convert a canonical binding into a rusqlite value.
pub(crate) fn bind_value(value: &Value) -> rusqlite::types::Value {
    match value {
        Value::Integer(i) => rusqlite::types::Value::Integer(*i),
        Value::Number(f) => rusqlite::types::Value::Real(*f),
        Value::Text(s) => rusqlite::types::Value::Text(s.clone()),
        Value::Bool(b) => rusqlite::types::Value::Integer(i64::from(*b)),
        Value::Timestamp(dt) => {
            rusqlite::types::Value::Text(dt.format("%F %T%.f").to_string())
        }
        Value::Json(jval) => rusqlite::types::Value::Text(jval.to_string()),
        Value::Blob(bytes) => rusqlite::types::Value::Blob(bytes.clone()),
        Value::Null => rusqlite::types::Value::Null,
    }
}

/// Convert a column value coming out of the engine. Integer columns surface
/// as precision-preserving `Integer` in wide mode and as the driver-native
/// `Number` representation otherwise; everything else is mode-independent.
pub(crate) fn column_value(value: rusqlite::types::Value, wide: bool) -> Value {
    match value {
        rusqlite::types::Value::Null => Value::Null,
        rusqlite::types::Value::Integer(i) => {
            if wide {
                Value::Integer(i)
            } else {
                Value::Number(i as f64)
            }
        }
        rusqlite::types::Value::Real(f) => Value::Number(f),
        rusqlite::types::Value::Text(s) => Value::Text(s),
        rusqlite::types::Value::Blob(b) => Value::Blob(b),
    }
}

/// Result-column names for a compiled statement. With expanded naming on,
/// repeated names are disambiguated so joined columns stay addressable.
pub(crate) fn result_column_names(stmt: &rusqlite::Statement<'_>, expand: bool) -> Vec<String> {
    let names: Vec<String> = stmt
        .column_names()
        .iter()
        .map(std::string::ToString::to_string)
        .collect();
    if expand { disambiguate(names) } else { names }
}

fn disambiguate(names: Vec<String>) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    names
        .into_iter()
        .map(|name| {
            let count = seen.entry(name.clone()).or_insert(0);
            *count += 1;
            if *count == 1 {
                name
            } else {
                format!("{name}:{}", *count - 1)
            }
        })
        .collect()
}

/// Materialize a rusqlite row cursor into a [`RowSet`].
pub(crate) fn collect_rows(
    rows: &mut rusqlite::Rows<'_>,
    column_names: Vec<String>,
    wide: bool,
) -> Result<RowSet, SqliteCompatError> {
    let column_count = column_names.len();
    let mut set = RowSet::new(Arc::new(column_names));
    while let Some(row) = rows.next()? {
        let mut values = Vec::with_capacity(column_count);
        for idx in 0..column_count {
            let raw: rusqlite::types::Value = row.get(idx)?;
            values.push(column_value(raw, wide));
        }
        set.add_row(values);
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use serde_json::json;

    #[test]
    fn bindings_map_to_sqlite_storage_classes() {
        assert_eq!(
            bind_value(&Value::Integer(42)),
            rusqlite::types::Value::Integer(42)
        );
        assert_eq!(
            bind_value(&Value::Number(1.5)),
            rusqlite::types::Value::Real(1.5)
        );
        assert_eq!(
            bind_value(&Value::Bool(true)),
            rusqlite::types::Value::Integer(1)
        );
        assert_eq!(bind_value(&Value::Null), rusqlite::types::Value::Null);
        assert_eq!(
            bind_value(&Value::Json(json!({"k": 1}))),
            rusqlite::types::Value::Text(r#"{"k":1}"#.to_string())
        );

        let dt =
            NaiveDateTime::parse_from_str("2024-01-01 08:00:01", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(
            bind_value(&Value::Timestamp(dt)),
            rusqlite::types::Value::Text("2024-01-01 08:00:01".to_string())
        );
    }

    #[test]
    fn integer_columns_follow_the_width_mode() {
        let wide = column_value(rusqlite::types::Value::Integer(9_007_199_254_740_993), true);
        assert_eq!(wide, Value::Integer(9_007_199_254_740_993));

        let narrow = column_value(rusqlite::types::Value::Integer(7), false);
        assert_eq!(narrow, Value::Number(7.0));

        // Reals are mode-independent.
        assert_eq!(
            column_value(rusqlite::types::Value::Real(2.5), true),
            Value::Number(2.5)
        );
    }

    #[test]
    fn expanded_naming_disambiguates_duplicates() {
        let names = vec!["id".to_string(), "name".to_string(), "id".to_string()];
        assert_eq!(
            disambiguate(names),
            vec!["id".to_string(), "name".to_string(), "id:1".to_string()]
        );
    }
}
