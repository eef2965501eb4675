//! By-name field access for records.
//!
//! `FieldAccess` is the data-binding contract shared by the table view layer
//! (field-accessor columns) and the local collection backend (equality
//! filters, ordering). Field names use the wire form (camelCase), matching
//! the persisted blob and the hosted backend's columns.

use serde_json::Value;

/// A displayable, comparable value extracted from a record field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    /// The field is null, empty-optional, or unknown for this record.
    Absent,
}

impl FieldValue {
    /// Convert a JSON value into a field value. Nulls map to `Absent`.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s.clone()),
            Value::Number(n) => n.as_f64().map_or(Self::Absent, Self::Number),
            Value::Bool(b) => Self::Text(b.to_string()),
            Value::Null => Self::Absent,
            other => Self::Text(other.to_string()),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Render the value for display in a table cell.
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            Self::Absent => String::new(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Extraction of a named field from a record.
///
/// Unknown field names yield [`FieldValue::Absent`] rather than an error;
/// a typo'd column therefore sorts after everything instead of panicking.
pub trait FieldAccess {
    fn field(&self, name: &str) -> FieldValue;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_null_is_absent() {
        assert!(FieldValue::from_json(&Value::Null).is_absent());
    }

    #[test]
    fn json_number_converts() {
        let value = FieldValue::from_json(&serde_json::json!(42));
        assert_eq!(value, FieldValue::Number(42.0));
        assert_eq!(value.display(), "42");
    }

    #[test]
    fn json_string_converts() {
        let value = FieldValue::from_json(&serde_json::json!("open"));
        assert_eq!(value, FieldValue::Text("open".to_string()));
    }
}
