//! Flat field-name → value mapping for one config instance.
//!
//! An [`AttributeRecord`] is always derived from a config or parsed from a
//! document; it is never stored on its own. Equality ignores key order.

use crate::error::{PeftError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Complete, flat state of one config instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeRecord(Map<String, Value>);

impl AttributeRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a JSON value, which must be an object
    pub fn from_value(value: Value) -> std::result::Result<Self, &'static str> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(json_kind(&other)),
        }
    }

    /// Parse a JSON document into a record
    ///
    /// `origin` is only used for error context.
    pub fn from_json_str(json: &str, origin: &Path) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| PeftError::Malformed {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_value(value).map_err(|kind| PeftError::Malformed {
            path: origin.to_path_buf(),
            message: format!("expected a JSON object, found {kind}"),
        })
    }

    /// Read and parse the JSON document at `path`
    pub fn read_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PeftError::not_found(path.display().to_string(), "file does not exist")
            } else {
                PeftError::io(format!("reading {}", path.display()), e)
            }
        })?;
        Self::from_json_str(&content, path)
    }

    /// Serialize as two-space indented JSON, keys in insertion order
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.0)
            .map_err(|e| PeftError::Serialization { message: e.to_string() })
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Insert or replace a field, returning the previous value
    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    /// Field names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for AttributeRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for AttributeRecord {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Human-readable JSON type name, used in error messages
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn record(value: Value) -> AttributeRecord {
        AttributeRecord::from_value(value).unwrap()
    }

    #[test]
    fn test_equality_ignores_key_order() {
        let a = record(json!({"r": 8, "peft_type": "LORA"}));
        let b = record(json!({"peft_type": "LORA", "r": 8}));
        assert_eq!(a, b);
    }

    #[test]
    fn test_keys_keep_insertion_order() {
        let mut rec = AttributeRecord::new();
        rec.insert("peft_type", json!("LORA"));
        rec.insert("r", json!(8));
        rec.insert("bias", json!("none"));
        assert_eq!(rec.keys().collect::<Vec<_>>(), vec!["peft_type", "r", "bias"]);
    }

    #[test]
    fn test_non_object_rejected() {
        assert_eq!(AttributeRecord::from_value(json!([1, 2])), Err("array"));
        assert_eq!(AttributeRecord::from_value(json!("x")), Err("string"));
        assert_eq!(AttributeRecord::from_value(json!(null)), Err("null"));
    }

    #[test]
    fn test_from_json_str_malformed() {
        let err = AttributeRecord::from_json_str("not json{", Path::new("cfg.json")).unwrap_err();
        assert!(matches!(err, PeftError::Malformed { .. }));
        assert!(err.to_string().contains("cfg.json"));
    }

    #[test]
    fn test_from_json_str_bare_array_is_malformed() {
        let err = AttributeRecord::from_json_str("[1, 2, 3]", Path::new("cfg.json")).unwrap_err();
        match err {
            PeftError::Malformed { message, .. } => assert!(message.contains("array")),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = AttributeRecord::read_json_file(tmp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, PeftError::NotFound { .. }));
    }

    #[test]
    fn test_pretty_json_reparses_equal() {
        let rec = record(json!({"r": 8, "target_modules": ["q", "v"], "task_type": null}));
        let text = rec.to_json_pretty().unwrap();
        assert!(text.contains("\n  \"r\": 8"));
        let back = AttributeRecord::from_json_str(&text, Path::new("x")).unwrap();
        assert_eq!(rec, back);
    }

    #[test]
    fn test_json_kind_names() {
        assert_eq!(json_kind(&json!(1)), "integer");
        assert_eq!(json_kind(&json!(-1)), "integer");
        assert_eq!(json_kind(&json!(0.5)), "float");
        assert_eq!(json_kind(&json!(true)), "boolean");
        assert_eq!(json_kind(&json!({})), "object");
    }
}
