//! Explicit field schemas for config variants.
//!
//! Each variant lists its fields once, in declaration order, together with
//! the JSON shape each field accepts. Loading checks document values against
//! this list before any typed reconstruction happens, so a bad value is
//! reported against the field that holds it.

use crate::error::{PeftError, Result};
use crate::record::{json_kind, AttributeRecord};
use serde_json::Value;

/// JSON shape accepted by a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Non-negative integral number
    Integer,
    /// Any number (integers are accepted for float fields)
    Float,
    Bool,
    String,
    /// String restricted to a fixed set of values
    Choice(&'static [&'static str]),
    StringList,
    BoolList,
}

impl FieldKind {
    /// Check a non-null value against this kind
    fn accepts(self, value: &Value) -> bool {
        match self {
            Self::Integer => value.is_u64(),
            Self::Float => value.is_number(),
            Self::Bool => value.is_boolean(),
            Self::String => value.is_string(),
            Self::Choice(options) => value.as_str().is_some_and(|s| options.contains(&s)),
            Self::StringList => {
                value.as_array().is_some_and(|items| items.iter().all(Value::is_string))
            }
            Self::BoolList => {
                value.as_array().is_some_and(|items| items.iter().all(Value::is_boolean))
            }
        }
    }

    fn describe(self) -> String {
        match self {
            Self::Integer => "non-negative integer".into(),
            Self::Float => "number".into(),
            Self::Bool => "boolean".into(),
            Self::String => "string".into(),
            Self::Choice(options) => format!("one of {}", options.join(", ")),
            Self::StringList => "array of strings".into(),
            Self::BoolList => "array of booleans".into(),
        }
    }
}

/// One declared field of a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Whether `null` is an accepted value
    pub nullable: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, nullable: false }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind, nullable: true }
    }

    /// Validate a document value for this field
    pub fn check(&self, value: &Value) -> Result<()> {
        if value.is_null() && self.nullable {
            return Ok(());
        }
        if self.kind.accepts(value) {
            return Ok(());
        }
        let mut expected = self.kind.describe();
        if self.nullable {
            expected.push_str(" or null");
        }
        Err(PeftError::TypeMismatch {
            field: self.name.to_string(),
            expected,
            found: describe_value(value),
        })
    }
}

fn describe_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("string \"{s}\""),
        other => json_kind(other).to_string(),
    }
}

/// Result of checking a document against a schema
#[derive(Debug, Default)]
pub(crate) struct SchemaReport {
    /// Declared fields present in the document, in declaration order
    pub known: AttributeRecord,
    /// Document keys the schema does not declare
    pub unknown: Vec<String>,
    /// Declared fields absent from the document
    pub missing: Vec<&'static str>,
}

/// Split a document into declared, unknown and missing fields.
///
/// Fails on the first declared field whose value has the wrong shape.
pub(crate) fn check_record(schema: &[FieldSpec], record: &AttributeRecord) -> Result<SchemaReport> {
    let mut report = SchemaReport::default();
    for spec in schema {
        match record.get(spec.name) {
            Some(value) => {
                spec.check(value)?;
                report.known.insert(spec.name, value.clone());
            }
            None => report.missing.push(spec.name),
        }
    }
    report.unknown = record
        .keys()
        .filter(|key| !schema.iter().any(|spec| spec.name == *key))
        .map(str::to_string)
        .collect();
    Ok(report)
}

/// Field names of a schema, in declaration order
pub fn field_names(schema: &[FieldSpec]) -> Vec<&'static str> {
    schema.iter().map(|spec| spec.name).collect()
}
