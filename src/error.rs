//! Error types for catalog parsing.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// JSON value kinds, as reported in type mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonType {
    Null,
    Boolean,
    /// A non-negative whole number that fits the target field.
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl JsonType {
    /// Classify a JSON value.
    ///
    /// Every number reports as [`JsonType::Number`]; `Integer` is only ever
    /// an *expected* type.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonType::Null,
            Value::Bool(_) => JsonType::Boolean,
            Value::Number(_) => JsonType::Number,
            Value::String(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonType::Null => "null",
            JsonType::Boolean => "boolean",
            JsonType::Integer => "integer",
            JsonType::Number => "number",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        };
        f.write_str(name)
    }
}

/// Structural validation failure for a single payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A required field is absent.
    #[error("missing field `{0}`")]
    MissingField(String),

    /// A field is present but holds the wrong kind of value.
    #[error("field `{field}`: expected {expected}, found {actual}")]
    TypeMismatch {
        field: String,
        expected: JsonType,
        actual: JsonType,
    },
}

impl SchemaError {
    pub(crate) fn mismatch(field: impl Into<String>, expected: JsonType, value: &Value) -> Self {
        SchemaError::TypeMismatch {
            field: field.into(),
            expected,
            actual: JsonType::of(value),
        }
    }

    /// Name (or dotted path) of the offending field.
    pub fn field(&self) -> &str {
        match self {
            SchemaError::MissingField(field) => field,
            SchemaError::TypeMismatch { field, .. } => field,
        }
    }

    /// Prefix the field path with the name of the enclosing field.
    ///
    /// `$` denotes the payload root and is replaced rather than nested.
    pub(crate) fn within(self, parent: &str) -> Self {
        let join = |field: String| {
            if field == "$" {
                parent.to_string()
            } else if field.starts_with('[') {
                format!("{parent}{field}")
            } else {
                format!("{parent}.{field}")
            }
        };

        match self {
            SchemaError::MissingField(field) => SchemaError::MissingField(join(field)),
            SchemaError::TypeMismatch {
                field,
                expected,
                actual,
            } => SchemaError::TypeMismatch {
                field: join(field),
                expected,
                actual,
            },
        }
    }
}

/// Main error type for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Payload did not match the record schema.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Input was not valid JSON.
    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A load outcome string outside the known set.
    #[error("Unknown load outcome: {0}")]
    UnknownLoadOutcome(String),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
