use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use thiserror::Error;

/// The six data kinds of the JSON data model.
///
/// Every [`serde_json::Value`] belongs to exactly one kind. Arrays and
/// objects are distinguished structurally, and `null` is its own kind rather
/// than a degenerate object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    Null,
    Array,
    Object,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// True for the four non-aggregate kinds (`null` counts as a scalar).
    pub fn is_scalar(self) -> bool {
        !matches!(self, Self::Array | Self::Object)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no JSON value kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown value kind `{0}`")]
pub struct ParseValueKindError(pub String);

impl FromStr for ValueKind {
    type Err = ParseValueKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            "null" => Ok(Self::Null),
            "array" => Ok(Self::Array),
            "object" => Ok(Self::Object),
            other => Err(ParseValueKindError(other.to_string())),
        }
    }
}

/// Classifies a value into its [`ValueKind`].
///
/// Total and pure: every value maps to exactly one kind.
///
/// # Examples
///
/// ```
/// use json_field_map_util::{kind_of, ValueKind};
/// use serde_json::json;
///
/// assert_eq!(kind_of(&json!(null)), ValueKind::Null);
/// assert_eq!(kind_of(&json!([1, 2])), ValueKind::Array);
/// assert_eq!(kind_of(&json!({"a": 1})), ValueKind::Object);
/// ```
pub fn kind_of(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Boolean,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}
