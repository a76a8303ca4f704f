//! Typed model definitions.
//!
//! A model describes the shape of the mapped output. The original dynamic
//! "string or spec record" union is resolved once, either through the typed
//! constructors here or by decoding a JSON model description
//! ([`ModelSpec::from_value`]), so the mapper never re-inspects spec shapes
//! per invocation.

mod decode;
mod error;

pub use error::ModelError;

use json_field_map_util::ValueKind;
use serde_json::Value;

/// Output-key to field-spec pairs of one object model level, in definition
/// order. Definition order is the output key order.
pub type FieldMap = Vec<(String, FieldSpec)>;

/// One level of target shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelSpec {
    /// Produce an object with exactly the listed keys (plus retained rest
    /// keys when rest merging is on).
    Object(FieldMap),
    /// Produce an array by mapping every source element through the element
    /// model.
    Array(ElementModel),
}

impl ModelSpec {
    pub fn object(fields: FieldMap) -> Self {
        Self::Object(fields)
    }

    pub fn array(element: ElementModel) -> Self {
        Self::Array(element)
    }
}

/// How each element of an array model is mapped.
///
/// Nesting depth is not statically matched against the data; at mapping time
/// each element is routed by its own runtime kind, so one element model
/// serves arrays of objects and arrays of arrays alike.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementModel {
    /// Each object element is mapped through this field map.
    Fields(FieldMap),
    /// Each array element descends one nesting level deeper.
    Nested(Box<ElementModel>),
}

impl ElementModel {
    pub fn fields(fields: FieldMap) -> Self {
        Self::Fields(fields)
    }

    pub fn nested(inner: ElementModel) -> Self {
        Self::Nested(Box::new(inner))
    }
}

/// Describes how one output field is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldSpec {
    /// Raw passthrough of a source key under a new name. No kind check, no
    /// default substitution; an absent source key yields no output key.
    Alias(String),
    /// Kind-checked extraction with optional nested model and default.
    Typed(TypedField),
}

impl FieldSpec {
    pub fn alias(key: impl Into<String>) -> Self {
        Self::Alias(key.into())
    }
}

impl From<TypedField> for FieldSpec {
    fn from(typed: TypedField) -> Self {
        Self::Typed(typed)
    }
}

/// A kind-checked field spec.
///
/// `default` is presence-sensitive: `Some(Value::Null)` is a supplied null
/// default and wins over the built-in per-kind fallback, while `None` means
/// no default was supplied at all.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedField {
    /// Expected kind of the source value.
    pub kind: ValueKind,
    /// Key to read from the current source object.
    pub field: String,
    /// Nested model for `object`/`array` kinds. Absent means guarded
    /// passthrough: the source value is taken verbatim when it matches the
    /// kind, with no recursive projection.
    pub model: Option<ModelSpec>,
    /// Explicit fallback used when the source value is absent or
    /// kind-mismatched.
    pub default: Option<Value>,
}

impl TypedField {
    pub fn new(kind: ValueKind, field: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            model: None,
            default: None,
        }
    }

    pub fn with_model(mut self, model: ModelSpec) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }
}
