//! Mapping options and the built-in per-kind default values.

use json_field_map_util::ValueKind;
use serde_json::{Map, Value};

/// Fallback value for each of the six JSON kinds.
///
/// Used whenever a typed field has no explicit `default` and the source
/// value is absent or of the wrong kind. [`KindDefaults::default`] seeds the
/// canonical empty value per kind; individual kinds can be overlaid via
/// struct-update syntax or [`KindDefaults::with`].
#[derive(Debug, Clone, PartialEq)]
pub struct KindDefaults {
    pub null: Value,
    pub string: Value,
    pub number: Value,
    pub boolean: Value,
    pub array: Value,
    pub object: Value,
}

impl Default for KindDefaults {
    fn default() -> Self {
        Self {
            null: Value::Null,
            string: Value::String(String::new()),
            number: Value::from(0),
            boolean: Value::Bool(false),
            array: Value::Array(Vec::new()),
            object: Value::Object(Map::new()),
        }
    }
}

impl KindDefaults {
    pub fn for_kind(&self, kind: ValueKind) -> &Value {
        match kind {
            ValueKind::Null => &self.null,
            ValueKind::String => &self.string,
            ValueKind::Number => &self.number,
            ValueKind::Boolean => &self.boolean,
            ValueKind::Array => &self.array,
            ValueKind::Object => &self.object,
        }
    }

    pub fn set(&mut self, kind: ValueKind, value: Value) {
        match kind {
            ValueKind::Null => self.null = value,
            ValueKind::String => self.string = value,
            ValueKind::Number => self.number = value,
            ValueKind::Boolean => self.boolean = value,
            ValueKind::Array => self.array = value,
            ValueKind::Object => self.object = value,
        }
    }

    /// Overlays one kind's fallback, consuming and returning the record.
    pub fn with(mut self, kind: ValueKind, value: Value) -> Self {
        self.set(kind, value);
        self
    }
}

/// Behavioral options for one top-level [`map`](crate::map) invocation.
///
/// Resolved once at the entry point (`None` becomes `MapOptions::default()`)
/// and threaded unchanged through every recursive call.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapOptions {
    /// Merge unmapped source keys into the output. Mapped keys win on
    /// collision.
    pub rest_value: bool,
    /// Delete each consumed source key as it is mapped, so it cannot
    /// reappear through the rest merge. Only observable when `rest_value`
    /// is also set.
    pub remove_map_field: bool,
    /// Copy the source once up front so `remove_map_field` deletions never
    /// touch the caller's value.
    pub deep_clone: bool,
    /// Per-kind fallback values.
    pub default_value: KindDefaults,
}
