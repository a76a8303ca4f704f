use serde_json::{Map, Value};

/// Produces a structurally independent copy of a value.
///
/// Objects and arrays are rebuilt recursively; scalar values are returned as
/// plain value copies (there is no shared structure to detach). Mutating the
/// result never affects the input.
///
/// # Examples
///
/// ```
/// use json_field_map_util::deep_clone;
/// use serde_json::json;
///
/// let original = json!({"a": [1, {"b": 2}]});
/// let copy = deep_clone(&original);
/// assert_eq!(copy, original);
/// ```
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(deep_clone).collect()),
        Value::Object(fields) => {
            let mut out = Map::new();
            for (key, item) in fields {
                out.insert(key.clone(), deep_clone(item));
            }
            Value::Object(out)
        }
        scalar => scalar.clone(),
    }
}
