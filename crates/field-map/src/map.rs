//! The recursive mapping engine.

use json_field_map_util::{deep_clone, kind_of, ValueKind};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::{ElementModel, FieldMap, FieldSpec, ModelSpec, TypedField};
use crate::options::MapOptions;

/// Errors raised for model/data combinations the typed model cannot rule
/// out statically. Plain data-shape mismatches never error; they degrade to
/// default values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("array model applied to a non-array source")]
    ExpectedArray,
    #[error("array element is nested deeper than the element model describes")]
    ElementModelTooShallow,
    #[error("element model expects a nested array but the element is not one")]
    ElementModelTooDeep,
}

/// Maps `source` into the shape described by `model`.
///
/// Options are resolved once here (`None` means all defaults) and threaded
/// unchanged through every recursive call. With `deep_clone` set the source
/// is copied up front, so the in-place deletions `remove_map_field` performs
/// stay internal; otherwise those deletions strip the caller's value.
///
/// # Examples
///
/// ```
/// use json_field_map::{map, FieldSpec, MapOptions, ModelSpec};
/// use serde_json::json;
///
/// let mut source = json!({"user": "long", "age": 2022});
/// let model = ModelSpec::object(vec![("username".into(), FieldSpec::alias("user"))]);
/// let options = MapOptions {
///     rest_value: true,
///     ..MapOptions::default()
/// };
/// let mapped = map(&mut source, &model, Some(options)).unwrap();
/// assert_eq!(mapped, json!({"user": "long", "age": 2022, "username": "long"}));
/// ```
pub fn map(
    source: &mut Value,
    model: &ModelSpec,
    options: Option<MapOptions>,
) -> Result<Value, MapError> {
    let options = options.unwrap_or_default();
    if options.deep_clone {
        let mut working = deep_clone(source);
        return map_model(&mut working, model, &options);
    }
    map_model(source, model, &options)
}

fn map_model(source: &mut Value, model: &ModelSpec, options: &MapOptions) -> Result<Value, MapError> {
    match model {
        ModelSpec::Object(fields) => map_object(source, fields, options),
        ModelSpec::Array(element) => map_array(source, element, options),
    }
}

fn map_object(
    source: &mut Value,
    fields: &FieldMap,
    options: &MapOptions,
) -> Result<Value, MapError> {
    let mut target = Map::new();
    for (prop, spec) in fields {
        match spec {
            FieldSpec::Alias(key) => {
                // Raw passthrough. An absent source key yields no output
                // key, the JSON rendering of an undefined value.
                if let Some(value) = source.as_object().and_then(|map| map.get(key)) {
                    target.insert(prop.clone(), value.clone());
                }
                remove_consumed(source, key, options);
            }
            FieldSpec::Typed(typed) => {
                let value = map_typed(source, typed, options)?;
                target.insert(prop.clone(), value);
                // Deletion is unconditional per processed spec, even along
                // branches that never read the field.
                remove_consumed(source, &typed.field, options);
            }
        }
    }
    if options.rest_value {
        let mut result = match source {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        };
        // Rest keys first, mapped keys second: mapped keys win on
        // collision while the colliding key keeps its source position.
        for (key, value) in target {
            result.insert(key, value);
        }
        return Ok(Value::Object(result));
    }
    Ok(Value::Object(target))
}

fn map_typed(
    source: &mut Value,
    spec: &TypedField,
    options: &MapOptions,
) -> Result<Value, MapError> {
    let field = spec.field.as_str();
    if spec.kind.is_scalar() {
        if let Some(value) = source.as_object().and_then(|map| map.get(field)) {
            if kind_of(value) == spec.kind {
                return Ok(value.clone());
            }
        }
        return Ok(fallback(spec, options));
    }
    match &spec.model {
        // No nested model: guarded passthrough of the aggregate, no
        // recursive projection.
        None => {
            if let Some(value) = source.as_object().and_then(|map| map.get(field)) {
                if kind_of(value) == spec.kind {
                    return Ok(value.clone());
                }
            }
            Ok(fallback(spec, options))
        }
        Some(nested) => match spec.kind {
            ValueKind::Object => {
                match source.as_object_mut().and_then(|map| map.get_mut(field)) {
                    Some(sub) if sub.is_object() => map_model(sub, nested, options),
                    _ => match &spec.default {
                        Some(default) => Ok(default.clone()),
                        // Object completion: project an empty object so
                        // every nested leaf receives its own default.
                        None => {
                            let mut empty = Value::Object(Map::new());
                            map_model(&mut empty, nested, options)
                        }
                    },
                }
            }
            ValueKind::Array => {
                match source.as_object_mut().and_then(|map| map.get_mut(field)) {
                    Some(sub) if sub.is_array() => map_model(sub, nested, options),
                    // Arrays are not completed the way objects are; a
                    // missing or mismatched array falls back flat.
                    _ => Ok(fallback(spec, options)),
                }
            }
            // is_scalar() covered the remaining kinds above.
            _ => unreachable!("scalar kinds are handled before nested-model dispatch"),
        },
    }
}

fn map_array(
    source: &mut Value,
    element: &ElementModel,
    options: &MapOptions,
) -> Result<Value, MapError> {
    let items = source.as_array_mut().ok_or(MapError::ExpectedArray)?;
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        // Depth is inferred from each element's runtime kind.
        let mapped = if kind_of(item) == ValueKind::Array {
            match element {
                ElementModel::Nested(inner) => map_array(item, inner, options)?,
                ElementModel::Fields(_) => return Err(MapError::ElementModelTooShallow),
            }
        } else {
            match element {
                ElementModel::Fields(fields) => map_object(item, fields, options)?,
                ElementModel::Nested(_) => return Err(MapError::ElementModelTooDeep),
            }
        };
        out.push(mapped);
    }
    Ok(Value::Array(out))
}

fn fallback(spec: &TypedField, options: &MapOptions) -> Value {
    match &spec.default {
        Some(value) => value.clone(),
        None => options.default_value.for_kind(spec.kind).clone(),
    }
}

fn remove_consumed(source: &mut Value, key: &str, options: &MapOptions) {
    if options.rest_value && options.remove_map_field {
        if let Some(map) = source.as_object_mut() {
            // shift_remove keeps the relative order of the surviving keys,
            // which is observable through the rest merge.
            map.shift_remove(key);
        }
    }
}
