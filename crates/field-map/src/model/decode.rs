use json_field_map_util::ValueKind;
use serde_json::{Map, Value};

use super::{ElementModel, FieldMap, FieldSpec, ModelError, ModelSpec, TypedField};

impl ModelSpec {
    /// Decodes a JSON model description into a typed [`ModelSpec`].
    ///
    /// # Examples
    ///
    /// ```
    /// use json_field_map::ModelSpec;
    /// use serde_json::json;
    ///
    /// let model = ModelSpec::from_value(&json!({
    ///     "type": "object",
    ///     "model": {
    ///         "username": "user",
    ///         "age": {"type": "number", "field": "age", "default": 18},
    ///     },
    /// })).unwrap();
    /// assert!(matches!(model, ModelSpec::Object(_)));
    /// ```
    pub fn from_value(value: &Value) -> Result<Self, ModelError> {
        let root = value.as_object().ok_or(ModelError::ExpectedModelObject)?;
        let kind = root
            .get("type")
            .and_then(Value::as_str)
            .ok_or(ModelError::MissingType)?;
        let model = root.get("model").ok_or(ModelError::MissingModel)?;
        match kind {
            "object" => {
                let fields = model.as_object().ok_or(ModelError::ExpectedFieldMap)?;
                Ok(ModelSpec::Object(decode_fields(fields)?))
            }
            "array" => Ok(ModelSpec::Array(decode_element(model)?)),
            other => Err(ModelError::InvalidModelType(other.to_string())),
        }
    }
}

fn decode_fields(fields: &Map<String, Value>) -> Result<FieldMap, ModelError> {
    let mut out = FieldMap::with_capacity(fields.len());
    for (prop, spec) in fields {
        out.push((prop.clone(), decode_field(prop, spec)?));
    }
    Ok(out)
}

fn decode_field(prop: &str, spec: &Value) -> Result<FieldSpec, ModelError> {
    match spec {
        Value::String(key) => Ok(FieldSpec::Alias(key.clone())),
        Value::Object(entries) => decode_typed(prop, entries).map(FieldSpec::Typed),
        _ => Err(ModelError::InvalidFieldSpec(prop.to_string())),
    }
}

fn decode_typed(prop: &str, entries: &Map<String, Value>) -> Result<TypedField, ModelError> {
    let kind_name = entries
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| ModelError::InvalidFieldSpec(prop.to_string()))?;
    let kind: ValueKind = kind_name
        .parse()
        .map_err(|_| ModelError::UnknownKind(prop.to_string(), kind_name.to_string()))?;
    let field = entries
        .get("field")
        .and_then(Value::as_str)
        .ok_or_else(|| ModelError::MissingSourceField(prop.to_string()))?
        .to_string();
    // Presence-sensitive: an explicit null is still a supplied default.
    let default = entries.get("default").cloned();
    let model = match kind {
        ValueKind::Object => match entries.get("model") {
            Some(nested) => {
                let fields = nested.as_object().ok_or(ModelError::ExpectedFieldMap)?;
                Some(ModelSpec::Object(decode_fields(fields)?))
            }
            None => None,
        },
        ValueKind::Array => match entries.get("model") {
            Some(nested) => Some(ModelSpec::Array(decode_element(nested)?)),
            None => None,
        },
        // A `model` entry on a scalar spec has no meaning and is ignored.
        _ => None,
    };
    Ok(TypedField {
        kind,
        field,
        model,
        default,
    })
}

/// Decodes one array-model element description.
///
/// An object carrying `"type": "array"` descends one nesting level; any
/// other object is a field map. A field map that aliases an output key named
/// `type` to the literal string `"array"` is indistinguishable from the
/// nesting marker; spell such a rename as a typed spec instead.
fn decode_element(model: &Value) -> Result<ElementModel, ModelError> {
    let entries = model.as_object().ok_or(ModelError::ExpectedFieldMap)?;
    if entries.get("type").and_then(Value::as_str) == Some("array") {
        let inner = entries.get("model").ok_or(ModelError::MissingModel)?;
        return Ok(ElementModel::Nested(Box::new(decode_element(inner)?)));
    }
    Ok(ElementModel::Fields(decode_fields(entries)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_aliases_and_typed_specs_in_order() {
        let model = ModelSpec::from_value(&json!({
            "type": "object",
            "model": {
                "username": "user",
                "age": {"type": "number", "field": "age"},
            },
        }))
        .unwrap();
        let ModelSpec::Object(fields) = model else {
            panic!("expected object model");
        };
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].0, "username");
        assert_eq!(fields[0].1, FieldSpec::alias("user"));
        assert_eq!(fields[1].0, "age");
        assert_eq!(
            fields[1].1,
            FieldSpec::Typed(TypedField::new(ValueKind::Number, "age"))
        );
    }

    #[test]
    fn explicit_null_default_is_captured_as_present() {
        let model = ModelSpec::from_value(&json!({
            "type": "object",
            "model": {"x": {"type": "number", "field": "x", "default": null}},
        }))
        .unwrap();
        let ModelSpec::Object(fields) = model else {
            panic!("expected object model");
        };
        let FieldSpec::Typed(typed) = &fields[0].1 else {
            panic!("expected typed spec");
        };
        assert_eq!(typed.default, Some(Value::Null));
    }

    #[test]
    fn absent_default_stays_absent() {
        let model = ModelSpec::from_value(&json!({
            "type": "object",
            "model": {"x": {"type": "number", "field": "x"}},
        }))
        .unwrap();
        let ModelSpec::Object(fields) = model else {
            panic!("expected object model");
        };
        let FieldSpec::Typed(typed) = &fields[0].1 else {
            panic!("expected typed spec");
        };
        assert_eq!(typed.default, None);
    }

    #[test]
    fn decodes_nested_object_model() {
        let model = ModelSpec::from_value(&json!({
            "type": "object",
            "model": {
                "profile": {
                    "type": "object",
                    "field": "profile",
                    "model": {"name": {"type": "string", "field": "name"}},
                },
            },
        }))
        .unwrap();
        let expected = ModelSpec::object(vec![(
            "profile".into(),
            TypedField::new(ValueKind::Object, "profile")
                .with_model(ModelSpec::object(vec![(
                    "name".into(),
                    TypedField::new(ValueKind::String, "name").into(),
                )]))
                .into(),
        )]);
        assert_eq!(model, expected);
    }

    #[test]
    fn decodes_nested_array_element_models() {
        let model = ModelSpec::from_value(&json!({
            "type": "array",
            "model": {
                "type": "array",
                "model": {"v": "value"},
            },
        }))
        .unwrap();
        let expected = ModelSpec::array(ElementModel::nested(ElementModel::fields(vec![(
            "v".into(),
            FieldSpec::alias("value"),
        )])));
        assert_eq!(model, expected);
    }

    #[test]
    fn scalar_spec_ignores_model_entry() {
        let model = ModelSpec::from_value(&json!({
            "type": "object",
            "model": {"x": {"type": "string", "field": "x", "model": {"y": "y"}}},
        }))
        .unwrap();
        let ModelSpec::Object(fields) = model else {
            panic!("expected object model");
        };
        let FieldSpec::Typed(typed) = &fields[0].1 else {
            panic!("expected typed spec");
        };
        assert_eq!(typed.model, None);
    }

    #[test]
    fn rejects_non_object_description() {
        assert_eq!(
            ModelSpec::from_value(&json!("object")),
            Err(ModelError::ExpectedModelObject)
        );
    }

    #[test]
    fn rejects_missing_type() {
        assert_eq!(
            ModelSpec::from_value(&json!({"model": {}})),
            Err(ModelError::MissingType)
        );
    }

    #[test]
    fn rejects_scalar_top_level_type() {
        assert_eq!(
            ModelSpec::from_value(&json!({"type": "number", "model": {}})),
            Err(ModelError::InvalidModelType("number".into()))
        );
    }

    #[test]
    fn rejects_missing_model() {
        assert_eq!(
            ModelSpec::from_value(&json!({"type": "object"})),
            Err(ModelError::MissingModel)
        );
    }

    #[test]
    fn rejects_malformed_field_spec() {
        assert_eq!(
            ModelSpec::from_value(&json!({"type": "object", "model": {"x": 5}})),
            Err(ModelError::InvalidFieldSpec("x".into()))
        );
    }

    #[test]
    fn rejects_spec_without_field() {
        assert_eq!(
            ModelSpec::from_value(&json!({"type": "object", "model": {"x": {"type": "string"}}})),
            Err(ModelError::MissingSourceField("x".into()))
        );
    }

    #[test]
    fn rejects_unknown_kind() {
        assert_eq!(
            ModelSpec::from_value(
                &json!({"type": "object", "model": {"x": {"type": "date", "field": "x"}}})
            ),
            Err(ModelError::UnknownKind("x".into(), "date".into()))
        );
    }
}
