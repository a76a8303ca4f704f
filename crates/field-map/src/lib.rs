//! json-field-map - Declarative structural mapping for JSON values.
//!
//! Reshapes a loosely-typed JSON payload into the shape described by a
//! [`ModelSpec`]: fields are renamed, kind-checked, defaulted, recursively
//! projected, and optionally merged with the unmapped remainder of the
//! source. Shape mismatches never fail; they degrade to default values so
//! the output is always fully shaped.
//!
//! ```
//! use json_field_map::{map, FieldSpec, ModelSpec};
//! use serde_json::json;
//!
//! let mut source = json!({"user": "long"});
//! let model = ModelSpec::object(vec![("username".into(), FieldSpec::alias("user"))]);
//! let mapped = map(&mut source, &model, None).unwrap();
//! assert_eq!(mapped, json!({"username": "long"}));
//! ```

pub mod map;
pub mod model;
pub mod options;

pub use json_field_map_util::{deep_clone, kind_of, ValueKind};
pub use map::{map, MapError};
pub use model::{ElementModel, FieldMap, FieldSpec, ModelError, ModelSpec, TypedField};
pub use options::{KindDefaults, MapOptions};
