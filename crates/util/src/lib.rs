//! json-field-map-util - Leaf helpers for the json-field-map mapper.
//!
//! Provides [`ValueKind`] with [`kind_of`] for structural classification of
//! [`serde_json::Value`] into the six JSON data kinds, and [`deep_clone`] for
//! producing a structurally independent copy of a value.
//!
//! These helpers are pure and never call back into the mapper.

mod deep_clone;
mod kind;

pub use deep_clone::deep_clone;
pub use kind::{kind_of, ParseValueKindError, ValueKind};
