use thiserror::Error;

/// Errors raised while decoding a JSON model description.
///
/// These are caller programming errors in model construction, surfaced at
/// decode time; data-shape mismatches during mapping never error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("model description must be an object")]
    ExpectedModelObject,
    #[error("model is missing its `type`")]
    MissingType,
    #[error("model `type` must be \"object\" or \"array\", got `{0}`")]
    InvalidModelType(String),
    #[error("model is missing its `model` definition")]
    MissingModel,
    #[error("object model fields must be described by an object")]
    ExpectedFieldMap,
    #[error("field spec for `{0}` must be a string alias or a spec object with a `type`")]
    InvalidFieldSpec(String),
    #[error("field spec for `{0}` is missing `field`")]
    MissingSourceField(String),
    #[error("field spec for `{0}` names unknown value kind `{1}`")]
    UnknownKind(String, String),
}
