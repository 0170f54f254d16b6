use thiserror::Error;

/// Errors produced when building records from loosely typed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The input was not a JSON object.
    #[error("record source is not an object (found {found})")]
    NotAnObject { found: &'static str },

    /// A field held an array or nested object.
    #[error("field `{field}` is not a scalar value")]
    NonScalarField { field: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
