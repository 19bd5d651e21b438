use thiserror::Error;

/// Every way a field evaluation or a model definition can be rejected.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Coordinates are not all scalars or not all sequences of the same length.
    #[error("InputShapeError: {0}")]
    InputShape(String),

    /// A coordinate lies outside the domain the models are valid for.
    #[error(
        "InputRangeError: {name} = {value} at position {index} must be within {range} ({hint})"
    )]
    InputRange {
        name: &'static str,
        value: f64,
        index: usize,
        range: &'static str,
        hint: &'static str,
    },

    /// The coefficient tables of a model definition are malformed.
    #[error("ConfigurationError: {0}")]
    Configuration(String),

    /// A non-positive radius reached the synthesis engine.
    #[error("NumericalDomainError: radius {r} at position {index} must be strictly positive")]
    NumericalDomain { r: f64, index: usize },

    #[error("unknown model `{0}`")]
    UnknownModel(String),

    #[error("invalid model definition: {0}")]
    Json(#[from] serde_json::Error),
}

impl FieldError {
    /// Prefixes a configuration error with the name of the model it was raised for.
    pub(crate) fn for_model(self, name: &str) -> Self {
        match self {
            FieldError::Configuration(reason) => {
                FieldError::Configuration(format!("model `{name}`: {reason}"))
            }
            other => other,
        }
    }
}
