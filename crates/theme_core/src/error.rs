use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("corrupted color data: {0}")]
    CorruptedColorData(String),

    #[error("missing or malformed field `{field}`: {reason}")]
    MissingOrMalformedField { field: &'static str, reason: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ThemeError {
    pub(crate) fn field(field: &'static str, reason: impl Into<String>) -> Self {
        ThemeError::MissingOrMalformedField {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ThemeError>;
