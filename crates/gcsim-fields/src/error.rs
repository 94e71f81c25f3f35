use thiserror::Error;

/// Errors from parsing a field-selection expression.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldsError {
    /// A top-level token or an `items(...)` entry is not a known field.
    #[error("{0} is invalid")]
    InvalidField(String),
}

impl FieldsError {
    /// The offending token.
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidField(name) => name,
        }
    }
}

/// Result alias for field-selection operations.
pub type FieldsResult<T> = Result<T, FieldsError>;
