use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown gender: {0}")]
    UnknownGender(String),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid age: {0}")]
    InvalidAge(String),
}
