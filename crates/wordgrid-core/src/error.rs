use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordGridError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for WordGridError {
    fn from(err: serde_json::Error) -> Self {
        WordGridError::Serialization(err.to_string())
    }
}
