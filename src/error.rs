use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyStatError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Layout must contain exactly {expected} keys, found {found}")]
    InvalidLayout { expected: usize, found: usize },

    #[error("Cannot classify a sequence of {0} positions (expected 2 or 3)")]
    UnsupportedSequence(usize),
}

pub type KsResult<T> = Result<T, KeyStatError>;
