use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClaimError {
    #[error("AI draft generator is not configured")]
    GeneratorUnavailable,

    #[error("AI draft generator credential missing: {0}")]
    GeneratorAuth(String),

    #[error("AI draft generator call failed: {0}")]
    GeneratorCall(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<reqwest::Error> for ClaimError {
    fn from(err: reqwest::Error) -> Self {
        ClaimError::GeneratorCall(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClaimError>;
