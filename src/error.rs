use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChaosimError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("empty sequence")]
    EmptyInput,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChaosimError>;
