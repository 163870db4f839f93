use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarkcheckError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid application input: {0}")]
    InvalidInput(String),

    #[error("PDF error: {0}")]
    Pdf(String),
}

pub type Result<T> = std::result::Result<T, MarkcheckError>;
