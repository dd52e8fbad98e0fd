use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Encoding error: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("Decoding error: {0}")]
    Decoding(#[source] serde_json::Error),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
