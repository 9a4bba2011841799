use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed amphibians payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
