use shared::error::DecodeError;
use thiserror::Error;

/// The single failure signal of a fetch attempt. The detail is for logs only.
#[derive(Debug, Error)]
#[error("failed to fetch amphibians: {detail}")]
pub struct FetchError {
    detail: String,
}

impl FetchError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        Self::new(value.to_string())
    }
}

impl From<DecodeError> for FetchError {
    fn from(value: DecodeError) -> Self {
        Self::new(value.to_string())
    }
}
