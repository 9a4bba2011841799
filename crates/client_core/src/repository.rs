use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::AmphibianRecord, protocol::decode_amphibians};
use tracing::debug;
use url::Url;

use crate::{
    config::{endpoint_url, ClientSettings},
    error::FetchError,
};

/// Source of the amphibian listing.
#[async_trait]
pub trait AmphibiansRepository: Send + Sync {
    /// Records in the order the source returned them.
    async fn get_amphibians(&self) -> Result<Vec<AmphibianRecord>, FetchError>;
}

/// Fetches the listing with a single `GET {base_url}/amphibians`.
pub struct NetworkAmphibiansRepository {
    http: Client,
    endpoint: Url,
}

impl NetworkAmphibiansRepository {
    pub fn new(settings: &ClientSettings) -> anyhow::Result<Self> {
        let endpoint = endpoint_url(&settings.base_url)?;

        let mut builder = Client::builder();
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("failed to build http client")?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl AmphibiansRepository for NetworkAmphibiansRepository {
    async fn get_amphibians(&self) -> Result<Vec<AmphibianRecord>, FetchError> {
        debug!(endpoint = %self.endpoint, "requesting amphibians");
        let body = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let amphibians = decode_amphibians(&body)?;
        debug!(count = amphibians.len(), "decoded amphibians");
        Ok(amphibians)
    }
}

#[cfg(test)]
#[path = "tests/repository_tests.rs"]
mod tests;
