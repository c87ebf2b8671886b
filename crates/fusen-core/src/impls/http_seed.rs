//! HTTP seed source (reqwest).

use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use crate::error::FusenError;
use crate::ports::{SeedRecord, SeedSource};

/// Fetches the seed collection with a single GET.
///
/// Contract:
/// - the response body is a JSON array of records
/// - non-2xx statuses are errors (`error_for_status`)
/// - no retry, no backoff; the caller decides what a failure means
pub struct HttpSeedSource {
    client: Client,
    endpoint: String,
}

impl HttpSeedSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SeedSource for HttpSeedSource {
    async fn fetch(&self) -> Result<Vec<SeedRecord>, FusenError> {
        let records: Vec<SeedRecord> = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        info!(endpoint = %self.endpoint, count = records.len(), "seed fetch succeeded");
        Ok(records)
    }
}
