use crate::config::BlobConfig;
use crate::error::{AppError, AppResult};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Fetches source images from the blob store.
///
/// Cheap to clone; the inner reqwest client shares its connection pool
/// across clones.
#[derive(Clone)]
pub struct BlobFetcher {
    client: Client,
    base_url: String,
}

impl BlobFetcher {
    pub fn new(config: &BlobConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::FetchFailed(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Retrieve the full byte sequence of the image at `source_path`.
    ///
    /// The absolute location is `base_url + source_path`, with the path
    /// taken verbatim. Single attempt, whole body buffered; network
    /// errors, timeouts, and non-2xx responses all map to `FetchFailed`.
    pub async fn fetch(&self, source_path: &str) -> AppResult<Vec<u8>> {
        let url = format!("{}{}", self.base_url, source_path);
        debug!("Fetching source image from {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.bytes().await?;

        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}
