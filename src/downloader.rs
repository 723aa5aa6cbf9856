use crate::dataset::{DataLoadError, Dataset};
use reqwest::Client;
use std::time::Duration;

/// Configuration for the dataset downloader
#[derive(Debug, Clone)]
pub struct DownloaderConfig {
    /// Maximum number of retry attempts (default: 3)
    pub max_retries: u32,
    /// Request timeout in seconds (default: 30)
    pub timeout_seconds: u64,
}

impl Default for DownloaderConfig {
    fn default() -> Self {
        DownloaderConfig {
            max_retries: 3,
            timeout_seconds: 30,
        }
    }
}

/// Launch-records dataset downloader
///
/// Fetches the launch-records CSV from a URL so a local copy can be
/// bootstrapped before the server starts.
#[derive(Debug)]
pub struct DatasetDownloader {
    client: Client,
    config: DownloaderConfig,
}

impl DatasetDownloader {
    /// Creates a new dataset downloader with default configuration.
    ///
    /// # Returns
    /// Returns `Ok(DatasetDownloader)` if successful, or an error if HTTP client creation fails.
    pub fn new() -> Result<Self, DownloadError> {
        Self::with_config(DownloaderConfig::default())
    }

    /// Creates a new dataset downloader with custom configuration.
    ///
    /// # Arguments
    /// * `config` - Configuration for the downloader (retries, timeout)
    ///
    /// # Returns
    /// Returns `Ok(DatasetDownloader)` if successful, or an error if HTTP client creation fails.
    pub fn with_config(config: DownloaderConfig) -> Result<Self, DownloadError> {
        let timeout = Duration::from_secs(config.timeout_seconds);
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DownloadError::ClientCreation(e.to_string()))?;

        Ok(DatasetDownloader { client, config })
    }

    /// Fetches the raw CSV body from the given URL.
    ///
    /// Retries transient network failures up to `max_retries` times.
    ///
    /// # Errors
    /// Returns `DownloadError` if every attempt fails or the server
    /// responds with a non-success status.
    pub async fn fetch_csv(&self, url: &str) -> Result<String, DownloadError> {
        let mut last_error = DownloadError::Network("no attempts made".to_string());

        for _ in 0..self.config.max_retries.max(1) {
            let response = match self.client.get(url).send().await {
                Ok(response) => response,
                Err(e) => {
                    last_error = DownloadError::Network(e.to_string());
                    continue;
                }
            };

            let status = response.status();
            if !status.is_success() {
                // Non-success status is not retried; the server answered.
                return Err(DownloadError::Api(format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown error")
                )));
            }

            return response
                .text()
                .await
                .map_err(|e| DownloadError::Network(e.to_string()));
        }

        Err(last_error)
    }

    /// Downloads and parses the dataset in one step.
    ///
    /// # Errors
    /// Returns `DownloadError::Load` if the fetched CSV fails dataset
    /// validation, or a network/API error if the fetch itself fails.
    pub async fn download_dataset(&self, url: &str) -> Result<Dataset, DownloadError> {
        let body = self.fetch_csv(url).await?;
        Dataset::from_reader(body.as_bytes()).map_err(DownloadError::Load)
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &DownloaderConfig {
        &self.config
    }
}

/// Errors that can occur while downloading the dataset.
#[derive(Debug)]
pub enum DownloadError {
    /// HTTP client creation failed
    ClientCreation(String),
    /// Network error occurred
    Network(String),
    /// Server returned an error response
    Api(String),
    /// Fetched CSV failed dataset validation
    Load(DataLoadError),
}

impl std::fmt::Display for DownloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DownloadError::ClientCreation(msg) => write!(f, "client creation error: {}", msg),
            DownloadError::Network(msg) => write!(f, "network error: {}", msg),
            DownloadError::Api(msg) => write!(f, "API error: {}", msg),
            DownloadError::Load(err) => write!(f, "downloaded dataset is invalid: {}", err),
        }
    }
}

impl std::error::Error for DownloadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DownloadError::Load(err) => Some(err),
            _ => None,
        }
    }
}
