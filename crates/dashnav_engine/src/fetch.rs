use std::time::Duration;

use engine_logging::engine_debug;
use url::Url;

use crate::FetchError;

/// Client settings for partial requests. No timeouts unless configured.
#[derive(Debug, Clone, Default)]
pub struct FetchSettings {
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

#[async_trait::async_trait]
pub trait PartialFetcher: Send + Sync {
    /// Fetches `path` (absolute, may carry a query) and returns the body text.
    async fn fetch(&self, path: &str) -> Result<String, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    base: Url,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(base_url: &str, settings: FetchSettings) -> Result<Self, FetchError> {
        let base = Url::parse(base_url).map_err(|err| FetchError::InvalidUrl(err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(format!("{base_url} cannot be a base")));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| FetchError::Network(err.to_string()))?;

        Ok(Self { base, client })
    }

    fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        self.base
            .join(path)
            .map_err(|err| FetchError::InvalidUrl(err.to_string()))
    }
}

#[async_trait::async_trait]
impl PartialFetcher for ReqwestFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let url = self.resolve(path)?;
        engine_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        response.text().await.map_err(|err| {
            if err.is_timeout() {
                FetchError::Timeout(err.to_string())
            } else {
                FetchError::Body(err.to_string())
            }
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::Timeout(err.to_string());
    }
    FetchError::Network(err.to_string())
}
