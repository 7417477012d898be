use std::time::Duration;

use futures_util::StreamExt;

use crate::{FailureKind, FetchError, FetchedPage};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub page_size: usize,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            page_size: 25,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 1024 * 1024,
        }
    }
}

/// One page per call; the caller owns cursor bookkeeping and never sees a
/// retry from this layer.
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, cursor: Option<&str>) -> Result<FetchedPage, FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    base_url: String,
    settings: FetchSettings,
}

impl HttpPageFetcher {
    pub fn new(base_url: impl Into<String>, settings: FetchSettings) -> Self {
        Self {
            base_url: base_url.into(),
            settings,
        }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn listing_url(&self, cursor: Option<&str>) -> Result<reqwest::Url, FetchError> {
        let base = self.base_url.trim_end_matches('/');
        let mut url = reqwest::Url::parse(&format!("{base}/api/spots"))
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("limit", &self.settings.page_size.to_string());
        if let Some(cursor) = cursor {
            url.query_pairs_mut().append_pair("cursor", cursor);
        }
        Ok(url)
    }
}

#[async_trait::async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, cursor: Option<&str>) -> Result<FetchedPage, FetchError> {
        let url = self.listing_url(cursor)?;
        let client = self.build_client()?;

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::MalformedBody, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
