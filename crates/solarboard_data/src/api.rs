use std::time::Duration;

use board_logging::board_debug;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;
use url::Url;

use crate::source::ProjectSource;
use crate::{DailyReportDto, FailureKind, FetchError, ProjectPageDto, ProjectQuery};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 8 * 1024 * 1024,
        }
    }
}

/// `ProjectSource` backed by the HTTP project API.
#[derive(Debug, Clone)]
pub struct HttpProjectSource {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl HttpProjectSource {
    pub fn new(settings: ApiSettings) -> Result<Self, FetchError> {
        // Fail early on a base URL we could never append a path to.
        endpoint(&settings.base_url, "projects")?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        board_debug!("GET {}", url);
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            body.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }
}

#[async_trait::async_trait]
impl ProjectSource for HttpProjectSource {
    async fn get_all_projects(&self, query: &ProjectQuery) -> Result<ProjectPageDto, FetchError> {
        let mut url = endpoint(&self.settings.base_url, "projects")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("pageNumber", &query.page_number.to_string());
            pairs.append_pair("pageSize", &query.page_size.to_string());
            if let Some(status) = query.status.as_deref() {
                pairs.append_pair("status", status);
            }
        }
        self.get_json(url).await
    }

    async fn get_recent_reports(&self, limit: u32) -> Result<Vec<DailyReportDto>, FetchError> {
        let mut url = endpoint(&self.settings.base_url, "daily-reports")?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        self.get_json(url).await
    }
}

/// `{base}/{segment}` regardless of whether the base ends in a slash.
fn endpoint(base_url: &str, segment: &str) -> Result<Url, FetchError> {
    let mut url = Url::parse(base_url)
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| FetchError::new(FailureKind::InvalidUrl, "base url cannot carry a path"))?
        .pop_if_empty()
        .push(segment);
    Ok(url)
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
