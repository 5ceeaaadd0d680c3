//! HTTP client for the TVMaze API
//!
//! A thin JSON-over-GET wrapper. The client does not retry and, unless
//! configured otherwise, does not look at the HTTP status: any body that
//! decodes into the requested type counts as success.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, ShowFinderError};
use crate::types::{Episode, SearchHit, ShowSummary};

/// Base URL for the TVMaze API
pub const TVMAZE_BASE_URL: &str = "https://api.tvmaze.com";

/// Default User-Agent sent with every request
const DEFAULT_USER_AGENT: &str = concat!("showfinder/", env!("CARGO_PKG_VERSION"));

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL that endpoints are appended to (default: TVMaze)
    pub base_url: String,
    /// Request timeout in seconds (default: none)
    pub timeout_secs: Option<u64>,
    /// User-Agent header value
    pub user_agent: String,
    /// Treat non-2xx responses as errors instead of decoding their body (default: false)
    pub reject_error_status: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: TVMAZE_BASE_URL.to_string(),
            timeout_secs: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            reject_error_status: false,
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at another base URL (mock servers, mirrors)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// HTTP client for the show directory API
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Base URL without trailing slash
    base_url: String,
    reject_error_status: bool,
}

impl ApiClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `ShowFinderError::InvalidUrl` - `base_url` is not an absolute URL
    /// - `ShowFinderError::HttpError` - the HTTP client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        reqwest::Url::parse(&config.base_url)
            .map_err(|e| ShowFinderError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            reject_error_status: config.reject_error_status,
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch `endpoint` relative to the base URL and decode the body as JSON.
    ///
    /// # Arguments
    /// * `endpoint` - Path fragment such as `shows/1` or `search/shows?q=x`
    ///
    /// # Errors
    /// - `ShowFinderError::HttpError` - network failure or body read failure
    /// - `ShowFinderError::DecodeError` - body is not JSON of the expected shape
    /// - `ShowFinderError::StatusError` - non-2xx status with `reject_error_status` set
    pub async fn fetch_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if self.reject_error_status && !status.is_success() {
            return Err(ShowFinderError::StatusError {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!(%url, status = status.as_u16(), bytes = body.len(), "response received");

        serde_json::from_slice(&body).map_err(|e| ShowFinderError::DecodeError {
            endpoint: endpoint.to_string(),
            message: e.to_string(),
        })
    }

    /// Search shows by free text; hits come back in API relevance order.
    pub async fn search_shows(&self, query: &str) -> Result<Vec<SearchHit>> {
        self.fetch_json(&search_endpoint(query)).await
    }

    /// Fetch a single show by id
    pub async fn show(&self, show_id: u64) -> Result<ShowSummary> {
        self.fetch_json(&format!("shows/{}", show_id)).await
    }

    /// Fetch every episode of a show, in API order
    pub async fn episodes(&self, show_id: u64) -> Result<Vec<Episode>> {
        self.fetch_json(&format!("shows/{}/episodes", show_id)).await
    }
}

/// Build the search endpoint for `query`. The query is percent-encoded as-is,
/// without trimming.
pub fn search_endpoint(query: &str) -> String {
    format!("search/shows?q={}", urlencoding::encode(query))
}
