//! CoinLore REST API client implementation.
//!
//! The [`CoinloreClient`] wraps one pooled `reqwest` client and a base URL.
//! All three operations share a single request path: build the endpoint,
//! GET it, reject anything but `200 OK`, decode the body according to the
//! endpoint's [`Envelope`], then apply the operation's empty-result rule.
//!
//! # Example
//!
//! ```rust,ignore
//! use coinlore::api::CoinloreClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinloreClient::new("https://api.coinlore.net")?;
//!
//!     let coins = client.get_coins(0, 10).await?;
//!     println!("Fetched {} coins", coins.len());
//!
//!     let bitcoin = client.get_coin(90).await?;
//!     println!("{}: {} USD", bitcoin.name, bitcoin.price_usd);
//!
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::api::error::{ClientError, ClientResult};
use crate::api::types::*;
use crate::network::DEFAULT_API_URL;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Idle connections kept per host.
const POOL_MAX_IDLE_PER_HOST: usize = 10;

// =============================================================================
// Endpoints
// =============================================================================

/// Outer JSON shape of a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// `{"data": [...]}`
    Data,
    /// Top-level array `[...]`
    Bare,
}

impl Envelope {
    /// Decode a body into its element sequence.
    ///
    /// A `null` body or `null` data field yields an empty sequence, and `null`
    /// elements decode as `T::default()`.
    pub fn decode<T>(self, body: &[u8]) -> Result<Vec<T>, serde_json::Error>
    where
        T: DeserializeOwned + Default,
    {
        let elements: Vec<Option<T>> = match self {
            Envelope::Data => serde_json::from_slice::<Option<ListResponse<Option<T>>>>(body)?
                .map(|r| r.data)
                .unwrap_or_default(),
            Envelope::Bare => serde_json::from_slice::<Option<Vec<Option<T>>>>(body)?
                .unwrap_or_default(),
        };
        Ok(elements.into_iter().map(Option::unwrap_or_default).collect())
    }
}

/// Upstream endpoints, each with its path template and envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Paginated coin list. Values are sent verbatim, negatives included.
    Tickers { start: i64, limit: i64 },
    /// Single coin by numeric id
    Ticker { id: i64 },
    /// Global market aggregates
    Global,
}

impl Endpoint {
    /// Path relative to the base URL, without a leading slash.
    pub fn path(&self) -> String {
        match *self {
            Endpoint::Tickers { start, limit } => {
                format!("api/tickers/?start={}&limit={}", start, limit)
            }
            Endpoint::Ticker { id } => format!("api/ticker/?id={}", id),
            Endpoint::Global => "api/global/".to_string(),
        }
    }

    /// Envelope the endpoint answers with.
    pub fn envelope(&self) -> Envelope {
        match self {
            Endpoint::Tickers { .. } => Envelope::Data,
            Endpoint::Ticker { .. } | Endpoint::Global => Envelope::Bare,
        }
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for configuring [`CoinloreClient`].
#[derive(Debug, Clone)]
pub struct CoinloreClientBuilder {
    base_url: String,
    timeout: Duration,
    default_headers: Vec<(String, String)>,
}

impl Default for CoinloreClientBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl CoinloreClientBuilder {
    /// Create a new builder with the given base URL.
    ///
    /// The URL is not validated here; a malformed URL fails on the first request.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: Vec::new(),
        }
    }

    /// Set the request timeout applied to every call.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Add a default header to all requests.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Build the client.
    pub fn build(self) -> ClientResult<CoinloreClient> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        for (name, value) in self.default_headers {
            let header_name = reqwest::header::HeaderName::try_from(name.as_str()).map_err(|e| {
                ClientError::InvalidParameter(format!("Invalid header name '{}': {}", name, e))
            })?;
            let header_value = reqwest::header::HeaderValue::from_str(&value).map_err(|e| {
                ClientError::InvalidParameter(format!("Invalid header value for '{}': {}", name, e))
            })?;
            headers.insert(header_name, header_value);
        }

        let http_client = Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                ClientError::InvalidParameter(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(CoinloreClient {
            http_client,
            base_url: self.base_url,
            timeout: self.timeout,
        })
    }
}

// =============================================================================
// Client
// =============================================================================

/// CoinLore REST API client.
///
/// Immutable after construction. Clones share the connection pool, so one
/// instance can serve concurrent tasks.
#[derive(Debug, Clone)]
pub struct CoinloreClient {
    http_client: Client,
    base_url: String,
    timeout: Duration,
}

impl CoinloreClient {
    /// Create a new client with the given base URL and a 10s timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        CoinloreClientBuilder::new(base_url).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(base_url: impl Into<String>) -> CoinloreClientBuilder {
        CoinloreClientBuilder::new(base_url)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL for an endpoint.
    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.path())
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// GET an endpoint and decode its element sequence.
    async fn fetch<T>(&self, endpoint: Endpoint) -> ClientResult<Vec<T>>
    where
        T: DeserializeOwned + Default,
    {
        let url = self.url_for(endpoint);
        tracing::debug!(url = %url, "Sending request");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        tracing::debug!(url = %url, status = %status, "Received response");

        if status != StatusCode::OK {
            let body = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("Failed to read error response body: {}", e);
                    String::new()
                }
            };
            tracing::warn!(url = %url, status = status.as_u16(), "Unexpected response status");
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await.map_err(ClientError::Transport)?;

        endpoint.envelope().decode(&body).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Failed to decode response");
            ClientError::Deserialize(e)
        })
    }

    // =========================================================================
    // Ticker endpoints
    // =========================================================================

    /// Get a page of coins.
    ///
    /// `start` and `limit` go to the upstream unchecked. An empty page is a
    /// successful, empty result.
    pub async fn get_coins(&self, start: i64, limit: i64) -> ClientResult<Vec<Coin>> {
        self.fetch(Endpoint::Tickers { start, limit }).await
    }

    /// Get a single coin by its id.
    ///
    /// Returns [`ClientError::NotFound`] (404) when the upstream answers with an
    /// empty array. Extra elements beyond the first are ignored.
    pub async fn get_coin(&self, id: i64) -> ClientResult<Coin> {
        self.fetch::<Coin>(Endpoint::Ticker { id })
            .await?
            .into_iter()
            .next()
            .ok_or(ClientError::NotFound { id })
    }

    // =========================================================================
    // Global endpoint
    // =========================================================================

    /// Get global market aggregates.
    ///
    /// Returns [`ClientError::NoGlobalData`] (500) when the upstream answers with
    /// an empty array.
    pub async fn get_global(&self) -> ClientResult<Global> {
        self.fetch::<Global>(Endpoint::Global)
            .await?
            .into_iter()
            .next()
            .ok_or(ClientError::NoGlobalData)
    }
}
