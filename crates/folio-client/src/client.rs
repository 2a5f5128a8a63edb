//! HTTP client
//!
//! Wraps a `reqwest::Client` configured with the base URL and timeout from
//! [`ApiConfig`]. The typed operations live in `endpoints/`.

use folio_common::ApiConfig;
use folio_core::{ApiResult, ErrorInfo};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::envelope::{self, Decoded};

/// Errors raised while constructing the client
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Portfolio REST API client
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a client for the configured base URL
    pub fn new(config: ApiConfig) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self { http, config })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Liveness probe; any 2xx counts as healthy and the body is ignored
    #[instrument(skip(self), fields(base_url = %self.config.base_url))]
    pub async fn health(&self) -> ApiResult<()> {
        let response = self
            .http
            .get(self.config.url("/health"))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Health probe failed");
                ErrorInfo::network(e)
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            warn!(status = status.as_u16(), "Health probe returned an error status");
            Err(ErrorInfo::http(status.as_u16()))
        }
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.config.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.config.url(path))
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.http.put(self.config.url(path))
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.http.delete(self.config.url(path))
    }

    /// Send a request and normalize whatever comes back
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ApiResult<Decoded<T>> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Request did not reach the server");
            ErrorInfo::network(e)
        })?;

        let status = response.status().as_u16();
        let url = response.url().path().to_string();
        let body = response.bytes().await.map_err(|e| {
            warn!(status, path = %url, error = %e, "Failed to read response body");
            ErrorInfo::network(e)
        })?;

        debug!(status, path = %url, bytes = body.len(), "Response received");

        envelope::decode(status, &body).inspect_err(|err| {
            warn!(
                status,
                path = %url,
                code = %err.code,
                message = %err.message,
                "API request failed"
            );
        })
    }

    /// [`execute`](Self::execute) without the pagination block
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        self.execute(request).await.map(|decoded| decoded.data)
    }
}
