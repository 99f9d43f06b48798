//! HTTP client for the upstream school API.
//!
//! [`UpstreamClient`] implements the course, user and enrollment repository
//! traits by crawling every page of the matching endpoint.

mod courses;
mod enrollments;
mod users;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;

use enrollsync_core::storage::{crawl_pages, Page, RepositoryError, Result};

/// Header carrying the upstream API key.
const API_KEY_HEADER: HeaderName = HeaderName::from_static("apikey");

/// HTTP client for the upstream school API.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a new client for `base_url`, authenticating with `api_key`.
    ///
    /// `timeout` bounds each page request individually.
    pub fn new(base_url: impl Into<String>, api_key: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|_| RepositoryError::internal("API key is not a valid header value"))?;
        key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, key);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(map_request_error)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetches every page of `path` and concatenates the items.
    async fn fetch_all<R, T>(&self, resource: &'static str, path: &str) -> Result<Vec<T>>
    where
        R: DeserializeOwned + Into<Page<T>>,
    {
        let items = crawl_pages(resource, move |page| async move {
            let response: R = self.fetch_page(resource, path, page).await?;
            Ok::<Page<T>, RepositoryError>(response.into())
        })
        .await?;

        tracing::debug!(resource, count = items.len(), "Fetched upstream collection");
        Ok(items)
    }

    /// Fetches and decodes a single page.
    async fn fetch_page<R: DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
        page: u64,
    ) -> Result<R> {
        tracing::debug!(resource, page, "Fetching upstream page");

        let response = self
            .client
            .get(self.url(path))
            .query(&[("page", page)])
            .send()
            .await
            .map_err(map_request_error)?;

        self.handle_response(resource, response).await
    }

    /// Handle error responses.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        resource: &'static str,
        response: reqwest::Response,
    ) -> Result<R> {
        let status = response.status();
        let reason = status
            .canonical_reason()
            .unwrap_or("Unknown status")
            .to_string();

        if status.is_success() {
            response.json().await.map_err(map_request_error)
        } else if status.as_u16() == 404 {
            Err(RepositoryError::not_found(resource, reason))
        } else {
            Err(RepositoryError::internal(format!(
                "Failed to fetch {}: {}",
                resource, reason
            )))
        }
    }
}

/// Maps reqwest errors (transport, timeout, body decoding) to `Internal`.
fn map_request_error(err: reqwest::Error) -> RepositoryError {
    RepositoryError::internal(err.to_string())
}
