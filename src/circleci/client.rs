//! CircleCI HTTP client for API interactions

use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::circleci::traits::PaginatedResponse;
use crate::config::api;
use crate::error::{CircleError, Result};

/// CircleCI API client
pub struct CircleClient {
    client: Client,
    token: String,
    /// API root, e.g. `https://circleci.com/api` (no trailing slash)
    api_url: String,
}

impl CircleClient {
    /// Create a new CircleCI client
    ///
    /// No request timeout is configured: a dispatched call runs until the
    /// server answers or the connection fails.
    pub fn new(token: String, api_url: &str) -> Self {
        let client = Client::builder()
            // Connection pool settings - reuse connections
            .pool_max_idle_per_host(api::MAX_CONCURRENT_REQUESTS)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// API root this client talks to
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Base URL for API v2 requests
    pub(crate) fn v2_url(&self) -> String {
        format!("{}{}", self.api_url, api::V2_PATH)
    }

    /// Base URL for API v1.1 requests
    pub(crate) fn v1_url(&self) -> String {
        format!("{}{}", self.api_url, api::V1_PATH)
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header(api::TOKEN_HEADER, &self.token)
            .header("Accept", "application/json")
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Create a POST request builder with standard headers
    pub(crate) fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Create a PUT request builder with standard headers
    pub(crate) fn put(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.put(url))
    }

    /// Create a DELETE request builder with standard headers
    pub(crate) fn delete(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.delete(url))
    }

    /// Parse an API response, returning error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(api_error(response, error_context).await);
        }
        Ok(response.json().await?)
    }

    /// Check a mutation response, discarding the body on success
    pub(crate) async fn expect_success(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<()> {
        if !response.status().is_success() {
            return Err(api_error(response, error_context).await);
        }
        Ok(())
    }

    /// Fetch all pages of a v2 list endpoint
    ///
    /// CircleCI v2 paginates with an opaque cursor, so pages are fetched
    /// one after another, passing `next_page_token` back as `page-token`
    /// until the server stops returning one or repeats the previous one.
    ///
    /// # Arguments
    /// * `url` - Full URL of the first page (may already carry query params)
    /// * `error_context` - Context for error messages (e.g., "contexts for owner 'abc'")
    pub async fn fetch_all_pages<T, R>(&self, url: &str, error_context: &str) -> Result<Vec<T>>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        let separator = if url.contains('?') { "&" } else { "?" };
        let mut all_items = Vec::new();
        let mut page_token: Option<String> = None;
        let mut page_num: u32 = 1;

        loop {
            let page_url = match &page_token {
                Some(token) => format!(
                    "{}{}{}={}",
                    url,
                    separator,
                    api::PAGE_TOKEN_PARAM,
                    urlencoding::encode(token)
                ),
                None => url.to_string(),
            };

            debug!("Fetching page {} from: {}", page_num, page_url);

            let response = self.get(&page_url).send().await?;
            let page_context = format!("{} (page {})", error_context, page_num);
            let page: R = self.parse_api_response(response, &page_context).await?;

            let next = page.next_page_token().map(str::to_string);
            all_items.extend(page.into_items());

            match next {
                Some(token) if !token.is_empty() => {
                    if page_token.as_deref() == Some(token.as_str()) {
                        warn!(
                            "Server repeated page token for {}, stopping after page {}",
                            error_context, page_num
                        );
                        break;
                    }
                    page_token = Some(token);
                    page_num += 1;
                }
                _ => break,
            }
        }

        debug!(
            "Fetched {} total items for {} in {} page(s)",
            all_items.len(),
            error_context,
            page_num
        );
        Ok(all_items)
    }
}

/// Build an API error from a failed response, preferring the server's message
async fn api_error(response: reqwest::Response, error_context: &str) -> CircleError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v["message"].as_str().map(str::to_string))
        .unwrap_or(body);

    let message = if detail.trim().is_empty() {
        format!("Failed to {}", error_context)
    } else {
        format!("Failed to {}: {}", error_context, detail.trim())
    };

    CircleError::Api { status, message }
}

#[cfg(test)]
impl CircleClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new("test-token".to_string(), base_url)
    }
}
