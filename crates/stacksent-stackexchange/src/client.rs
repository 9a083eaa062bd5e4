//! HTTP client for the StackExchange search API.
//!
//! Wraps `reqwest` with request-key management and typed deserialization of
//! `search/advanced` pages. The API signals failures with an error envelope
//! (`error_id` / `error_message`) and a non-2xx status, so the body is parsed
//! and checked before the HTTP status is enforced.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::StackExchangeError;
use crate::types::SearchResponse;

const DEFAULT_BASE_URL: &str = "https://api.stackexchange.com/2.2/";

/// The API rejects `pagesize` values above 100.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Client for the StackExchange search API.
///
/// Manages the HTTP client, request key, site, and base URL. Use
/// [`StackExchangeClient::new`] for production or
/// [`StackExchangeClient::with_base_url`] to point at a mock server in tests.
pub struct StackExchangeClient {
    client: Client,
    request_key: String,
    site: String,
    base_url: Url,
}

impl StackExchangeClient {
    /// Creates a new client pointed at the production StackExchange API.
    ///
    /// # Errors
    ///
    /// Returns [`StackExchangeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(request_key: &str, site: &str, timeout_secs: u64) -> Result<Self, StackExchangeError> {
        Self::with_base_url(request_key, site, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`StackExchangeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`StackExchangeError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        request_key: &str,
        site: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, StackExchangeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("stacksent/0.1 (question-sentiment)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // Url::join appends the endpoint path instead of replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalised).map_err(|e| StackExchangeError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            request_key: request_key.to_owned(),
            site: site.to_owned(),
            base_url,
        })
    }

    /// Fetches one page of `search/advanced` results filtered by title.
    ///
    /// `page` is `None` for the first request; subsequent requests pass the
    /// running page number. Results are ordered most-recently-active-first
    /// (`order=desc`, `sort=activity`).
    ///
    /// # Errors
    ///
    /// - [`StackExchangeError::Api`] if the API returns its error envelope.
    /// - [`StackExchangeError::Http`] on network failure or a non-2xx status
    ///   without an envelope.
    /// - [`StackExchangeError::Deserialize`] if the response does not match
    ///   the expected shape.
    pub async fn search_page(
        &self,
        title: &str,
        page_size: u32,
        page: Option<u32>,
    ) -> Result<SearchResponse, StackExchangeError> {
        let url = self.build_url(title, page_size, page);
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        serde_json::from_value(body).map_err(|e| StackExchangeError::Deserialize {
            context: format!("search/advanced(title={title}, page={page:?})"),
            source: e,
        })
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters.
    fn build_url(&self, title: &str, page_size: u32, page: Option<u32>) -> Url {
        let mut url = self
            .base_url
            .join("search/advanced")
            .unwrap_or_else(|_| self.base_url.clone());
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.request_key);
            pairs.append_pair("site", &self.site);
            pairs.append_pair("order", "desc");
            pairs.append_pair("sort", "activity");
            pairs.append_pair("title", title);
            pairs.append_pair("pagesize", &page_size.to_string());
            if let Some(page) = page {
                pairs.append_pair("page", &page.to_string());
            }
        }
        url
    }

    /// Sends a GET request and parses the response body as JSON.
    ///
    /// The body is read before the status is enforced: the API wraps errors
    /// in a JSON envelope carried on a 400 response, which
    /// [`Self::check_api_error`] turns into a more useful diagnostic than a
    /// bare status code.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, StackExchangeError> {
        let response = self.client.get(url.clone()).send().await?;
        let status_error = response.error_for_status_ref().err();
        let body = response.text().await?;

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                if let Some(status_error) = status_error {
                    return Err(StackExchangeError::Http(status_error));
                }
                Err(StackExchangeError::Deserialize {
                    context: url.to_string(),
                    source: e,
                })
            }
        }
    }

    /// Checks for the API error envelope and surfaces it as
    /// [`StackExchangeError::Api`].
    fn check_api_error(body: &serde_json::Value) -> Result<(), StackExchangeError> {
        if let Some(id) = body.get("error_id").and_then(serde_json::Value::as_i64) {
            let message = body
                .get("error_message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(StackExchangeError::Api { id, message });
        }
        Ok(())
    }
}
