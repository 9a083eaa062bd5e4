//! HTTP client for the AlchemyAPI text-analysis service.
//!
//! Wraps `reqwest` with API-key management and typed deserialization for the
//! key-info and text-sentiment endpoints. The service always answers 200 with
//! a `"status"` field in the JSON body, so API-level failures are detected
//! there rather than from the HTTP status.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::AlchemyError;
use crate::types::{DocSentiment, KeyInfoResponse, SentimentResponse};

const DEFAULT_BASE_URL: &str = "http://access.alchemyapi.com/";
const KEY_INFO_PATH: &str = "calls/info/GetAPIKeyInfo";
const TEXT_SENTIMENT_PATH: &str = "calls/text/TextGetTextSentiment";

/// Client for the AlchemyAPI text-analysis service.
///
/// Manages the HTTP client, API key, and base URL. Use [`AlchemyClient::new`]
/// for production or [`AlchemyClient::with_base_url`] to point at a mock
/// server in tests.
pub struct AlchemyClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl AlchemyClient {
    /// Creates a new client pointed at the production AlchemyAPI service.
    ///
    /// # Errors
    ///
    /// Returns [`AlchemyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, AlchemyError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`AlchemyError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`AlchemyError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, AlchemyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("stacksent/0.1 (question-sentiment)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // Url::join appends the endpoint path instead of replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| AlchemyError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Validates the configured API key against the key-info endpoint.
    ///
    /// Called once at startup; a rejected key aborts the run before any
    /// collection work begins.
    ///
    /// # Errors
    ///
    /// - [`AlchemyError::InvalidKey`] if the service reports a non-OK status;
    ///   the offending key is echoed back for the operator.
    /// - [`AlchemyError::Http`] / [`AlchemyError::Deserialize`] on transport
    ///   or response-shape failures.
    pub async fn validate_key(&self) -> Result<(), AlchemyError> {
        let url = self.build_url(KEY_INFO_PATH, &[("outputMode", "json")]);
        let response: KeyInfoResponse = self.request_json(&url, "GetAPIKeyInfo").await?;

        if response.status != "OK" {
            return Err(AlchemyError::InvalidKey {
                key: self.api_key.clone(),
            });
        }
        Ok(())
    }

    /// Requests a document-level sentiment classification for `text`.
    ///
    /// # Errors
    ///
    /// - [`AlchemyError::Api`] if the service reports a non-OK status.
    /// - [`AlchemyError::MissingSentiment`] if an OK response carries no
    ///   `docSentiment` block.
    /// - [`AlchemyError::Http`] / [`AlchemyError::Deserialize`] on transport
    ///   or response-shape failures.
    pub async fn text_sentiment(&self, text: &str) -> Result<DocSentiment, AlchemyError> {
        let url = self.build_url(
            TEXT_SENTIMENT_PATH,
            &[
                ("text", text),
                ("outputMode", "json"),
                ("showSourceText", "1"),
            ],
        );
        let response: SentimentResponse = self.request_json(&url, "TextGetTextSentiment").await?;

        if response.status != "OK" {
            let status = response
                .status_info
                .map_or(response.status.clone(), |info| {
                    format!("{} ({info})", response.status)
                });
            return Err(AlchemyError::Api { status });
        }

        response.doc_sentiment.ok_or(AlchemyError::MissingSentiment)
    }

    /// Builds the full request URL with properly percent-encoded query
    /// parameters. The API key is always the first parameter.
    fn build_url(&self, path: &str, extra: &[(&str, &str)]) -> Url {
        let mut url = self
            .base_url
            .join(path)
            .unwrap_or_else(|_| self.base_url.clone());
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("apikey", &self.api_key);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and deserializes the
    /// response body.
    async fn request_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<T, AlchemyError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| AlchemyError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> AlchemyClient {
        AlchemyClient::with_base_url("test-key", 30, base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn build_url_puts_api_key_first() {
        let client = test_client("http://access.alchemyapi.com");
        let url = client.build_url(KEY_INFO_PATH, &[("outputMode", "json")]);
        assert_eq!(
            url.as_str(),
            "http://access.alchemyapi.com/calls/info/GetAPIKeyInfo?apikey=test-key&outputMode=json"
        );
    }

    #[test]
    fn build_url_encodes_text_payload() {
        let client = test_client("http://access.alchemyapi.com/");
        let url = client.build_url(TEXT_SENTIMENT_PATH, &[("text", "why & how?")]);
        assert!(
            url.as_str().contains("why+%26+how%3F") || url.as_str().contains("why%20%26%20how%3F"),
            "text param should be percent-encoded: {url}"
        );
    }
}
