use thiserror::Error;

/// Errors returned by the StackExchange API client.
///
/// All variants are fatal to a collection run; the collection stage has no
/// retry policy.
#[derive(Debug, Error)]
pub enum StackExchangeError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned its error envelope (`error_id` / `error_message`)
    /// in place of a result page.
    #[error("StackExchange API error {id}: {message}")]
    Api { id: i64, message: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The base URL given to the client is not a valid URL.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
