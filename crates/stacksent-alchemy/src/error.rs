use thiserror::Error;

/// Errors returned by the AlchemyAPI client.
///
/// During enrichment these are recovered per unit: the affected question is
/// dropped and the run continues. [`AlchemyError::InvalidKey`] from the
/// upfront validation call is fatal to the whole run.
#[derive(Debug, Error)]
pub enum AlchemyError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The key-info endpoint rejected the configured API key.
    #[error("invalid AlchemyAPI key ({key})")]
    InvalidKey { key: String },

    /// The API reported a non-OK status for a sentiment call.
    #[error("AlchemyAPI returned status {status}")]
    Api { status: String },

    /// The response reported OK but carried no `docSentiment` block.
    #[error("no docSentiment in AlchemyAPI response")]
    MissingSentiment,

    /// A positive or negative classification arrived without a usable score.
    #[error("unparseable sentiment score {raw:?}")]
    Score { raw: Option<String> },

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
