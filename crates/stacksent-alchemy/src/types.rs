//! AlchemyAPI response types.
//!
//! Every AlchemyAPI response carries a top-level `"status"` field that is
//! `"OK"` on success; sentiment calls additionally return a `docSentiment`
//! block. Scores travel as JSON strings on the wire (e.g. `"0.52"`) and are
//! absent entirely for neutral documents.

use serde::Deserialize;

/// Response envelope for the text-sentiment endpoint.
#[derive(Debug, Deserialize)]
pub struct SentimentResponse {
    pub status: String,
    #[serde(default, rename = "statusInfo")]
    pub status_info: Option<String>,
    #[serde(default, rename = "docSentiment")]
    pub doc_sentiment: Option<DocSentiment>,
}

/// Document-level sentiment classification.
#[derive(Debug, Deserialize)]
pub struct DocSentiment {
    /// `"positive"`, `"negative"`, or `"neutral"`.
    #[serde(rename = "type")]
    pub label: String,
    /// String on the wire; absent for neutral documents.
    #[serde(default)]
    pub score: Option<String>,
}

/// Response envelope for the key-info endpoint.
#[derive(Debug, Deserialize)]
pub struct KeyInfoResponse {
    pub status: String,
    #[serde(default, rename = "consumedDailyTransactions")]
    pub consumed_daily_transactions: Option<String>,
    #[serde(default, rename = "dailyTransactionLimit")]
    pub daily_transaction_limit: Option<String>,
}
