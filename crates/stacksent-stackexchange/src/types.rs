//! StackExchange API response types.
//!
//! Models the subset of the `search/advanced` wire format the collector
//! consumes. Required fields are required in the schema; a source item
//! missing one of them fails deserialization rather than producing a
//! half-populated question.

use serde::Deserialize;

use stacksent_core::Question;

/// One page of results from `search/advanced`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<SearchItem>,
    /// `true` while further pages are available for the same query.
    pub has_more: bool,
    #[serde(default)]
    pub quota_remaining: Option<i64>,
}

/// A single question record within a search response.
#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub question_id: u64,
    pub title: String,
    /// Epoch seconds; carried through to the output untouched.
    pub creation_date: i64,
    /// Absent for deleted or anonymized accounts.
    #[serde(default)]
    pub owner: Option<Owner>,
}

/// Owner block embedded in a [`SearchItem`].
#[derive(Debug, Default, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub display_name: Option<String>,
}

impl From<SearchItem> for Question {
    fn from(item: SearchItem) -> Self {
        let author_display_name = item
            .owner
            .and_then(|o| o.display_name)
            .unwrap_or_default();

        Question {
            id: item.question_id,
            title: item.title,
            created_at: item.creation_date,
            author_display_name,
            sentiment_label: None,
            sentiment_score: 0.0,
        }
    }
}
