//! The `Question` data model and the deduplication pass.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Sentiment classification attached to a question after enrichment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

/// One question retrieved from the search API, optionally annotated
/// with sentiment.
///
/// A question is either fully enriched (label and score attached) or dropped
/// from the output entirely; it is never partially enriched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Stable identifier assigned by the source API. Unique within the
    /// final output collection.
    pub id: u64,

    /// Question title; also the exact text submitted for sentiment analysis.
    pub title: String,

    /// Server-reported creation time, epoch seconds. Carried through untouched.
    pub created_at: i64,

    /// Empty when the source record omits owner data.
    #[serde(default)]
    pub author_display_name: String,

    /// Present only after successful enrichment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_label: Option<SentimentLabel>,

    /// Meaningful only when the label is positive or negative; `0.0` otherwise.
    #[serde(default)]
    pub sentiment_score: f64,
}

/// Remove duplicate questions by id, keeping the first occurrence of each.
///
/// Order-preserving: the relative order of first occurrences is unchanged.
/// Idempotent, and never increases the length of the input.
#[must_use]
pub fn dedup(mut questions: Vec<Question>) -> Vec<Question> {
    let mut seen: HashSet<u64> = HashSet::new();
    questions.retain(|q| seen.insert(q.id));
    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u64) -> Question {
        Question {
            id,
            title: format!("question {id}"),
            created_at: 1_700_000_000,
            author_display_name: String::new(),
            sentiment_label: None,
            sentiment_score: 0.0,
        }
    }

    #[test]
    fn dedup_keeps_first_occurrence_in_order() {
        let input = vec![question(1), question(2), question(1)];
        let output = dedup(input);

        let ids: Vec<u64> = output.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn dedup_is_idempotent() {
        let input = vec![question(3), question(1), question(3), question(2)];
        let once = dedup(input);
        let twice = dedup(once.clone());

        let once_ids: Vec<u64> = once.iter().map(|q| q.id).collect();
        let twice_ids: Vec<u64> = twice.iter().map(|q| q.id).collect();
        assert_eq!(once_ids, twice_ids);
    }

    #[test]
    fn dedup_never_increases_length() {
        let input = vec![question(1), question(1), question(1)];
        assert_eq!(dedup(input).len(), 1);

        let empty: Vec<Question> = Vec::new();
        assert!(dedup(empty).is_empty());
    }

    #[test]
    fn serializes_with_output_field_names() {
        let mut q = question(42);
        q.title = "why recursion?".to_string();
        q.author_display_name = "ada".to_string();
        q.sentiment_label = Some(SentimentLabel::Negative);
        q.sentiment_score = -0.31;

        let value = serde_json::to_value(&q).expect("question should serialize");
        assert_eq!(value["id"], 42);
        assert_eq!(value["title"], "why recursion?");
        assert_eq!(value["createdAt"], 1_700_000_000);
        assert_eq!(value["authorDisplayName"], "ada");
        assert_eq!(value["sentimentLabel"], "negative");
        assert!((value["sentimentScore"].as_f64().unwrap() + 0.31).abs() < f64::EPSILON);
    }

    #[test]
    fn label_is_omitted_before_enrichment() {
        let q = question(7);
        let value = serde_json::to_value(&q).expect("question should serialize");

        assert!(value.get("sentimentLabel").is_none());
        assert!((value["sentimentScore"].as_f64().unwrap()).abs() < f64::EPSILON);
    }
}
