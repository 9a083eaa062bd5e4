//! Concurrent sentiment enrichment.
//!
//! One sentiment call per question, fanned out over a fixed-width pool of
//! in-flight futures. A unit's outcome is an explicit
//! `Result<Question, AlchemyError>`; failed units are logged and dropped so
//! the batch as a whole never fails because of individual enrichment errors.

use futures::stream::{self, StreamExt};

use stacksent_core::{Question, SentimentLabel};

use crate::client::AlchemyClient;
use crate::error::AlchemyError;
use crate::types::DocSentiment;

/// Attach a sentiment classification to each question.
///
/// Fans out up to `concurrency` simultaneous sentiment calls (the pool is
/// clamped to at least one worker) and waits for every unit to finish before
/// returning. Output order is unspecified and need not match input order.
///
/// Questions whose call failed — transport error, non-OK status, or a
/// malformed response — are dropped from the output; each drop is logged
/// with the question id. `sentiment_target` is the phrase the run was
/// collected for and is carried into the diagnostics.
///
/// Guarantees: every returned question is fully enriched and appears exactly
/// once; the output is never larger than the input.
pub async fn enrich(
    client: &AlchemyClient,
    questions: Vec<Question>,
    sentiment_target: &str,
    concurrency: usize,
) -> Vec<Question> {
    let width = concurrency.max(1);
    let total = questions.len();

    let outcomes: Vec<(u64, Result<Question, AlchemyError>)> = stream::iter(questions)
        .map(|question| {
            let id = question.id;
            async move { (id, attach_sentiment(client, question).await) }
        })
        .buffer_unordered(width)
        .collect()
        .await;

    let mut enriched = Vec::with_capacity(outcomes.len());
    for (id, outcome) in outcomes {
        match outcome {
            Ok(question) => enriched.push(question),
            Err(e) => {
                tracing::warn!(
                    question_id = id,
                    target = sentiment_target,
                    error = %e,
                    "enrichment failed; dropping question"
                );
            }
        }
    }

    tracing::info!(enriched = enriched.len(), total, "enrichment complete");
    enriched
}

/// Run one enrichment unit: call the sentiment endpoint with the question's
/// title and attach the interpreted label and score.
async fn attach_sentiment(
    client: &AlchemyClient,
    mut question: Question,
) -> Result<Question, AlchemyError> {
    let doc = client.text_sentiment(&question.title).await?;
    let (label, score) = interpret_sentiment(&doc)?;

    question.sentiment_label = Some(label);
    question.sentiment_score = score;
    Ok(question)
}

/// Map a `docSentiment` block onto the output label and score.
///
/// Positive and negative classifications must carry a parseable score;
/// neutral (or any unrecognized label) gets a score of `0.0`.
fn interpret_sentiment(doc: &DocSentiment) -> Result<(SentimentLabel, f64), AlchemyError> {
    let label = match doc.label.as_str() {
        "positive" => SentimentLabel::Positive,
        "negative" => SentimentLabel::Negative,
        _ => return Ok((SentimentLabel::Neutral, 0.0)),
    };

    let score = doc
        .score
        .as_deref()
        .and_then(|raw| raw.parse::<f64>().ok())
        .ok_or_else(|| AlchemyError::Score {
            raw: doc.score.clone(),
        })?;

    Ok((label, score))
}
