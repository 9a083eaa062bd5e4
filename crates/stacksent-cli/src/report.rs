//! Sentiment breakdown printed to stdout at the end of a run.

use stacksent_core::{Question, SentimentLabel};

/// Aggregated counts and mean scores over an enriched collection.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct SentimentBreakdown {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    /// Mean score over positive questions; `None` when there are none.
    pub mean_positive_score: Option<f64>,
    /// Mean score over negative questions; `None` when there are none.
    pub mean_negative_score: Option<f64>,
}

impl SentimentBreakdown {
    pub(crate) fn from_questions(questions: &[Question]) -> Self {
        let mut breakdown = Self {
            total: questions.len(),
            ..Self::default()
        };
        let mut positive_sum = 0.0;
        let mut negative_sum = 0.0;

        for question in questions {
            match question.sentiment_label {
                Some(SentimentLabel::Positive) => {
                    breakdown.positive += 1;
                    positive_sum += question.sentiment_score;
                }
                Some(SentimentLabel::Negative) => {
                    breakdown.negative += 1;
                    negative_sum += question.sentiment_score;
                }
                Some(SentimentLabel::Neutral) | None => breakdown.neutral += 1,
            }
        }

        breakdown.mean_positive_score = mean(positive_sum, breakdown.positive);
        breakdown.mean_negative_score = mean(negative_sum, breakdown.negative);

        breakdown
    }

    /// Share of `count` in the total, as a percentage.
    fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let share = count as f64 / self.total as f64;
        100.0 * share
    }
}

fn mean(sum: f64, count: usize) -> Option<f64> {
    if count == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let denom = count as f64;
    Some(sum / denom)
}

/// The question with the highest positive score, if any.
fn most_positive(questions: &[Question]) -> Option<&Question> {
    questions
        .iter()
        .filter(|q| q.sentiment_label == Some(SentimentLabel::Positive))
        .max_by(|a, b| a.sentiment_score.total_cmp(&b.sentiment_score))
}

/// The question with the lowest negative score, if any.
fn most_negative(questions: &[Question]) -> Option<&Question> {
    questions
        .iter()
        .filter(|q| q.sentiment_label == Some(SentimentLabel::Negative))
        .min_by(|a, b| a.sentiment_score.total_cmp(&b.sentiment_score))
}

fn print_question(heading: &str, question: &Question) {
    println!();
    println!("{heading}");
    println!("  title:  {}", question.title);
    println!("  author: {}", question.author_display_name);
    println!("  time:   {}", question.created_at);
    println!("  score:  {:.4}", question.sentiment_score);
}

/// Print the sentiment breakdown for an enriched collection.
pub(crate) fn print_report(questions: &[Question]) {
    let breakdown = SentimentBreakdown::from_questions(questions);
    if breakdown.total == 0 {
        println!("No enriched questions to report.");
        return;
    }

    println!();
    println!("Sentiment breakdown ({} questions)", breakdown.total);
    println!(
        "  positive: {} ({:.2}%)",
        breakdown.positive,
        breakdown.percent(breakdown.positive)
    );
    println!(
        "  negative: {} ({:.2}%)",
        breakdown.negative,
        breakdown.percent(breakdown.negative)
    );
    println!(
        "  neutral:  {} ({:.2}%)",
        breakdown.neutral,
        breakdown.percent(breakdown.neutral)
    );

    if let Some(mean) = breakdown.mean_positive_score {
        println!("  mean positive score: {mean:.4}");
    }
    if let Some(mean) = breakdown.mean_negative_score {
        println!("  mean negative score: {mean:.4}");
    }

    if let Some(question) = most_positive(questions) {
        print_question("Most positive question", question);
    }
    if let Some(question) = most_negative(questions) {
        print_question("Most negative question", question);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u64, label: Option<SentimentLabel>, score: f64) -> Question {
        Question {
            id,
            title: format!("question {id}"),
            created_at: 1_600_000_000,
            author_display_name: String::new(),
            sentiment_label: label,
            sentiment_score: score,
        }
    }

    #[test]
    fn breakdown_counts_labels_and_means() {
        let questions = vec![
            question(1, Some(SentimentLabel::Positive), 0.2),
            question(2, Some(SentimentLabel::Positive), 0.6),
            question(3, Some(SentimentLabel::Negative), -0.5),
            question(4, Some(SentimentLabel::Neutral), 0.0),
        ];

        let breakdown = SentimentBreakdown::from_questions(&questions);
        assert_eq!(breakdown.total, 4);
        assert_eq!(breakdown.positive, 2);
        assert_eq!(breakdown.negative, 1);
        assert_eq!(breakdown.neutral, 1);
        assert!((breakdown.mean_positive_score.unwrap() - 0.4).abs() < 1e-9);
        assert!((breakdown.mean_negative_score.unwrap() + 0.5).abs() < 1e-9);
    }

    #[test]
    fn breakdown_of_empty_collection_is_all_zero() {
        let breakdown = SentimentBreakdown::from_questions(&[]);
        assert_eq!(breakdown, SentimentBreakdown::default());
    }

    #[test]
    fn percentages_cover_the_collection() {
        let questions = vec![
            question(1, Some(SentimentLabel::Positive), 0.3),
            question(2, Some(SentimentLabel::Neutral), 0.0),
        ];
        let breakdown = SentimentBreakdown::from_questions(&questions);
        assert!((breakdown.percent(breakdown.positive) - 50.0).abs() < 1e-9);
        assert!((breakdown.percent(breakdown.neutral) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn most_positive_and_negative_pick_extremes() {
        let questions = vec![
            question(1, Some(SentimentLabel::Positive), 0.2),
            question(2, Some(SentimentLabel::Positive), 0.9),
            question(3, Some(SentimentLabel::Negative), -0.1),
            question(4, Some(SentimentLabel::Negative), -0.8),
        ];

        assert_eq!(most_positive(&questions).unwrap().id, 2);
        assert_eq!(most_negative(&questions).unwrap().id, 4);
    }

    #[test]
    fn extremes_are_absent_without_matching_labels() {
        let questions = vec![question(1, Some(SentimentLabel::Neutral), 0.0)];
        assert!(most_positive(&questions).is_none());
        assert!(most_negative(&questions).is_none());
    }
}
