//! End-to-end run orchestration: validate key → collect → dedup → enrich
//! → write.
//!
//! Collection-stage failures abort the run before any output file is
//! written; enrichment failures only shrink the output.

use std::path::Path;

use stacksent_alchemy::AlchemyClient;
use stacksent_core::{AppConfig, Question};
use stacksent_stackexchange::StackExchangeClient;

use crate::output;

/// Run the full pipeline and return the enriched collection that was
/// written to `output_path`.
pub(crate) async fn run(
    config: &AppConfig,
    search_term: &str,
    target_count: usize,
    output_path: &Path,
) -> anyhow::Result<Vec<Question>> {
    let alchemy = AlchemyClient::with_base_url(
        &config.alchemy_key,
        config.http_timeout_secs,
        &config.alchemy_base_url,
    )?;
    let search = StackExchangeClient::with_base_url(
        &config.stackexchange_key,
        &config.site,
        config.http_timeout_secs,
        &config.stackexchange_base_url,
    )?;

    // A rejected enrichment key aborts before any collection work.
    alchemy.validate_key().await?;

    let raw = stacksent_stackexchange::collect(&search, search_term, target_count).await?;
    let collected = raw.len();
    let questions = stacksent_core::dedup(raw);
    tracing::info!(
        collected,
        unique = questions.len(),
        "deduplication complete"
    );

    let enriched = stacksent_alchemy::enrich(
        &alchemy,
        questions,
        search_term,
        config.enrich_concurrency,
    )
    .await;

    output::write_output(output_path, &enriched)?;
    tracing::info!(
        path = %output_path.display(),
        count = enriched.len(),
        "wrote output file"
    );

    Ok(enriched)
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
