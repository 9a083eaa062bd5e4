//! Pagination-driven question collection.

use stacksent_core::Question;

use crate::client::{StackExchangeClient, MAX_PAGE_SIZE};
use crate::error::StackExchangeError;

/// Collect up to `target_count` questions whose titles match `search_term`.
///
/// Pages through `search/advanced` sequentially: each page requests
/// `min(100, remaining)` items, the first request omits the page number, and
/// subsequent requests carry the running page cursor. Collection stops the
/// moment the target is reached — the final page may be only partially
/// consumed — and no further request is issued.
///
/// If the API reports no more pages before the target is reached, the
/// shortfall is logged and the partial collection is returned as a success.
///
/// Guarantees: `result.len() <= target_count`, and `result.len()` equals the
/// smaller of the target and the remote supply. A `target_count` of zero
/// returns immediately without touching the network.
///
/// # Errors
///
/// Propagates any [`StackExchangeError`] from the page fetch; collection-stage
/// failures are fatal to the run.
pub async fn collect(
    client: &StackExchangeClient,
    search_term: &str,
    target_count: usize,
) -> Result<Vec<Question>, StackExchangeError> {
    let mut collection: Vec<Question> = Vec::new();
    if target_count == 0 {
        return Ok(collection);
    }

    let mut page_number: u32 = 1;
    let mut paged = false;

    loop {
        let remaining = target_count - collection.len();
        let page_size = MAX_PAGE_SIZE.min(u32::try_from(remaining).unwrap_or(MAX_PAGE_SIZE));
        tracing::debug!(
            collected = collection.len(),
            page_size,
            "requesting search page"
        );

        let page = paged.then_some(page_number);
        let response = client.search_page(search_term, page_size, page).await?;

        for item in response.items {
            collection.push(Question::from(item));
            if collection.len() >= target_count {
                tracing::info!(count = collection.len(), "search complete");
                return Ok(collection);
            }
        }

        if response.has_more {
            paged = true;
            page_number += 1;
        } else {
            tracing::warn!(
                collected = collection.len(),
                requested = target_count,
                "search supply exhausted before target count was reached"
            );
            return Ok(collection);
        }
    }
}
