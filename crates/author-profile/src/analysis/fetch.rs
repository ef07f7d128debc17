//! Cursor pagination over an author's complete works listing.

use crate::client::WorksSource;
use crate::error::ClientResult;
use crate::models::{AuthorId, Work};

/// Cursor value that starts a fresh pagination.
pub const INITIAL_CURSOR: &str = "*";

/// Works accumulated by one fetch.
#[derive(Debug, Clone, Default)]
pub struct FetchedWorks {
    /// Raw works in page order.
    pub works: Vec<Work>,

    /// Pages requested.
    pub pages: usize,

    /// True when the accumulation cap stopped pagination early.
    pub truncated: bool,
}

/// Retrieve every work whose authorships include `author`.
///
/// Pages are requested one after another, each with the cursor returned by
/// the previous response. Once more than `cap` works have been collected and
/// another page is still available, pagination stops and the result is
/// flagged as truncated. Any failed page aborts the whole fetch.
pub async fn fetch_author_works(
    source: &dyn WorksSource,
    author: &AuthorId,
    per_page: u32,
    cap: usize,
) -> ClientResult<FetchedWorks> {
    let filter = author.works_filter();
    let mut fetched = FetchedWorks::default();
    let mut cursor = INITIAL_CURSOR.to_string();

    loop {
        let page = source.works_page(&filter, &cursor, per_page).await?;
        fetched.pages += 1;

        let next = page.next_cursor().map(str::to_string);
        let batch = page.into_results();
        tracing::debug!(
            author = %author,
            page = fetched.pages,
            batch = batch.len(),
            "Fetched works page"
        );
        fetched.works.extend(batch);

        let Some(next) = next else {
            break;
        };
        cursor = next;

        if fetched.works.len() > cap {
            fetched.truncated = true;
            tracing::warn!(
                author = %author,
                accumulated = fetched.works.len(),
                cap,
                "Works fetch hit accumulation cap, snapshot is incomplete"
            );
            break;
        }
    }

    tracing::info!(
        author = %author,
        works = fetched.works.len(),
        pages = fetched.pages,
        truncated = fetched.truncated,
        "Works fetch complete"
    );

    Ok(fetched)
}
