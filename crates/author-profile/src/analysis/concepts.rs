//! Concept tags for telling apart same-named search candidates.
//!
//! Each candidate's most-cited works are scanned and their concepts scored
//! by `1 + 0.0005 * citations`. Lookups for different candidates run
//! concurrently and fail independently.

use std::collections::HashMap;

use futures::future::join_all;

use crate::client::WorksSource;
use crate::error::ClientResult;
use crate::models::{AuthorId, CandidateIdentity, Work};

/// Weight added per citation of the tagged work.
const CITATION_WEIGHT: f64 = 0.0005;

/// Concepts at or above this level are specific enough to keep.
const MIN_CONCEPT_LEVEL: i64 = 2;

/// Score concepts over `works` and return the `top_k` best labels.
///
/// Broad concepts (level 0 or 1) and unnamed concepts are ignored. Equal
/// scores keep first-seen order.
#[must_use]
pub fn aggregate_concepts(works: &[Work], top_k: usize) -> Vec<String> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut scores: Vec<(&str, f64)> = Vec::new();

    for work in works {
        let weight = 1.0 + CITATION_WEIGHT * work.citations() as f64;

        for concept in work.concepts() {
            let Some(name) = concept.display_name.as_deref().filter(|n| !n.is_empty()) else {
                continue;
            };
            if concept.level.is_some_and(|level| level < MIN_CONCEPT_LEVEL) {
                continue;
            }

            let slot = *positions.entry(name).or_insert_with(|| {
                scores.push((name, 0.0));
                scores.len() - 1
            });
            scores[slot].1 += weight;
        }
    }

    scores.sort_by(|a, b| b.1.total_cmp(&a.1));
    scores.into_iter().take(top_k).map(|(name, _)| name.to_string()).collect()
}

/// Fetch an author's most-cited works and aggregate their concepts.
pub async fn author_concepts(
    source: &dyn WorksSource,
    author: &AuthorId,
    top_works: u32,
    top_k: usize,
) -> ClientResult<Vec<String>> {
    let works = source.most_cited_works(author, top_works).await?;
    Ok(aggregate_concepts(&works, top_k))
}

/// Attach concept tags to every candidate that has an ID.
///
/// Lookups are issued concurrently and joined back in candidate order. A
/// failed or timed-out lookup leaves that candidate with no tags.
pub async fn enrich_candidates(
    source: &dyn WorksSource,
    mut candidates: Vec<CandidateIdentity>,
    top_works: u32,
    top_k: usize,
) -> Vec<CandidateIdentity> {
    let lookups = candidates.iter().map(|candidate| async move {
        let author = candidate.id.as_deref().and_then(AuthorId::parse)?;
        match author_concepts(source, &author, top_works, top_k).await {
            Ok(concepts) => Some(concepts),
            Err(e) => {
                tracing::warn!(author = %author, error = %e, "Concept lookup failed");
                Some(Vec::new())
            }
        }
    });

    let results = join_all(lookups).await;

    for (candidate, concepts) in candidates.iter_mut().zip(results) {
        candidate.concepts = concepts.unwrap_or_default();
    }

    candidates
}
