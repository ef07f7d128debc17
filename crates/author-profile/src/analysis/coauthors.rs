//! Co-author ranking over published articles, merged by normalized name.
//!
//! OpenAlex frequently assigns one person several author IDs. Authorships
//! are therefore grouped by a name key (lower-cased, whitespace-collapsed
//! display name) rather than by ID. Each group reports the ID observed most
//! often and how many distinct IDs it absorbed.

use std::collections::{BTreeMap, HashMap};

use crate::models::{AuthorId, CoauthorAggregate, Work};

/// Scope description, echoed in ranking responses.
pub const ARTICLE_SCOPE: &str = "articles_only (type == 'article')";

/// Co-author ranking plus the number of articles it was computed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoauthorTally {
    /// Best co-authors, truncated to the requested length.
    pub items: Vec<CoauthorAggregate>,

    /// Qualifying articles in the input.
    pub counted_articles: usize,
}

/// Per-name accumulator, local to one ranking call.
#[derive(Debug, Default)]
struct NameTally<'a> {
    display: &'a str,
    joint_works: u32,
    last_work: Option<usize>,
    ids: BTreeMap<AuthorId, u32>,
}

impl NameTally<'_> {
    /// Most frequent ID; the smallest ID wins a tie.
    fn resolved_id(&self) -> Option<&AuthorId> {
        self.ids
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(id, _)| id)
    }
}

/// Merge key for a display name.
#[must_use]
pub fn name_key(display_name: &str) -> String {
    display_name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

/// Rank the subject's co-authors by number of shared articles.
///
/// Only works typed "article" are scanned. Authorships without an ID, with
/// an empty name, or belonging to `subject` are skipped. A work counts once
/// per name key even when several IDs of that key appear on it.
#[must_use]
pub fn rank_coauthors(works: &[Work], subject: &AuthorId, top_n: usize) -> CoauthorTally {
    let mut tallies: HashMap<String, NameTally<'_>> = HashMap::new();
    let mut counted_articles = 0;

    for (index, work) in works.iter().enumerate().filter(|(_, w)| w.is_article()) {
        counted_articles += 1;

        for authorship in work.authorships() {
            let Some(id) = authorship.author_id() else {
                continue;
            };
            if &id == subject {
                continue;
            }

            let display = authorship.display_name().unwrap_or_default();
            let key = name_key(display);
            if key.is_empty() {
                continue;
            }

            let tally = tallies.entry(key).or_default();
            if tally.last_work != Some(index) {
                tally.joint_works += 1;
                tally.last_work = Some(index);
            }
            *tally.ids.entry(id).or_insert(0) += 1;
            if display.chars().count() > tally.display.chars().count() {
                tally.display = display;
            }
        }
    }

    let mut items: Vec<CoauthorAggregate> = tallies
        .into_iter()
        .filter_map(|(name_key, tally)| {
            let author_id = tally.resolved_id()?.clone();
            Some(CoauthorAggregate {
                name: tally.display.to_string(),
                count: tally.joint_works,
                author_id,
                merged_ids: tally.ids.len(),
                name_key,
            })
        })
        .collect();

    items.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.name_key.cmp(&b.name_key))
    });
    items.truncate(top_n);

    tracing::debug!(
        subject = %subject,
        articles = counted_articles,
        coauthors = items.len(),
        "Co-author ranking computed"
    );

    CoauthorTally { items, counted_articles }
}
