//! Aggregation and ranking pipeline.
//!
//! Stages, leaf-first:
//! 1. [`fetch`] - cursor pagination over an author's works
//! 2. [`normalize`] - raw works to ranking-ready records
//! 3. [`citation_rate`] - recency-adjusted paper ranking
//! 4. [`coauthors`] - name-merged co-author ranking over articles
//! 5. [`concepts`] - topical tags for search candidates

pub mod citation_rate;
pub mod coauthors;
pub mod concepts;
pub mod fetch;
pub mod normalize;

pub use citation_rate::{FORMULA, citation_rate, rank_by_citation_rate};
pub use coauthors::{ARTICLE_SCOPE, CoauthorTally, name_key, rank_coauthors};
pub use concepts::{aggregate_concepts, author_concepts, enrich_candidates};
pub use fetch::{FetchedWorks, INITIAL_CURSOR, fetch_author_works};
pub use normalize::{compact_author_list, normalize_work, normalize_works, strip_doi_prefix};
