//! Derived views produced by the analysis pipeline.
//!
//! These are plain data; rendering is left to the caller.

use serde::{Deserialize, Serialize};

use super::AuthorId;

/// Name of the bibliographic source echoed in every response.
pub const SOURCE_NAME: &str = "openalex";

/// A work projected into the shape used for paper ranking.
///
/// Only exists for works with a publication year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedWork {
    /// OpenAlex work ID.
    pub id: Option<String>,

    /// DOI without URL prefix.
    pub doi: Option<String>,

    /// Work title.
    pub title: Option<String>,

    /// Compact, comma-joined author list.
    pub authors: String,

    /// Publication year.
    pub year: i32,

    /// Citation count.
    pub citations: u64,

    /// Primary venue display name.
    #[serde(rename = "primary_location")]
    pub venue: Option<String>,

    /// Landing page (the OpenAlex ID).
    pub url: Option<String>,

    /// Work type tag.
    #[serde(rename = "type")]
    pub work_type: Option<String>,
}

/// A normalized work with its citation rate attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedWork {
    /// The ranked work.
    #[serde(flatten)]
    pub work: NormalizedWork,

    /// `citations / (1 + age)`.
    pub citation_rate: f64,
}

/// Co-authors merged under one normalized name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoauthorAggregate {
    /// Lower-cased, whitespace-collapsed display name.
    pub name_key: String,

    /// Longest display variant observed for the key.
    pub name: String,

    /// Qualifying articles shared with the subject.
    pub count: u32,

    /// Most frequently observed identifier for the key.
    pub author_id: AuthorId,

    /// Distinct identifiers folded into this aggregate.
    pub merged_ids: usize,
}

/// A researcher returned by author search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateIdentity {
    /// OpenAlex author ID.
    pub id: Option<String>,

    /// Display name.
    pub display_name: Option<String>,

    /// Total number of works.
    pub works_count: Option<i64>,

    /// Total citation count across all works.
    pub cited_by_count: Option<i64>,

    /// ORCID without the URL prefix.
    pub orcid: Option<String>,

    /// Name of the last known institution.
    pub last_known_institution: Option<String>,

    /// Topical tags from the candidate's most-cited works.
    pub concepts: Vec<String>,
}

/// Top papers by citation rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperRanking {
    /// Requested ranking length.
    pub top_n: usize,

    /// Scoring formula, echoed for transparency.
    pub formula: String,

    /// Ranked works, best first.
    pub items: Vec<RankedWork>,
}

/// Top co-authors by joint articles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoauthorRanking {
    /// Requested ranking length.
    pub top_n: usize,

    /// Which works were counted.
    pub scope: String,

    /// Number of qualifying articles in the snapshot.
    pub counted_article_works: usize,

    /// Co-authors, most joint articles first.
    pub items: Vec<CoauthorAggregate>,
}

/// Full ranking response for one author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileReport {
    /// Bibliographic source name.
    pub source: String,

    /// Subject author in canonical form.
    pub author_id: AuthorId,

    /// Works fetched, dated or not.
    pub count_works_total: usize,

    /// Works with a publication year.
    pub count_works_with_year: usize,

    /// Reference year for citation rates.
    pub current_year: i32,

    /// True when the fetch stopped at the accumulation cap.
    pub truncated: bool,

    /// Top papers by citation rate.
    pub paper_ranking: PaperRanking,

    /// Top co-authors by joint articles.
    pub coauthor_ranking: CoauthorRanking,
}

/// Author search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorSearchResponse {
    /// Query as supplied by the caller.
    pub query: String,

    /// Bibliographic source name.
    pub source: String,

    /// Candidates in upstream relevance order.
    pub results: Vec<CandidateIdentity>,
}
