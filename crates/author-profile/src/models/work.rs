//! Work data model matching the OpenAlex `/works` schema.
//!
//! Every field may be missing or `null` in the API response, so each one is
//! an `Option`. Defaults are applied by the accessors below and by the
//! normalizer, never by the deserializer.

use serde::{Deserialize, Serialize};

use super::AuthorId;

/// A raw work as returned by OpenAlex.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Work {
    /// OpenAlex work ID (`https://openalex.org/W...`).
    #[serde(default)]
    pub id: Option<String>,

    /// DOI, usually as a `https://doi.org/...` URL.
    #[serde(default)]
    pub doi: Option<String>,

    /// Work title.
    #[serde(default)]
    pub title: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub publication_year: Option<i32>,

    /// Number of citations this work has received.
    #[serde(default)]
    pub cited_by_count: Option<i64>,

    /// Work type tag (e.g. "article", "book-chapter").
    #[serde(default, rename = "type")]
    pub work_type: Option<String>,

    /// Authorships in byline order.
    #[serde(default)]
    pub authorships: Option<Vec<Authorship>>,

    /// Primary hosting location.
    #[serde(default)]
    pub primary_location: Option<Location>,

    /// Weighted concept tags.
    #[serde(default)]
    pub concepts: Option<Vec<Concept>>,
}

impl Work {
    /// Authorships, or an empty slice when absent.
    #[must_use]
    pub fn authorships(&self) -> &[Authorship] {
        self.authorships.as_deref().unwrap_or_default()
    }

    /// Concepts, or an empty slice when absent.
    #[must_use]
    pub fn concepts(&self) -> &[Concept] {
        self.concepts.as_deref().unwrap_or_default()
    }

    /// Citation count, 0 when absent or negative.
    #[must_use]
    pub fn citations(&self) -> u64 {
        self.cited_by_count.and_then(|c| u64::try_from(c).ok()).unwrap_or(0)
    }

    /// Display name of the primary venue.
    #[must_use]
    pub fn venue(&self) -> Option<&str> {
        self.primary_location.as_ref()?.source.as_ref()?.display_name.as_deref()
    }

    /// Whether the type tag is "article" (trimmed, case-insensitive).
    #[must_use]
    pub fn is_article(&self) -> bool {
        self.work_type.as_deref().is_some_and(|t| t.trim().eq_ignore_ascii_case("article"))
    }
}

/// One author slot on a work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Authorship {
    /// The author, when OpenAlex resolved one.
    #[serde(default)]
    pub author: Option<AuthorRef>,
}

impl Authorship {
    /// Build an authorship from raw parts (mostly for tests and fixtures).
    #[must_use]
    pub fn new(id: Option<&str>, display_name: Option<&str>) -> Self {
        Self {
            author: Some(AuthorRef {
                id: id.map(str::to_string),
                display_name: display_name.map(str::to_string),
            }),
        }
    }

    /// Canonical author identifier, if present.
    #[must_use]
    pub fn author_id(&self) -> Option<AuthorId> {
        AuthorId::parse(self.author.as_ref()?.id.as_deref()?)
    }

    /// Non-empty display name, if present.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.author.as_ref()?.display_name.as_deref().filter(|n| !n.is_empty())
    }
}

/// Minimal author reference inside an authorship.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorRef {
    /// Author ID (canonical form is a URL).
    #[serde(default)]
    pub id: Option<String>,

    /// Author display name.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Hosting location of a work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    /// Source (journal, repository, ...).
    #[serde(default)]
    pub source: Option<Source>,
}

/// Venue reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Source {
    /// Venue display name.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Weighted topical tag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Concept {
    /// Concept label.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Hierarchy level; 0 and 1 are very broad fields.
    #[serde(default)]
    pub level: Option<i64>,

    /// Tagging confidence.
    #[serde(default)]
    pub score: Option<f64>,
}

/// One page of a `/works` listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorksPage {
    /// Paging metadata.
    #[serde(default)]
    pub meta: Option<PageMeta>,

    /// Works on this page.
    #[serde(default)]
    pub results: Option<Vec<Work>>,
}

impl WorksPage {
    /// Cursor for the next page, if any.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.meta.as_ref()?.next_cursor.as_deref().filter(|c| !c.is_empty())
    }

    /// Take ownership of the works on this page.
    #[must_use]
    pub fn into_results(self) -> Vec<Work> {
        self.results.unwrap_or_default()
    }
}

/// Paging metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageMeta {
    /// Total matching records.
    #[serde(default)]
    pub count: Option<i64>,

    /// Cursor for the next page (`null` on the last page).
    #[serde(default)]
    pub next_cursor: Option<String>,
}
