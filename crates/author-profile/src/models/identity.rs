//! Canonical OpenAlex author identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::api::ENTITY_PREFIX;
use crate::error::ProfileError;

/// Alternate spellings of the entity prefix that are folded into [`ENTITY_PREFIX`].
const LEGACY_PREFIXES: &[&str] = &["http://openalex.org/", "https://www.openalex.org/"];

/// An author identifier in canonical `https://openalex.org/<suffix>` form.
///
/// Accepts a bare suffix (`A5023888391`) or any fully-qualified form; both
/// compare equal once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(String);

impl AuthorId {
    /// Parse a raw identifier, returning `None` for blank input.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Some(suffix) = raw.strip_prefix(ENTITY_PREFIX) {
            return (!suffix.is_empty()).then(|| Self(raw.to_string()));
        }

        for prefix in LEGACY_PREFIXES {
            if let Some(suffix) = raw.strip_prefix(prefix) {
                return (!suffix.is_empty()).then(|| Self(format!("{ENTITY_PREFIX}{suffix}")));
            }
        }

        // Foreign URLs are compared verbatim.
        if raw.starts_with("http") {
            return Some(Self(raw.to_string()));
        }

        Some(Self(format!("{ENTITY_PREFIX}{raw}")))
    }

    /// Canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Suffix after the entity prefix (e.g. `A5023888391`).
    #[must_use]
    pub fn short(&self) -> &str {
        self.0.strip_prefix(ENTITY_PREFIX).unwrap_or(&self.0)
    }

    /// OpenAlex works filter selecting this author's authorships.
    #[must_use]
    pub fn works_filter(&self) -> String {
        format!("authorships.author.id:{}", self.0)
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AuthorId {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ProfileError::validation("author_id", "cannot be empty"))
    }
}

impl AsRef<str> for AuthorId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
