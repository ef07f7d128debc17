//! Author data model matching the OpenAlex `/authors` schema.

use serde::{Deserialize, Serialize};

/// Prefix stripped from ORCID URLs.
const ORCID_PREFIX: &str = "https://orcid.org/";

/// Author search result page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorSearchPage {
    /// Matching authors.
    #[serde(default)]
    pub results: Option<Vec<Author>>,
}

impl AuthorSearchPage {
    /// Take ownership of the matching authors.
    #[must_use]
    pub fn into_results(self) -> Vec<Author> {
        self.results.unwrap_or_default()
    }
}

/// A researcher record from OpenAlex.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Author {
    /// OpenAlex author ID.
    #[serde(default)]
    pub id: Option<String>,

    /// Display name.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Total number of works.
    #[serde(default)]
    pub works_count: Option<i64>,

    /// Total citation count across all works.
    #[serde(default)]
    pub cited_by_count: Option<i64>,

    /// ORCID as a URL.
    #[serde(default)]
    pub orcid: Option<String>,

    /// Legacy single last-known institution.
    #[serde(default)]
    pub last_known_institution: Option<Institution>,

    /// Current list of last-known institutions.
    #[serde(default)]
    pub last_known_institutions: Option<Vec<Institution>>,
}

impl Author {
    /// ORCID without the URL prefix; `None` when absent or empty.
    #[must_use]
    pub fn orcid(&self) -> Option<String> {
        let orcid = self.orcid.as_deref()?.trim();
        let orcid = orcid.strip_prefix(ORCID_PREFIX).unwrap_or(orcid);
        (!orcid.is_empty()).then(|| orcid.to_string())
    }

    /// Name of the last known institution.
    #[must_use]
    pub fn institution(&self) -> Option<&str> {
        self.last_known_institution
            .as_ref()
            .and_then(|i| i.display_name.as_deref())
            .or_else(|| {
                self.last_known_institutions
                    .as_deref()?
                    .iter()
                    .find_map(|i| i.display_name.as_deref())
            })
    }
}

/// Institution reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Institution {
    /// Institution display name.
    #[serde(default)]
    pub display_name: Option<String>,
}
