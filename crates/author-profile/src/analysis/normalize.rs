//! Projection of raw works into the shape used by paper ranking.
//!
//! All defaulting of optional raw fields happens here, so the rankers work
//! on fully-populated records.

use crate::models::{Authorship, NormalizedWork, Work};

/// URL prefixes removed from DOIs.
const DOI_PREFIXES: &[&str] =
    &["https://doi.org/", "http://doi.org/", "https://dx.doi.org/", "http://dx.doi.org/"];

/// Marker appended to author lists cut at the display cap.
pub const ET_AL: &str = "et al.";

/// Normalize a raw work; `None` when it has no publication year.
#[must_use]
pub fn normalize_work(work: &Work, max_authors: usize) -> Option<NormalizedWork> {
    let year = work.publication_year?;

    Some(NormalizedWork {
        id: work.id.clone(),
        doi: work.doi.as_deref().and_then(strip_doi_prefix),
        title: work.title.clone(),
        authors: compact_author_list(work.authorships(), max_authors),
        year,
        citations: work.citations(),
        venue: work.venue().map(str::to_string),
        url: work.id.clone(),
        work_type: work.work_type.clone(),
    })
}

/// Normalize every work that has a year, preserving order.
#[must_use]
pub fn normalize_works(works: &[Work], max_authors: usize) -> Vec<NormalizedWork> {
    works.iter().filter_map(|w| normalize_work(w, max_authors)).collect()
}

/// Join author display names, cutting after `max_authors` with "et al.".
#[must_use]
pub fn compact_author_list(authorships: &[Authorship], max_authors: usize) -> String {
    let names: Vec<&str> = authorships.iter().filter_map(Authorship::display_name).collect();

    if names.len() <= max_authors {
        return names.join(", ");
    }

    let mut compact = names[..max_authors].join(", ");
    if !compact.is_empty() {
        compact.push_str(", ");
    }
    compact.push_str(ET_AL);
    compact
}

/// Strip a known resolver prefix from a DOI; empty DOIs become `None`.
#[must_use]
pub fn strip_doi_prefix(doi: &str) -> Option<String> {
    let doi = doi.trim();
    let bare = DOI_PREFIXES.iter().find_map(|p| doi.strip_prefix(p)).unwrap_or(doi);
    (!bare.is_empty()).then(|| bare.to_string())
}
