//! Recency-adjusted citation rate ranking.

use std::cmp::Ordering;

use crate::models::{NormalizedWork, RankedWork};

/// Scoring formula, echoed in ranking responses.
pub const FORMULA: &str = "citations / (1 + current_year - year)";

/// Citations per year of age; works dated in the future count as age 0.
#[must_use]
pub fn citation_rate(citations: u64, year: i32, current_year: i32) -> f64 {
    let age = (i64::from(current_year) - i64::from(year)).max(0);
    citations as f64 / (1 + age) as f64
}

/// Rank works by citation rate and keep the best `top_n`.
///
/// Ties are broken by citation count, then year, then title, all
/// descending, so the order is total.
#[must_use]
pub fn rank_by_citation_rate(
    works: &[NormalizedWork],
    current_year: i32,
    top_n: usize,
) -> Vec<RankedWork> {
    let mut rated: Vec<RankedWork> = works
        .iter()
        .map(|w| RankedWork {
            citation_rate: citation_rate(w.citations, w.year, current_year),
            work: w.clone(),
        })
        .collect();

    rated.sort_by(compare_ranked);
    rated.truncate(top_n);
    rated
}

/// Descending order on (rate, citations, year, title).
fn compare_ranked(a: &RankedWork, b: &RankedWork) -> Ordering {
    b.citation_rate
        .total_cmp(&a.citation_rate)
        .then_with(|| b.work.citations.cmp(&a.work.citations))
        .then_with(|| b.work.year.cmp(&a.work.year))
        .then_with(|| title_key(&b.work).cmp(title_key(&a.work)))
}

fn title_key(work: &NormalizedWork) -> &str {
    work.title.as_deref().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn work(title: &str, year: i32, citations: u64) -> NormalizedWork {
        NormalizedWork {
            id: Some(format!("https://openalex.org/{title}")),
            doi: None,
            title: Some(title.to_string()),
            authors: String::new(),
            year,
            citations,
            venue: None,
            url: None,
            work_type: Some("article".to_string()),
        }
    }

    #[test]
    fn test_rate_formula() {
        assert!((citation_rate(100, 2020, 2025) - 100.0 / 6.0).abs() < 1e-9);
        assert!((citation_rate(10, 2024, 2025) - 5.0).abs() < f64::EPSILON);
        assert!((citation_rate(7, 2025, 2025) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_future_year_has_no_bonus() {
        assert!((citation_rate(9, 2030, 2025) - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_citations() {
        assert!(citation_rate(0, 1990, 2025).abs() < f64::EPSILON);
    }

    #[test]
    fn test_orders_by_rate_descending() {
        let works = vec![work("b", 2024, 10), work("a", 2020, 100)];
        let ranked = rank_by_citation_rate(&works, 2025, 30);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].work.title.as_deref(), Some("a"));
        assert!((ranked[0].citation_rate - 16.666_666).abs() < 1e-3);
        assert_eq!(ranked[1].work.title.as_deref(), Some("b"));
        assert!((ranked[1].citation_rate - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tie_breaks() {
        // Same rate (10/1 and 20/2), more citations first.
        let ranked = rank_by_citation_rate(&[work("x", 2025, 10), work("y", 2024, 20)], 2025, 30);
        assert_eq!(ranked[0].work.title.as_deref(), Some("y"));

        // Same rate and citations: later year first (both future years floor to age 0).
        let ranked = rank_by_citation_rate(&[work("p", 2026, 5), work("q", 2027, 5)], 2025, 30);
        assert_eq!(ranked[0].work.title.as_deref(), Some("q"));

        // Everything equal: greater title first.
        let ranked = rank_by_citation_rate(&[work("Alpha", 2020, 6), work("Beta", 2020, 6)], 2025, 30);
        assert_eq!(ranked[0].work.title.as_deref(), Some("Beta"));
    }

    #[test]
    fn test_missing_title_sorts_last_on_full_tie() {
        let mut untitled = work("z", 2020, 6);
        untitled.title = None;
        let ranked = rank_by_citation_rate(&[untitled, work("A", 2020, 6)], 2025, 30);
        assert_eq!(ranked[0].work.title.as_deref(), Some("A"));
        assert!(ranked[1].work.title.is_none());
    }

    #[test]
    fn test_truncates_to_top_n() {
        let works: Vec<_> = (0..50).map(|i| work(&format!("w{i}"), 2000 + i, 10)).collect();
        assert_eq!(rank_by_citation_rate(&works, 2025, 30).len(), 30);
        assert!(rank_by_citation_rate(&works, 2025, 0).is_empty());
    }
}
