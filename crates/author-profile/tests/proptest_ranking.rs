//! Property-based tests for the rankers.

use proptest::prelude::*;

use author_profile::analysis::{normalize_works, rank_by_citation_rate, rank_coauthors};
use author_profile::models::{AuthorId, Authorship, Work};

const SUBJECT: &str = "https://openalex.org/A0";

/// Generate works with random years, citations, types and small author lists.
fn arb_work() -> impl Strategy<Value = Work> {
    (
        "[A-Za-z ]{0,20}",                                       // title
        proptest::option::of(1950i32..2030),                     // year
        proptest::option::of(-5i64..100_000),                    // cited_by_count
        prop_oneof![Just("article"), Just("book"), Just("Article")], // type
        proptest::collection::vec((0u8..6, "[A-Ca-c]{1,3}( [a-c]{1,2})?"), 0..6), // authorships
    )
        .prop_map(|(title, publication_year, cited_by_count, kind, authors)| Work {
            title: Some(title),
            publication_year,
            cited_by_count,
            work_type: Some(kind.to_string()),
            authorships: Some(
                authors
                    .into_iter()
                    .map(|(n, name)| {
                        Authorship::new(Some(format!("https://openalex.org/A{n}").as_str()), Some(name.as_str()))
                    })
                    .collect(),
            ),
            ..Default::default()
        })
}

proptest! {
    /// Ranking never exceeds the requested length or the dated works.
    #[test]
    fn ranking_length_bounded(works in proptest::collection::vec(arb_work(), 0..40), top_n in 0usize..40) {
        let normalized = normalize_works(&works, 12);
        let dated = works.iter().filter(|w| w.publication_year.is_some()).count();
        prop_assert_eq!(normalized.len(), dated);

        let ranked = rank_by_citation_rate(&normalized, 2025, top_n);
        prop_assert!(ranked.len() <= top_n.min(dated));
    }

    /// Rates are non-negative, even for future-dated works, and sorted.
    #[test]
    fn rates_nonnegative_and_sorted(works in proptest::collection::vec(arb_work(), 0..40)) {
        let ranked = rank_by_citation_rate(&normalize_works(&works, 12), 2025, 40);
        prop_assert!(ranked.iter().all(|r| r.citation_rate >= 0.0));
        prop_assert!(ranked.windows(2).all(|w| w[0].citation_rate >= w[1].citation_rate));
    }

    /// Same input, same output.
    #[test]
    fn rankings_are_deterministic(works in proptest::collection::vec(arb_work(), 0..30)) {
        let subject = AuthorId::parse(SUBJECT).unwrap();
        let normalized = normalize_works(&works, 12);

        prop_assert_eq!(
            rank_by_citation_rate(&normalized, 2025, 30),
            rank_by_citation_rate(&normalized, 2025, 30)
        );
        prop_assert_eq!(rank_coauthors(&works, &subject, 30), rank_coauthors(&works, &subject, 30));
    }

    /// The subject never appears among its co-authors and counts are bounded.
    #[test]
    fn coauthors_exclude_subject(works in proptest::collection::vec(arb_work(), 0..30)) {
        let subject = AuthorId::parse(SUBJECT).unwrap();
        let tally = rank_coauthors(&works, &subject, 30);
        let articles = works.iter().filter(|w| w.is_article()).count();

        prop_assert_eq!(tally.counted_articles, articles);
        for item in &tally.items {
            prop_assert!(item.author_id != subject);
            prop_assert!(item.count >= 1);
            prop_assert!(item.count as usize <= articles);
            prop_assert!(item.merged_ids >= 1);
        }
        prop_assert!(tally.items.windows(2).all(|w| w[0].count >= w[1].count));
    }
}
