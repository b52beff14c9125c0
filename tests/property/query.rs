//! Search-term normalization.

use super::common::{make_articles, RecordingFetcher};
use super::short_query_strategy;
use carta::{ArticleService, NormalizedQuery, PageRequest, SearchQueryNormalizer};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_short_queries_never_reach_fetcher(query in short_query_strategy(), page in -5i64..10) {
        let service = ArticleService::new(RecordingFetcher::new(make_articles(12, None)));
        let result = service.paginate(&PageRequest::new(page, 20).with_search(query.clone())).unwrap();

        if query.trim().is_empty() {
            // Blank search is no search: plain listing
            prop_assert_eq!(result.search_term, None);
        } else {
            prop_assert_eq!(result.total, 0);
            prop_assert_eq!(result.pages, 0);
            prop_assert!(result.items.is_empty());
            prop_assert_eq!(result.current_page, page);
            prop_assert!(service.fetcher().calls().is_empty());
        }
    }

    #[test]
    fn prop_normalized_term_is_trimmed(raw in "\\PC{0,20}") {
        let query = SearchQueryNormalizer::default().normalize(&raw);
        prop_assert_eq!(query.term(), raw.trim());
        let long_enough = raw.trim().chars().count() >= 2;
        prop_assert_eq!(query.is_accepted(), long_enough);
    }

    #[test]
    fn prop_normalize_is_idempotent(raw in "\\PC{0,20}") {
        let normalizer = SearchQueryNormalizer::default();
        let once = normalizer.normalize(&raw);
        let twice = normalizer.normalize(once.term());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_min_length_respected(raw in "[a-z ]{0,10}", min in 1usize..6) {
        let normalizer = SearchQueryNormalizer::new(min).unwrap();
        match normalizer.normalize(&raw) {
            NormalizedQuery::Accepted(term) => prop_assert!(term.chars().count() >= min),
            NormalizedQuery::TooShort(term) => prop_assert!(term.chars().count() < min),
        }
    }
}
