//! Search through the service: length gate, OR matching, paging.

use super::common::{make_articles, numbers, sample_service, FetchCall, RecordingFetcher};
use carta::{ArticleService, NormalizedQuery, PageRequest, PageWindow};

#[test]
fn test_single_character_query_is_an_empty_page() {
    let service = ArticleService::new(RecordingFetcher::new(make_articles(23, None)));
    let request = PageRequest::new(3, 20).with_search(" a ");
    let result = service.paginate(&request).unwrap();

    assert!(result.items.is_empty());
    assert_eq!(result.total, 0);
    assert_eq!(result.pages, 0);
    assert_eq!(result.current_page, 3);
    assert_eq!(result.search_term.as_deref(), Some("a"));
    assert!(service.fetcher().calls().is_empty());
}

#[test]
fn test_two_character_query_reaches_fetcher() {
    let service = ArticleService::new(RecordingFetcher::new(make_articles(23, None)));
    service
        .paginate(&PageRequest::new(1, 20).with_search("de"))
        .unwrap();
    assert_eq!(
        service.fetcher().calls(),
        vec![FetchCall::Search {
            term: "de".to_string(),
            window: PageWindow {
                page: 1,
                items_per_page: 20,
            },
        }]
    );
}

#[test]
fn test_normalize_search() {
    let service = sample_service();
    assert_eq!(
        service.normalize_search("  vida "),
        NormalizedQuery::Accepted("vida".to_string())
    );
    assert!(!service.normalize_search("ñ").is_accepted());
}

#[test]
fn test_search_matches_title_content_and_chapter() {
    let request = PageRequest::new(1, 20).with_search("derecho");
    let result = sample_service().paginate(&request).unwrap();
    // 1, 6: content; 3: title; 4, 5: chapter; 7: "derechos"
    assert_eq!(numbers(&result.items), vec![1, 3, 4, 5, 6, 7]);
    assert_eq!(result.total, 6);
    assert_eq!(result.search_term.as_deref(), Some("derecho"));
}

#[test]
fn test_search_is_or_over_words() {
    let request = PageRequest::new(1, 20).with_search("vida tutela");
    let result = sample_service().paginate(&request).unwrap();
    assert_eq!(numbers(&result.items), vec![3, 7]);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_search_ignores_accents_and_case() {
    let request = PageRequest::new(1, 20).with_search("HABEAS");
    let result = sample_service().paginate(&request).unwrap();
    assert_eq!(numbers(&result.items), vec![6]);
}

#[test]
fn test_search_pages_share_one_total() {
    let service = ArticleService::new(RecordingFetcher::new(make_articles(25, None)));
    let first = service
        .paginate(&PageRequest::new(1, 10).with_search("contenido"))
        .unwrap();
    let last = service
        .paginate(&PageRequest::new(3, 10).with_search("contenido"))
        .unwrap();
    assert_eq!(first.total, 25);
    assert_eq!(first.pages, 3);
    assert_eq!(numbers(&last.items), (21..=25).collect::<Vec<_>>());
    assert_eq!(last.total, first.total);
}

#[test]
fn test_no_match_has_zero_pages() {
    let request = PageRequest::new(1, 20).with_search("zzzz");
    let result = sample_service().paginate(&request).unwrap();
    assert_eq!(result.total, 0);
    assert_eq!(result.pages, 0);
}

#[test]
fn test_quick_search() {
    let service = sample_service();
    let found = service.quick_search("libertad", carta::QUICK_SEARCH_LIMIT).unwrap();
    assert_eq!(numbers(&found), vec![5, 6]);
    assert_eq!(numbers(&service.quick_search("libertad", 1).unwrap()), vec![5]);
    assert!(service.quick_search("", 10).unwrap().is_empty());
}
