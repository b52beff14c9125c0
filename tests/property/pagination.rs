//! Clamping and page arithmetic.

use super::common::{make_articles, numbers, RecordingFetcher};
use carta::{
    total_pages, ArticleService, MemoryStore, PageRequest, PaginationPolicy, MAX_ITEMS_PER_PAGE,
    MIN_ITEMS_PER_PAGE,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_page_clamped_to_one(requested in any::<i64>()) {
        let page = PaginationPolicy::default().clamp_page(requested);
        prop_assert!(page >= 1);
        if requested >= 1 {
            prop_assert_eq!(page as i64, requested);
        }
    }

    #[test]
    fn prop_items_per_page_nearest_bound(requested in any::<i64>()) {
        let size = PaginationPolicy::default().clamp_items_per_page(requested);
        prop_assert!((MIN_ITEMS_PER_PAGE..=MAX_ITEMS_PER_PAGE).contains(&size));
        if requested < MIN_ITEMS_PER_PAGE as i64 {
            prop_assert_eq!(size, MIN_ITEMS_PER_PAGE);
        } else if requested > MAX_ITEMS_PER_PAGE as i64 {
            prop_assert_eq!(size, MAX_ITEMS_PER_PAGE);
        } else {
            prop_assert_eq!(size as i64, requested);
        }
    }

    #[test]
    fn prop_total_pages_is_ceiling(total in 0usize..100_000, size in 1usize..200) {
        let pages = total_pages(total, size);
        prop_assert_eq!(pages == 0, total == 0);
        prop_assert!(pages * size >= total);
        if pages > 0 {
            prop_assert!((pages - 1) * size < total);
        }
    }

    #[test]
    fn prop_page_matches_slice(
        count in 0u32..250,
        page in -3i64..30,
        size in 0i64..150,
    ) {
        let service = ArticleService::new(MemoryStore::from_articles(make_articles(count, None)));
        let result = service.paginate(&PageRequest::new(page, size)).unwrap();

        let window_page = page.max(1) as usize;
        let window_size = (size.max(1) as usize).clamp(MIN_ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE);
        let start = ((window_page - 1) * window_size).min(count as usize);
        let end = (start + window_size).min(count as usize);
        let expected: Vec<u32> = (start as u32 + 1..=end as u32).collect();

        prop_assert_eq!(result.total, count as usize);
        prop_assert_eq!(result.pages, total_pages(count as usize, window_size));
        prop_assert!(result.items.len() <= result.items_per_page);
        prop_assert_eq!(numbers(&result.items), expected);
    }

    #[test]
    fn prop_exactly_one_fetch_per_request(
        page in -3i64..5,
        size in 0i64..150,
        chapter in proptest::option::of("[A-Za-z]{0,6}"),
    ) {
        let service = ArticleService::new(RecordingFetcher::new(make_articles(15, Some("Derechos"))));
        let mut request = PageRequest::new(page, size);
        request.chapter = chapter;
        service.paginate(&request).unwrap();
        prop_assert_eq!(service.fetcher().calls().len(), 1);
    }
}
