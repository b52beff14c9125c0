// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary queries and paging parameters at the service. Emoji, RTL
//! text, null bytes, negative pages: none of it may panic, and every answer
//! must respect the paging invariants.

#![no_main]

use arbitrary::Arbitrary;
use carta::testing::make_articles;
use carta::{total_pages, ArticleService, MemoryStore, PageRequest};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct QueryInput {
    query_bytes: Vec<u8>,
    page: i64,
    items_per_page: i64,
}

fuzz_target!(|input: QueryInput| {
    static SERVICE: std::sync::OnceLock<ArticleService<MemoryStore>> = std::sync::OnceLock::new();
    let service = SERVICE.get_or_init(|| {
        ArticleService::new(MemoryStore::from_articles(make_articles(137, Some("Derechos"))))
    });

    let query: String = String::from_utf8_lossy(&input.query_bytes)
        .chars()
        .take(200)
        .collect();

    let normalized = service.normalize_search(&query);
    assert_eq!(normalized.term(), query.trim());
    assert_eq!(normalized.is_accepted(), query.trim().chars().count() >= 2);

    let request = PageRequest::new(input.page, input.items_per_page).with_search(query.clone());
    let result = service.paginate(&request).expect("memory store never fails");

    // INVARIANT 1: page count is the ceiling of total / size
    assert_eq!(result.pages, total_pages(result.total, result.items_per_page));

    // INVARIANT 2: a page never overflows its size
    assert!(result.items.len() <= result.items_per_page);

    // INVARIANT 3: items ascend by article number
    assert!(result
        .items
        .windows(2)
        .all(|w| w[0].article_number <= w[1].article_number));

    // INVARIANT 4: rejected queries echo the page unclamped and match nothing
    if !query.trim().is_empty() && !normalized.is_accepted() {
        assert_eq!(result.total, 0);
        assert_eq!(result.current_page, input.page);
    }
});
