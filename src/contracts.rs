//! Runtime contracts for the paging and ordering invariants.
//!
//! Debug-mode assertions that catch a misbehaving fetcher or a broken
//! comparator close to where the damage happens. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Check the same properties the property tests check
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function        | Property                                      |
//! |--------------------------|-----------------------------------------------|
//! | `check_page_result`      | `pages = ceil(total / size)`, `len <= size`   |
//! | `check_items_ascending`  | items ascending by article number             |
//! | `check_chapters_sorted`  | adjacent chapters never out of order          |

use std::cmp::Ordering;

use crate::chapters::ChapterOrder;
use crate::pagination::total_pages;
use crate::types::{Article, PageResult};

/// Check the numeric invariants of a page.
///
/// # Panics (debug builds only)
/// Panics if the page count disagrees with the total, or the page holds more
/// items than its size allows.
#[inline]
pub fn check_page_result(result: &PageResult) {
    debug_assert!(
        result.items_per_page >= 1,
        "Contract violation: PageResult.items_per_page is 0"
    );
    debug_assert_eq!(
        result.pages,
        total_pages(result.total, result.items_per_page),
        "Contract violation: PageResult.pages {} != ceil({} / {})",
        result.pages,
        result.total,
        result.items_per_page
    );
    debug_assert!(
        result.items.len() <= result.items_per_page,
        "Contract violation: PageResult has {} items for page size {}",
        result.items.len(),
        result.items_per_page
    );
    debug_assert!(
        result.items.len() <= result.total,
        "Contract violation: PageResult has {} items but total is {}",
        result.items.len(),
        result.total
    );
    check_items_ascending(&result.items);
}

/// Check that articles are in ascending article-number order.
///
/// Numbers repeat across documents, so equal neighbours are allowed.
#[inline]
pub fn check_items_ascending(items: &[Article]) {
    for i in 1..items.len() {
        debug_assert!(
            items[i - 1].article_number <= items[i].article_number,
            "Contract violation: items[{}].article_number {} > items[{}].article_number {}",
            i - 1,
            items[i - 1].article_number,
            i,
            items[i].article_number
        );
    }
}

/// Check that a chapter sequence is sorted under `order`.
#[inline]
pub fn check_chapters_sorted<'a, I>(order: &ChapterOrder, chapters: I)
where
    I: IntoIterator<Item = &'a str>,
{
    if cfg!(debug_assertions) {
        let mut previous: Option<&str> = None;
        for chapter in chapters {
            if let Some(prev) = previous {
                debug_assert!(
                    order.compare(prev, chapter) != Ordering::Greater,
                    "Contract violation: chapter {:?} sorted before {:?}",
                    prev,
                    chapter
                );
            }
            previous = Some(chapter);
        }
    }
}
