// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pagination policy: clamp, dispatch, count pages.
//!
//! The policy never touches storage itself. It turns a raw request into a
//! `PageWindow`, picks exactly one fetcher call, and wraps the answer with a
//! page count. Three paths:
//!
//! 1. search text present → normalize it; too short means an empty page
//!    without any fetch, otherwise `search_paginated`
//! 2. chapter filter present → `find_all_paginated(window, Some(chapter))`
//! 3. neither → `find_all_paginated(window, None)`
//!
//! Fetch errors come back untouched. There is nothing to roll back on a read,
//! so retrying is left to whoever called.

use tracing::debug;

use crate::config::PaginationBounds;
use crate::contracts::check_page_result;
use crate::error::FetchError;
use crate::fetch::ArticleFetcher;
use crate::query::SearchQueryNormalizer;
use crate::types::{FetchedPage, PageRequest, PageResult, PageWindow};

/// `ceil(total / items_per_page)`; 0 when there is nothing to show.
#[inline]
pub fn total_pages(total: usize, items_per_page: usize) -> usize {
    total.div_ceil(items_per_page.max(1))
}

/// Clamps paging parameters and routes requests to the fetcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationPolicy {
    bounds: PaginationBounds,
    normalizer: SearchQueryNormalizer,
}

impl PaginationPolicy {
    pub fn new(bounds: PaginationBounds, normalizer: SearchQueryNormalizer) -> Self {
        Self { bounds, normalizer }
    }

    pub fn bounds(&self) -> PaginationBounds {
        self.bounds
    }

    pub fn normalizer(&self) -> SearchQueryNormalizer {
        self.normalizer
    }

    /// `max(1, requested)`.
    pub fn clamp_page(&self, requested: i64) -> usize {
        if requested < 1 {
            1
        } else {
            usize::try_from(requested).unwrap_or(usize::MAX)
        }
    }

    /// `requested` pulled into `[min, max]`.
    pub fn clamp_items_per_page(&self, requested: i64) -> usize {
        let min = self.bounds.min();
        let max = self.bounds.max();
        if requested < 1 {
            return min;
        }
        usize::try_from(requested).unwrap_or(usize::MAX).clamp(min, max)
    }

    pub fn window(&self, request: &PageRequest) -> PageWindow {
        PageWindow {
            page: self.clamp_page(request.page),
            items_per_page: self.clamp_items_per_page(request.items_per_page),
        }
    }

    /// A first-page request at the default size.
    pub fn default_request(&self) -> PageRequest {
        PageRequest::new(1, self.bounds.default_items_per_page() as i64)
    }

    /// Fetch one page of articles for `request`.
    pub fn paginate<F>(&self, request: &PageRequest, fetcher: &F) -> Result<PageResult, FetchError>
    where
        F: ArticleFetcher + ?Sized,
    {
        let window = self.window(request);

        if let Some(raw) = request.search_text() {
            let query = self.normalizer.normalize(raw);
            let Some(term) = query.accepted() else {
                debug!(term = query.term(), "search term below minimum length");
                return Ok(query.empty_page(request.page, window.items_per_page));
            };
            debug!(term, page = window.page, size = window.items_per_page, "search");
            let fetched = fetcher.search_paginated(term, window)?;
            return Ok(assemble(fetched, window, Some(term.to_string())));
        }

        let chapter = request.chapter_filter();
        debug!(?chapter, page = window.page, size = window.items_per_page, "list");
        let fetched = fetcher.find_all_paginated(window, chapter)?;
        Ok(assemble(fetched, window, None))
    }
}

fn assemble(fetched: FetchedPage, window: PageWindow, search_term: Option<String>) -> PageResult {
    let result = PageResult {
        pages: total_pages(fetched.total, window.items_per_page),
        total: fetched.total,
        items: fetched.items,
        current_page: window.page as i64,
        items_per_page: window.items_per_page,
        search_term,
    };
    check_page_result(&result);
    result
}
