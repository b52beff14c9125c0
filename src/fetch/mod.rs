// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data source the core reads from.
//!
//! Counting, ordering, offset and limit all belong to the fetcher. The core
//! only decides which call to make and with which window. A fetcher must
//! return `items` and `total` computed from the same filter, and `items`
//! ascending by article number.

pub mod memory;

pub use memory::MemoryStore;

use crate::error::FetchError;
use crate::types::{Article, FetchedPage, PageWindow};

/// Read-side storage interface for articles.
pub trait ArticleFetcher {
    /// One page of all articles, optionally restricted to one chapter.
    fn find_all_paginated(
        &self,
        window: PageWindow,
        chapter: Option<&str>,
    ) -> Result<FetchedPage, FetchError>;

    /// One page of articles matching a full-text term.
    fn search_paginated(&self, term: &str, window: PageWindow) -> Result<FetchedPage, FetchError>;

    /// Distinct non-empty chapter labels currently in use, in any order.
    fn find_all_chapters(&self) -> Result<Vec<String>, FetchError>;

    /// The article with this number in one document.
    fn find_by_number(&self, document_id: &str, number: u32) -> Result<Option<Article>, FetchError>;

    /// Every article with this number, across documents.
    fn find_by_article_number(&self, number: u32) -> Result<Vec<Article>, FetchError>;
}

impl<F: ArticleFetcher + ?Sized> ArticleFetcher for &F {
    fn find_all_paginated(
        &self,
        window: PageWindow,
        chapter: Option<&str>,
    ) -> Result<FetchedPage, FetchError> {
        (**self).find_all_paginated(window, chapter)
    }

    fn search_paginated(&self, term: &str, window: PageWindow) -> Result<FetchedPage, FetchError> {
        (**self).search_paginated(term, window)
    }

    fn find_all_chapters(&self) -> Result<Vec<String>, FetchError> {
        (**self).find_all_chapters()
    }

    fn find_by_number(&self, document_id: &str, number: u32) -> Result<Option<Article>, FetchError> {
        (**self).find_by_number(document_id, number)
    }

    fn find_by_article_number(&self, number: u32) -> Result<Vec<Article>, FetchError> {
        (**self).find_by_article_number(number)
    }
}
