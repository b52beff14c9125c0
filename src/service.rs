// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The caller-facing facade over normalizer, pagination policy and chapter order.
//!
//! `ArticleService` owns a fetcher plus the three stateless policy values and
//! exposes the operations a request handler or the CLI needs. It holds no
//! mutable state; every call is a pure computation around at most one fetch.
//!
//! # Example
//!
//! ```
//! use carta::{Article, ArticleService, MemoryStore, PageRequest};
//!
//! let store = MemoryStore::from_articles(vec![
//!     Article::new("constitucion-2015", 1, "El Estado reconoce la dignidad humana")
//!         .with_chapter("Principios fundamentales"),
//! ]);
//! let service = ArticleService::new(store);
//!
//! let page = service.paginate(&PageRequest::new(1, 20)).unwrap();
//! assert_eq!(page.total, 1);
//! ```

use serde::Serialize;
use tracing::debug;

use crate::chapters::{ChapterGroups, ChapterOrder};
use crate::config::CartaConfig;
use crate::error::{ConfigError, FetchError, LookupError};
use crate::fetch::ArticleFetcher;
use crate::pagination::PaginationPolicy;
use crate::query::{NormalizedQuery, SearchQueryNormalizer};
use crate::types::{Article, PageMeta, PageRequest, PageResult, PageWindow};

/// Default result cap for [`ArticleService::quick_search`].
pub const QUICK_SEARCH_LIMIT: usize = 50;

/// A page of articles bucketed by chapter, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupedPage {
    pub data: ChapterGroups<Article>,
    pub meta: PageMeta,
}

/// Article browsing and search over any [`ArticleFetcher`].
#[derive(Debug, Clone)]
pub struct ArticleService<F> {
    fetcher: F,
    policy: PaginationPolicy,
    order: ChapterOrder,
}

impl<F: ArticleFetcher> ArticleService<F> {
    /// A service with default bounds, search length and chapter table.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            policy: PaginationPolicy::default(),
            order: ChapterOrder::default(),
        }
    }

    /// A service configured from `config`. Fails on any invalid setting.
    pub fn from_config(fetcher: F, config: &CartaConfig) -> Result<Self, ConfigError> {
        let normalizer = SearchQueryNormalizer::new(config.min_search_length)?;
        let policy = PaginationPolicy::new(config.pagination_bounds()?, normalizer);
        Ok(Self {
            fetcher,
            policy,
            order: config.chapter_order()?,
        })
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn policy(&self) -> &PaginationPolicy {
        &self.policy
    }

    pub fn chapter_order(&self) -> &ChapterOrder {
        &self.order
    }

    pub fn normalize_search(&self, raw: &str) -> NormalizedQuery {
        self.policy.normalizer().normalize(raw)
    }

    pub fn paginate(&self, request: &PageRequest) -> Result<PageResult, FetchError> {
        self.policy.paginate(request, &self.fetcher)
    }

    pub fn sort_chapters(&self, chapters: Vec<String>) -> Vec<String> {
        self.order.sort_flat(chapters)
    }

    pub fn sort_chapter_groups<T, I>(&self, groups: I) -> ChapterGroups<T>
    where
        I: IntoIterator<Item = (String, Vec<T>)>,
    {
        self.order.sort_grouped(groups)
    }

    /// Every distinct chapter in the data source, in display order.
    pub fn chapters(&self) -> Result<Vec<String>, FetchError> {
        let chapters = self.fetcher.find_all_chapters()?;
        Ok(self.sort_chapters(chapters))
    }

    /// One page, bucketed by chapter.
    ///
    /// Grouping happens after paging, so a chapter can straddle two pages.
    pub fn grouped_page(&self, request: &PageRequest) -> Result<GroupedPage, FetchError> {
        let envelope = self.paginate(request)?.into_envelope();
        Ok(GroupedPage {
            data: self.order.group_by_chapter(envelope.data),
            meta: envelope.meta,
        })
    }

    /// Look up an article by number.
    ///
    /// Without a document id every document's article with that number comes
    /// back. With one, a missing article is an error. Numbers below 1 match
    /// nothing.
    pub fn find_by_article_number(
        &self,
        number: i64,
        document_id: Option<&str>,
    ) -> Result<Vec<Article>, LookupError> {
        let Ok(number) = u32::try_from(number) else {
            return Ok(Vec::new());
        };
        if number == 0 {
            return Ok(Vec::new());
        }

        match document_id {
            Some(document_id) => match self.fetcher.find_by_number(document_id, number)? {
                Some(article) => Ok(vec![article]),
                None => Err(LookupError::NotFound {
                    document_id: document_id.to_string(),
                    number,
                }),
            },
            None => Ok(self.fetcher.find_by_article_number(number)?),
        }
    }

    /// Unpaged search capped at `limit` results.
    ///
    /// Only blank queries are refused here; the minimum length applies to
    /// paginated search alone.
    pub fn quick_search(&self, raw: &str, limit: usize) -> Result<Vec<Article>, FetchError> {
        let term = raw.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }
        debug!(term, limit, "quick search");
        let window = PageWindow {
            page: 1,
            items_per_page: limit.max(1),
        };
        Ok(self.fetcher.search_paginated(term, window)?.items)
    }
}
