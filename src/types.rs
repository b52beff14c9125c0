// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records that flow between callers, the pagination policy and the fetcher.
//!
//! An `Article` is owned by the storage layer. The core only ever reads two of
//! its fields (`chapter` and `article_number`); everything else rides along so
//! callers can render it.
//!
//! # Invariants
//!
//! - **PageResult**: `pages = ceil(total / items_per_page)` and `pages = 0` iff `total = 0`.
//! - **PageResult**: `items.len() <= items_per_page`.
//! - **PageResult**: `items` ascending by `article_number`.
//!
//! `contracts::check_page_result` asserts all three in debug builds.

use serde::{Deserialize, Serialize};

fn default_status() -> String {
    "active".to_string()
}

/// A cross-reference from an article to articles of another law.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concordance {
    pub referenced_law: String,
    #[serde(default)]
    pub referenced_articles: Vec<String>,
    pub source_article_number: u32,
}

/// A unit of legal text identified by its number within a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub document_id: String,
    pub article_number: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub chapter: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub concordances: Vec<Concordance>,
}

impl Article {
    /// Create an active article with no chapter, title or concordances.
    pub fn new(document_id: impl Into<String>, article_number: u32, content: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            article_number,
            title: None,
            content: content.into(),
            chapter: None,
            notes: None,
            status: default_status(),
            concordances: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_chapter(mut self, chapter: impl Into<String>) -> Self {
        self.chapter = Some(chapter.into());
        self
    }

    /// Chapter label, treating an empty string as "no chapter".
    pub fn chapter_label(&self) -> Option<&str> {
        self.chapter.as_deref().filter(|c| !c.is_empty())
    }
}

/// Raw paging parameters as a caller supplied them.
///
/// `page` and `items_per_page` are signed on purpose: query strings carry
/// whatever the user typed, and clamping is the policy's job.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageRequest {
    pub page: i64,
    pub items_per_page: i64,
    pub chapter: Option<String>,
    pub search: Option<String>,
}

impl PageRequest {
    pub fn new(page: i64, items_per_page: i64) -> Self {
        Self {
            page,
            items_per_page,
            chapter: None,
            search: None,
        }
    }

    pub fn with_chapter(mut self, chapter: impl Into<String>) -> Self {
        self.chapter = Some(chapter.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Chapter filter exactly as given, or `None` when absent or blank.
    pub fn chapter_filter(&self) -> Option<&str> {
        self.chapter.as_deref().filter(|c| !c.trim().is_empty())
    }

    /// Raw search text, or `None` when absent or blank.
    pub fn search_text(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Effective page coordinates after clamping. Always `page >= 1`, `items_per_page >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageWindow {
    pub page: usize,
    pub items_per_page: usize,
}

impl PageWindow {
    /// Number of records to skip: `(page - 1) * items_per_page`.
    #[inline]
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.items_per_page)
    }

    /// Start/end indices of this window within `total` records.
    pub fn bounds(&self, total: usize) -> (usize, usize) {
        let start = self.offset().min(total);
        let end = start.saturating_add(self.items_per_page).min(total);
        (start, end)
    }
}

/// What a fetcher hands back: one page of items and the unpaged match count.
///
/// Both numbers must come from the same filter criteria.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchedPage {
    pub items: Vec<Article>,
    pub total: usize,
}

/// A page of articles plus the numbers needed to navigate to the others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub items: Vec<Article>,
    pub total: usize,
    pub pages: usize,
    /// Signed because a rejected search echoes the page exactly as requested.
    pub current_page: i64,
    pub items_per_page: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
}

impl PageResult {
    /// A result with nothing in it.
    pub fn empty(current_page: i64, items_per_page: usize) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            pages: 0,
            current_page,
            items_per_page,
            search_term: None,
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.pages as i64
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    /// Render as the `{data, meta}` envelope the REST layer returns.
    pub fn into_envelope(self) -> PageEnvelope<Article> {
        let meta = PageMeta {
            total: self.total,
            pages: self.pages,
            current_page: self.current_page,
            items_per_page: self.items_per_page,
            has_next_page: self.has_next_page(),
            has_previous_page: self.has_previous_page(),
            search_term: self.search_term,
        };
        PageEnvelope {
            data: self.items,
            meta,
        }
    }
}

/// Pagination metadata in the shape HTTP clients expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: usize,
    pub pages: usize,
    pub current_page: i64,
    pub items_per_page: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
}

/// `{ "data": [...], "meta": {...} }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}
