// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! An in-memory fetcher.
//!
//! Good enough for a single constitution (a few hundred articles) and for
//! tests. Articles are kept sorted by `(article_number, document_id)`, so
//! every query walks them in the order pages must come out in.
//!
//! Text matching is an OR over query words: an article matches when any
//! folded query word is a prefix of one of the folded words of its title,
//! content or chapter. That is roughly what a datastore text index does,
//! minus stemming and relevance.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use tracing::debug;

use super::ArticleFetcher;
use crate::error::FetchError;
use crate::types::{Article, FetchedPage, PageWindow};
use crate::util::normalize::{normalize, words};

#[derive(Debug, Clone)]
struct Entry {
    article: Article,
    /// Folded words of title, content and chapter.
    words: Vec<String>,
}

impl Entry {
    fn new(article: Article) -> Self {
        let mut text = String::new();
        for part in [article.title.as_deref(), Some(article.content.as_str()), article.chapter.as_deref()]
            .into_iter()
            .flatten()
        {
            text.push_str(part);
            text.push(' ');
        }
        let folded = normalize(&text);
        let words = words(&folded).map(str::to_string).collect();
        Self { article, words }
    }

    fn matches_any(&self, terms: &[String]) -> bool {
        terms
            .iter()
            .any(|term| self.words.iter().any(|word| word.starts_with(term.as_str())))
    }

    fn key_cmp(&self, number: u32, document_id: &str) -> Ordering {
        self.article
            .article_number
            .cmp(&number)
            .then_with(|| self.article.document_id.as_str().cmp(document_id))
    }
}

/// Articles held in memory, ordered by number.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Vec<Entry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store, silently dropping repeated `(document_id, article_number)` pairs.
    pub fn from_articles<I: IntoIterator<Item = Article>>(articles: I) -> Self {
        let mut store = Self::new();
        for article in articles {
            store.insert(article);
        }
        store
    }

    /// Insert an article. Returns `false` if the document already has that number.
    pub fn insert(&mut self, article: Article) -> bool {
        let position = self
            .entries
            .binary_search_by(|e| e.key_cmp(article.article_number, &article.document_id));
        match position {
            Ok(_) => false,
            Err(slot) => {
                self.entries.insert(slot, Entry::new(article));
                true
            }
        }
    }

    pub fn contains(&self, document_id: &str, number: u32) -> bool {
        self.entries
            .binary_search_by(|e| e.key_cmp(number, document_id))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All articles, ascending by number.
    pub fn articles(&self) -> impl Iterator<Item = &Article> {
        self.entries.iter().map(|e| &e.article)
    }

    /// Count and slice one filtered pass, so `total` and `items` always agree.
    fn page<'a, I>(matches: I, window: PageWindow) -> FetchedPage
    where
        I: Iterator<Item = &'a Entry>,
    {
        let matched: Vec<&Entry> = matches.collect();
        let total = matched.len();
        let (start, end) = window.bounds(total);
        let items = matched[start..end].iter().map(|e| e.article.clone()).collect();
        FetchedPage { items, total }
    }
}

impl ArticleFetcher for MemoryStore {
    fn find_all_paginated(
        &self,
        window: PageWindow,
        chapter: Option<&str>,
    ) -> Result<FetchedPage, FetchError> {
        let chapter = chapter.filter(|c| !c.is_empty());
        let matches = self
            .entries
            .iter()
            .filter(|e| chapter.is_none_or(|c| e.article.chapter.as_deref() == Some(c)));
        Ok(Self::page(matches, window))
    }

    fn search_paginated(&self, term: &str, window: PageWindow) -> Result<FetchedPage, FetchError> {
        let folded = normalize(term);
        let terms: Vec<String> = words(&folded).map(str::to_string).collect();
        debug!(term, words = terms.len(), "memory search");
        let matches = self.entries.iter().filter(|e| e.matches_any(&terms));
        Ok(Self::page(matches, window))
    }

    fn find_all_chapters(&self) -> Result<Vec<String>, FetchError> {
        let chapters: BTreeSet<&str> = self
            .entries
            .iter()
            .filter_map(|e| e.article.chapter_label())
            .collect();
        Ok(chapters.into_iter().map(str::to_string).collect())
    }

    fn find_by_number(&self, document_id: &str, number: u32) -> Result<Option<Article>, FetchError> {
        Ok(self
            .entries
            .binary_search_by(|e| e.key_cmp(number, document_id))
            .ok()
            .map(|i| self.entries[i].article.clone()))
    }

    fn find_by_article_number(&self, number: u32) -> Result<Vec<Article>, FetchError> {
        let start = self
            .entries
            .partition_point(|e| e.article.article_number < number);
        Ok(self.entries[start..]
            .iter()
            .take_while(|e| e.article.article_number == number)
            .map(|e| e.article.clone())
            .collect())
    }
}
