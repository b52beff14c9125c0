//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::cell::RefCell;

use crate::error::FetchError;
use crate::fetch::{ArticleFetcher, MemoryStore};
use crate::types::{Article, FetchedPage, PageWindow};

/// Document id used by every helper-built article.
pub const TEST_DOCUMENT: &str = "constitucion-2015";

/// Create a test article with the given number and chapter.
///
/// This is the canonical implementation used across all tests.
pub fn make_article(number: u32, chapter: Option<&str>) -> Article {
    let article = Article::new(
        TEST_DOCUMENT,
        number,
        format!("Contenido del artículo {}", number),
    );
    match chapter {
        Some(chapter) => article.with_chapter(chapter),
        None => article,
    }
}

/// `count` articles numbered from 1, all in `chapter`.
pub fn make_articles(count: u32, chapter: Option<&str>) -> Vec<Article> {
    (1..=count).map(|n| make_article(n, chapter)).collect()
}

/// Article numbers, in order.
pub fn numbers(articles: &[Article]) -> Vec<u32> {
    articles.iter().map(|a| a.article_number).collect()
}

/// One call observed by [`RecordingFetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchCall {
    FindAll {
        window: PageWindow,
        chapter: Option<String>,
    },
    Search {
        term: String,
        window: PageWindow,
    },
    Chapters,
    ByNumber {
        document_id: String,
        number: u32,
    },
    ByArticleNumber(u32),
}

/// Fetcher that records every call and answers from a [`MemoryStore`],
/// or fails every call with a fixed error.
#[derive(Debug, Default)]
pub struct RecordingFetcher {
    store: MemoryStore,
    failure: Option<FetchError>,
    calls: RefCell<Vec<FetchCall>>,
}

impl RecordingFetcher {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            store: MemoryStore::from_articles(articles),
            failure: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(error: FetchError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<FetchCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: FetchCall) -> Result<(), FetchError> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

impl ArticleFetcher for RecordingFetcher {
    fn find_all_paginated(
        &self,
        window: PageWindow,
        chapter: Option<&str>,
    ) -> Result<FetchedPage, FetchError> {
        self.record(FetchCall::FindAll {
            window,
            chapter: chapter.map(str::to_string),
        })?;
        self.store.find_all_paginated(window, chapter)
    }

    fn search_paginated(&self, term: &str, window: PageWindow) -> Result<FetchedPage, FetchError> {
        self.record(FetchCall::Search {
            term: term.to_string(),
            window,
        })?;
        self.store.search_paginated(term, window)
    }

    fn find_all_chapters(&self) -> Result<Vec<String>, FetchError> {
        self.record(FetchCall::Chapters)?;
        self.store.find_all_chapters()
    }

    fn find_by_number(&self, document_id: &str, number: u32) -> Result<Option<Article>, FetchError> {
        self.record(FetchCall::ByNumber {
            document_id: document_id.to_string(),
            number,
        })?;
        self.store.find_by_number(document_id, number)
    }

    fn find_by_article_number(&self, number: u32) -> Result<Vec<Article>, FetchError> {
        self.record(FetchCall::ByArticleNumber(number))?;
        self.store.find_by_article_number(number)
    }
}
