// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search query validation.
//!
//! A query is trimmed and then measured in Unicode code points. Anything
//! shorter than the minimum (2 by default) never reaches the data source;
//! the caller gets an empty page back instead of an error. "ñ" is one
//! character even though it is two bytes, so it is rejected.

use crate::config::MIN_SEARCH_LENGTH;
use crate::error::ConfigError;
use crate::types::PageResult;

/// Result of normalizing a raw query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedQuery {
    /// Trimmed and long enough to forward to the fetcher.
    Accepted(String),
    /// Trimmed but below the minimum length. Carries the trimmed text so it
    /// can be echoed back to the user.
    TooShort(String),
}

impl NormalizedQuery {
    /// The trimmed query text, accepted or not.
    pub fn term(&self) -> &str {
        match self {
            NormalizedQuery::Accepted(term) | NormalizedQuery::TooShort(term) => term,
        }
    }

    /// The term, only if it may be sent to the data source.
    pub fn accepted(&self) -> Option<&str> {
        match self {
            NormalizedQuery::Accepted(term) => Some(term),
            NormalizedQuery::TooShort(_) => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, NormalizedQuery::Accepted(_))
    }

    /// The zero-result page returned for a rejected query.
    ///
    /// `current_page` is the page exactly as requested, not clamped.
    pub fn empty_page(&self, requested_page: i64, items_per_page: usize) -> PageResult {
        PageResult {
            search_term: Some(self.term().to_string()),
            ..PageResult::empty(requested_page, items_per_page)
        }
    }
}

/// Trims queries and enforces the minimum length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchQueryNormalizer {
    min_length: usize,
}

impl SearchQueryNormalizer {
    pub fn new(min_length: usize) -> Result<Self, ConfigError> {
        if min_length == 0 {
            return Err(ConfigError::ZeroSearchLength);
        }
        Ok(Self { min_length })
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn normalize(&self, raw: &str) -> NormalizedQuery {
        let trimmed = raw.trim();
        if trimmed.chars().count() < self.min_length {
            NormalizedQuery::TooShort(trimmed.to_string())
        } else {
            NormalizedQuery::Accepted(trimmed.to_string())
        }
    }
}

impl Default for SearchQueryNormalizer {
    fn default() -> Self {
        Self {
            min_length: MIN_SEARCH_LENGTH,
        }
    }
}
