// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Configuration: paging bounds, search length, chapter priority table.
//!
//! Every field has a default, so an empty `{}` file is a valid config. Values
//! are checked once when the service is built; a bad table or inverted bounds
//! stop the program at startup instead of failing individual requests.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chapters::{ChapterOrder, DEFAULT_CHAPTER_ORDER, NO_CHAPTER_LABEL};
use crate::error::ConfigError;

pub const MIN_ITEMS_PER_PAGE: usize = 10;
pub const MAX_ITEMS_PER_PAGE: usize = 100;
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;
pub const MIN_SEARCH_LENGTH: usize = 2;

/// Validated `[min, max]` range for items per page, plus the default used
/// when the caller does not ask for a size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationBounds {
    min: usize,
    max: usize,
    default: usize,
}

impl PaginationBounds {
    pub fn new(min: usize, max: usize, default: usize) -> Result<Self, ConfigError> {
        if min == 0 {
            return Err(ConfigError::ZeroItemsPerPage);
        }
        if min > max {
            return Err(ConfigError::InvertedBounds { min, max });
        }
        if !(min..=max).contains(&default) {
            return Err(ConfigError::DefaultOutOfRange { default, min, max });
        }
        Ok(Self { min, max, default })
    }

    #[inline]
    pub fn min(&self) -> usize {
        self.min
    }

    #[inline]
    pub fn max(&self) -> usize {
        self.max
    }

    #[inline]
    pub fn default_items_per_page(&self) -> usize {
        self.default
    }
}

impl Default for PaginationBounds {
    fn default() -> Self {
        Self {
            min: MIN_ITEMS_PER_PAGE,
            max: MAX_ITEMS_PER_PAGE,
            default: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

fn default_min_items() -> usize {
    MIN_ITEMS_PER_PAGE
}

fn default_max_items() -> usize {
    MAX_ITEMS_PER_PAGE
}

fn default_items() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_min_search() -> usize {
    MIN_SEARCH_LENGTH
}

fn default_chapter_order() -> Vec<String> {
    DEFAULT_CHAPTER_ORDER.iter().map(|s| s.to_string()).collect()
}

fn default_no_chapter_label() -> String {
    NO_CHAPTER_LABEL.to_string()
}

/// On-disk configuration (JSON, snake_case keys).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CartaConfig {
    #[serde(default = "default_min_items")]
    pub min_items_per_page: usize,
    #[serde(default = "default_max_items")]
    pub max_items_per_page: usize,
    #[serde(default = "default_items")]
    pub default_items_per_page: usize,
    #[serde(default = "default_min_search")]
    pub min_search_length: usize,
    #[serde(default = "default_chapter_order")]
    pub chapter_order: Vec<String>,
    #[serde(default = "default_no_chapter_label")]
    pub no_chapter_label: String,
}

impl Default for CartaConfig {
    fn default() -> Self {
        Self {
            min_items_per_page: MIN_ITEMS_PER_PAGE,
            max_items_per_page: MAX_ITEMS_PER_PAGE,
            default_items_per_page: DEFAULT_ITEMS_PER_PAGE,
            min_search_length: MIN_SEARCH_LENGTH,
            chapter_order: default_chapter_order(),
            no_chapter_label: NO_CHAPTER_LABEL.to_string(),
        }
    }
}

impl CartaConfig {
    /// Read and parse a JSON config file. Does not validate; see [`Self::validate`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn pagination_bounds(&self) -> Result<PaginationBounds, ConfigError> {
        PaginationBounds::new(
            self.min_items_per_page,
            self.max_items_per_page,
            self.default_items_per_page,
        )
    }

    pub fn chapter_order(&self) -> Result<ChapterOrder, ConfigError> {
        if self.no_chapter_label.trim().is_empty() {
            return Err(ConfigError::BlankNoChapterLabel);
        }
        ChapterOrder::new(self.chapter_order.iter().cloned())
            .map(|order| order.with_no_chapter_label(self.no_chapter_label.clone()))
    }

    /// Check every field at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_search_length == 0 {
            return Err(ConfigError::ZeroSearchLength);
        }
        self.pagination_bounds()?;
        self.chapter_order()?;
        Ok(())
    }
}
