// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Short search queries are not errors (they produce an empty page), so
//! nothing here covers them. Configuration problems surface once, at startup;
//! fetch failures pass through the core untouched.

use std::path::PathBuf;
use thiserror::Error;

/// Invalid configuration. Raised when building a config, never per call.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("duplicate chapter in priority table: {0:?}")]
    DuplicateChapter(String),
    #[error("items per page bounds are inverted: min {min} > max {max}")]
    InvertedBounds { min: usize, max: usize },
    #[error("min items per page must be at least 1")]
    ZeroItemsPerPage,
    #[error("default items per page {default} outside [{min}, {max}]")]
    DefaultOutOfRange { default: usize, min: usize, max: usize },
    #[error("min search length must be at least 1")]
    ZeroSearchLength,
    #[error("no-chapter label must not be blank")]
    BlankNoChapterLabel,
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure reported by a data fetcher. Propagated to callers unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("data source unavailable: {0}")]
    Unavailable(String),
    #[error("data source error: {0}")]
    Backend(String),
}

/// Failure looking up an article by number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("article number {number} not found in document {document_id:?}")]
    NotFound { document_id: String, number: u32 },
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Failure loading a constitution export.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid document JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
