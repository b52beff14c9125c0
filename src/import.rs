// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a constitution export into a [`MemoryStore`].
//!
//! The export is a single JSON document:
//!
//! ```json
//! {
//!   "name": "Constitución de la República",
//!   "year": 2008,
//!   "last_modified": "2021-01-25",
//!   "total_articles": 444,
//!   "articles": [
//!     {
//!       "number": 1,
//!       "title": "Artículo 1",
//!       "content": "...",
//!       "chapter": "Principios fundamentales",
//!       "concordancias": [{ "law": "Código Civil", "articles": "5, 7" }]
//!     }
//!   ]
//! }
//! ```
//!
//! Article numbers seen earlier in the same file, numbers already in the
//! store and numbers below 1 are skipped and counted, never fatal. Numbers
//! written as strings (`"12"`) are accepted; anything else that is not a
//! positive integer counts as skipped.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ImportError;
use crate::fetch::MemoryStore;
use crate::types::{Article, Concordance};
use crate::util::normalize::{normalize, words};

fn default_name() -> String {
    "Unknown".to_string()
}

/// Top-level export document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImportDocument {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub total_articles: Option<u32>,
    #[serde(default)]
    pub articles: Vec<ImportArticle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImportArticle {
    #[serde(default)]
    pub number: ArticleNumber,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub chapter: Option<String>,
    #[serde(default, rename = "concordancias")]
    pub concordances: Vec<ImportConcordance>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImportConcordance {
    #[serde(default)]
    pub law: String,
    #[serde(default)]
    pub articles: ArticleRefs,
}

/// Article number as written in the export.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ArticleNumber {
    Int(i64),
    Text(String),
    Other(serde_json::Value),
}

impl Default for ArticleNumber {
    fn default() -> Self {
        ArticleNumber::Other(serde_json::Value::Null)
    }
}

impl ArticleNumber {
    /// The number as a storable article number, `None` unless it is a positive integer.
    pub fn value(&self) -> Option<u32> {
        let number = match self {
            ArticleNumber::Int(n) => *n,
            ArticleNumber::Text(s) => s.trim().parse::<i64>().ok()?,
            ArticleNumber::Other(_) => return None,
        };
        u32::try_from(number).ok().filter(|&n| n > 0)
    }
}

/// Referenced article list: exports write either `"5, 7"` or `["5", "7"]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ArticleRefs {
    Joined(String),
    List(Vec<String>),
}

impl Default for ArticleRefs {
    fn default() -> Self {
        ArticleRefs::List(Vec::new())
    }
}

impl ArticleRefs {
    pub fn into_vec(self) -> Vec<String> {
        let parts = match self {
            ArticleRefs::Joined(joined) => joined.split(',').map(str::to_string).collect(),
            ArticleRefs::List(list) => list,
        };
        parts
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

impl ImportDocument {
    /// `"Constitución de la República", 2008` → `"constitucion-de-la-republica-2008"`.
    pub fn document_id(&self) -> String {
        let folded = normalize(&self.name);
        let mut parts: Vec<String> = words(&folded).map(str::to_string).collect();
        if let Some(year) = self.year {
            parts.push(year.to_string());
        }
        if parts.is_empty() {
            return "unknown".to_string();
        }
        parts.join("-")
    }
}

/// Outcome of one import run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub document_id: String,
    pub imported: usize,
    pub skipped: usize,
}

/// Read and parse an export file.
pub fn load_document(path: &Path) -> Result<ImportDocument, ImportError> {
    let raw = fs::read_to_string(path).map_err(|source| ImportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Insert every new article of `document` into `store`.
pub fn import_into(store: &mut MemoryStore, document: ImportDocument) -> ImportReport {
    let document_id = document.document_id();
    let mut seen: HashSet<u32> = HashSet::new();
    let mut imported = 0;
    let mut skipped = 0;

    for entry in document.articles {
        let number = match entry.number.value() {
            Some(n) => n,
            None => {
                warn!(number = ?entry.number, "skipping article with invalid number");
                skipped += 1;
                continue;
            }
        };
        if !seen.insert(number) {
            warn!(number, "skipping duplicate article number in export");
            skipped += 1;
            continue;
        }
        if store.contains(&document_id, number) {
            warn!(number, document_id = %document_id, "article already loaded");
            skipped += 1;
            continue;
        }

        let concordances = entry
            .concordances
            .into_iter()
            .map(|c| Concordance {
                referenced_law: c.law,
                referenced_articles: c.articles.into_vec(),
                source_article_number: number,
            })
            .collect();

        let mut article = Article::new(document_id.as_str(), number, entry.content);
        article.title = entry.title;
        article.chapter = entry.chapter;
        article.concordances = concordances;
        store.insert(article);
        imported += 1;
    }

    if let Some(expected) = document.total_articles {
        if expected as usize != imported + skipped {
            warn!(expected, found = imported + skipped, "total_articles disagrees with export");
        }
    }
    info!(document_id = %document_id, imported, skipped, "import completed");

    ImportReport {
        document_id,
        imported,
        skipped,
    }
}

/// Load `path` into a fresh store.
pub fn load_store(path: &Path) -> Result<(MemoryStore, ImportReport), ImportError> {
    let document = load_document(path)?;
    let mut store = MemoryStore::new();
    let report = import_into(&mut store, document);
    Ok((store, report))
}
