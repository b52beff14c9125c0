// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Chapter ordering: constitutional order first, alphabetical after.
//!
//! Chapters are not sorted alphabetically. A fixed table lists the canonical
//! chapters in the order the constitution presents them; any chapter missing
//! from the table sorts after all of them, and those stragglers sort among
//! themselves by code point.
//!
//! The comparison is a total order: listed names are ranked by table position
//! (distinct positions for distinct names), unlisted names fall back to string
//! comparison, so two distinct names never compare equal. That makes sorting
//! deterministic and idempotent.
//!
//! Articles without a chapter are grouped under a sentinel label. The sentinel
//! gets no special treatment: it is just another unlisted name.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::ConfigError;
use crate::types::Article;

/// Canonical chapter order of the constitution.
pub const DEFAULT_CHAPTER_ORDER: [&str; 4] = [
    "Principios fundamentales",
    "Derechos",
    "Garantías",
    "Otros",
];

/// Group label for articles that have no chapter.
pub const NO_CHAPTER_LABEL: &str = "Sin Capítulo";

/// Priority table plus the comparator built on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterOrder {
    table: Vec<String>,
    positions: HashMap<String, usize>,
    no_chapter_label: String,
}

impl ChapterOrder {
    /// Build an order from canonical chapter names, first name first.
    ///
    /// Duplicate names are a configuration error.
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Vec::new();
        let mut positions = HashMap::new();
        for name in names {
            let name = name.into();
            if positions.insert(name.clone(), table.len()).is_some() {
                return Err(ConfigError::DuplicateChapter(name));
            }
            table.push(name);
        }
        Ok(Self {
            table,
            positions,
            no_chapter_label: NO_CHAPTER_LABEL.to_string(),
        })
    }

    pub fn with_no_chapter_label(mut self, label: impl Into<String>) -> Self {
        self.no_chapter_label = label.into();
        self
    }

    pub fn table(&self) -> &[String] {
        &self.table
    }

    pub fn no_chapter_label(&self) -> &str {
        &self.no_chapter_label
    }

    /// Position in the table, or `None` for chapters the table doesn't list.
    pub fn priority(&self, chapter: &str) -> Option<usize> {
        self.positions.get(chapter).copied()
    }

    /// Compare two chapter names.
    ///
    /// 1. **Table position** - listed chapters first, in table order
    /// 2. **Code points** - only between two unlisted chapters
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match (self.priority(a), self.priority(b)) {
            (Some(pa), Some(pb)) => pa.cmp(&pb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    }

    /// Sort a flat list of chapter names. Duplicates are kept.
    pub fn sort_flat(&self, mut chapters: Vec<String>) -> Vec<String> {
        chapters.sort_by(|a, b| self.compare(a, b));
        crate::contracts::check_chapters_sorted(self, chapters.iter().map(String::as_str));
        chapters
    }

    /// Order a chapter → items grouping by chapter key.
    ///
    /// Items inside each group keep the order they arrived in; the fetch layer
    /// already returns them ascending by article number. Repeated keys are
    /// merged, appending later items after earlier ones.
    pub fn sort_grouped<T, I>(&self, groups: I) -> ChapterGroups<T>
    where
        I: IntoIterator<Item = (String, Vec<T>)>,
    {
        let mut merged: Vec<(String, Vec<T>)> = Vec::new();
        let mut slots: HashMap<String, usize> = HashMap::new();

        for (chapter, items) in groups {
            match slots.get(&chapter) {
                Some(&slot) => merged[slot].1.extend(items),
                None => {
                    slots.insert(chapter.clone(), merged.len());
                    merged.push((chapter, items));
                }
            }
        }

        merged.sort_by(|a, b| self.compare(&a.0, &b.0));
        crate::contracts::check_chapters_sorted(self, merged.iter().map(|(c, _)| c.as_str()));
        ChapterGroups { groups: merged }
    }

    /// Bucket articles by chapter, then order the buckets.
    ///
    /// Articles with no chapter (or an empty one) land under the no-chapter label.
    pub fn group_by_chapter<I>(&self, articles: I) -> ChapterGroups<Article>
    where
        I: IntoIterator<Item = Article>,
    {
        let mut buckets: Vec<(String, Vec<Article>)> = Vec::new();
        let mut slots: HashMap<String, usize> = HashMap::new();

        for article in articles {
            let label = article
                .chapter_label()
                .unwrap_or(&self.no_chapter_label)
                .to_string();
            match slots.get(&label) {
                Some(&slot) => buckets[slot].1.push(article),
                None => {
                    slots.insert(label.clone(), buckets.len());
                    buckets.push((label, vec![article]));
                }
            }
        }

        self.sort_grouped(buckets)
    }
}

impl Default for ChapterOrder {
    fn default() -> Self {
        let positions = DEFAULT_CHAPTER_ORDER
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), i))
            .collect();
        Self {
            table: DEFAULT_CHAPTER_ORDER.iter().map(|s| s.to_string()).collect(),
            positions,
            no_chapter_label: NO_CHAPTER_LABEL.to_string(),
        }
    }
}

/// Chapter groups in display order.
///
/// Serializes as a JSON object whose key order is the display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterGroups<T> {
    groups: Vec<(String, Vec<T>)>,
}

impl<T> ChapterGroups<T> {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn chapters(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(chapter, _)| chapter.as_str())
    }

    pub fn get(&self, chapter: &str) -> Option<&[T]> {
        self.groups
            .iter()
            .find(|(c, _)| c == chapter)
            .map(|(_, items)| items.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.groups.iter().map(|(c, items)| (c.as_str(), items.as_slice()))
    }

    pub fn into_inner(self) -> Vec<(String, Vec<T>)> {
        self.groups
    }
}

impl<T> IntoIterator for ChapterGroups<T> {
    type Item = (String, Vec<T>);
    type IntoIter = std::vec::IntoIter<(String, Vec<T>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<T: Serialize> Serialize for ChapterGroups<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (chapter, items) in &self.groups {
            map.serialize_entry(chapter, items)?;
        }
        map.end()
    }
}
