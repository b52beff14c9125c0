// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for export parsing and import.
//!
//! Whatever JSON arrives, parsing either fails cleanly or the import accounts
//! for every article as imported or skipped.

#![no_main]

use carta::{import_into, ImportDocument, MemoryStore};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(document) = serde_json::from_slice::<ImportDocument>(data) else {
        return;
    };
    let entries = document.articles.len();

    let mut store = MemoryStore::new();
    let report = import_into(&mut store, document);

    assert_eq!(report.imported + report.skipped, entries);
    assert_eq!(store.len(), report.imported);
    assert!(!report.document_id.is_empty());
});
