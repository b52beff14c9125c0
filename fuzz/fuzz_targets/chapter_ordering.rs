// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the chapter comparator.
//!
//! A comparator that is not a total order makes `sort_by` produce garbage
//! (or panic on newer toolchains). Arbitrary chapter names must sort the same
//! way twice, and distinct names must never tie.

#![no_main]

use arbitrary::Arbitrary;
use carta::ChapterOrder;
use libfuzzer_sys::fuzz_target;
use std::cmp::Ordering;

#[derive(Debug, Arbitrary)]
struct OrderingInput {
    table: Vec<String>,
    chapters: Vec<String>,
}

fuzz_target!(|input: OrderingInput| {
    let table: Vec<String> = input.table.into_iter().take(16).collect();
    let chapters: Vec<String> = input.chapters.into_iter().take(64).collect();

    let order = match ChapterOrder::new(table) {
        Ok(order) => order,
        // Duplicate table entries are rejected at construction
        Err(_) => ChapterOrder::default(),
    };

    let once = order.sort_flat(chapters.clone());
    let twice = order.sort_flat(once.clone());
    assert_eq!(once, twice);
    assert_eq!(once.len(), chapters.len());

    for a in chapters.iter().take(8) {
        for b in chapters.iter().take(8) {
            let ab = order.compare(a, b);
            assert_eq!(ab, order.compare(b, a).reverse());
            assert_eq!(ab == Ordering::Equal, a == b);
        }
    }
});
