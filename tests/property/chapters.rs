//! Chapter ordering is a deterministic total order.

use std::cmp::Ordering;

use super::{chapter_list_strategy, chapter_strategy};
use carta::{ChapterOrder, DEFAULT_CHAPTER_ORDER};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_sort_is_idempotent(chapters in chapter_list_strategy()) {
        let order = ChapterOrder::default();
        let once = order.sort_flat(chapters);
        let twice = order.sort_flat(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_sort_is_permutation(chapters in chapter_list_strategy()) {
        let order = ChapterOrder::default();
        let mut sorted = order.sort_flat(chapters.clone());
        let mut original = chapters;
        sorted.sort();
        original.sort();
        prop_assert_eq!(sorted, original);
    }

    #[test]
    fn prop_distinct_names_never_tie(a in chapter_strategy(), b in chapter_strategy()) {
        prop_assume!(a != b);
        let order = ChapterOrder::default();
        let ab = order.compare(&a, &b);
        let ba = order.compare(&b, &a);
        prop_assert_ne!(ab, Ordering::Equal);
        prop_assert_eq!(ab, ba.reverse());
    }

    #[test]
    fn prop_comparison_is_transitive(
        a in chapter_strategy(),
        b in chapter_strategy(),
        c in chapter_strategy(),
    ) {
        let order = ChapterOrder::default();
        if order.compare(&a, &b) != Ordering::Greater && order.compare(&b, &c) != Ordering::Greater {
            prop_assert_ne!(order.compare(&a, &c), Ordering::Greater);
        }
    }

    #[test]
    fn prop_listed_before_unlisted(
        listed in prop::sample::select(DEFAULT_CHAPTER_ORDER.to_vec()),
        unlisted in "[A-Za-z ]{0,14}",
    ) {
        let order = ChapterOrder::default();
        prop_assume!(order.priority(&unlisted).is_none());
        prop_assert_eq!(order.compare(listed, &unlisted), Ordering::Less);
    }

    #[test]
    fn prop_grouping_keeps_items(groups in prop::collection::vec((chapter_strategy(), prop::collection::vec(any::<u16>(), 0..5)), 0..8)) {
        let order = ChapterOrder::default();
        let sorted = order.sort_grouped(groups.clone());

        // Each key's items are the concatenation of its input groups, in input order
        for (chapter, items) in sorted.iter() {
            let expected: Vec<u16> = groups
                .iter()
                .filter(|(c, _)| c == chapter)
                .flat_map(|(_, items)| items.iter().copied())
                .collect();
            prop_assert_eq!(items, expected.as_slice());
        }

        let keys: Vec<&str> = sorted.chapters().collect();
        for pair in keys.windows(2) {
            prop_assert_eq!(order.compare(pair[0], pair[1]), Ordering::Less);
        }
    }
}
