use std::sync::Arc;

use proptest::prelude::*;

use crate::dict::KanwaDict;
use crate::itaiji::ItaijiTable;

fn dict() -> KanwaDict {
    KanwaDict::new(Arc::new(ItaijiTable::new()))
}

fn suffix_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just('い'), Just('葉'), Just('物')], 0..3)
        .prop_map(|chars| chars.into_iter().collect())
}

fn reading_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just('か'), Just('い'), Just('こ'), Just('と')], 1..4)
        .prop_map(|chars| chars.into_iter().collect())
}

fn okurigana_strategy() -> impl Strategy<Value = Option<char>> {
    prop_oneof![Just(None), Just(Some('u')), Just(Some('k')), Just(Some('t'))]
}

proptest! {
    #[test]
    fn candidate_order_is_a_priority_order(
        items in proptest::collection::vec(
            (suffix_strategy(), reading_strategy(), okurigana_strategy()),
            1..20,
        )
    ) {
        let d = dict();
        for (suffix, reading, okurigana) in &items {
            d.add_entry(&format!("言{suffix}"), reading, *okurigana);
        }
        let entries = d.lookup('言').unwrap();
        prop_assert!(!entries.is_empty());
        for pair in entries.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            // longer first
            prop_assert!(a.required_len() >= b.required_len());
            // okurigana-bearing first at equal length
            if a.required_len() == b.required_len() {
                prop_assert!(!(a.okurigana().is_none() && b.okurigana().is_some()));
            }
        }
    }

    #[test]
    fn lookup_never_yields_duplicates(
        items in proptest::collection::vec(
            (suffix_strategy(), reading_strategy(), okurigana_strategy()),
            1..20,
        )
    ) {
        let d = dict();
        for (suffix, reading, okurigana) in &items {
            d.add_entry(&format!("言{suffix}"), reading, *okurigana);
        }
        let entries = d.lookup('言').unwrap();
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                prop_assert!(a != b);
            }
        }
    }

    #[test]
    fn equal_priority_keeps_insertion_order(
        readings in proptest::collection::vec(reading_strategy(), 1..10)
    ) {
        let d = dict();
        for reading in &readings {
            d.add_entry("言", reading, Some('u'));
        }
        let entries = d.lookup('言').unwrap();
        // all entries share one priority, so lookup order must be the
        // first-insertion order of the distinct readings
        let mut expected: Vec<&String> = Vec::new();
        for reading in &readings {
            if !expected.contains(&reading) {
                expected.push(reading);
            }
        }
        let got: Vec<&str> = entries.iter().map(|e| e.reading()).collect();
        let expected: Vec<&str> = expected.iter().map(|s| s.as_str()).collect();
        prop_assert_eq!(got, expected);
    }
}
