//! Property-based tests for bookmark store operations.
//!
//! An arbitrary sequence of inserts and removes must leave the store holding
//! exactly the set a plain `HashSet` model would hold, with no duplicates.

use std::collections::HashSet;

use proptest::prelude::*;
use quotesync::managers::bookmark_manager::{
    BookmarkStore, InsertOutcome, RemoveOutcome, SqliteBookmarkStore,
};
use quotesync::types::quote::Quote;

#[derive(Debug, Clone)]
enum Op {
    Insert(usize),
    Remove(usize),
}

/// A small fixed pool so operations collide often.
fn pool() -> Vec<Quote> {
    vec![
        Quote::new("A", "B"),
        Quote::new("A", "C"),
        Quote::new("Stay hungry", "Jobs"),
        Quote::new("", "Anonymous"),
        Quote::new("Ünïcödé ✓", "Nobody"),
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..5usize).prop_map(Op::Insert),
        (0..5usize).prop_map(Op::Remove),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(40))]

    #[test]
    fn store_matches_set_model(ops in proptest::collection::vec(arb_op(), 1..40)) {
        let store = SqliteBookmarkStore::in_memory().expect("in-memory store");
        let quotes = pool();
        let mut model: HashSet<usize> = HashSet::new();

        for op in ops {
            match op {
                Op::Insert(i) => {
                    let expected = if model.insert(i) {
                        InsertOutcome::Inserted
                    } else {
                        InsertOutcome::AlreadyExists
                    };
                    prop_assert_eq!(store.insert(&quotes[i]).unwrap(), expected);
                }
                Op::Remove(i) => {
                    let expected = if model.remove(&i) {
                        RemoveOutcome::Removed
                    } else {
                        RemoveOutcome::NotFound
                    };
                    prop_assert_eq!(store.remove(&quotes[i]).unwrap(), expected);
                }
            }
        }

        let listed = store.list_all().unwrap();
        prop_assert_eq!(listed.len(), model.len());
        for (i, quote) in quotes.iter().enumerate() {
            prop_assert_eq!(store.contains(quote).unwrap(), model.contains(&i));
        }
    }

    #[test]
    fn repeated_insert_never_duplicates(
        text in "[a-zA-Z0-9 .,!?']{1,60}",
        author in "[a-zA-Z .]{1,30}",
        repeats in 2usize..6,
    ) {
        let store = SqliteBookmarkStore::in_memory().expect("in-memory store");
        for _ in 0..repeats {
            store.insert(&Quote::new(text.clone(), author.clone())).unwrap();
        }
        let listed = store.list_all().unwrap();
        prop_assert_eq!(listed.len(), 1);
        prop_assert_eq!(&listed[0].text, &text);
        prop_assert_eq!(&listed[0].author, &author);
    }
}
