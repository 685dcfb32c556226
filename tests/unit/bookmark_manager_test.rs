//! Unit tests for the SQLite bookmark store.
//!
//! These exercise insert / remove / contains / list through the
//! `BookmarkStore` trait, mostly on an in-memory database.

use quotesync::database::Database;
use quotesync::managers::bookmark_manager::{
    BookmarkStore, InsertOutcome, RemoveOutcome, SqliteBookmarkStore,
};
use quotesync::types::quote::Quote;
use tempfile::TempDir;

fn setup() -> SqliteBookmarkStore {
    SqliteBookmarkStore::in_memory().expect("Failed to open in-memory store")
}

#[test]
fn test_insert_then_contains() {
    let store = setup();
    let quote = Quote::new("Talk is cheap. Show me the code.", "Linus Torvalds");

    assert!(!store.contains(&quote).unwrap());
    assert_eq!(store.insert(&quote).unwrap(), InsertOutcome::Inserted);
    assert!(store.contains(&quote).unwrap());
}

/// Inserting the same text+author twice keeps a single record.
#[test]
fn test_duplicate_insert_is_noop() {
    let store = setup();
    let quote = Quote::new("A", "B");

    store.insert(&quote).unwrap();
    assert_eq!(store.insert(&Quote::new("A", "B")).unwrap(), InsertOutcome::AlreadyExists);

    assert_eq!(store.list_all().unwrap().len(), 1);
}

#[test]
fn test_same_text_different_author_are_distinct() {
    let store = setup();
    store.insert(&Quote::new("A", "B")).unwrap();
    store.insert(&Quote::new("A", "C")).unwrap();

    assert_eq!(store.list_all().unwrap().len(), 2);
}

#[test]
fn test_remove_existing_and_absent() {
    let store = setup();
    let quote = Quote::new("A", "B");
    store.insert(&quote).unwrap();

    assert_eq!(store.remove(&quote).unwrap(), RemoveOutcome::Removed);
    assert!(!store.contains(&quote).unwrap());
    assert_eq!(store.remove(&quote).unwrap(), RemoveOutcome::NotFound);
}

#[test]
fn test_list_all_returns_oldest_first() {
    let store = setup();
    let texts = ["first", "second", "third"];
    for text in texts {
        store.insert(&Quote::new(text, "someone")).unwrap();
    }

    let listed: Vec<String> = store.list_all().unwrap().into_iter().map(|r| r.text).collect();
    assert_eq!(listed, texts);
}

#[test]
fn test_records_rebuild_their_quote() {
    let store = setup();
    let quote = Quote::new("Well done is better than well said.", "Benjamin Franklin");
    store.insert(&quote).unwrap();

    let record = store.list_all().unwrap().remove(0);
    assert_eq!(record.id, quote.id());
    assert_eq!(record.to_quote(), quote);
    assert!(record.created_at > 0);
}

#[test]
fn test_bookmarks_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bookmarks.db");
    let quote = Quote::new("A", "B");

    {
        let store = SqliteBookmarkStore::new(Database::open(&path).unwrap());
        store.insert(&quote).unwrap();
    }

    let store = SqliteBookmarkStore::new(Database::open(&path).unwrap());
    assert!(store.contains(&quote).unwrap());
    assert_eq!(store.list_all().unwrap().len(), 1);
}

#[test]
fn test_store_is_shareable_across_threads() {
    let store = std::sync::Arc::new(setup());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let store = store.clone();
            std::thread::spawn(move || {
                store.insert(&Quote::new("shared", "thread")).unwrap();
                store.insert(&Quote::new(format!("own {}", i), "thread")).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.list_all().unwrap().len(), 5);
}
