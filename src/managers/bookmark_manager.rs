//! Bookmark store for QuoteSync.
//!
//! Defines the `BookmarkStore` capability (insert / remove / contains / list,
//! keyed by a quote's derived identity) and its SQLite implementation.

use std::sync::{Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, Connection};

use crate::database::Database;
use crate::types::errors::StoreError;
use crate::types::quote::{BookmarkRecord, Quote, QuoteId};

/// Result of [`BookmarkStore::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// A record with the same identity was already present; nothing was written.
    AlreadyExists,
}

/// Result of [`BookmarkStore::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// No record matched; the store already satisfied the request.
    NotFound,
}

/// Durable collection of bookmarked quotes keyed by derived identity.
///
/// Implementations must make each `insert` and `remove` atomic per record.
/// Calls may block on I/O.
pub trait BookmarkStore: Send + Sync {
    fn insert(&self, quote: &Quote) -> Result<InsertOutcome, StoreError>;
    fn remove(&self, quote: &Quote) -> Result<RemoveOutcome, StoreError>;
    fn contains(&self, quote: &Quote) -> Result<bool, StoreError>;
    /// All bookmarks, oldest first.
    fn list_all(&self) -> Result<Vec<BookmarkRecord>, StoreError>;
}

/// Bookmark store backed by a SQLite database.
pub struct SqliteBookmarkStore {
    db: Mutex<Database>,
}

impl SqliteBookmarkStore {
    /// Creates a store that takes ownership of an already-migrated database.
    pub fn new(db: Database) -> Self {
        Self { db: Mutex::new(db) }
    }

    /// Store over a fresh in-memory database.
    pub fn in_memory() -> Result<Self, StoreError> {
        Ok(Self::new(Database::open_in_memory()?))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Database>, StoreError> {
        self.db
            .lock()
            .map_err(|_| StoreError::Database("bookmark connection lock poisoned".to_string()))
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<BookmarkRecord> {
        let raw_id: String = row.get(0)?;
        let id = QuoteId::parse(&raw_id).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                format!("invalid quote id: {}", raw_id).into(),
            )
        })?;
        Ok(BookmarkRecord {
            id,
            text: row.get(1)?,
            author: row.get(2)?,
            created_at: row.get(3)?,
        })
    }

    fn count_by_id(conn: &Connection, id: &QuoteId) -> Result<i64, rusqlite::Error> {
        conn.query_row(
            "SELECT COUNT(*) FROM bookmarks WHERE id = ?1",
            params![id.to_string()],
            |row| row.get(0),
        )
    }
}

impl BookmarkStore for SqliteBookmarkStore {
    fn insert(&self, quote: &Quote) -> Result<InsertOutcome, StoreError> {
        let db = self.lock()?;
        let affected = db.connection().execute(
            "INSERT OR IGNORE INTO bookmarks (id, text, author, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![quote.id().to_string(), quote.text(), quote.author(), Self::now()],
        )?;

        if affected == 0 {
            return Ok(InsertOutcome::AlreadyExists);
        }
        Ok(InsertOutcome::Inserted)
    }

    fn remove(&self, quote: &Quote) -> Result<RemoveOutcome, StoreError> {
        let db = self.lock()?;
        let affected = db.connection().execute(
            "DELETE FROM bookmarks WHERE id = ?1",
            params![quote.id().to_string()],
        )?;

        if affected == 0 {
            return Ok(RemoveOutcome::NotFound);
        }
        Ok(RemoveOutcome::Removed)
    }

    fn contains(&self, quote: &Quote) -> Result<bool, StoreError> {
        let db = self.lock()?;
        Ok(Self::count_by_id(db.connection(), &quote.id())? > 0)
    }

    fn list_all(&self) -> Result<Vec<BookmarkRecord>, StoreError> {
        let db = self.lock()?;
        let mut stmt = db.connection().prepare(
            "SELECT id, text, author, created_at FROM bookmarks ORDER BY created_at, rowid",
        )?;

        let rows = stmt.query_map([], Self::row_to_record)?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }
}
