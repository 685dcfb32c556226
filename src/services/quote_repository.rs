//! Quote repository.
//!
//! Mediates between a [`QuoteSource`] and a [`BookmarkStore`]. Collaborator
//! errors are normalised here into `FetchError` and `StoreError`, and every
//! store call runs on tokio's blocking pool.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::managers::bookmark_manager::{BookmarkStore, InsertOutcome, RemoveOutcome};
use crate::services::quote_source::QuoteSource;
use crate::types::errors::{FetchError, StoreError};
use crate::types::quote::{BookmarkRecord, Quote};

/// Fetching and bookmarking, independent of any UI.
#[derive(Clone)]
pub struct QuoteRepository {
    source: Arc<dyn QuoteSource>,
    store: Arc<dyn BookmarkStore>,
}

impl QuoteRepository {
    pub fn new(source: Arc<dyn QuoteSource>, store: Arc<dyn BookmarkStore>) -> Self {
        Self { source, store }
    }

    /// Calls the source once. No retry.
    pub async fn fetch_random_quote(&self) -> Result<Quote, FetchError> {
        match self.source.random_quote().await {
            Ok(remote) => Ok(Quote::from(remote)),
            Err(err) => {
                warn!(error = %err, "quote fetch failed");
                Err(FetchError::from(err))
            }
        }
    }

    /// Removes the bookmark if `currently_bookmarked`, inserts it otherwise.
    /// Returns the new bookmarked state.
    pub async fn toggle_bookmark(
        &self,
        quote: &Quote,
        currently_bookmarked: bool,
    ) -> Result<bool, StoreError> {
        if currently_bookmarked {
            let outcome = self.run_store(quote, |store, q| store.remove(q)).await?;
            if outcome == RemoveOutcome::NotFound {
                debug!(id = %quote.id(), "bookmark already absent");
            }
            Ok(false)
        } else {
            let outcome = self.run_store(quote, |store, q| store.insert(q)).await?;
            if outcome == InsertOutcome::AlreadyExists {
                debug!(id = %quote.id(), "bookmark already present");
            }
            Ok(true)
        }
    }

    pub async fn is_bookmarked(&self, quote: &Quote) -> Result<bool, StoreError> {
        self.run_store(quote, |store, q| store.contains(q)).await
    }

    /// Removes a bookmark regardless of what is displayed. Absent records are
    /// already satisfied.
    pub async fn remove_bookmark(&self, quote: &Quote) -> Result<(), StoreError> {
        self.run_store(quote, |store, q| store.remove(q)).await?;
        Ok(())
    }

    pub async fn list_bookmarks(&self) -> Result<Vec<BookmarkRecord>, StoreError> {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || store.list_all())
            .await
            .map_err(|e| StoreError::Worker(e.to_string()))?
    }

    async fn run_store<T, F>(&self, quote: &Quote, op: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&dyn BookmarkStore, &Quote) -> Result<T, StoreError> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let quote = quote.clone();
        let result = tokio::task::spawn_blocking(move || op(store.as_ref(), &quote))
            .await
            .map_err(|e| StoreError::Worker(e.to_string()))?;
        if let Err(err) = &result {
            warn!(error = %err, "bookmark store operation failed");
        }
        result
    }
}
