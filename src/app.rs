//! App core for QuoteSync.
//!
//! Composition root: loads settings, opens the bookmark database, builds the
//! HTTP quote source and the repository, and hands out one
//! [`QuoteCoordinator`] per screen session.

use std::fs;
use std::sync::Arc;

use tracing::info;

use crate::database::Database;
use crate::managers::bookmark_manager::{BookmarkStore, SqliteBookmarkStore};
use crate::managers::quote_coordinator::QuoteCoordinator;
use crate::services::quote_repository::QuoteRepository;
use crate::services::quote_source::{HttpQuoteSource, QuoteSource};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::AppError;
use crate::types::settings::QuotesSettings;

/// Long-lived application state shared by every screen session.
pub struct App {
    settings: QuotesSettings,
    repository: QuoteRepository,
}

impl App {
    /// Loads settings (from `settings_path` or the platform default), opens
    /// the bookmark database and builds the HTTP source.
    pub fn new(settings_path: Option<String>) -> Result<Self, AppError> {
        let mut settings_engine = SettingsEngine::new(settings_path);
        let settings = settings_engine.load()?;

        let db_path = settings_engine.database_path();
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::Database(e.to_string()))?;
        }
        let db = Database::open(&db_path).map_err(|e| AppError::Database(e.to_string()))?;
        info!(path = %db_path.display(), "bookmark database opened");

        let source = HttpQuoteSource::new(&settings.source)?;
        info!(url = source.url(), "quote source configured");

        Ok(Self::with_parts(
            settings,
            Arc::new(source),
            Arc::new(SqliteBookmarkStore::new(db)),
        ))
    }

    /// Wires an app from ready-made collaborators.
    pub fn with_parts(
        settings: QuotesSettings,
        source: Arc<dyn QuoteSource>,
        store: Arc<dyn BookmarkStore>,
    ) -> Self {
        Self {
            settings,
            repository: QuoteRepository::new(source, store),
        }
    }

    pub fn settings(&self) -> &QuotesSettings {
        &self.settings
    }

    pub fn repository(&self) -> &QuoteRepository {
        &self.repository
    }

    /// Starts a screen session with a fresh `(Loading, false, false)` state.
    pub fn new_coordinator(&self) -> QuoteCoordinator {
        QuoteCoordinator::new(self.repository.clone())
    }
}
