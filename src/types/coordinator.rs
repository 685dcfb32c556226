use serde::Serialize;

use super::quote::Quote;
use super::resource::Resource;

/// Snapshot of a coordinator's observable state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CoordinatorState {
    pub current_quote_resource: Resource<Quote>,
    pub current_bookmark_flag: bool,
    pub in_flight_fetch: bool,
}

impl CoordinatorState {
    /// The quote currently displayed, if the last fetch succeeded.
    pub fn current_quote(&self) -> Option<&Quote> {
        self.current_quote_resource.data()
    }
}

/// One published transition, in the order the coordinator issued it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stream", content = "value", rename_all = "snake_case")]
pub enum CoordinatorEvent {
    Quote(Resource<Quote>),
    Bookmarked(bool),
}

/// Result of `request_new_quote`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The fetch ran and this terminal resource was published.
    Published(Resource<Quote>),
    /// Another fetch was already in flight; nothing happened.
    AlreadyInFlight,
}

/// A completed bookmark toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkToggle {
    pub quote: Quote,
    pub bookmarked: bool,
}

impl BookmarkToggle {
    /// Confirmation shown after the toggle.
    pub fn notice(&self) -> &'static str {
        if self.bookmarked {
            "Successfully saved Quote!"
        } else {
            "Removed Bookmark!"
        }
    }

    /// Confirmation shown after an undo re-saves a removed bookmark.
    pub fn undo_notice(&self) -> &'static str {
        "Re-saved!"
    }
}
