//! Quote coordinator for QuoteSync.
//!
//! Owns the state of one quote screen: the current quote as a
//! [`Resource`], whether it is bookmarked, and whether a fetch is running.
//! Every transition is published twice: to a `watch` channel per stream
//! (latest value) and to a `broadcast` log of [`CoordinatorEvent`]s (every
//! value, in issue order). Both are updated under the same lock, so the log
//! and the latest values never disagree.
//!
//! One coordinator per screen session; dropping it closes both streams once
//! any spawned requests finish.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::services::quote_repository::QuoteRepository;
use crate::types::coordinator::{BookmarkToggle, CoordinatorEvent, CoordinatorState, FetchOutcome};
use crate::types::errors::{StoreError, ToggleError};
use crate::types::quote::{BookmarkRecord, Quote};
use crate::types::resource::Resource;

/// Events buffered per subscriber before it starts lagging.
pub const EVENT_CAPACITY: usize = 64;

/// Orchestrates fetching and bookmarking for one screen session.
///
/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct QuoteCoordinator {
    inner: Arc<Inner>,
}

struct Inner {
    repository: QuoteRepository,
    publisher: Mutex<Publisher>,
}

struct Publisher {
    state: CoordinatorState,
    /// Bumped on every published flag; lets a slow lookup detect that a
    /// newer flag went out while it was reading the store.
    flag_generation: u64,
    quote_tx: watch::Sender<Resource<Quote>>,
    bookmarked_tx: watch::Sender<bool>,
    events_tx: broadcast::Sender<CoordinatorEvent>,
}

impl Publisher {
    fn publish_quote(&mut self, resource: Resource<Quote>) {
        debug!(?resource, "publishing quote resource");
        self.state.current_quote_resource = resource.clone();
        self.quote_tx.send_replace(resource.clone());
        let _ = self.events_tx.send(CoordinatorEvent::Quote(resource));
    }

    fn publish_bookmarked(&mut self, flag: bool) {
        debug!(flag, "publishing bookmark flag");
        self.flag_generation += 1;
        self.state.current_bookmark_flag = flag;
        self.bookmarked_tx.send_replace(flag);
        let _ = self.events_tx.send(CoordinatorEvent::Bookmarked(flag));
    }

    /// Resets the flag without notifying; observers clear it themselves on
    /// `Loading` and `Error`.
    fn clear_bookmarked_silently(&mut self) {
        self.state.current_bookmark_flag = false;
        self.bookmarked_tx.send_if_modified(|flag| {
            *flag = false;
            false
        });
    }

    fn is_current(&self, quote: &Quote) -> bool {
        self.state
            .current_quote()
            .is_some_and(|current| current.id() == quote.id())
    }
}

/// Clears `in_flight_fetch` when the fetch finishes or its future is dropped.
struct InFlightGuard<'a> {
    inner: &'a Inner,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.inner.lock().state.in_flight_fetch = false;
    }
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, Publisher> {
        self.publisher.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Claims the fetch slot and publishes `Loading`, or returns `None` if a
    /// fetch is already running.
    fn begin_fetch(&self) -> Option<InFlightGuard<'_>> {
        let mut publisher = self.lock();
        if publisher.state.in_flight_fetch {
            return None;
        }
        publisher.state.in_flight_fetch = true;
        publisher.clear_bookmarked_silently();
        publisher.publish_quote(Resource::Loading);
        Some(InFlightGuard { inner: self })
    }

    /// Publishes `flag` only if `quote` is still the displayed quote.
    fn publish_bookmarked_for(&self, quote: &Quote, flag: bool) -> bool {
        let mut publisher = self.lock();
        if !publisher.is_current(quote) {
            debug!(id = %quote.id(), "quote no longer displayed; flag not published");
            return false;
        }
        publisher.publish_bookmarked(flag);
        true
    }

    /// Like [`publish_bookmarked_for`](Self::publish_bookmarked_for), but also
    /// drops a looked-up `flag` if another flag was published since
    /// `generation` was read.
    fn publish_looked_up_flag(&self, quote: &Quote, flag: bool, generation: u64) -> bool {
        let mut publisher = self.lock();
        if !publisher.is_current(quote) {
            debug!(id = %quote.id(), "quote no longer displayed; flag not published");
            return false;
        }
        if publisher.flag_generation != generation {
            debug!(id = %quote.id(), "newer flag already published; lookup dropped");
            return false;
        }
        publisher.publish_bookmarked(flag);
        true
    }
}

impl QuoteCoordinator {
    /// Creates a coordinator in the initial `(Loading, false, false)` state.
    pub fn new(repository: QuoteRepository) -> Self {
        let state = CoordinatorState::default();
        let (quote_tx, _) = watch::channel(state.current_quote_resource.clone());
        let (bookmarked_tx, _) = watch::channel(state.current_bookmark_flag);
        let (events_tx, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            inner: Arc::new(Inner {
                repository,
                publisher: Mutex::new(Publisher {
                    state,
                    flag_generation: 0,
                    quote_tx,
                    bookmarked_tx,
                    events_tx,
                }),
            }),
        }
    }

    /// Latest quote resource.
    pub fn quote_resource(&self) -> watch::Receiver<Resource<Quote>> {
        self.inner.lock().quote_tx.subscribe()
    }

    /// Latest bookmark flag for the displayed quote.
    pub fn bookmarked(&self) -> watch::Receiver<bool> {
        self.inner.lock().bookmarked_tx.subscribe()
    }

    /// Every transition published from now on, in order.
    pub fn subscribe(&self) -> broadcast::Receiver<CoordinatorEvent> {
        self.inner.lock().events_tx.subscribe()
    }

    pub fn state(&self) -> CoordinatorState {
        self.inner.lock().state.clone()
    }

    /// Fetches a new quote unless one is already being fetched.
    ///
    /// Publishes `Loading`, then `Success` followed by the quote's bookmark
    /// flag, or `Error` alone. Failures are not retried; calling again is the
    /// retry.
    pub async fn request_new_quote(&self) -> FetchOutcome {
        let Some(_guard) = self.inner.begin_fetch() else {
            debug!("fetch already in flight; request ignored");
            return FetchOutcome::AlreadyInFlight;
        };

        match self.inner.repository.fetch_random_quote().await {
            Ok(quote) => {
                info!(id = %quote.id(), author = quote.author(), "quote fetched");
                let resource = Resource::Success(quote.clone());
                let generation = {
                    let mut publisher = self.inner.lock();
                    publisher.publish_quote(resource.clone());
                    publisher.flag_generation
                };

                match self.inner.repository.is_bookmarked(&quote).await {
                    Ok(flag) => {
                        self.inner.publish_looked_up_flag(&quote, flag, generation);
                    }
                    Err(err) => warn!(error = %err, "could not resolve bookmark flag"),
                }
                FetchOutcome::Published(resource)
            }
            Err(err) => {
                let resource = Resource::Error(err.message);
                let mut publisher = self.inner.lock();
                publisher.clear_bookmarked_silently();
                publisher.publish_quote(resource.clone());
                FetchOutcome::Published(resource)
            }
        }
    }

    /// Runs [`request_new_quote`](Self::request_new_quote) on the runtime so
    /// the caller does not wait for it.
    pub fn spawn_request_new_quote(&self) -> JoinHandle<FetchOutcome> {
        let this = self.clone();
        tokio::spawn(async move { this.request_new_quote().await })
    }

    /// Bookmarks the displayed quote, or removes its bookmark.
    ///
    /// Fails with [`ToggleError::NoCurrentQuote`] without touching the store
    /// when no quote is displayed. On a store failure the flag is left as is.
    /// If a newer quote is displayed by the time the write lands, the write
    /// still stands but the flag is not published.
    pub async fn toggle_current_bookmark(&self) -> Result<BookmarkToggle, ToggleError> {
        let (quote, currently_bookmarked) = {
            let publisher = self.inner.lock();
            match publisher.state.current_quote() {
                Some(quote) => (quote.clone(), publisher.state.current_bookmark_flag),
                None => return Err(ToggleError::NoCurrentQuote),
            }
        };

        let bookmarked = self
            .inner
            .repository
            .toggle_bookmark(&quote, currently_bookmarked)
            .await?;
        info!(id = %quote.id(), bookmarked, "bookmark toggled");
        self.inner.publish_bookmarked_for(&quote, bookmarked);

        Ok(BookmarkToggle { quote, bookmarked })
    }

    /// Re-reads the displayed quote's flag from the store and publishes it if
    /// it changed. Returns `None` when no quote is displayed.
    pub async fn refresh_bookmark_flag(&self) -> Result<Option<bool>, StoreError> {
        let Some((quote, previous, generation)) = self.current_quote_and_flag() else {
            return Ok(None);
        };

        let flag = self.inner.repository.is_bookmarked(&quote).await?;
        if flag != previous {
            self.inner.publish_looked_up_flag(&quote, flag, generation);
        }
        Ok(Some(flag))
    }

    /// Removes any bookmark for `quote`, updating the flag if it is displayed.
    pub async fn remove_bookmark(&self, quote: &Quote) -> Result<(), StoreError> {
        self.inner.repository.remove_bookmark(quote).await?;
        let was_flagged = {
            let publisher = self.inner.lock();
            publisher.is_current(quote) && publisher.state.current_bookmark_flag
        };
        if was_flagged {
            self.inner.publish_bookmarked_for(quote, false);
        }
        Ok(())
    }

    /// All bookmarks, oldest first.
    pub async fn bookmarks(&self) -> Result<Vec<BookmarkRecord>, StoreError> {
        self.inner.repository.list_bookmarks().await
    }

    fn current_quote_and_flag(&self) -> Option<(Quote, bool, u64)> {
        let publisher = self.inner.lock();
        publisher.state.current_quote().map(|quote| {
            (
                quote.clone(),
                publisher.state.current_bookmark_flag,
                publisher.flag_generation,
            )
        })
    }
}
