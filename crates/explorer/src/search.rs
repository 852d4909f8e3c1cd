//! Debounced, cancelable search orchestration.
//!
//! Every keystroke submits a query. The scheduler bumps a monotonic query
//! version (canceling the pending debounce and any in-flight scan of the
//! previous query), sleeps out the debounce window, then runs the engine
//! and publishes the outcome on a watch channel only if the version is
//! still current. Last query wins: a superseded search can never
//! overwrite a newer result, no matter how late it finishes.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use archive::{run_search, ContentReader, SearchIndex, SearchOutcome, SearchVersionTracker};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// How long the query must stay unchanged before a search actually runs.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// What one search run needs: the searchable-file snapshot and the content
/// reader for the same archive.
#[derive(Clone)]
struct SearchSource {
    index: Arc<SearchIndex>,
    reader: Arc<dyn ContentReader>,
}

struct SchedulerState {
    tracker: SearchVersionTracker,
    source: Mutex<Option<SearchSource>>,
    results: watch::Sender<Option<SearchOutcome>>,
}

/// Debounced last-query-wins search front-end over the engine.
pub struct SearchScheduler {
    state: Arc<SchedulerState>,
    debounce: Duration,
}

impl SearchScheduler {
    pub fn new() -> Self {
        Self::with_debounce(DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(debounce: Duration) -> Self {
        let (results, _) = watch::channel(None);
        Self {
            state: Arc::new(SchedulerState {
                tracker: SearchVersionTracker::new(),
                source: Mutex::new(None),
                results,
            }),
            debounce,
        }
    }

    /// Points the scheduler at a newly loaded archive.
    ///
    /// Bumps the version so in-flight work against the previous archive is
    /// discarded, and clears published results.
    pub fn set_archive(&self, index: Arc<SearchIndex>, reader: Arc<dyn ContentReader>) {
        self.state.tracker.next_version();
        *self.state.source.lock().expect("search source lock") = Some(SearchSource { index, reader });
        let _ = self.state.results.send(None);
        tracing::debug!("search scheduler archive replaced");
    }

    /// Drops the archive and clears published results.
    pub fn clear_archive(&self) {
        self.state.tracker.next_version();
        *self.state.source.lock().expect("search source lock") = None;
        let _ = self.state.results.send(None);
    }

    /// Latest published outcome; `None` until a search completes (or after
    /// the archive changes).
    pub fn subscribe(&self) -> watch::Receiver<Option<SearchOutcome>> {
        self.state.results.subscribe()
    }

    /// Submits the current query text.
    ///
    /// Returns the handle of the spawned task; callers only need it to
    /// await completion in tests.
    pub fn submit(&self, query: impl Into<String>) -> JoinHandle<()> {
        let query = query.into();
        let version = self.state.tracker.next_version();
        let token = self.state.tracker.token(version);
        let state = Arc::clone(&self.state);
        let debounce = self.debounce;

        tracing::debug!(version, query = %query, "search submitted");
        tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if token.is_cancelled().is_none() {
                tracing::trace!(version, "debounced query superseded");
                return;
            }

            let source = state.source.lock().expect("search source lock").clone();
            let Some(source) = source else {
                return;
            };

            let Some(outcome) = run_search(&source.index, &query, source.reader.as_ref(), &token).await
            else {
                tracing::trace!(version, "search canceled mid-scan");
                return;
            };

            // The version check and the publish must be one atomic step;
            // checking first and sending later would let a stale scan that
            // finishes late clobber a newer result.
            let published = state.results.send_if_modified(|slot| {
                if token.is_cancelled().is_none() {
                    return false;
                }
                *slot = Some(outcome);
                true
            });
            if published {
                tracing::debug!(version, "search results published");
            } else {
                tracing::trace!(version, "stale search results discarded");
            }
        })
    }
}

impl Default for SearchScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SearchScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchScheduler")
            .field("debounce", &self.debounce)
            .finish()
    }
}
