//! Search session: debounced fetch-on-type for one visitor.
//!
//! Keystrokes update the raw term immediately. After a quiet period the
//! debounced term catches up, and every change of it starts a fetch. Fetches
//! are tagged with a sequence number and only the newest one may update the
//! view, so a slow response can never overwrite a fresher one.

use std::sync::Arc;
use std::time::Duration;

use marquee_search::DiscoveryService;
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::time::Instant;
use uuid::Uuid;

use super::debounce::Debouncer;
use super::state::{SearchStatus, ViewState};

/// Handle to a live search session. Cheap to clone.
#[derive(Debug, Clone)]
pub struct SearchSession {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    id: Uuid,
    discovery: DiscoveryService,
    state: watch::Sender<ViewState>,
    debouncer: Mutex<Debouncer>,
    last_active: Mutex<Instant>,
}

impl SearchSession {
    /// Opens a session: loads popular movies and trending searches right away.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn open(discovery: DiscoveryService, debounce: Duration) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        let inner = Arc::new(SessionInner {
            id: Uuid::new_v4(),
            discovery,
            state,
            debouncer: Mutex::new(Debouncer::new(debounce)),
            last_active: Mutex::new(Instant::now()),
        });
        tracing::debug!(session = %inner.id, "Search session opened");

        SessionInner::start_fetch(&inner, String::new());

        let loader = Arc::clone(&inner);
        tokio::spawn(async move { loader.load_trending().await });

        Self { inner }
    }

    /// Session identifier used in URLs.
    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    /// Current view state.
    pub fn snapshot(&self) -> ViewState {
        self.inner.state.borrow().clone()
    }

    /// Receiver notified on every view change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.touch();
        self.inner.state.subscribe()
    }

    /// Marks the session as used now.
    pub fn touch(&self) {
        *self.inner.last_active.lock() = Instant::now();
    }

    /// Whether nobody is watching the view and the session has not been
    /// used for at least `ttl`.
    pub fn is_idle(&self, ttl: Duration) -> bool {
        self.inner.state.receiver_count() == 0 && self.inner.last_active.lock().elapsed() >= ttl
    }

    /// Records a keystroke and restarts the debounce window.
    pub fn on_keystroke(&self, term: impl Into<String>) {
        let term = term.into();
        self.touch();
        self.inner.state.send_modify(|view| view.search_term = term.clone());

        let session = Arc::downgrade(&self.inner);
        self.inner.debouncer.lock().schedule(move || {
            if let Some(inner) = session.upgrade() {
                SessionInner::apply_debounced(&inner, term);
            }
        });
    }

    /// Cancels the pending debounce timer. In-flight fetches still complete.
    pub fn close(&self) {
        self.inner.debouncer.lock().cancel();
        tracing::debug!(session = %self.inner.id, "Search session closed");
    }
}

impl SessionInner {
    fn apply_debounced(inner: &Arc<Self>, term: String) {
        let changed = inner.state.send_if_modified(|view| {
            if view.debounced_term == term {
                return false;
            }
            view.debounced_term = term.clone();
            true
        });

        if changed {
            Self::start_fetch(inner, term);
        }
    }

    fn start_fetch(inner: &Arc<Self>, term: String) {
        let mut sequence = 0;
        inner.state.send_modify(|view| {
            view.latest_request += 1;
            sequence = view.latest_request;
            view.status = SearchStatus::Loading;
        });

        let fetcher = Arc::clone(inner);
        tokio::spawn(async move { fetcher.run_fetch(sequence, term).await });
    }

    async fn run_fetch(&self, sequence: u64, term: String) {
        let outcome = self.discovery.fetch_movies(&term).await;

        let top_result = match &outcome {
            Ok(movies) if !term.is_empty() => movies.first().cloned(),
            _ => None,
        };

        let status = match outcome {
            Ok(movies) => SearchStatus::Loaded(movies),
            Err(e) => {
                tracing::warn!(session = %self.id, term = %term, error = %e, "Movie fetch failed");
                SearchStatus::Failed(e.user_message())
            }
        };

        let applied = self.state.send_if_modified(|view| {
            if view.latest_request != sequence {
                return false;
            }
            view.status = status;
            true
        });
        if !applied {
            tracing::debug!(session = %self.id, term = %term, sequence, "Discarded stale response");
        }

        if let Some(movie) = top_result {
            self.discovery.record_search(&term, &movie).await;
        }
    }

    async fn load_trending(&self) {
        match self.discovery.get_trending().await {
            Ok(records) => self.state.send_modify(|view| view.trending = records),
            Err(e) => {
                tracing::warn!(session = %self.id, error = %e, "Failed to load trending searches")
            }
        }
    }
}
