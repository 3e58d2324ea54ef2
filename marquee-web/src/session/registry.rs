//! Live search sessions keyed by identifier.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use marquee_search::DiscoveryService;
use parking_lot::RwLock;
use tokio::task::JoinHandle;
use uuid::Uuid;

use super::search::SearchSession;

/// Shortest pause between reaper sweeps.
const MIN_REAP_INTERVAL: Duration = Duration::from_millis(100);

/// Shared map of open sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, SearchSession>>>,
}

impl SessionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens and registers a new session.
    pub fn open(&self, discovery: DiscoveryService, debounce: Duration) -> SearchSession {
        let session = SearchSession::open(discovery, debounce);
        self.sessions.write().insert(session.id(), session.clone());
        session
    }

    /// Looks up an open session.
    pub fn get(&self, id: Uuid) -> Option<SearchSession> {
        self.sessions.read().get(&id).cloned()
    }

    /// Removes a session and cancels its pending timer.
    ///
    /// Returns false when no such session was open.
    pub fn close(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().remove(&id);
        match removed {
            Some(session) => {
                session.close();
                true
            }
            None => false,
        }
    }

    /// Closes every session that is idle for at least `ttl`.
    ///
    /// Returns how many sessions were closed.
    pub fn reap_idle(&self, ttl: Duration) -> usize {
        let mut reaped = Vec::new();
        self.sessions.write().retain(|_, session| {
            if session.is_idle(ttl) {
                reaped.push(session.clone());
                false
            } else {
                true
            }
        });

        for session in &reaped {
            session.close();
        }
        if !reaped.is_empty() {
            tracing::debug!(count = reaped.len(), "Reaped idle search sessions");
        }
        reaped.len()
    }

    /// Spawns a task that reaps idle sessions every half `ttl`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn_reaper(&self, ttl: Duration) -> JoinHandle<()> {
        let registry = self.clone();
        let period = (ttl / 2).max(MIN_REAP_INTERVAL);

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                registry.reap_idle(ttl);
            }
        })
    }

    /// Number of open sessions.
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    /// Whether no sessions are open.
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}
