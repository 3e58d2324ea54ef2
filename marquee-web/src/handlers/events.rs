//! Server-sent view updates for a search session.
//!
//! Each change of the session's view is rendered and pushed as named events
//! (`trending`, `results`) that the page swaps into place. A section is only
//! sent when its markup changed. The session outlives its stream, so a
//! reconnect picks up where it left off; the registry reaper closes it once
//! no stream has been connected for the session TTL.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use futures::stream::{self, Stream, StreamExt};
use tokio::sync::watch;
use uuid::Uuid;

use crate::components::{results_section, trending_section};
use crate::server::AppState;
use crate::session::{SearchSession, ViewState};

const KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(15);

/// Starts the session's idle clock when the owning stream is dropped.
struct SessionGuard {
    session: SearchSession,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.session.touch();
        tracing::debug!(session_id = %self.session.id(), "View stream disconnected");
    }
}

struct ViewStream {
    receiver: watch::Receiver<ViewState>,
    image_base_url: String,
    last_trending: Option<String>,
    last_results: Option<String>,
    primed: bool,
    _guard: SessionGuard,
}

impl ViewStream {
    /// Waits for the next view and renders the sections that changed.
    ///
    /// The first call renders the current view without waiting.
    async fn next_events(mut self) -> Option<(Vec<Event>, Self)> {
        if self.primed && self.receiver.changed().await.is_err() {
            return None;
        }
        self.primed = true;

        let view = self.receiver.borrow_and_update().clone();
        let mut events = Vec::new();

        let trending = trending_section(&view.trending);
        if self.last_trending.as_ref() != Some(&trending) {
            events.push(Event::default().event("trending").data(&trending));
            self.last_trending = Some(trending);
        }

        let results = results_section(&view, &self.image_base_url);
        if self.last_results.as_ref() != Some(&results) {
            events.push(Event::default().event("results").data(&results));
            self.last_results = Some(results);
        }

        Some((events, self))
    }
}

fn view_events(view_stream: ViewStream) -> impl Stream<Item = Result<Event, Infallible>> {
    stream::unfold(view_stream, ViewStream::next_events)
        .flat_map(|events| stream::iter(events.into_iter().map(Ok)))
}

/// Streams rendered view updates for a session.
///
/// Responds 404 when the session is not open.
pub async fn search_events(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Response {
    let Some(session) = state.sessions.get(session_id) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let view_stream = ViewStream {
        receiver: session.subscribe(),
        image_base_url: state.discovery.image_base_url().to_string(),
        last_trending: None,
        last_results: None,
        primed: false,
        _guard: SessionGuard { session },
    };

    Sse::new(view_events(view_stream))
        .keep_alive(KeepAlive::new().interval(KEEP_ALIVE_INTERVAL))
        .into_response()
}
