//! HTMX handlers for search input
//!
//! Keystrokes are posted here and fed to the session. The response carries
//! no markup; the page picks up changes from the view stream.

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use crate::server::AppState;

/// Form data posted on every input event
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    /// Current contents of the search box
    #[serde(default)]
    pub query: String,
}

/// Feeds the current search box contents to a session.
///
/// Responds 204 on success and 404 when the session is not open.
pub async fn search_input(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Form(form): Form<SearchForm>,
) -> StatusCode {
    match state.sessions.get(session_id) {
        Some(session) => {
            session.on_keystroke(form.query);
            StatusCode::NO_CONTENT
        }
        None => {
            tracing::debug!(%session_id, "Keystroke for unknown session");
            StatusCode::NOT_FOUND
        }
    }
}
