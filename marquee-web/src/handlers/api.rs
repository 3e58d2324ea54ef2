//! JSON API handlers for movies and trending searches

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;

use crate::server::AppState;

const TRENDING_FAILURE_MESSAGE: &str = "Failed to load trending searches";

/// Query string for the movie listing
#[derive(Debug, Deserialize)]
pub struct MoviesQuery {
    /// Search text; absent or empty lists popular movies
    pub query: Option<String>,
}

/// Popular movies without a query, matching movies with one.
///
/// Upstream failures map to 502 with the user-facing message.
pub async fn api_movies(
    State(state): State<AppState>,
    Query(params): Query<MoviesQuery>,
) -> Response {
    let query = params.query.unwrap_or_default();

    match state.discovery.fetch_movies(&query).await {
        Ok(movies) => Json(movies).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, query = %query, "Movie fetch failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": e.user_message() })),
            )
                .into_response()
        }
    }
}

/// Most searched terms, highest count first.
///
/// Store failures map to 502 with a generic message.
pub async fn api_trending(State(state): State<AppState>) -> Response {
    match state.discovery.get_trending().await {
        Ok(records) => Json(records).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Trending query failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": TRENDING_FAILURE_MESSAGE })),
            )
                .into_response()
        }
    }
}
