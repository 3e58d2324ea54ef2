//! HTMX + Tailwind web server for Marquee
//!
//! Serves the search page, its keystroke and view stream endpoints, and a
//! small JSON API over the same discovery service.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use marquee_core::config::SearchConfig;
use marquee_core::{MarqueeConfig, MarqueeError, RuntimeMode};
use marquee_search::DiscoveryService;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{api_movies, api_trending, search_events, search_input};
use crate::pages::home_page;
use crate::session::SessionRegistry;

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    /// Catalog and trending analytics
    pub discovery: DiscoveryService,
    /// Search sessions opened by page loads
    pub sessions: SessionRegistry,
    /// Debounce and session lifetime settings
    pub search: Arc<SearchConfig>,
}

impl AppState {
    /// Creates state with no open sessions.
    pub fn new(discovery: DiscoveryService, search: SearchConfig) -> Self {
        Self {
            discovery,
            sessions: SessionRegistry::new(),
            search: Arc::new(search),
        }
    }
}

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(home_page))
        // HTMX and view stream endpoints
        .route("/htmx/search/{session_id}", post(search_input))
        .route("/sse/search/{session_id}", get(search_events))
        // JSON API endpoints
        .route("/api/movies", get(api_movies))
        .route("/api/trending", get(api_trending))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Runs the web server until it fails.
///
/// # Errors
///
/// - `MarqueeError::Io` - If the listener cannot bind
/// - `MarqueeError::Server` - If the server stops with an error
pub async fn run_server(config: MarqueeConfig, mode: RuntimeMode) -> Result<(), MarqueeError> {
    let discovery = DiscoveryService::from_runtime_mode(&config, mode);
    let state = AppState::new(discovery, config.search.clone());
    let _reaper = state.sessions.spawn_reaper(config.search.session_ttl);
    let app = build_router(state);

    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(%address, %mode, "Marquee server running");

    axum::serve(listener, app)
        .await
        .map_err(|e| MarqueeError::Server {
            reason: e.to_string(),
        })
}
