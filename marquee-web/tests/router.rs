//! Router behavior over the development discovery service.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use futures::StreamExt;
use marquee_core::config::SearchConfig;
use marquee_core::{MarqueeConfig, RuntimeMode};
use marquee_search::{
    CatalogError, DiscoveryService, InMemoryDocumentStore, Movie, MovieCatalog, SearchAnalytics,
};
use marquee_web::{AppState, build_router};
use serde_json::Value;
use tower::ServiceExt;

const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

fn development_state() -> AppState {
    let discovery =
        DiscoveryService::from_runtime_mode(&MarqueeConfig::default(), RuntimeMode::Development);
    AppState::new(
        discovery,
        SearchConfig {
            debounce: Duration::from_millis(20),
            session_ttl: Duration::from_millis(200),
            ..Default::default()
        },
    )
}

#[derive(Debug)]
struct UnreachableCatalog;

#[async_trait]
impl MovieCatalog for UnreachableCatalog {
    async fn fetch_movies(&self, _query: Option<&str>) -> Result<Vec<Movie>, CatalogError> {
        Err(CatalogError::FetchFailure {
            reason: "connection refused".to_string(),
        })
    }
}

async fn get(state: &AppState, uri: &str) -> axum::response::Response {
    build_router(state.clone())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn post_keystroke(state: &AppState, session_id: &str, query: &str) -> StatusCode {
    let request = Request::builder()
        .method("POST")
        .uri(format!("/htmx/search/{session_id}"))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("query={query}")))
        .unwrap();
    build_router(state.clone())
        .oneshot(request)
        .await
        .unwrap()
        .status()
}

async fn eventually<F: Fn() -> bool>(condition: F) {
    for _ in 0..200 {
        if condition() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not reached in time");
}

#[tokio::test]
async fn test_home_page_opens_session() {
    let state = development_state();

    let response = get(&state, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("Find <span"));
    assert!(html.contains(r#"sse-connect="/sse/search/"#));
    assert!(html.contains(r#"sse-swap="results""#));
    assert_eq!(state.sessions.len(), 1);
}

#[tokio::test]
async fn test_keystroke_drives_session_search() {
    let state = development_state();
    let session = state
        .sessions
        .open(state.discovery.clone(), state.search.debounce);
    let session_id = session.id().to_string();

    assert_eq!(
        post_keystroke(&state, &session_id, "mat").await,
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        post_keystroke(&state, &session_id, "matrix").await,
        StatusCode::NO_CONTENT
    );

    eventually(|| {
        let view = session.snapshot();
        view.debounced_term == "matrix" && view.movies().first().map(|m| m.id) == Some(603)
    })
    .await;

    // The search is recorded after the results are applied.
    for _ in 0..200 {
        let trending = json_body(get(&state, "/api/trending").await).await;
        if trending[0]["search_term"] == "matrix" {
            assert_eq!(trending[0]["count"], 1);
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("search was never recorded");
}

#[tokio::test]
async fn test_keystroke_for_unknown_session_is_not_found() {
    let state = development_state();
    let status = post_keystroke(&state, &uuid::Uuid::new_v4().to_string(), "dune").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

async fn read_until(frames: &mut axum::body::BodyDataStream, needle: &str) -> String {
    let mut received = String::new();
    while !received.contains(needle) {
        let frame = tokio::time::timeout(Duration::from_secs(2), frames.next())
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        received.push_str(&String::from_utf8_lossy(&frame));
    }
    received
}

#[tokio::test]
async fn test_view_stream_survives_reconnect() {
    let state = development_state();
    let session = state
        .sessions
        .open(state.discovery.clone(), state.search.debounce);
    let stream_uri = format!("/sse/search/{}", session.id());

    let response = get(&state, &stream_uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/event-stream"
    );

    let mut frames = response.into_body().into_data_stream();
    let received = read_until(&mut frames, "movie-card").await;
    assert!(received.contains("event: results"));
    drop(frames);

    let reconnected = get(&state, &stream_uri).await;
    assert_eq!(reconnected.status(), StatusCode::OK);
    let mut frames = reconnected.into_body().into_data_stream();
    read_until(&mut frames, "movie-card").await;

    assert_eq!(
        post_keystroke(&state, &session.id().to_string(), "matrix").await,
        StatusCode::NO_CONTENT
    );
    let received = read_until(&mut frames, "The Matrix").await;
    assert!(received.contains("event: results"));
    assert_eq!(received.matches("movie-card").count(), 1);
}

#[tokio::test]
async fn test_disconnected_session_is_reaped_after_ttl() {
    let state = development_state();
    let session = state
        .sessions
        .open(state.discovery.clone(), state.search.debounce);

    let response = get(&state, &format!("/sse/search/{}", session.id())).await;
    let mut frames = response.into_body().into_data_stream();
    read_until(&mut frames, "event: results").await;

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(state.sessions.reap_idle(state.search.session_ttl), 0);

    drop(frames);
    assert_eq!(state.sessions.reap_idle(state.search.session_ttl), 0);

    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(state.sessions.reap_idle(state.search.session_ttl), 1);
    assert!(state.sessions.is_empty());
}

#[tokio::test]
async fn test_page_loads_without_stream_are_reaped() {
    let state = development_state();
    for _ in 0..50 {
        assert_eq!(get(&state, "/").await.status(), StatusCode::OK);
    }
    assert_eq!(state.sessions.len(), 50);

    let reaper = state.sessions.spawn_reaper(state.search.session_ttl);
    eventually(|| state.sessions.is_empty()).await;
    reaper.abort();
}

#[tokio::test]
async fn test_view_stream_for_unknown_session_is_not_found() {
    let state = development_state();
    let response = get(&state, &format!("/sse/search/{}", uuid::Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_movies_lists_and_searches() {
    let state = development_state();

    let popular = json_body(get(&state, "/api/movies").await).await;
    assert!(popular.as_array().is_some_and(|movies| !movies.is_empty()));

    let searched = json_body(get(&state, "/api/movies?query=matrix").await).await;
    assert_eq!(searched[0]["id"], 603);
}

#[tokio::test]
async fn test_api_movies_upstream_failure_is_bad_gateway() {
    let analytics = SearchAnalytics::new(Arc::new(InMemoryDocumentStore::default()), IMAGE_BASE);
    let discovery = DiscoveryService::new(Arc::new(UnreachableCatalog), analytics, IMAGE_BASE);
    let state = AppState::new(discovery, MarqueeConfig::default().search);

    let response = get(&state, "/api/movies?query=dune").await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        json_body(response).await["error"],
        "Error fetching movies please try again later."
    );
}
