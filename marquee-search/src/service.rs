//! Movie discovery service
//!
//! Bundles the movie catalog with search analytics so callers hold a single
//! handle regardless of runtime mode.

use std::sync::Arc;

use marquee_core::{MarqueeConfig, RuntimeMode};

use crate::catalog::{DemoCatalog, MovieCatalog, TmdbCatalog};
use crate::errors::{AnalyticsError, CatalogError};
use crate::trending::{
    AppwriteStore, DocumentStore, InMemoryDocumentStore, SearchAnalytics, TrendingRecord,
};
use crate::types::Movie;

/// Movie catalog plus trending search analytics.
#[derive(Debug, Clone)]
pub struct DiscoveryService {
    catalog: Arc<dyn MovieCatalog>,
    analytics: SearchAnalytics,
    image_base_url: String,
}

impl DiscoveryService {
    /// Creates a service from explicit parts.
    pub fn new(
        catalog: Arc<dyn MovieCatalog>,
        analytics: SearchAnalytics,
        image_base_url: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            analytics,
            image_base_url: image_base_url.into(),
        }
    }

    /// Creates the service appropriate for the runtime mode.
    ///
    /// Production talks to TMDB and Appwrite. Development uses the demo
    /// catalog and an in-memory store, so it works without credentials.
    pub fn from_runtime_mode(config: &MarqueeConfig, mode: RuntimeMode) -> Self {
        let (catalog, store): (Arc<dyn MovieCatalog>, Arc<dyn DocumentStore>) = match mode {
            RuntimeMode::Production => (
                Arc::new(TmdbCatalog::new(&config.catalog)),
                Arc::new(AppwriteStore::new(&config.store)),
            ),
            RuntimeMode::Development => (
                Arc::new(DemoCatalog::new()),
                Arc::new(InMemoryDocumentStore::default()),
            ),
        };
        tracing::info!(%mode, "Discovery service configured");

        let analytics = SearchAnalytics::new(store, config.catalog.image_base_url.clone())
            .with_trending_limit(config.search.trending_limit);

        Self::new(catalog, analytics, config.catalog.image_base_url.clone())
    }

    /// Fetches popular movies for an empty query, matching movies otherwise.
    ///
    /// # Errors
    /// - `CatalogError::FetchFailure` - Catalog unreachable or returned an error status
    /// - `CatalogError::Rejected` - Catalog flagged the request as failed
    pub async fn fetch_movies(&self, query: &str) -> Result<Vec<Movie>, CatalogError> {
        let query = (!query.is_empty()).then_some(query);
        self.catalog.fetch_movies(query).await
    }

    /// Counts a successful search. Never fails.
    pub async fn record_search(&self, term: &str, movie: &Movie) {
        self.analytics.record_search(term, movie).await;
    }

    /// Most searched terms, highest count first.
    ///
    /// # Errors
    /// - `AnalyticsError::StoreFailure` - Store unreachable or returned malformed records
    pub async fn get_trending(&self) -> Result<Vec<TrendingRecord>, AnalyticsError> {
        self.analytics.get_trending().await
    }

    /// Prefix for building poster URLs.
    pub fn image_base_url(&self) -> &str {
        &self.image_base_url
    }
}
