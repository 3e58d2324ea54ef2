//! Marquee Search - movie catalog access and trending search analytics

#![deny(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Fetches popular and matching movies from the TMDB catalog and keeps
//! per-term search counters in a document store to surface trending searches.

pub mod catalog;
pub mod errors;
pub mod service;
pub mod trending;
pub mod types;

// Re-export main types
pub use catalog::{DemoCatalog, MovieCatalog, TmdbCatalog};
pub use errors::{AnalyticsError, CatalogError, StoreError};
pub use service::DiscoveryService;
pub use trending::{
    AppwriteStore, DocumentStore, InMemoryDocumentStore, SearchAnalytics, TrendingRecord,
};
pub use types::Movie;
