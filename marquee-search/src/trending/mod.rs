//! Trending searches backed by a document store.

pub mod analytics;
pub mod appwrite;
pub mod document;
pub mod memory;
pub mod store;

pub use analytics::{SearchAnalytics, TrendingRecord};
pub use appwrite::AppwriteStore;
pub use document::{Document, DocumentData, DocumentList, Query};
pub use memory::InMemoryDocumentStore;
pub use store::DocumentStore;
