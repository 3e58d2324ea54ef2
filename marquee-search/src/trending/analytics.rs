//! Trending search counters.
//!
//! Every successful search bumps a per-term counter document. The most
//! counted terms are shown as trending searches.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::document::{Document, DocumentData, Query};
use super::store::DocumentStore;
use crate::errors::{AnalyticsError, StoreError};
use crate::types::Movie;

/// Attribute holding the search term.
pub const SEARCH_TERM_ATTRIBUTE: &str = "searchTerm";
/// Attribute holding the search count.
pub const COUNT_ATTRIBUTE: &str = "count";
/// System attribute ordering trending ties, oldest record first.
pub const TIEBREAK_ATTRIBUTE: &str = "$createdAt";

/// A counter document for one search term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingRecord {
    /// Document identifier
    pub id: String,
    /// Search term as typed
    pub search_term: String,
    /// Number of successful searches for the term
    pub count: u64,
    /// Poster URL of the top result when the term was first recorded
    pub poster: String,
    /// Catalog id of that top result
    pub movie_id: i64,
    /// When the term was first recorded
    pub created_at: DateTime<Utc>,
    /// When the count last changed
    pub updated_at: DateTime<Utc>,
    /// Owning collection
    pub collection_id: String,
    /// Owning database
    pub database_id: String,
    /// Permission strings attached to the document
    pub permissions: Vec<String>,
}

#[derive(Deserialize)]
struct TrendingFields {
    #[serde(rename = "searchTerm")]
    search_term: String,
    #[serde(default)]
    count: u64,
    #[serde(default)]
    poster: String,
    #[serde(default)]
    movie_id: i64,
}

impl TryFrom<Document> for TrendingRecord {
    type Error = StoreError;

    fn try_from(document: Document) -> Result<Self, Self::Error> {
        let fields: TrendingFields =
            serde_json::from_value(Value::Object(document.data)).map_err(|e| {
                StoreError::ParseError {
                    reason: format!("document {} is not a trending record: {e}", document.id),
                }
            })?;

        Ok(Self {
            id: document.id,
            search_term: fields.search_term,
            count: fields.count,
            poster: fields.poster,
            movie_id: fields.movie_id,
            created_at: document.created_at,
            updated_at: document.updated_at,
            collection_id: document.collection_id,
            database_id: document.database_id,
            permissions: document.permissions,
        })
    }
}

/// Records searches and reads back the most popular terms.
#[derive(Debug, Clone)]
pub struct SearchAnalytics {
    store: Arc<dyn DocumentStore>,
    image_base_url: String,
    trending_limit: usize,
}

impl SearchAnalytics {
    /// Create analytics over a store. Posters are built from `image_base_url`.
    pub fn new(store: Arc<dyn DocumentStore>, image_base_url: impl Into<String>) -> Self {
        Self {
            store,
            image_base_url: image_base_url.into(),
            trending_limit: 5,
        }
    }

    /// Override how many trending records are returned.
    pub fn with_trending_limit(mut self, trending_limit: usize) -> Self {
        self.trending_limit = trending_limit;
        self
    }

    /// Count a successful search for `term`, remembering `movie` as its top result.
    ///
    /// Failures are logged and dropped; analytics never interrupts a search.
    /// The increment is a read followed by a write, so concurrent searches
    /// for the same term can lose a count.
    pub async fn record_search(&self, term: &str, movie: &Movie) {
        if term.is_empty() {
            tracing::debug!("Skipping analytics for empty search term");
            return;
        }

        if let Err(e) = self.try_record_search(term, movie).await {
            tracing::warn!(error = %e, "Failed to record search");
        }
    }

    async fn try_record_search(&self, term: &str, movie: &Movie) -> Result<(), AnalyticsError> {
        let record_failure = |source| AnalyticsError::RecordFailure {
            term: term.to_string(),
            source,
        };

        let existing = self
            .store
            .list_documents(&[Query::equal(SEARCH_TERM_ATTRIBUTE, term)])
            .await
            .map_err(record_failure)?;

        match existing.documents.into_iter().next() {
            Some(document) => {
                let count = document.attribute_u64(COUNT_ATTRIBUTE).unwrap_or(0) + 1;
                let mut data = DocumentData::new();
                data.insert(COUNT_ATTRIBUTE.to_string(), json!(count));

                self.store
                    .update_document(&document.id, data)
                    .await
                    .map_err(record_failure)?;
                tracing::debug!(term, count, "Incremented search count");
            }
            None => {
                let poster = movie.poster_url(&self.image_base_url).unwrap_or_default();

                let mut data = DocumentData::new();
                data.insert(SEARCH_TERM_ATTRIBUTE.to_string(), json!(term));
                data.insert(COUNT_ATTRIBUTE.to_string(), json!(1));
                data.insert("movie_id".to_string(), json!(movie.id));
                data.insert("poster".to_string(), json!(poster));

                self.store
                    .create_document(data)
                    .await
                    .map_err(record_failure)?;
                tracing::debug!(term, movie_id = movie.id, "Created search count");
            }
        }

        Ok(())
    }

    /// Most searched terms, highest count first. Equal counts keep the
    /// order in which the terms were first recorded.
    ///
    /// # Errors
    ///
    /// - `AnalyticsError::StoreFailure` - If the store query fails or returns malformed records
    pub async fn get_trending(&self) -> Result<Vec<TrendingRecord>, AnalyticsError> {
        let list = self
            .store
            .list_documents(&[
                Query::limit(self.trending_limit),
                Query::order_desc(COUNT_ATTRIBUTE),
                Query::order_asc(TIEBREAK_ATTRIBUTE),
            ])
            .await
            .map_err(AnalyticsError::StoreFailure)?;

        list.documents
            .into_iter()
            .map(TrendingRecord::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(AnalyticsError::StoreFailure)
    }
}
