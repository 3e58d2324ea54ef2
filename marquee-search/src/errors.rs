//! Error types for catalog and analytics operations.

use thiserror::Error;

/// Message shown to users when the catalog cannot be reached.
pub const FETCH_FAILURE_MESSAGE: &str = "Error fetching movies please try again later.";

/// Fallback shown when the catalog rejects a request without a reason.
pub const REJECTED_FALLBACK_MESSAGE: &str = "Failed to fetch movies";

/// Errors that can occur while fetching movies from the catalog.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// Transport failure, non-success status, or unreadable payload.
    #[error("Movie fetch failed: {reason}")]
    FetchFailure {
        /// The reason for the failure
        reason: String,
    },

    /// The catalog answered successfully but flagged the request as failed.
    #[error("Catalog rejected request: {message}")]
    Rejected {
        /// Reason provided by the catalog
        message: String,
    },
}

impl CatalogError {
    /// Returns the message displayed in place of the result list.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::FetchFailure { .. } => FETCH_FAILURE_MESSAGE.to_string(),
            CatalogError::Rejected { message } => message.clone(),
        }
    }
}

/// Errors reported by document store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request never produced a response.
    #[error("Document store request failed: {reason}")]
    RequestFailed {
        /// The reason for the failure
        reason: String,
    },

    /// The store answered with a non-success status.
    #[error("Document store returned status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Message reported by the store
        message: String,
    },

    /// The response body could not be decoded.
    #[error("Failed to parse document store response: {reason}")]
    ParseError {
        /// The reason for the parse error
        reason: String,
    },

    /// No document exists with the given identifier.
    #[error("Document not found: {document_id}")]
    NotFound {
        /// Identifier that was looked up
        document_id: String,
    },
}

/// Errors raised by the trending search analytics.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Reading the trending list failed.
    #[error("Trending query failed: {0}")]
    StoreFailure(#[source] StoreError),

    /// Recording a search count failed.
    #[error("Recording search for '{term}' failed: {source}")]
    RecordFailure {
        /// Search term being recorded
        term: String,
        /// Underlying store error
        #[source]
        source: StoreError,
    },
}
