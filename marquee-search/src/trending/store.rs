//! Document store abstraction.

use async_trait::async_trait;

use super::document::{Document, DocumentData, DocumentList, Query};
use crate::errors::StoreError;

/// A document collection supporting filtered listing, creation and updates.
///
/// Each instance is bound to one database/collection pair.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    /// List documents matching all `queries`.
    ///
    /// # Errors
    /// - `StoreError::RequestFailed` - Store could not be reached
    /// - `StoreError::Status` - Store rejected the query
    /// - `StoreError::ParseError` - Response could not be decoded
    async fn list_documents(&self, queries: &[Query]) -> Result<DocumentList, StoreError>;

    /// Create a document with a fresh identifier.
    ///
    /// # Errors
    /// - `StoreError::RequestFailed` - Store could not be reached
    /// - `StoreError::Status` - Store rejected the document
    /// - `StoreError::ParseError` - Response could not be decoded
    async fn create_document(&self, data: DocumentData) -> Result<Document, StoreError>;

    /// Overwrite the given attributes of an existing document.
    ///
    /// # Errors
    /// - `StoreError::NotFound` - No document with this identifier
    /// - `StoreError::RequestFailed` - Store could not be reached
    /// - `StoreError::Status` - Store rejected the update
    /// - `StoreError::ParseError` - Response could not be decoded
    async fn update_document(
        &self,
        document_id: &str,
        data: DocumentData,
    ) -> Result<Document, StoreError>;
}
