//! In-memory document store for development and tests.

use std::cmp::Ordering;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;

use super::document::{Document, DocumentData, DocumentList, Query};
use super::store::DocumentStore;
use crate::errors::StoreError;

/// Page size applied when a query carries no explicit limit.
pub const DEFAULT_LIST_LIMIT: usize = 25;

/// Document store kept in process memory.
///
/// Mirrors the filtering, ordering and limit semantics of the hosted store.
/// Documents keep insertion order, so sorts are stable across calls.
#[derive(Debug)]
pub struct InMemoryDocumentStore {
    database_id: String,
    collection_id: String,
    documents: RwLock<Vec<Document>>,
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new("memory", "trending")
    }
}

impl InMemoryDocumentStore {
    /// Create an empty store labelled with the given database and collection.
    pub fn new(database_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            database_id: database_id.into(),
            collection_id: collection_id.into(),
            documents: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    /// Whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

fn matches_filters(document: &Document, queries: &[Query]) -> bool {
    queries.iter().all(|query| match query {
        Query::Equal { attribute, value } => document.attribute(attribute).as_ref() == Some(value),
        Query::Limit(_) | Query::OrderDesc(_) | Query::OrderAsc(_) => true,
    })
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => {
            let a = a.as_f64().unwrap_or_default();
            let b = b.as_f64().unwrap_or_default();
            a.total_cmp(&b)
        }
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn list_documents(&self, queries: &[Query]) -> Result<DocumentList, StoreError> {
        let mut documents: Vec<Document> = self
            .documents
            .read()
            .iter()
            .filter(|document| matches_filters(document, queries))
            .cloned()
            .collect();
        let total = documents.len() as u64;

        // Stable sorts applied last-to-first leave the first order clause primary.
        for query in queries.iter().rev() {
            match query {
                Query::OrderDesc(attribute) => documents.sort_by(|a, b| {
                    compare_values(b.attribute(attribute).as_ref(), a.attribute(attribute).as_ref())
                }),
                Query::OrderAsc(attribute) => documents.sort_by(|a, b| {
                    compare_values(a.attribute(attribute).as_ref(), b.attribute(attribute).as_ref())
                }),
                Query::Equal { .. } | Query::Limit(_) => {}
            }
        }

        let limit = queries
            .iter()
            .rev()
            .find_map(|query| match query {
                Query::Limit(limit) => Some(*limit),
                _ => None,
            })
            .unwrap_or(DEFAULT_LIST_LIMIT);
        documents.truncate(limit);

        Ok(DocumentList { total, documents })
    }

    async fn create_document(&self, data: DocumentData) -> Result<Document, StoreError> {
        let now = chrono::Utc::now();
        let document = Document {
            id: uuid::Uuid::new_v4().simple().to_string(),
            collection_id: self.collection_id.clone(),
            database_id: self.database_id.clone(),
            created_at: now,
            updated_at: now,
            permissions: Vec::new(),
            data,
        };

        self.documents.write().push(document.clone());
        Ok(document)
    }

    async fn update_document(
        &self,
        document_id: &str,
        data: DocumentData,
    ) -> Result<Document, StoreError> {
        let mut documents = self.documents.write();
        let document = documents
            .iter_mut()
            .find(|document| document.id == document_id)
            .ok_or_else(|| StoreError::NotFound {
                document_id: document_id.to_string(),
            })?;

        document.data.extend(data);
        document.updated_at = chrono::Utc::now();
        Ok(document.clone())
    }
}
