//! Appwrite REST document store.

use async_trait::async_trait;
use marquee_core::config::StoreConfig;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;

use super::document::{Document, DocumentData, DocumentList, Query};
use super::store::DocumentStore;
use crate::errors::StoreError;

const PROJECT_HEADER: &str = "X-Appwrite-Project";

/// Document store backed by an Appwrite collection.
#[derive(Debug, Clone)]
pub struct AppwriteStore {
    client: reqwest::Client,
    documents_url: String,
    project_id: String,
}

#[derive(Debug, Deserialize)]
struct AppwriteErrorBody {
    message: Option<String>,
}

impl AppwriteStore {
    /// Create a store for the configured database/collection pair.
    pub fn new(config: &StoreConfig) -> Self {
        let documents_url = format!(
            "{}/databases/{}/collections/{}/documents",
            config.endpoint.trim_end_matches('/'),
            config.database_id,
            config.collection_id
        );

        Self {
            client: reqwest::Client::new(),
            documents_url,
            project_id: config.project_id.clone(),
        }
    }

    async fn send<T>(&self, request: reqwest::RequestBuilder) -> Result<T, StoreError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = request
            .header(PROJECT_HEADER, &self.project_id)
            .send()
            .await
            .map_err(|e| StoreError::RequestFailed {
                reason: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<AppwriteErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());

            return Err(StoreError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response.json().await.map_err(|e| StoreError::ParseError {
            reason: format!("JSON parsing failed: {e}"),
        })
    }
}

#[async_trait]
impl DocumentStore for AppwriteStore {
    async fn list_documents(&self, queries: &[Query]) -> Result<DocumentList, StoreError> {
        let params: Vec<(&str, String)> = queries
            .iter()
            .map(|query| ("queries[]", query.to_json()))
            .collect();

        self.send(self.client.get(&self.documents_url).query(&params))
            .await
    }

    async fn create_document(&self, data: DocumentData) -> Result<Document, StoreError> {
        let body = json!({
            "documentId": uuid::Uuid::new_v4().simple().to_string(),
            "data": data,
        });

        self.send(self.client.post(&self.documents_url).json(&body))
            .await
    }

    async fn update_document(
        &self,
        document_id: &str,
        data: DocumentData,
    ) -> Result<Document, StoreError> {
        let url = format!(
            "{}/{}",
            self.documents_url,
            urlencoding::encode(document_id)
        );

        match self
            .send(self.client.patch(&url).json(&json!({ "data": data })))
            .await
        {
            Err(StoreError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(StoreError::NotFound {
                    document_id: document_id.to_string(),
                })
            }
            result => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_url_from_config() {
        let store = AppwriteStore::new(&StoreConfig {
            endpoint: "https://cloud.appwrite.io/v1/".to_string(),
            project_id: "project".to_string(),
            database_id: "db".to_string(),
            collection_id: "metrics".to_string(),
        });

        assert_eq!(
            store.documents_url,
            "https://cloud.appwrite.io/v1/databases/db/collections/metrics/documents"
        );
        assert_eq!(store.project_id, "project");
    }
}
