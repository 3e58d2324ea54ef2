//! TMDB catalog client.

use async_trait::async_trait;
use marquee_core::config::CatalogConfig;
use reqwest::header::ACCEPT;

use super::{MovieCatalog, catalog_request_url};
use crate::errors::CatalogError;
use crate::types::{CatalogResponse, Movie};

/// Movie catalog backed by the TMDB REST API.
#[derive(Debug, Clone)]
pub struct TmdbCatalog {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl TmdbCatalog {
    /// Create a client from catalog configuration.
    ///
    /// A missing token is not rejected here; requests simply go out
    /// unauthenticated and fail upstream.
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        }
    }
}

#[async_trait]
impl MovieCatalog for TmdbCatalog {
    async fn fetch_movies(&self, query: Option<&str>) -> Result<Vec<Movie>, CatalogError> {
        let url = catalog_request_url(&self.base_url, query);
        tracing::debug!(%url, "Fetching movies");

        let mut request = self.client.get(&url).header(ACCEPT, "application/json");
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CatalogError::FetchFailure {
                reason: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::FetchFailure {
                reason: format!("Catalog responded with status {status}"),
            });
        }

        let payload: CatalogResponse =
            response
                .json()
                .await
                .map_err(|e| CatalogError::FetchFailure {
                    reason: format!("JSON parsing failed: {e}"),
                })?;

        let movies = payload.into_movies()?;
        tracing::debug!(count = movies.len(), "Catalog returned movies");
        Ok(movies)
    }
}
