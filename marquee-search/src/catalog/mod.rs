//! Movie catalog providers.

use async_trait::async_trait;

use crate::errors::CatalogError;
use crate::types::Movie;

pub mod demo;
pub mod tmdb;

pub use demo::DemoCatalog;
pub use tmdb::TmdbCatalog;

/// Source of movie listings.
///
/// Implementations back the search box: production talks to TMDB, development
/// serves a built-in list without network access.
#[async_trait]
pub trait MovieCatalog: Send + Sync + std::fmt::Debug {
    /// Fetch popular movies when `query` is empty or absent, matching movies otherwise.
    ///
    /// # Errors
    /// - `CatalogError::FetchFailure` - Transport failure or non-success status
    /// - `CatalogError::Rejected` - Catalog flagged the request as failed
    async fn fetch_movies(&self, query: Option<&str>) -> Result<Vec<Movie>, CatalogError>;
}

/// Builds the catalog URL for a query.
///
/// Empty queries go to the popularity-sorted discovery endpoint; anything else
/// is percent-encoded into the search endpoint.
pub fn catalog_request_url(base_url: &str, query: Option<&str>) -> String {
    match query.filter(|q| !q.is_empty()) {
        None => format!("{base_url}/discover/movie?sort_by=popularity.desc"),
        Some(query) => format!(
            "{base_url}/search/movie?query={}",
            urlencoding::encode(query)
        ),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const BASE: &str = "https://api.themoviedb.org/3";

    #[test]
    fn test_empty_query_uses_discovery() {
        let expected = "https://api.themoviedb.org/3/discover/movie?sort_by=popularity.desc";
        assert_eq!(catalog_request_url(BASE, None), expected);
        assert_eq!(catalog_request_url(BASE, Some("")), expected);
    }

    #[test]
    fn test_query_is_percent_encoded() {
        assert_eq!(
            catalog_request_url(BASE, Some("star wars")),
            "https://api.themoviedb.org/3/search/movie?query=star%20wars"
        );
        assert_eq!(
            catalog_request_url(BASE, Some("amélie & co")),
            "https://api.themoviedb.org/3/search/movie?query=am%C3%A9lie%20%26%20co"
        );
    }

    proptest! {
        #[test]
        fn prop_non_empty_queries_use_search_endpoint(query in ".{1,40}") {
            let url = catalog_request_url(BASE, Some(&query));
            let prefix = format!("{BASE}/search/movie?query=");
            prop_assert!(url.starts_with(&prefix));

            let encoded = &url[prefix.len()..];
            prop_assert!(!encoded.contains(' '));
            prop_assert!(!encoded.contains('&'));
            let decoded = urlencoding::decode(encoded).unwrap();
            prop_assert_eq!(decoded.as_ref(), query.as_str());
        }
    }
}
