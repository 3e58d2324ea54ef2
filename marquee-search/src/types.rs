//! Data types for the movie catalog.

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{CatalogError, REJECTED_FALLBACK_MESSAGE};

/// Movie as returned by the catalog, passed through without validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    /// Catalog identifier
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    /// Localized title
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Title in the original language
    #[serde(deserialize_with = "null_as_default")]
    pub original_title: String,
    /// Plot summary
    #[serde(deserialize_with = "null_as_default")]
    pub overview: String,
    /// Poster image path relative to the image base URL
    pub poster_path: Option<String>,
    /// Backdrop image path relative to the image base URL
    pub backdrop_path: Option<String>,
    /// Release date as `YYYY-MM-DD`, empty when unknown
    #[serde(deserialize_with = "null_as_default")]
    pub release_date: String,
    /// Catalog popularity score
    #[serde(deserialize_with = "null_as_default")]
    pub popularity: f64,
    /// Average rating (0.0-10.0)
    #[serde(deserialize_with = "null_as_default")]
    pub vote_average: f64,
    /// Number of ratings behind the average
    #[serde(deserialize_with = "null_as_default")]
    pub vote_count: u64,
    /// ISO 639-1 language code
    #[serde(deserialize_with = "null_as_default")]
    pub original_language: String,
    /// Adult content flag
    #[serde(deserialize_with = "null_as_default")]
    pub adult: bool,
    /// Whether the entry is a video rather than a feature
    #[serde(deserialize_with = "null_as_default")]
    pub video: bool,
    /// Catalog genre identifiers
    #[serde(deserialize_with = "null_as_default")]
    pub genre_ids: Vec<i64>,
}

// Explicit nulls read as the field's default, like missing fields.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Movie {
    /// Full poster URL, if the movie has a poster.
    pub fn poster_url(&self, image_base_url: &str) -> Option<String> {
        self.poster_path
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| format!("{image_base_url}{path}"))
    }

    /// Release year taken from the release date.
    pub fn release_year(&self) -> Option<&str> {
        self.release_date
            .get(..4)
            .filter(|year| year.chars().all(|c| c.is_ascii_digit()))
    }
}

/// Response body shared by the catalog's discover and search endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogResponse {
    /// Matching movies, absent on some failures
    #[serde(default)]
    pub results: Option<Vec<Movie>>,
    /// Logical success flag, `false` when the request was rejected
    #[serde(rename = "Response", default, deserialize_with = "deserialize_flag")]
    pub response: Option<bool>,
    /// Reason given alongside a rejected request
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl CatalogResponse {
    /// Whether the payload explicitly signals a logical failure.
    pub fn is_rejected(&self) -> bool {
        self.response == Some(false)
    }

    /// Converts the payload into the result list.
    ///
    /// # Errors
    ///
    /// - `CatalogError::Rejected` - If the payload carries `Response: false`
    pub fn into_movies(self) -> Result<Vec<Movie>, CatalogError> {
        if self.is_rejected() {
            return Err(CatalogError::Rejected {
                message: self
                    .error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| REJECTED_FALLBACK_MESSAGE.to_string()),
            });
        }

        Ok(self.results.unwrap_or_default())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ResponseFlag {
    Bool(bool),
    Text(String),
}

// Accepts both `false` and `"False"`.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = Option::<ResponseFlag>::deserialize(deserializer)?;
    Ok(flag.map(|flag| match flag {
        ResponseFlag::Bool(value) => value,
        ResponseFlag::Text(text) => !text.eq_ignore_ascii_case("false"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> CatalogResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_results_pass_through() {
        let response = parse(
            r#"{"page":1,"results":[{"id":438631,"title":"Dune","poster_path":"/abc.jpg","vote_average":7.8,"release_date":"2021-09-15","original_language":"en","genre_ids":[878,12]}]}"#,
        );

        let movies = response.into_movies().unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].id, 438631);
        assert_eq!(movies[0].title, "Dune");
        assert_eq!(movies[0].genre_ids, vec![878, 12]);
        assert_eq!(movies[0].backdrop_path, None);
    }

    #[test]
    fn test_null_fields_read_as_defaults() {
        let response = parse(
            r#"{"results":[{"id":1,"title":"X","overview":null,"release_date":null,"original_language":null,"original_title":null,"vote_average":null,"genre_ids":null,"poster_path":null}]}"#,
        );

        let movies = response.into_movies().unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "X");
        assert_eq!(movies[0].overview, "");
        assert_eq!(movies[0].release_date, "");
        assert_eq!(movies[0].release_year(), None);
        assert_eq!(movies[0].vote_average, 0.0);
        assert!(movies[0].genre_ids.is_empty());
        assert_eq!(movies[0].poster_path, None);
    }

    #[test]
    fn test_missing_results_is_empty() {
        assert!(parse("{}").into_movies().unwrap().is_empty());
        assert!(parse(r#"{"results":null}"#).into_movies().unwrap().is_empty());
    }

    #[test]
    fn test_rejected_payload_carries_message() {
        let error = parse(r#"{"Response":false,"Error":"Invalid API key"}"#)
            .into_movies()
            .unwrap_err();
        assert_eq!(
            error,
            CatalogError::Rejected {
                message: "Invalid API key".to_string()
            }
        );

        let error = parse(r#"{"Response":"False"}"#).into_movies().unwrap_err();
        assert_eq!(error.user_message(), "Failed to fetch movies");
    }

    #[test]
    fn test_truthy_flag_is_not_rejected() {
        assert!(!parse(r#"{"Response":true,"results":[]}"#).is_rejected());
        assert!(!parse(r#"{"Response":"True","results":[]}"#).is_rejected());
    }

    #[test]
    fn test_poster_url_and_year() {
        let movie = Movie {
            poster_path: Some("/abc.jpg".to_string()),
            release_date: "2021-09-15".to_string(),
            ..Default::default()
        };

        assert_eq!(
            movie.poster_url("https://image.tmdb.org/t/p/w500").as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
        assert_eq!(movie.release_year(), Some("2021"));
        assert_eq!(Movie::default().poster_url("base"), None);
        assert_eq!(Movie::default().release_year(), None);
    }
}
