//! Demo catalog for offline development.

use async_trait::async_trait;

use super::MovieCatalog;
use crate::errors::CatalogError;
use crate::types::Movie;

/// Catalog serving a fixed set of well-known movies.
///
/// Discovery returns the whole set by popularity; searches match titles
/// case-insensitively. Lets the UI run without a TMDB token.
#[derive(Debug)]
pub struct DemoCatalog {
    movies: Vec<Movie>,
}

impl Default for DemoCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoCatalog {
    /// Create a catalog with the built-in movie set.
    pub fn new() -> Self {
        Self::with_movies(builtin_movies())
    }

    /// Create a catalog over an explicit movie set.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }
}

#[async_trait]
impl MovieCatalog for DemoCatalog {
    async fn fetch_movies(&self, query: Option<&str>) -> Result<Vec<Movie>, CatalogError> {
        let mut movies: Vec<Movie> = match query.filter(|q| !q.is_empty()) {
            None => self.movies.clone(),
            Some(query) => {
                let needle = query.to_lowercase();
                self.movies
                    .iter()
                    .filter(|movie| movie.title.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            }
        };

        movies.sort_by(|a, b| b.popularity.total_cmp(&a.popularity));
        Ok(movies)
    }
}

fn demo_movie(
    id: i64,
    title: &str,
    release_date: &str,
    popularity: f64,
    vote_average: f64,
    poster_path: &str,
) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        original_title: title.to_string(),
        overview: format!("{title} (demo catalog entry)"),
        poster_path: Some(poster_path.to_string()),
        release_date: release_date.to_string(),
        popularity,
        vote_average,
        vote_count: (popularity * 100.0) as u64,
        original_language: "en".to_string(),
        ..Default::default()
    }
}

fn builtin_movies() -> Vec<Movie> {
    vec![
        demo_movie(
            438631,
            "Dune",
            "2021-09-15",
            412.7,
            7.8,
            "/d5NXSklXo0qyIYkgV94XAgMIckC.jpg",
        ),
        demo_movie(
            693134,
            "Dune: Part Two",
            "2024-02-27",
            598.3,
            8.2,
            "/1pdfLvkbY9ohJlCjQH2CZjjYVvJ.jpg",
        ),
        demo_movie(
            11,
            "Star Wars",
            "1977-05-25",
            88.1,
            8.2,
            "/6FfCtAuVAW8XJjZ7eWeLibRLWTw.jpg",
        ),
        demo_movie(
            603,
            "The Matrix",
            "1999-03-31",
            95.4,
            8.2,
            "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
        ),
        demo_movie(
            157336,
            "Interstellar",
            "2014-11-05",
            160.9,
            8.4,
            "/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg",
        ),
        demo_movie(
            27205,
            "Inception",
            "2010-07-15",
            101.5,
            8.4,
            "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
        ),
        demo_movie(
            872585,
            "Oppenheimer",
            "2023-07-19",
            230.2,
            8.1,
            "/8Gxv8gSFCU0XGDykEGv7zR1n2ua.jpg",
        ),
        demo_movie(
            335984,
            "Blade Runner 2049",
            "2017-10-04",
            72.6,
            7.6,
            "/gajva2L0rPYkEWjzgFlBXCAVBE5.jpg",
        ),
    ]
}
