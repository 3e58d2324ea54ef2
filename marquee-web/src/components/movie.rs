//! Movie components - cards, result grid, results section

use marquee_search::Movie;

use super::layout::{escape, grid};
use crate::session::{SearchStatus, ViewState};

/// Renders a single movie card.
///
/// Shows the poster when one exists, then the title, rating, original
/// language and release year. Missing values render as "N/A".
pub fn movie_card(movie: &Movie, image_base_url: &str) -> String {
    let title = escape(&movie.title);
    let poster_html = match movie.poster_url(image_base_url) {
        Some(url) => format!(
            r#"<img src="{}" alt="{title}" class="w-full rounded-lg mb-3" loading="lazy" />"#,
            escape(&url)
        ),
        None => r#"<div class="w-full aspect-[2/3] rounded-lg mb-3 bg-gray-700 flex items-center justify-center text-gray-500">No poster</div>"#.to_string(),
    };

    let rating = if movie.vote_average > 0.0 {
        format!("{:.1}", movie.vote_average)
    } else {
        "N/A".to_string()
    };
    let language = escape(&movie.original_language);
    let year = movie.release_year().unwrap_or("N/A");

    format!(
        r#"<div class="movie-card bg-gray-800 border border-gray-700 rounded-lg p-4">
            {poster_html}
            <h3 class="text-white font-semibold truncate">{title}</h3>
            <div class="flex items-center space-x-2 text-sm text-gray-400 mt-2">
                <span class="text-yellow-400">★ {rating}</span>
                <span>•</span>
                <span class="uppercase">{language}</span>
                <span>•</span>
                <span>{year}</span>
            </div>
        </div>"#
    )
}

/// Renders movies as a responsive card grid.
pub fn movie_grid(movies: &[Movie], image_base_url: &str) -> String {
    let cards: String = movies
        .iter()
        .map(|movie| movie_card(movie, image_base_url))
        .collect();
    grid("grid-cols-1 sm:grid-cols-2 lg:grid-cols-4", &cards)
}

/// Renders the main results section for a view.
///
/// A fetch in flight shows the loading indicator, a failed fetch shows its
/// message, anything else shows the grid.
pub fn results_section(view: &ViewState, image_base_url: &str) -> String {
    let body = match &view.status {
        SearchStatus::Loading => r#"<div class="flex justify-center py-12">
                <div class="w-10 h-10 border-4 border-marquee-500 border-t-transparent rounded-full animate-spin" role="status" aria-label="Loading"></div>
            </div>"#
            .to_string(),
        SearchStatus::Failed(message) => {
            format!(r#"<p class="text-red-500">{}</p>"#, escape(message))
        }
        SearchStatus::Idle | SearchStatus::Loaded(_) => {
            movie_grid(view.movies(), image_base_url)
        }
    };

    format!(
        r#"<section class="all-movies">
            <h2 class="text-2xl font-semibold text-white mb-6">All Movies</h2>
            {body}
        </section>"#
    )
}
