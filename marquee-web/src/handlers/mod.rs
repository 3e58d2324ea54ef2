//! HTTP request handlers organized by functionality

pub mod api;
pub mod events;
pub mod htmx;

pub use api::{MoviesQuery, api_movies, api_trending};
pub use events::search_events;
pub use htmx::{SearchForm, search_input};
