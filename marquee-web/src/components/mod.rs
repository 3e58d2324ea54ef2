//! Reusable HTML components for HTMX + Tailwind UI
//!
//! Components are server-rendered HTML fragments used both in the full page
//! and in the fragments pushed over the view stream.

pub mod layout;
pub mod movie;
pub mod trending;

pub use layout::{escape, grid, hero_header, search_input};
pub use movie::{movie_card, movie_grid, results_section};
pub use trending::trending_section;
