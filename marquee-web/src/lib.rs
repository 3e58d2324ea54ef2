//! Marquee Web - search page, view stream and JSON API

#![deny(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
//!
//! Server-rendered HTMX pages backed by per-visitor search sessions.
//! Sessions debounce keystrokes, fetch movies and push rendered updates to
//! the page over server-sent events.

pub mod components;
pub mod handlers;
pub mod pages;
pub mod server;
pub mod session;

pub use server::{AppState, build_router, run_server};
pub use session::{SearchSession, SearchStatus, SessionRegistry, ViewState};
