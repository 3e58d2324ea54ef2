//! Per-visitor search state and its transitions.

pub mod debounce;
pub mod registry;
pub mod search;
pub mod state;

pub use debounce::Debouncer;
pub use registry::SessionRegistry;
pub use search::SearchSession;
pub use state::{SearchStatus, ViewState};
