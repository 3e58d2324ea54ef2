//! View state of a search session.

use marquee_search::{Movie, TrendingRecord};

/// Outcome of the most recent movie fetch.
///
/// A single status replaces separate loading and error flags, so the page can
/// never show a spinner and an error at the same time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchStatus {
    /// No fetch has started yet
    #[default]
    Idle,
    /// A fetch is in flight
    Loading,
    /// The latest fetch succeeded
    Loaded(Vec<Movie>),
    /// The latest fetch failed with a user-facing message
    Failed(String),
}

/// Everything the page renders for one visitor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// Raw input, updated on every keystroke
    pub search_term: String,
    /// Input as of the last quiet period
    pub debounced_term: String,
    /// Outcome of the latest fetch
    pub status: SearchStatus,
    /// Most searched terms, highest count first
    pub trending: Vec<TrendingRecord>,
    /// Sequence number of the newest fetch issued
    pub(crate) latest_request: u64,
}

impl ViewState {
    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.status, SearchStatus::Loading)
    }

    /// Message of the failed fetch, if the latest one failed.
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SearchStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Movies from the latest successful fetch, empty otherwise.
    pub fn movies(&self) -> &[Movie] {
        match &self.status {
            SearchStatus::Loaded(movies) => movies,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_follow_status() {
        let mut view = ViewState::default();
        assert!(!view.is_loading());
        assert!(view.movies().is_empty());
        assert_eq!(view.error_message(), None);

        view.status = SearchStatus::Loading;
        assert!(view.is_loading());

        view.status = SearchStatus::Failed("Invalid API key".to_string());
        assert!(!view.is_loading());
        assert_eq!(view.error_message(), Some("Invalid API key"));
        assert!(view.movies().is_empty());

        view.status = SearchStatus::Loaded(vec![Movie::default()]);
        assert_eq!(view.movies().len(), 1);
        assert_eq!(view.error_message(), None);
    }
}
