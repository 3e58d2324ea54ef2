//! Centralized configuration for Marquee.
//!
//! All tunable parameters and remote service identifiers are defined here
//! and injected at startup instead of being read ad hoc from the environment.

use std::time::Duration;

/// Central configuration for all Marquee components.
///
/// Groups related settings into logical sections. Missing credentials are
/// not validated here; they surface later as failed remote requests.
#[derive(Debug, Clone, Default)]
pub struct MarqueeConfig {
    pub catalog: CatalogConfig,
    pub store: StoreConfig,
    pub search: SearchConfig,
    pub server: ServerConfig,
}

/// Movie catalog (TMDB) API configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog REST API, without trailing slash
    pub base_url: String,
    /// Bearer token sent with every catalog request
    pub api_token: Option<String>,
    /// Prefix prepended to poster paths to build image URLs
    pub image_base_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.themoviedb.org/3".to_string(),
            api_token: None,
            image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
        }
    }
}

/// Document store (Appwrite) configuration for trending searches.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Appwrite REST endpoint, without trailing slash
    pub endpoint: String,
    pub project_id: String,
    pub database_id: String,
    pub collection_id: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://cloud.appwrite.io/v1".to_string(),
            project_id: String::new(),
            database_id: String::new(),
            collection_id: String::new(),
        }
    }
}

/// Search session behavior.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a search fires
    pub debounce: Duration,
    /// Maximum number of trending searches shown
    pub trending_limit: usize,
    /// How long a session may go without a connected view stream before it
    /// is closed. Covers stream reconnects and pages that never connect.
    pub session_ttl: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
            trending_limit: 5,
            session_ttl: Duration::from_secs(60),
        }
    }
}

/// HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl MarqueeConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Loads a `.env` file from the working directory first when one exists.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env file loaded: {e}");
        }
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(token) = lookup("TMDB_API_KEY") {
            config.catalog.api_token = Some(token);
        }
        if let Some(base_url) = lookup("MARQUEE_CATALOG_BASE_URL") {
            config.catalog.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(image_base) = lookup("MARQUEE_IMAGE_BASE_URL") {
            config.catalog.image_base_url = image_base.trim_end_matches('/').to_string();
        }

        if let Some(endpoint) = lookup("APPWRITE_ENDPOINT") {
            config.store.endpoint = endpoint.trim_end_matches('/').to_string();
        }
        if let Some(project_id) = lookup("APPWRITE_PROJECT_ID") {
            config.store.project_id = project_id;
        }
        if let Some(database_id) = lookup("APPWRITE_DATABASE_ID") {
            config.store.database_id = database_id;
        }
        if let Some(collection_id) = lookup("APPWRITE_COLLECTION_ID") {
            config.store.collection_id = collection_id;
        }

        if let Some(millis) = lookup("MARQUEE_DEBOUNCE_MS").and_then(|v| v.parse::<u64>().ok()) {
            config.search.debounce = Duration::from_millis(millis);
        }
        if let Some(secs) = lookup("MARQUEE_SESSION_TTL_SECS").and_then(|v| v.parse::<u64>().ok())
        {
            config.search.session_ttl = Duration::from_secs(secs);
        }

        if let Some(host) = lookup("MARQUEE_HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("MARQUEE_PORT").and_then(|v| v.parse::<u16>().ok()) {
            config.server.port = port;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = MarqueeConfig::default();

        assert_eq!(config.catalog.base_url, "https://api.themoviedb.org/3");
        assert_eq!(
            config.catalog.image_base_url,
            "https://image.tmdb.org/t/p/w500"
        );
        assert!(config.catalog.api_token.is_none());
        assert_eq!(config.store.endpoint, "https://cloud.appwrite.io/v1");
        assert_eq!(config.search.debounce, Duration::from_millis(500));
        assert_eq!(config.search.trending_limit, 5);
        assert_eq!(config.search.session_ttl, Duration::from_secs(60));
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_var_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("TMDB_API_KEY", "secret"),
            ("MARQUEE_CATALOG_BASE_URL", "http://localhost:9000/3/"),
            ("APPWRITE_PROJECT_ID", "project"),
            ("APPWRITE_DATABASE_ID", "db"),
            ("APPWRITE_COLLECTION_ID", "metrics"),
            ("MARQUEE_DEBOUNCE_MS", "250"),
            ("MARQUEE_SESSION_TTL_SECS", "5"),
            ("MARQUEE_PORT", "8080"),
        ]);

        let config = MarqueeConfig::from_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.catalog.api_token.as_deref(), Some("secret"));
        assert_eq!(config.catalog.base_url, "http://localhost:9000/3");
        assert_eq!(config.store.project_id, "project");
        assert_eq!(config.store.database_id, "db");
        assert_eq!(config.store.collection_id, "metrics");
        assert_eq!(config.search.debounce, Duration::from_millis(250));
        assert_eq!(config.search.session_ttl, Duration::from_secs(5));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_invalid_numbers_keep_defaults() {
        let config = MarqueeConfig::from_vars(|key| match key {
            "MARQUEE_DEBOUNCE_MS" => Some("soon".to_string()),
            "MARQUEE_PORT" => Some("99999".to_string()),
            _ => None,
        });

        assert_eq!(config.search.debounce, Duration::from_millis(500));
        assert_eq!(config.server.port, 3000);
    }
}
