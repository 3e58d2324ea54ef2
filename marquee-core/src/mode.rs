//! Runtime mode configuration for Marquee.

use serde::{Deserialize, Serialize};

/// Runtime mode for Marquee services.
///
/// Production talks to the real movie catalog and document store. Development
/// swaps both for offline implementations behind the same interfaces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuntimeMode {
    /// Real catalog API and hosted document store
    Production,
    /// Built-in demo catalog and in-memory document store
    #[default]
    Development,
}

impl RuntimeMode {
    /// Check if running in development mode.
    pub fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if running in production mode.
    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for RuntimeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Production => write!(f, "PRODUCTION"),
            Self::Development => write!(f, "DEVELOPMENT"),
        }
    }
}

impl std::str::FromStr for RuntimeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            _ => Err(format!(
                "Invalid runtime mode: '{s}'. Valid options are: production, development"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("prod".parse::<RuntimeMode>(), Ok(RuntimeMode::Production));
        assert_eq!(
            "Development".parse::<RuntimeMode>(),
            Ok(RuntimeMode::Development)
        );
        assert!("staging".parse::<RuntimeMode>().is_err());
    }

    #[test]
    fn test_default_is_development() {
        assert!(RuntimeMode::default().is_development());
        assert!(!RuntimeMode::default().is_production());
    }
}
