//! Marquee Core - shared configuration and process setup
//!
//! Holds the injected configuration, runtime mode selection, and tracing
//! initialization used by the search, web, and CLI crates.

pub mod config;
pub mod mode;
pub mod tracing_setup;

pub use config::MarqueeConfig;
pub use mode::RuntimeMode;

/// Errors raised while bringing up Marquee processes.
#[derive(Debug, thiserror::Error)]
pub enum MarqueeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Web server error: {reason}")]
    Server { reason: String },
}

impl MarqueeError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            MarqueeError::Io(_) => "File system or network error occurred".to_string(),
            MarqueeError::Server { reason } => format!("Web server failed: {reason}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, MarqueeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_hide_io_details() {
        let io = MarqueeError::from(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "address already in use",
        ));
        assert_eq!(io.user_message(), "File system or network error occurred");
        assert!(io.to_string().contains("address already in use"));

        let server = MarqueeError::Server {
            reason: "connection reset".to_string(),
        };
        assert_eq!(server.user_message(), "Web server failed: connection reset");
    }
}
