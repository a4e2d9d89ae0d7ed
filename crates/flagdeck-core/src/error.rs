//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Stats Endpoint Errors
    // ─────────────────────────────────────────────────────────────
    #[error("HTTP request failed: {message}")]
    Http { message: String },

    #[error("Malformed stats response: {message}")]
    MalformedResponse { message: String },

    #[error("Problem loading flags from server: {details}")]
    ServerReported { details: String },

    // ─────────────────────────────────────────────────────────────
    // Panel Construction Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to build panel section for group '{group}': {message}")]
    PanelBuild { group: String, message: String },

    // ─────────────────────────────────────────────────────────────
    // Outbound Notification Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Notification failed: {message}")]
    Notify { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid server URL: {url}")]
    InvalidUrl { url: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http {
            message: message.into(),
        }
    }

    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    pub fn server_reported(details: impl Into<String>) -> Self {
        Self::ServerReported {
            details: details.into(),
        }
    }

    pub fn panel_build(group: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PanelBuild {
            group: group.into(),
            message: message.into(),
        }
    }

    pub fn notify(message: impl Into<String>) -> Self {
        Self::Notify {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// Recoverable errors are surfaced to the operator (alert or log)
    /// but leave the panel session running.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Http { .. }
                | Error::MalformedResponse { .. }
                | Error::ServerReported { .. }
                | Error::PanelBuild { .. }
                | Error::Notify { .. }
                | Error::ChannelSend { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Config { .. } | Error::InvalidUrl { .. })
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::server_reported("db down");
        assert_eq!(
            err.to_string(),
            "Problem loading flags from server: db down"
        );

        let err = Error::panel_build("cpu_limit", "duplicate section label");
        assert!(err.to_string().contains("cpu_limit"));
        assert!(err.to_string().contains("duplicate section label"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::config("bad config").is_fatal());
        assert!(Error::invalid_url("not-a-url").is_fatal());
        assert!(!Error::http("timeout").is_fatal());
        assert!(!Error::server_reported("db down").is_fatal());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::http("timeout").is_recoverable());
        assert!(Error::malformed_response("no data field").is_recoverable());
        assert!(Error::server_reported("db down").is_recoverable());
        assert!(Error::panel_build("io_flag", "duplicate").is_recoverable());
        assert!(Error::notify("connection refused").is_recoverable());
        assert!(!Error::config("bad config").is_recoverable());
    }

    #[test]
    fn test_error_constructors() {
        let _ = Error::http("test");
        let _ = Error::malformed_response("test");
        let _ = Error::server_reported("test");
        let _ = Error::panel_build("group", "test");
        let _ = Error::notify("test");
        let _ = Error::config("test");
        let _ = Error::channel_send("test");
    }
}
