//! Client configuration.
//!
//! A single externally-supplied base URL points at the plant care service;
//! everything else has sensible defaults. Use the builder methods to
//! customize, or [`ClientConfig::from_env`] to read the environment.

use std::path::PathBuf;

/// Default service base URL, including the `/api` prefix.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Default main-loop tick interval in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 100;

/// Configuration for the client.
///
/// # Example
///
/// ```ignore
/// use verdant::config::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_base_url("http://greenhouse.local:8000/api")
///     .with_notifications(false);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the plant care service (includes the `/api` prefix)
    pub base_url: String,
    /// Main-loop tick interval in milliseconds
    pub tick_ms: u64,
    /// Send OS banners when an analysis completes
    pub notifications: bool,
    /// Log file path; logging is disabled when unset (the TUI owns stdout)
    pub log_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            tick_ms: DEFAULT_TICK_MS,
            notifications: true,
            log_file: None,
        }
    }
}

impl ClientConfig {
    /// Create a new ClientConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the tick interval in milliseconds.
    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    /// Enable or disable OS notifications.
    pub fn with_notifications(mut self, notifications: bool) -> Self {
        self.notifications = notifications;
        self
    }

    /// Set the log file path.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Build config from environment variables.
    ///
    /// `VERDANT_API_URL` overrides the base URL, `VERDANT_LOG` enables
    /// file logging, and `VERDANT_NO_NOTIFY=1` suppresses OS banners.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("VERDANT_API_URL") {
            if !url.trim().is_empty() {
                config.base_url = url;
            }
        }
        if let Ok(path) = std::env::var("VERDANT_LOG") {
            if !path.trim().is_empty() {
                config.log_file = Some(PathBuf::from(path));
            }
        }
        if std::env::var("VERDANT_NO_NOTIFY").map(|v| v == "1").unwrap_or(false) {
            config.notifications = false;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
        assert!(config.notifications);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfig::new()
            .with_base_url("http://greenhouse.local:8000/api")
            .with_tick_ms(50)
            .with_notifications(false)
            .with_log_file("/tmp/verdant.log");

        assert_eq!(config.base_url, "http://greenhouse.local:8000/api");
        assert_eq!(config.tick_ms, 50);
        assert!(!config.notifications);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/verdant.log")));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_when_unset() {
        std::env::remove_var("VERDANT_API_URL");
        std::env::remove_var("VERDANT_LOG");
        std::env::remove_var("VERDANT_NO_NOTIFY");

        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        assert!(config.log_file.is_none());
        assert!(config.notifications);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        std::env::set_var("VERDANT_API_URL", "http://10.0.0.5:8000/api");
        std::env::set_var("VERDANT_LOG", "/tmp/v.log");
        std::env::set_var("VERDANT_NO_NOTIFY", "1");

        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, "http://10.0.0.5:8000/api");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/v.log")));
        assert!(!config.notifications);

        std::env::remove_var("VERDANT_API_URL");
        std::env::remove_var("VERDANT_LOG");
        std::env::remove_var("VERDANT_NO_NOTIFY");
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_blank_url() {
        std::env::set_var("VERDANT_API_URL", "  ");
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, DEFAULT_API_URL);
        std::env::remove_var("VERDANT_API_URL");
    }
}
