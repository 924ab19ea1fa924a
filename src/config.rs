//! Client configuration: API key, base URL and request timeout.
//!
//! This module provides [`ClientConfig`] and [`ClientConfigBuilder`] for
//! configuring the [`PdfyClient`](crate::PdfyClient). Configuration is set
//! once at construction and never mutated afterwards.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use pdfy_sdk::ClientConfigBuilder;
//!
//! let config = ClientConfigBuilder::new("pdfy_live_abc123")
//!     .base_url("https://pdfy.app/api/v1/")
//!     .timeout(Duration::from_secs(60))
//!     .build()
//!     .expect("Invalid configuration");
//!
//! // Trailing slash is trimmed
//! assert_eq!(config.base_url, "https://pdfy.app/api/v1");
//! ```
//!
//! # Environment Configuration
//!
//! When the `env-config` feature is enabled, configuration can be loaded from
//! environment variables and an optional `app.env` file:
//!
//! ```rust,ignore
//! use pdfy_sdk::config::env::from_env;
//!
//! let config = from_env()?;
//! ```
//!
//! See the [`mod@env`] module for available environment variables.

use std::time::Duration;

use url::Url;

use crate::error::{PdfyError, Result};

/// Default Pdfy API base URL.
pub const DEFAULT_BASE_URL: &str = "https://pdfy.app/api/v1";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable client configuration.
///
/// Use [`ClientConfigBuilder`] for validation and convenience.
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `api_key` | — (required) | Bearer token for every request |
/// | `base_url` | `https://pdfy.app/api/v1` | API root, no trailing slash |
/// | `timeout` | 30s | Per-request HTTP timeout |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key sent as `Authorization: Bearer <key>` on every call.
    pub api_key: String,

    /// Base URL of the API, stored without a trailing slash.
    pub base_url: String,

    /// Timeout applied to each HTTP request.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Configuration with defaults for everything but the API key.
    ///
    /// # Errors
    ///
    /// Returns [`PdfyError::Configuration`] if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientConfigBuilder::new(api_key).build()
    }
}

/// Builder for [`ClientConfig`] with validation.
///
/// # Validation
///
/// [`build()`](Self::build) checks that:
/// - the API key is non-empty
/// - the base URL parses as an absolute `http`/`https` URL
///
/// # Example
///
/// ```rust
/// use pdfy_sdk::ClientConfigBuilder;
///
/// let config = ClientConfigBuilder::new("key").build().unwrap();
/// assert_eq!(config.base_url, "https://pdfy.app/api/v1");
///
/// let invalid = ClientConfigBuilder::new("").build();
/// assert!(invalid.is_err());
/// ```
pub struct ClientConfigBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl ClientConfigBuilder {
    /// Create a builder with the given API key and default values.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the API base URL. A trailing slash is trimmed at build time.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PdfyError::Configuration`] if the API key is empty or the
    /// base URL is not a valid absolute http(s) URL.
    pub fn build(self) -> Result<ClientConfig> {
        if self.api_key.is_empty() {
            return Err(PdfyError::Configuration("API key must not be empty".into()));
        }

        let base_url = self.base_url.trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url)
            .map_err(|e| PdfyError::Configuration(format!("invalid base URL {base_url:?}: {e}")))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(PdfyError::Configuration(format!(
                "base URL must use http or https, got {:?}",
                parsed.scheme()
            )));
        }

        Ok(ClientConfig {
            api_key: self.api_key,
            base_url,
            timeout: self.timeout,
        })
    }
}

/// Environment-based configuration (feature `env-config`).
#[cfg(feature = "env-config")]
pub mod env {
    use super::*;

    /// Default environment file name.
    pub const ENV_FILE_NAME: &str = "app.env";

    /// Load environment variables from the `app.env` file.
    ///
    /// Called automatically by [`from_env`], but can be invoked explicitly
    /// to load the file earlier or to check for errors.
    pub fn load_env_file() -> std::result::Result<std::path::PathBuf, dotenvy::Error> {
        dotenvy::from_filename(ENV_FILE_NAME)
    }

    /// Load client configuration from environment variables.
    ///
    /// Also loads an `app.env` file from the current directory if present;
    /// the file is optional.
    ///
    /// # Environment Variables
    ///
    /// - `PDFY_API_KEY`: API key (required)
    /// - `PDFY_BASE_URL`: Base URL (default: `https://pdfy.app/api/v1`)
    /// - `PDFY_TIMEOUT_SECONDS`: Request timeout in seconds (default: 30)
    ///
    /// # Errors
    ///
    /// Returns [`PdfyError::Configuration`] when `PDFY_API_KEY` is missing,
    /// `PDFY_TIMEOUT_SECONDS` is not a number, or validation fails.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use pdfy_sdk::config::env::from_env;
    ///
    /// let config = from_env()?;
    /// let client = pdfy_sdk::PdfyClient::new(config)?;
    /// ```
    pub fn from_env() -> Result<ClientConfig> {
        match load_env_file() {
            Ok(path) => {
                log::info!("Loaded configuration from: {:?}", path);
            }
            Err(e) => {
                log::debug!(
                    "No {} file found or failed to load: {} (using environment variables and defaults)",
                    ENV_FILE_NAME,
                    e
                );
            }
        }

        let api_key = std::env::var("PDFY_API_KEY").map_err(|_| {
            PdfyError::Configuration("PDFY_API_KEY environment variable is not set".into())
        })?;

        let base_url =
            std::env::var("PDFY_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_seconds = match std::env::var("PDFY_TIMEOUT_SECONDS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                PdfyError::Configuration(format!("PDFY_TIMEOUT_SECONDS is not a number: {raw:?}"))
            })?,
            Err(_) => DEFAULT_TIMEOUT.as_secs(),
        };

        log::debug!(
            "Pdfy client configuration: base_url={}, timeout={}s",
            base_url,
            timeout_seconds
        );

        ClientConfigBuilder::new(api_key)
            .base_url(base_url)
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
