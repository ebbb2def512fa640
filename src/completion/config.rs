//! Completion client configuration.

use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "GROQ_BASE_URL";

/// Groq's OpenAI-compatible endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Seconds to wait for a completion before giving up.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for an OpenAI-compatible endpoint.
///
/// The credential is supplied by the host environment and kept in memory
/// only; it is redacted from `Debug` output.
#[derive(Clone)]
pub struct ClientConfig {
    /// API credential.
    pub api_key: Option<String>,
    /// Base URL of the API, without the `/chat/completions` suffix.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration with the default endpoint and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the API key, rejecting a missing or blank one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the environment variable to set.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::Config {
                message: format!("no API key configured; set {API_KEY_ENV} or pass --api-key"),
            })
    }

    /// Checks that the configuration is usable before any request is made.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for a missing key, an empty base URL, or a
    /// zero timeout.
    pub fn validate(&self) -> Result<()> {
        self.api_key()?;
        if self.base_url.trim().is_empty() {
            return Err(Error::Config {
                message: "base URL must not be empty".to_string(),
            });
        }
        if self.timeout.is_zero() {
            return Err(Error::Config {
                message: "timeout must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
