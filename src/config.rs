//! Client configuration.

use crate::error::Error;
use std::fmt;


/// Header carrying the API key on every authenticated request.
pub const API_KEY_HEADER: &str = "X-Meili-API-Key";

/// Default MeiliSearch address.
pub const DEFAULT_URL: &str = "http://localhost:7700";

/// Connection settings shared by every request a client issues.
///
/// Fields are private: once a `Config` is handed to a [`Client`](crate::Client)
/// it cannot change.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
    api_key: Option<String>,
}

impl Config {
    /// Creates a configuration without an API key.
    ///
    /// A trailing `/` is trimmed from the URL.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] if the URL is empty.
    pub fn new(url: impl Into<String>) -> Result<Self, Error> {
        let url = url.into();
        let base_url = url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(Error::InvalidConfig("base URL must not be empty".to_string()));
        }

        Ok(Self {
            base_url: base_url.to_string(),
            api_key: None,
        })
    }

    /// Sets the API key sent with every request.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Base URL of the MeiliSearch instance.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// API key, if one was supplied.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Full URL for a resource path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            api_key: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
