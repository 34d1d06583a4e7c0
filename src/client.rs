//! Client facade for the MeiliSearch API.

use crate::config::Config;
use crate::error::Error;
use crate::index::Index;
use crate::request::HttpRequests;
use crate::stat;
use crate::types::*;
use serde_json::Value;


const HEALTH_PATH: &str = "health";
const KEYS_PATH: &str = "keys";
const SYS_INFO_PATH: &str = "sys-info";
const VERSION_PATH: &str = "version";

/// HTTP client for a MeiliSearch instance.
///
/// Cloning is cheap: clones share the configuration and the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpRequests,
}

impl Client {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, Error> {
        Ok(Self {
            http: HttpRequests::new(config)?,
        })
    }

    /// Creates a new client for a URL, without an API key.
    ///
    /// # Errors
    /// Returns error if the URL is empty or the HTTP client cannot be built.
    pub fn with_url(url: &str) -> Result<Self, Error> {
        Self::new(Config::new(url)?)
    }

    /// Configuration every request is sent with.
    #[must_use]
    pub fn config(&self) -> &Config {
        self.http.config()
    }

    // ========================================================================
    // Indexes
    // ========================================================================

    /// Creates an index and returns a handle on it.
    ///
    /// # Errors
    /// Returns error if the request fails, e.g. the uid is already taken.
    pub async fn create_index(
        &self,
        uid: &str,
        primary_key: Option<&str>,
        name: Option<&str>,
    ) -> Result<Index, Error> {
        Index::create(&self.http, uid, primary_key, name).await
    }

    /// Lists every index.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_indexes(&self) -> Result<Vec<IndexInfo>, Error> {
        Index::get_indexes(&self.http).await
    }

    /// Gets an index.
    ///
    /// # Errors
    /// Returns [`Error::Http`] with status 404 if the index does not exist.
    pub async fn get_index(&self, uid: &str) -> Result<Index, Error> {
        Index::get_index(&self.http, uid).await
    }

    /// Returns a handle on an index without contacting the service.
    #[must_use]
    pub fn index(&self, uid: &str) -> Index {
        Index::new(self.http.clone(), uid)
    }

    // ========================================================================
    // Stats & System
    // ========================================================================

    /// Gets statistics about indexes, database size and update date.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_all_stats(&self) -> Result<Stats, Error> {
        stat::get_all_stats(&self.http).await
    }

    /// Gets memory and processor usage of the instance.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_sys_info(&self) -> Result<SysInfo, Error> {
        self.http.get(SYS_INFO_PATH).await
    }

    /// Gets version information.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_version(&self) -> Result<Version, Error> {
        self.http.get(VERSION_PATH).await
    }

    /// Alias for [`Client::get_version`].
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn version(&self) -> Result<Version, Error> {
        self.get_version().await
    }

    // ========================================================================
    // Keys
    // ========================================================================

    /// Lists every key with its information.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_keys(&self) -> Result<Vec<Value>, Error> {
        self.http.get(KEYS_PATH).await
    }

    // ========================================================================
    // Health
    // ========================================================================

    /// Checks the health of the instance.
    ///
    /// Any 2xx status (usually 204) means healthy.
    ///
    /// # Errors
    /// Returns [`Error::Http`] with the response status when unhealthy.
    pub async fn health(&self) -> Result<(), Error> {
        self.http.get_empty(HEALTH_PATH).await
    }

    /// Returns true if [`Client::health`] succeeds.
    pub async fn is_healthy(&self) -> bool {
        self.health().await.is_ok()
    }

    /// Marks the instance healthy or unhealthy.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn update_health(&self, health: bool) -> Result<(), Error> {
        self.http
            .put_empty(HEALTH_PATH, Some(&HealthUpdate { health }))
            .await
    }
}
