//! Snapshot storage on a remote HTTP key-value resource.
//!
//! Each slot maps to `<base>/<name>.json`: `GET` reads it and `PUT` overwrites
//! it. The resource offers no authentication, ETag or conditional write, and
//! this adapter neither cancels nor orders requests. Two writers racing on
//! the same slot can land in either order; a single store controller avoids
//! this by serializing its own writes.

use async_trait::async_trait;
use reqwest::{StatusCode, header::CONTENT_TYPE};
use std::time::Duration;

use crate::board::{
    domain::SnapshotName,
    ports::{PersistenceAdapter, PersistenceError, PersistenceResult},
};

/// Connection settings for [`RemotePersistence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePersistenceConfig {
    base_url: String,
    timeout: Duration,
}

impl RemotePersistenceConfig {
    /// Request timeout used unless overridden.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration for the resource root at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Configuration`] when `base_url` is empty
    /// or does not start with `http://` or `https://`.
    pub fn new(base_url: impl Into<String>) -> PersistenceResult<Self> {
        let raw = base_url.into();
        let normalized = raw.trim().trim_end_matches('/');
        if normalized.is_empty() {
            return Err(PersistenceError::Configuration(
                "remote base URL must not be empty".to_owned(),
            ));
        }
        if !(normalized.starts_with("http://") || normalized.starts_with("https://")) {
            return Err(PersistenceError::Configuration(format!(
                "remote base URL '{normalized}' must start with http:// or https://"
            )));
        }
        Ok(Self {
            base_url: normalized.to_owned(),
            timeout: Self::DEFAULT_TIMEOUT,
        })
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the normalized base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the resource URL for `name`.
    #[must_use]
    pub fn slot_url(&self, name: &SnapshotName) -> String {
        format!("{}/{}", self.base_url, name.file_name())
    }
}

/// Snapshot storage backed by a remote JSON key-value resource.
#[derive(Debug, Clone)]
pub struct RemotePersistence {
    client: reqwest::Client,
    config: RemotePersistenceConfig,
}

impl RemotePersistence {
    /// Creates an adapter with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Io`] when the HTTP client cannot be built.
    pub fn new(config: RemotePersistenceConfig) -> PersistenceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(PersistenceError::io)?;
        Ok(Self { client, config })
    }

    /// Returns the adapter configuration.
    #[must_use]
    pub const fn config(&self) -> &RemotePersistenceConfig {
        &self.config
    }
}

#[async_trait]
impl PersistenceAdapter for RemotePersistence {
    async fn load(&self, name: &SnapshotName) -> PersistenceResult<Option<String>> {
        let url = self.config.slot_url(name);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(PersistenceError::io)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let document: serde_json::Value = response
            .error_for_status()
            .map_err(PersistenceError::io)?
            .json()
            .await
            .map_err(PersistenceError::io)?;
        // A missing key reads back as JSON `null` rather than a 404.
        if document.is_null() {
            return Ok(None);
        }
        let encoded = serde_json::to_string(&document).map_err(PersistenceError::io)?;
        tracing::debug!(store = %name, %url, bytes = encoded.len(), "loaded remote snapshot");
        Ok(Some(encoded))
    }

    async fn save(&self, name: &SnapshotName, value: &str) -> PersistenceResult<()> {
        let url = self.config.slot_url(name);
        self.client
            .put(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(value.to_owned())
            .send()
            .await
            .map_err(PersistenceError::io)?
            .error_for_status()
            .map_err(PersistenceError::io)?;
        tracing::debug!(store = %name, %url, bytes = value.len(), "saved remote snapshot");
        Ok(())
    }

    async fn remove(&self, name: &SnapshotName) -> PersistenceResult<()> {
        tracing::info!(
            store = %name,
            url = %self.config.slot_url(name),
            "remote snapshot removal requested; resource left in place"
        );
        Ok(())
    }
}
