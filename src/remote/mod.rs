//! Transport layer for the remote JSON store.
//!
//! Each collection is backed by one fixed endpoint holding a JSON array of
//! entries. The protocol is two verbs: `GET` reads the full array, `PUT`
//! replaces it wholesale. A `GET` answered with 404 means the resource was
//! never created; `fetch` encodes that as `Ok(None)` so callers can apply
//! the "missing collection is an empty collection" rule themselves.

use crate::core::{Entry, Result, StoreError};
use async_trait::async_trait;
use log::debug;
use std::time::Duration;

/// Endpoint path of the dictionary collection.
pub const DICTIONARY_ENDPOINT: &str = "/data/dictionary.json";

/// Endpoint path of the recently-used collection.
pub const RECENT_ENDPOINT: &str = "/data/recent.json";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Remote persistence for a collection of entries.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Read the full collection at `endpoint`.
    ///
    /// Returns `Ok(None)` when the resource does not exist (HTTP 404).
    async fn fetch(&self, endpoint: &str) -> Result<Option<Vec<Entry>>>;

    /// Replace the full collection at `endpoint` with `entries`.
    async fn replace(&self, endpoint: &str, entries: &[Entry]) -> Result<()>;
}

/// [`RemoteStore`] over HTTP, speaking JSON against a fixed base URL.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpStore {
    /// Create a store for `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

#[async_trait]
impl RemoteStore for HttpStore {
    async fn fetch(&self, endpoint: &str) -> Result<Option<Vec<Entry>>> {
        let response = self.client.get(self.url(endpoint)).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            debug!("fetch {endpoint}: 404, treating as missing collection");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(StoreError::LoadFailed {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let entries: Vec<Entry> =
            response
                .json()
                .await
                .map_err(|err| StoreError::InvalidPayload {
                    endpoint: endpoint.to_string(),
                    message: err.to_string(),
                })?;
        debug!("fetch {endpoint}: {} entries", entries.len());
        Ok(Some(entries))
    }

    async fn replace(&self, endpoint: &str, entries: &[Entry]) -> Result<()> {
        let response = self
            .client
            .put(self.url(endpoint))
            .json(entries)
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(StoreError::WriteFailed {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }
        debug!("replace {endpoint}: {} entries", entries.len());
        Ok(())
    }
}
