//! In-memory entry collections with write-through remote persistence.
//!
//! A collection owns an ordered sequence of entries plus the endpoint it
//! syncs against. Mutations apply to memory first, then persist the whole
//! sequence with a full replace; callers may read the in-memory state
//! immediately, without waiting for the write to land. A failed write
//! leaves memory mutated and is only reported through the returned error.

mod dictionary;
mod recent;

pub use dictionary::{DictionaryCollection, SearchView};
pub use recent::{RecentCollection, DEFAULT_RECENT_CAPACITY};

use crate::core::{Entry, Result};
use crate::remote::RemoteStore;
use async_trait::async_trait;
use log::warn;
use std::sync::Arc;

/// Common contract of the two collection policies.
#[async_trait]
pub trait Collection {
    /// Endpoint path this collection persists to.
    fn endpoint(&self) -> &str;

    /// Current in-memory sequence, in policy order.
    fn entries(&self) -> &[Entry];

    /// Whether `load` has completed at least once.
    fn is_loaded(&self) -> bool;

    fn len(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Fetch the collection from the remote store.
    ///
    /// A missing resource (404) loads as an empty collection; any other
    /// failure leaves the current in-memory state untouched.
    async fn load(&mut self) -> Result<()>;

    /// Persist the full current sequence. Never mutates in-memory state.
    async fn write(&self) -> Result<()>;

    /// Insert `entry` per the collection's policy, then persist.
    async fn add(&mut self, entry: Entry) -> Result<()>;
}

/// State shared by both policies: the store handle, the endpoint, and the
/// sequence itself (`None` until the first load or mutation).
pub(crate) struct CollectionState {
    store: Arc<dyn RemoteStore>,
    endpoint: &'static str,
    entries: Option<Vec<Entry>>,
}

impl CollectionState {
    pub(crate) fn new(store: Arc<dyn RemoteStore>, endpoint: &'static str) -> Self {
        Self {
            store,
            endpoint,
            entries: None,
        }
    }

    pub(crate) fn endpoint(&self) -> &str {
        self.endpoint
    }

    pub(crate) fn entries(&self) -> &[Entry] {
        self.entries.as_deref().unwrap_or(&[])
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Vec<Entry> {
        self.entries.get_or_insert_with(Vec::new)
    }

    pub(crate) fn is_loaded(&self) -> bool {
        self.entries.is_some()
    }

    /// Fetch, run the policy's normalization hook, then store the result.
    /// The stored sequence is replaced only after the fetch succeeds.
    pub(crate) async fn load_with<F>(&mut self, normalize: F) -> Result<()>
    where
        F: FnOnce(&mut Vec<Entry>) + Send,
    {
        let fetched = self.store.fetch(self.endpoint).await?;
        let mut entries = fetched.unwrap_or_default();
        normalize(&mut entries);
        self.entries = Some(entries);
        Ok(())
    }

    pub(crate) async fn write(&self) -> Result<()> {
        if let Err(err) = self.store.replace(self.endpoint, self.entries()).await {
            warn!("write to '{}' failed: {err}", self.endpoint);
            return Err(err);
        }
        Ok(())
    }
}
