use super::{Collection, CollectionState};
use crate::core::{Entry, Result};
use crate::remote::{RemoteStore, RECENT_ENDPOINT};
use async_trait::async_trait;
use std::sync::Arc;

/// Capacity of the recently-used list.
pub const DEFAULT_RECENT_CAPACITY: usize = 12;

/// The recently-used list: most recent first, bounded length, duplicates
/// allowed.
///
/// Insertion always prepends and evicts from the tail while over capacity.
/// Loading truncates an over-long remote snapshot to the capacity bound.
pub struct RecentCollection {
    state: CollectionState,
    capacity: usize,
}

impl RecentCollection {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self::with_capacity(store, DEFAULT_RECENT_CAPACITY)
    }

    pub fn with_capacity(store: Arc<dyn RemoteStore>, capacity: usize) -> Self {
        Self {
            state: CollectionState::new(store, RECENT_ENDPOINT),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[async_trait]
impl Collection for RecentCollection {
    fn endpoint(&self) -> &str {
        self.state.endpoint()
    }

    fn entries(&self) -> &[Entry] {
        self.state.entries()
    }

    fn is_loaded(&self) -> bool {
        self.state.is_loaded()
    }

    async fn load(&mut self) -> Result<()> {
        let capacity = self.capacity;
        self.state
            .load_with(|entries| entries.truncate(capacity))
            .await
    }

    async fn write(&self) -> Result<()> {
        self.state.write().await
    }

    /// Prepend, evict from the tail while over capacity, persist.
    async fn add(&mut self, entry: Entry) -> Result<()> {
        let capacity = self.capacity;
        let entries = self.state.entries_mut();
        entries.insert(0, entry);
        while entries.len() > capacity {
            entries.pop();
        }
        self.state.write().await
    }
}
