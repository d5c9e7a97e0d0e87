//! Shared in-memory store double for the collection integration tests.

use async_trait::async_trait;
use lexistore::{Entry, RemoteStore, Result, StoreError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// A [`RemoteStore`] that keeps resources in a map, counts writes, and can
/// be told to fail them.
#[derive(Default)]
pub struct MemoryStore {
    resources: Mutex<HashMap<String, Vec<Entry>>>,
    writes: AtomicUsize,
    fail_writes: AtomicBool,
}

#[allow(dead_code)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, endpoint: &str, entries: Vec<Entry>) {
        self.resources
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), entries);
    }

    pub fn stored(&self, endpoint: &str) -> Option<Vec<Entry>> {
        self.resources.lock().unwrap().get(endpoint).cloned()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn fetch(&self, endpoint: &str) -> Result<Option<Vec<Entry>>> {
        Ok(self.resources.lock().unwrap().get(endpoint).cloned())
    }

    async fn replace(&self, endpoint: &str, entries: &[Entry]) -> Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::WriteFailed {
                endpoint: endpoint.to_string(),
                status: 500,
            });
        }
        self.resources
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), entries.to_vec());
        Ok(())
    }
}
