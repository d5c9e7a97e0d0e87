use super::{Collection, CollectionState};
use crate::core::{Entry, Result, StoreError};
use crate::remote::{RemoteStore, DICTIONARY_ENDPOINT};
use async_trait::async_trait;
use std::sync::Arc;

/// The dictionary: entries sorted ascending by word, words unique.
///
/// Insertion binary-searches for the slot and rejects duplicates before any
/// network call. Loading re-sorts, so an unsorted remote snapshot is
/// tolerated.
pub struct DictionaryCollection {
    state: CollectionState,
}

/// What the list view needs for one typed word: where it would land in the
/// sorted order, whether it is already present, and the entries around that
/// point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    pub index: usize,
    pub exact: bool,
    pub window: Vec<Entry>,
}

impl DictionaryCollection {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            state: CollectionState::new(store, DICTIONARY_ENDPOINT),
        }
    }

    fn position(&self, word: &str) -> std::result::Result<usize, usize> {
        self.state
            .entries()
            .binary_search_by(|entry| entry.word.as_str().cmp(word))
    }

    /// Index at which `word` sits, or would be inserted.
    pub fn insertion_point(&self, word: &str) -> usize {
        match self.position(word) {
            Ok(index) | Err(index) => index,
        }
    }

    /// Whether an entry with this exact word exists.
    pub fn contains(&self, word: &str) -> bool {
        self.position(word).is_ok()
    }

    /// The entries within `radius` of where `word` falls in sort order.
    pub fn neighborhood(&self, word: &str, radius: usize) -> &[Entry] {
        let entries = self.state.entries();
        let index = self.insertion_point(word);
        let start = index.saturating_sub(radius);
        let end = (index + radius).min(entries.len());
        &entries[start..end]
    }

    /// One-shot view computation for a typed word.
    pub fn search(&self, word: &str, radius: usize) -> SearchView {
        let position = self.position(word);
        SearchView {
            index: self.insertion_point(word),
            exact: position.is_ok(),
            window: self.neighborhood(word, radius).to_vec(),
        }
    }

    /// Remove the entry for `word` and persist.
    ///
    /// A word that is not present yields [`StoreError::WordNotFound`]; the
    /// sequence is untouched and nothing is written.
    pub async fn delete(&mut self, word: &str) -> Result<()> {
        let index = match self.position(word) {
            Ok(index) => index,
            Err(_) => return Err(StoreError::WordNotFound(word.to_string())),
        };
        self.state.entries_mut().remove(index);
        self.state.write().await
    }
}

#[async_trait]
impl Collection for DictionaryCollection {
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
        self.state
            .load_with(|entries| entries.sort_by(|a, b| a.word.cmp(&b.word)))
            .await
    }

    async fn write(&self) -> Result<()> {
        self.state.write().await
    }

    /// Insert in sort order; a duplicate word is rejected before any write.
    async fn add(&mut self, entry: Entry) -> Result<()> {
        let index = match self.position(&entry.word) {
            Ok(_) => return Err(StoreError::DuplicateWord(entry.word)),
            Err(index) => index,
        };
        self.state.entries_mut().insert(index, entry);
        self.state.write().await
    }
}
