use crate::collection::{Collection, DictionaryCollection, RecentCollection, SearchView};
use crate::core::{Entry, Result};
use crate::remote::{HttpStore, RemoteStore};
use std::sync::Arc;

/// The application's collection registry: one dictionary and one
/// recently-used list over a shared remote store.
///
/// Constructed once at startup and passed to whatever needs it; there is no
/// global state. Views read the collections synchronously and forward user
/// intents through the facade methods.
///
/// # Examples
///
/// ```no_run
/// use lexistore::{Collection, VocabContext};
///
/// # async fn run() -> lexistore::Result<()> {
/// let mut vocab = VocabContext::connect("http://localhost:8080")?;
/// vocab.load_all().await?;
///
/// vocab.add_word("cat", "gato").await?;
/// for entry in vocab.dictionary().entries() {
///     println!("{} = {}", entry.word, entry.translation);
/// }
/// # Ok(())
/// # }
/// ```
pub struct VocabContext {
    dictionary: DictionaryCollection,
    recent: RecentCollection,
}

impl VocabContext {
    /// Build the registry over an existing store.
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            dictionary: DictionaryCollection::new(store.clone()),
            recent: RecentCollection::new(store),
        }
    }

    /// Build the registry over an [`HttpStore`] for `base_url`.
    pub fn connect(base_url: &str) -> Result<Self> {
        Ok(Self::new(Arc::new(HttpStore::new(base_url)?)))
    }

    /// Load both collections from the remote store.
    pub async fn load_all(&mut self) -> Result<()> {
        self.dictionary.load().await?;
        self.recent.load().await?;
        Ok(())
    }

    pub fn dictionary(&self) -> &DictionaryCollection {
        &self.dictionary
    }

    pub fn dictionary_mut(&mut self) -> &mut DictionaryCollection {
        &mut self.dictionary
    }

    pub fn recent(&self) -> &RecentCollection {
        &self.recent
    }

    pub fn recent_mut(&mut self) -> &mut RecentCollection {
        &mut self.recent
    }

    /// Add a word to the dictionary.
    pub async fn add_word(
        &mut self,
        word: impl Into<String>,
        translation: impl Into<String>,
    ) -> Result<()> {
        self.dictionary.add(Entry::new(word, translation)).await
    }

    /// Remove a word from the dictionary.
    pub async fn delete_word(&mut self, word: &str) -> Result<()> {
        self.dictionary.delete(word).await
    }

    /// Record an entry as recently used.
    pub async fn touch_recent(&mut self, entry: Entry) -> Result<()> {
        self.recent.add(entry).await
    }

    /// View computation for a typed word: sorted position, exact-match
    /// state, and the surrounding entries.
    pub fn search(&self, word: &str, radius: usize) -> SearchView {
        self.dictionary.search(word, radius)
    }
}
