// ============================================================================
// Lexistore Library
// ============================================================================

//! In-memory vocabulary collections synchronized to a remote JSON store.
//!
//! Two collection policies share one contract: the dictionary keeps its
//! entries sorted by word with unique words, the recently-used list keeps
//! the newest twelve entries first. Both load from and write through to a
//! remote store (`GET`/`PUT` of a full JSON array), with a missing remote
//! resource loading as an empty collection. Mutations apply to memory
//! before the write is issued, so callers can render from the in-memory
//! state without waiting on the transport.

pub mod collection;
pub mod core;
pub mod options;
pub mod remote;

mod context;

// Re-export main types for convenience
pub use collection::{
    Collection, DictionaryCollection, RecentCollection, SearchView, DEFAULT_RECENT_CAPACITY,
};
pub use context::VocabContext;
pub use core::{Entry, Result, StoreError};
pub use options::{validate, OptionRules, OptionsError, Rule, ValidatedOptions};
pub use remote::{HttpStore, RemoteStore, DICTIONARY_ENDPOINT, RECENT_ENDPOINT};
