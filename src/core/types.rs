use serde::{Deserialize, Serialize};

/// A single vocabulary record.
///
/// `word` is the identity key: collections never mutate an entry in place,
/// they only insert or remove whole records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    pub translation: String,
}

impl Entry {
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
        }
    }
}
