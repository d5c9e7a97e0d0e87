//! Dictionary collection tests
//!
//! Sorted-unique policy over the in-memory store double.
//! Run with: cargo test --test dictionary_tests

mod common;

use common::MemoryStore;
use lexistore::{Collection, DictionaryCollection, Entry, StoreError, DICTIONARY_ENDPOINT};
use std::sync::Arc;

fn is_sorted(entries: &[Entry]) -> bool {
    entries.windows(2).all(|pair| pair[0].word < pair[1].word)
}

#[tokio::test]
async fn distinct_adds_stay_sorted_and_counted() {
    let store = Arc::new(MemoryStore::new());
    let mut dict = DictionaryCollection::new(store.clone());

    let words = ["melon", "apple", "zebra", "kiwi", "berry", "fig"];
    for word in words {
        dict.add(Entry::new(word, word.to_uppercase())).await.unwrap();
    }

    assert_eq!(dict.len(), words.len());
    assert!(is_sorted(dict.entries()));
    assert_eq!(store.write_count(), words.len());
}

#[tokio::test]
async fn duplicate_add_issues_no_write() {
    let store = Arc::new(MemoryStore::new());
    let mut dict = DictionaryCollection::new(store.clone());

    dict.add(Entry::new("cat", "gato")).await.unwrap();
    let writes_before = store.write_count();

    let err = dict.add(Entry::new("cat", "x")).await.unwrap_err();
    assert!(matches!(err, StoreError::DuplicateWord(_)));
    assert_eq!(store.write_count(), writes_before);
    assert_eq!(dict.entries(), [Entry::new("cat", "gato")]);
}

#[tokio::test]
async fn add_scenario_ant_cat() {
    let store = Arc::new(MemoryStore::new());
    let mut dict = DictionaryCollection::new(store);

    dict.add(Entry::new("cat", "gato")).await.unwrap();
    dict.add(Entry::new("ant", "hormiga")).await.unwrap();

    assert_eq!(
        dict.entries(),
        [Entry::new("ant", "hormiga"), Entry::new("cat", "gato")]
    );

    assert!(dict.add(Entry::new("cat", "x")).await.is_err());
    assert_eq!(
        dict.entries(),
        [Entry::new("ant", "hormiga"), Entry::new("cat", "gato")]
    );
}

#[tokio::test]
async fn delete_persists_the_remainder() {
    let store = Arc::new(MemoryStore::new());
    let mut dict = DictionaryCollection::new(store.clone());

    for word in ["ant", "cat", "dog"] {
        dict.add(Entry::new(word, word)).await.unwrap();
    }
    dict.delete("cat").await.unwrap();

    assert!(is_sorted(dict.entries()));
    let remote = store.stored(DICTIONARY_ENDPOINT).unwrap();
    assert_eq!(remote, dict.entries());
    assert_eq!(remote.len(), 2);
}

#[tokio::test]
async fn delete_missing_word_issues_no_write() {
    let store = Arc::new(MemoryStore::new());
    let mut dict = DictionaryCollection::new(store.clone());

    dict.add(Entry::new("ant", "hormiga")).await.unwrap();
    let writes_before = store.write_count();

    let err = dict.delete("cat").await.unwrap_err();
    assert!(matches!(err, StoreError::WordNotFound(_)));
    assert_eq!(store.write_count(), writes_before);
    assert_eq!(dict.len(), 1);
}

#[tokio::test]
async fn load_sorts_an_unsorted_snapshot() {
    let store = Arc::new(MemoryStore::new());
    store.seed(
        DICTIONARY_ENDPOINT,
        vec![
            Entry::new("zebra", "cebra"),
            Entry::new("ant", "hormiga"),
            Entry::new("melon", "melón"),
        ],
    );
    let mut dict = DictionaryCollection::new(store);

    dict.load().await.unwrap();

    assert!(dict.is_loaded());
    assert!(is_sorted(dict.entries()));
    assert_eq!(dict.len(), 3);
}

#[tokio::test]
async fn missing_resource_loads_as_empty() {
    let mut dict = DictionaryCollection::new(Arc::new(MemoryStore::new()));

    dict.load().await.unwrap();

    assert!(dict.is_loaded());
    assert!(dict.is_empty());
}

#[tokio::test]
async fn failed_write_keeps_the_optimistic_mutation() {
    let store = Arc::new(MemoryStore::new());
    let mut dict = DictionaryCollection::new(store.clone());

    dict.add(Entry::new("ant", "hormiga")).await.unwrap();
    store.fail_writes();

    let err = dict.add(Entry::new("cat", "gato")).await.unwrap_err();
    assert!(matches!(err, StoreError::WriteFailed { .. }));

    // Memory diverges from the remote: the mutation stays applied.
    assert_eq!(dict.len(), 2);
    assert_eq!(store.stored(DICTIONARY_ENDPOINT).unwrap().len(), 1);
}
