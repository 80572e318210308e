//! Hard-word set
//!
//! Global set of bookmarked words, persisted under [`HARD_SET_STORAGE_KEY`] as a
//! JSON array of key strings. Keys embed the book id, so entries of other
//! books stay stored but never match the active book's collections.
//!
//! Entries are kept in their encoded form and membership compares encodings.
//! Ids containing `|` or `:` make the encoding ambiguous to parse back, but
//! the same key always encodes to the same string.
//!
//! Persistence rules:
//! - `load` never fails: missing, unreadable or malformed data is an empty set
//! - stored entries are kept verbatim, even ones that match no word
//! - every mutation is written through immediately
//! - a failed write is logged; the in-memory set stays the source of truth

use std::collections::BTreeSet;

use crate::bookmark::BookmarkKey;
use crate::store::{KeyValueStore, StoreResult};
use crate::types::HARD_SET_STORAGE_KEY;

#[derive(Debug)]
pub struct HardSet<S> {
    entries: BTreeSet<String>,
    store: S,
}

impl<S: KeyValueStore> HardSet<S> {
    pub fn load(store: S) -> Self {
        let entries = match store.get(HARD_SET_STORAGE_KEY) {
            Ok(Some(raw)) => Self::decode(&raw),
            Ok(None) => BTreeSet::new(),
            Err(err) => {
                tracing::warn!(error = %err, "hard-word set unreadable, starting empty");
                BTreeSet::new()
            }
        };

        tracing::debug!(count = entries.len(), "hard-word set loaded");
        Self { entries, store }
    }

    fn decode(raw: &str) -> BTreeSet<String> {
        let entries: Vec<String> = match serde_json::from_str(raw) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(error = %err, "hard-word set malformed, starting empty");
                return BTreeSet::new();
            }
        };

        for entry in &entries {
            if let Err(err) = entry.parse::<BookmarkKey>() {
                tracing::warn!(error = %err, "stored hard-word entry is not a bookmark key");
            }
        }
        entries.into_iter().collect()
    }

    pub fn contains(&self, key: &BookmarkKey) -> bool {
        self.entries.contains(&key.to_string())
    }

    /// Returns `true` if the key was not present before
    pub fn add(&mut self, key: BookmarkKey) -> bool {
        let inserted = self.entries.insert(key.to_string());
        if inserted {
            self.persist();
        }
        inserted
    }

    /// Returns `true` if the key was present before
    pub fn remove(&mut self, key: &BookmarkKey) -> bool {
        let removed = self.entries.remove(&key.to_string());
        if removed {
            self.persist();
        }
        removed
    }

    /// Flips membership and returns whether the key is now in the set
    pub fn toggle(&mut self, key: BookmarkKey) -> bool {
        if self.contains(&key) {
            self.remove(&key);
            false
        } else {
            self.add(key);
            true
        }
    }

    pub fn save(&mut self) -> StoreResult<()> {
        let raw = serde_json::to_string(&self.entries)?;
        self.store.set(HARD_SET_STORAGE_KEY, &raw)
    }

    fn persist(&mut self) {
        if let Err(err) = self.save() {
            tracing::warn!(error = %err, count = self.entries.len(), "failed to persist hard-word set");
        }
    }

    /// Total count across every book
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored entries in their encoded form
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
