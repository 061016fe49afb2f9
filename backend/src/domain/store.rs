//! Keyed in-memory storage with store-issued identifiers.
//!
//! A [`Store`] owns its entries and the counter that names them. Identifiers
//! start at `1`, only ever increase, and are never handed out twice, even
//! after the entry they named has been removed. Iteration follows ascending
//! identifier order, which is also insertion order.
//!
//! The store performs no locking; callers that share one across threads wrap
//! it (see [`super::SharedDirectory`]).

use std::collections::BTreeMap;

/// Identifier types a [`Store`] can issue.
pub trait StoreKey: Copy + Ord {
    /// Build the identifier for the `value`-th insertion (starting at 1).
    fn from_sequence(value: u64) -> Self;
}

/// The identifier counter has no values left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("store identifier space exhausted")]
pub struct IdsExhausted;

/// Id-keyed collection with a monotonic id counter.
#[derive(Debug)]
pub struct Store<K, V> {
    next_id: Option<u64>,
    entries: BTreeMap<K, V>,
}

impl<K: StoreKey, V> Default for Store<K, V> {
    fn default() -> Self {
        Self {
            next_id: Some(1),
            entries: BTreeMap::new(),
        }
    }
}

impl<K: StoreKey, V> Store<K, V> {
    /// Create an empty store whose first identifier is `1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the next identifier, build the entry with it and store it.
    ///
    /// # Errors
    /// Returns [`IdsExhausted`] once every `u64` identifier has been issued.
    pub fn insert_with(&mut self, build: impl FnOnce(K) -> V) -> Result<&V, IdsExhausted> {
        let raw = self.next_id.ok_or(IdsExhausted)?;
        self.next_id = raw.checked_add(1);
        let key = K::from_sequence(raw);
        Ok(self.entries.entry(key).or_insert(build(key)))
    }

    /// Look up an entry.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Look up an entry for in-place mutation.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    /// Remove an entry; its identifier stays retired.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key)
    }

    /// All entries in ascending identifier order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.values()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no live entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
