//! Ordered key index shared by the flight and customer stores.
//!
//! The index maps keys to record ids. It is backed by a `BTreeMap`, so
//! lookups stay logarithmic regardless of insertion order, and enumeration
//! walks keys in ascending order.
//!
//! Inserting a key that is already present does not replace the existing
//! value: the new value is kept as a *shadow* behind it. Lookups keep
//! returning the first value inserted under the key; erasing the key removes
//! that value and lets the next shadow become visible.

use std::collections::{BTreeMap, VecDeque};

/// A keyed lookup structure with ascending-key enumeration.
///
/// # Examples
///
/// ```
/// use skydesk::OrderedIndex;
///
/// let mut index = OrderedIndex::new();
/// index.insert(30, "c");
/// index.insert(10, "a");
/// index.insert(20, "b");
///
/// assert_eq!(index.find(&20), Some(&"b"));
/// assert!(!index.exists(&40));
/// assert_eq!(index.enumerate_in_order().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct OrderedIndex<K, V> {
    entries: BTreeMap<K, VecDeque<V>>,
    len: usize,
}

impl<K: Ord, V> OrderedIndex<K, V> {
    /// Creates an empty index.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            len: 0,
        }
    }

    /// Inserts `value` under `key`.
    ///
    /// If `key` is already present the existing value stays reachable and
    /// `value` is stored as a shadow behind it.
    pub fn insert(&mut self, key: K, value: V) {
        self.entries.entry(key).or_default().push_back(value);
        self.len += 1;
    }

    /// Returns the reachable value stored under `key`.
    #[must_use]
    pub fn find(&self, key: &K) -> Option<&V> {
        self.entries.get(key).and_then(VecDeque::front)
    }

    /// Returns whether `key` has a reachable value.
    #[must_use]
    pub fn exists(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes the reachable value under `key` and returns it.
    ///
    /// A shadow inserted later under the same key becomes reachable.
    pub fn erase(&mut self, key: &K) -> Option<V> {
        let values = self.entries.get_mut(key)?;
        let removed = values.pop_front()?;
        if values.is_empty() {
            self.entries.remove(key);
        }
        self.len -= 1;
        Some(removed)
    }

    /// Iterates over every stored value in ascending key order.
    ///
    /// Shadows are yielded directly after the reachable value of their key.
    pub fn enumerate_in_order(&self) -> impl Iterator<Item = &V> {
        self.entries.values().flatten()
    }

    /// Iterates over `(key, reachable value)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries
            .iter()
            .filter_map(|(key, values)| values.front().map(|value| (key, value)))
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.len = 0;
    }

    /// Number of stored values, shadows included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the index holds no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<K: Ord, V> Default for OrderedIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedIndex<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (key, value) in iter {
            index.insert(key, value);
        }
        index
    }
}
