//! Per-dimension registry of observed keys.
//!
//! A [`KeyRegistry`] records every distinct key that has been used to store
//! a value along one dimension. Order is first-insertion order unless the
//! owning matrix supplies a [`Comparator`], in which case the registry is
//! re-sorted every time it gains a key.

use std::hash::Hash;

use dimx_core::Comparator;
use indexmap::set::{Iter, Slice};
use indexmap::IndexSet;

/// Ordered set of distinct keys seen along one dimension.
///
/// Backed by an [`IndexSet`], so membership and position lookups are O(1)
/// while positions stay dense in `[0, len)`.
#[derive(Clone, Debug)]
pub struct KeyRegistry<K> {
    keys: IndexSet<K>,
}

impl<K> KeyRegistry<K> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            keys: IndexSet::new(),
        }
    }

    /// Create an empty registry with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: IndexSet::with_capacity(capacity),
        }
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no key has been registered.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&K> {
        self.keys.get_index(index)
    }

    /// All keys in registry order.
    pub fn as_slice(&self) -> &Slice<K> {
        self.keys.as_slice()
    }

    /// Iterate keys in registry order.
    pub fn iter(&self) -> Iter<'_, K> {
        self.keys.iter()
    }

    pub(crate) fn clear(&mut self) {
        self.keys.clear();
    }
}

impl<K: Hash + Eq> KeyRegistry<K> {
    /// Position of `key`, or `None` if it was never registered.
    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.keys.get_index_of(key)
    }

    /// Whether `key` has been registered.
    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Stable re-sort under `comparator`.
    pub(crate) fn sort_with(&mut self, comparator: &Comparator<K>) {
        self.keys.sort_by(|a, b| comparator(a, b));
    }
}

impl<K: Hash + Eq + Clone> KeyRegistry<K> {
    /// Register `key` if it is new, keeping the registry sorted when a
    /// comparator is active.
    ///
    /// Returns `true` if the key was appended.
    pub(crate) fn register(&mut self, key: &K, comparator: Option<&Comparator<K>>) -> bool {
        if self.keys.contains(key) {
            return false;
        }
        self.keys.insert(key.clone());
        if let Some(cmp) = comparator {
            self.sort_with(cmp);
        }
        true
    }

    /// Copy the keys out in registry order.
    pub fn to_vec(&self) -> Vec<K> {
        self.keys.iter().cloned().collect()
    }
}

impl<K> Default for KeyRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K> IntoIterator for &'a KeyRegistry<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dimx_core::{natural_order, reverse_order};

    #[test]
    fn register_keeps_insertion_order_without_comparator() {
        let mut reg = KeyRegistry::new();
        assert!(reg.register(&"b", None));
        assert!(reg.register(&"a", None));
        assert!(reg.register(&"c", None));
        assert_eq!(reg.to_vec(), vec!["b", "a", "c"]);
    }

    #[test]
    fn duplicate_key_not_appended() {
        let mut reg = KeyRegistry::new();
        assert!(reg.register(&7, None));
        assert!(!reg.register(&7, None));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn register_resorts_under_comparator() {
        let cmp = natural_order::<i32>();
        let mut reg = KeyRegistry::new();
        for k in [5, 1, 3, 2] {
            reg.register(&k, Some(&cmp));
        }
        assert_eq!(reg.to_vec(), vec![1, 2, 3, 5]);
        assert_eq!(reg.index_of(&3), Some(2));
    }

    #[test]
    fn sort_with_reorders_existing_keys() {
        let mut reg = KeyRegistry::new();
        for k in [1, 4, 2] {
            reg.register(&k, None);
        }
        reg.sort_with(&reverse_order());
        assert_eq!(reg.to_vec(), vec![4, 2, 1]);
        assert_eq!(reg.get(0), Some(&4));
        assert_eq!(reg.get(3), None);
    }

    #[test]
    fn index_of_unknown_key_is_none() {
        let mut reg = KeyRegistry::new();
        reg.register(&"x", None);
        assert_eq!(reg.index_of(&"x"), Some(0));
        assert_eq!(reg.index_of(&"y"), None);
        assert!(!reg.contains(&"y"));
    }

    #[test]
    fn clear_empties_registry() {
        let mut reg = KeyRegistry::with_capacity(8);
        reg.register(&1u8, None);
        reg.register(&2u8, None);
        reg.clear();
        assert!(reg.is_empty());
        assert_eq!(reg.iter().count(), 0);
    }
}
