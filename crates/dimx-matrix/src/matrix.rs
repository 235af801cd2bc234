//! The sparse N-dimensional matrix.

use std::fmt;
use std::hash::Hash;

use dimx_core::{Comparator, KeyTuple, MatrixError};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::combination::Combination;
use crate::config::MatrixConfig;
use crate::node::{self, Level};
use crate::registry::KeyRegistry;

/// Sparse associative container addressed by one key per dimension.
///
/// # Two views of one dataset
///
/// - A value tree of depth `dimension_count`, keyed by tuple prefix, that
///   resolves a full key tuple to its value.
/// - One [`KeyRegistry`] per dimension listing every key that has been used
///   to store a value along that dimension, in insertion order or sorted by
///   the active [`Comparator`].
///
/// Registries only ever grow between calls to [`clear`](Self::clear):
/// removing a value leaves its keys registered, so
/// [`combinations`](Self::combinations) keeps visiting the emptied tuple and
/// reports it as absent.
///
/// # Validation
///
/// Every method validates its arguments before touching any state. A
/// rejected call leaves the matrix exactly as it was.
pub struct DimensionalMatrix<K, V> {
    dimension_count: usize,
    registries: Vec<KeyRegistry<K>>,
    root: Level<K, V>,
    comparator: Option<Comparator<K>>,
    len: usize,
}

impl<K, V> fmt::Debug for DimensionalMatrix<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key_counts: Vec<usize> = self.registries.iter().map(KeyRegistry::len).collect();
        f.debug_struct("DimensionalMatrix")
            .field("dimension_count", &self.dimension_count)
            .field("key_counts", &key_counts)
            .field("len", &self.len)
            .field("sorted", &self.comparator.is_some())
            .finish()
    }
}

impl<K: Hash + Eq + Clone, V> DimensionalMatrix<K, V> {
    /// Create an unsorted matrix with `dimension_count` dimensions.
    ///
    /// Returns `Err(MatrixError::InvalidDimensionCount)` if
    /// `dimension_count` is zero.
    pub fn new(dimension_count: usize) -> Result<Self, MatrixError> {
        Self::from_config(MatrixConfig::new(dimension_count), None)
    }

    /// Create a matrix whose dimension keys are kept sorted by `comparator`.
    pub fn with_comparator(
        dimension_count: usize,
        comparator: Comparator<K>,
    ) -> Result<Self, MatrixError> {
        Self::from_config(MatrixConfig::new(dimension_count), Some(comparator))
    }

    /// Create a matrix from a validated [`MatrixConfig`].
    pub fn from_config(
        config: MatrixConfig,
        comparator: Option<Comparator<K>>,
    ) -> Result<Self, MatrixError> {
        config.validate()?;
        let registries = (0..config.dimension_count)
            .map(|_| KeyRegistry::with_capacity(config.key_capacity))
            .collect();
        debug!(
            dimension_count = config.dimension_count,
            sorted = comparator.is_some(),
            "created dimensional matrix"
        );
        Ok(Self {
            dimension_count: config.dimension_count,
            registries,
            root: Level::new(),
            comparator,
            len: 0,
        })
    }

    /// Replace the key comparator and re-sort every registry under it.
    ///
    /// Passing `None` stops sorting new keys; existing registry order is
    /// left untouched.
    pub fn set_comparator(&mut self, comparator: Option<Comparator<K>>) {
        self.comparator = comparator;
        if let Some(cmp) = &self.comparator {
            for registry in &mut self.registries {
                registry.sort_with(cmp);
            }
        }
        debug!(sorted = self.comparator.is_some(), "replaced key comparator");
    }

    /// Number of dimensions, fixed at construction.
    pub fn dimension_count(&self) -> usize {
        self.dimension_count
    }

    /// Whether a comparator is currently keeping the registries sorted.
    pub fn is_sorted(&self) -> bool {
        self.comparator.is_some()
    }

    /// Number of values currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no value is stored. Registries may still hold keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn registry(&self, dimension: usize) -> Result<&KeyRegistry<K>, MatrixError> {
        self.registries
            .get(dimension)
            .ok_or(MatrixError::DimensionOutOfRange {
                dimension,
                dimension_count: self.dimension_count,
            })
    }

    fn check_key_count(&self, keys: &[K]) -> Result<(), MatrixError> {
        if keys.len() != self.dimension_count {
            return Err(MatrixError::KeyCountMismatch {
                expected: self.dimension_count,
                actual: keys.len(),
            });
        }
        Ok(())
    }

    /// Number of keys registered in `dimension`.
    pub fn key_count(&self, dimension: usize) -> Result<usize, MatrixError> {
        Ok(self.registry(dimension)?.len())
    }

    /// The key at position `index` of `dimension`'s registry.
    pub fn key_at(&self, dimension: usize, index: usize) -> Result<&K, MatrixError> {
        let registry = self.registry(dimension)?;
        registry
            .get(index)
            .ok_or(MatrixError::KeyIndexOutOfRange {
                dimension,
                index,
                key_count: registry.len(),
            })
    }

    /// Position of `key` in `dimension`'s registry, or `None` if the key
    /// has never been registered there.
    pub fn index_of(&self, dimension: usize, key: &K) -> Result<Option<usize>, MatrixError> {
        Ok(self.registry(dimension)?.index_of(key))
    }

    /// Read-only view of `dimension`'s registry in its current order.
    pub fn keys_of(&self, dimension: usize) -> Result<&KeyRegistry<K>, MatrixError> {
        self.registry(dimension)
    }

    /// Look up a value by per-dimension key positions.
    ///
    /// Each `indexes[d]` must address a registered key of dimension `d`.
    pub fn get_by_index(&self, indexes: &[usize]) -> Result<Option<&V>, MatrixError> {
        if indexes.len() != self.dimension_count {
            return Err(MatrixError::IndexCountMismatch {
                expected: self.dimension_count,
                actual: indexes.len(),
            });
        }
        let mut keys: SmallVec<[&K; 4]> = SmallVec::with_capacity(indexes.len());
        for (dimension, &index) in indexes.iter().enumerate() {
            keys.push(self.key_at(dimension, index)?);
        }
        Ok(node::lookup(&self.root, keys.as_slice()))
    }

    /// Look up a value by its key tuple.
    pub fn get_by_key(&self, keys: &[K]) -> Result<Option<&V>, MatrixError> {
        self.check_key_count(keys)?;
        Ok(node::lookup(&self.root, keys))
    }

    /// Mutable access to the value stored at `keys`.
    pub fn get_by_key_mut(&mut self, keys: &[K]) -> Result<Option<&mut V>, MatrixError> {
        self.check_key_count(keys)?;
        Ok(node::lookup_mut(&mut self.root, keys))
    }

    /// Whether a value is stored at `keys`.
    pub fn contains_key(&self, keys: &[K]) -> Result<bool, MatrixError> {
        Ok(self.get_by_key(keys)?.is_some())
    }

    /// Store or remove the value at `keys`, returning the previous value.
    ///
    /// With `Some(value)`, missing intermediate levels are created and every
    /// key of the tuple is registered in its dimension. With `None`, the
    /// existing path is walked without creating anything and the value at its
    /// end, if reached, is removed; registries are left unchanged.
    pub fn set_value(&mut self, value: Option<V>, keys: &[K]) -> Result<Option<V>, MatrixError> {
        self.check_key_count(keys)?;
        let Some(value) = value else {
            let removed = node::remove(&mut self.root, keys);
            if removed.is_some() {
                self.len -= 1;
            }
            return Ok(removed);
        };

        let comparator = self.comparator.as_ref();
        for (dimension, (registry, key)) in self.registries.iter_mut().zip(keys).enumerate() {
            if registry.register(key, comparator) {
                trace!(
                    dimension,
                    key_count = registry.len(),
                    "registered new dimension key"
                );
            }
        }

        let previous = node::insert(&mut self.root, keys, value);
        if previous.is_none() {
            self.len += 1;
        }
        Ok(previous)
    }

    /// Remove the value at `keys`, returning it.
    ///
    /// Equivalent to `set_value(None, keys)`.
    pub fn remove_value(&mut self, keys: &[K]) -> Result<Option<V>, MatrixError> {
        self.set_value(None, keys)
    }

    /// Drop every value and empty every registry.
    ///
    /// The dimension count and the comparator survive.
    pub fn clear(&mut self) {
        debug!(
            dimension_count = self.dimension_count,
            len = self.len,
            "clearing dimensional matrix"
        );
        self.root.clear();
        for registry in &mut self.registries {
            registry.clear();
        }
        self.len = 0;
    }

    /// Size of the cartesian product of all registries, saturating at
    /// `usize::MAX`.
    pub fn combination_count(&self) -> usize {
        self.registries
            .iter()
            .fold(1usize, |acc, registry| acc.saturating_mul(registry.len()))
    }

    /// Materialize the cartesian product of all registries.
    ///
    /// Each entry pairs a key tuple with the value stored there, or `None`
    /// for tuples that hold no value. Dimension 0 varies slowest and the last
    /// dimension fastest, each following its registry's current order. The
    /// result has [`combination_count`](Self::combination_count) entries,
    /// so callers must keep registry sizes bounded.
    pub fn combinations(&self) -> Vec<Combination<'_, K, V>> {
        if self.registries.iter().any(KeyRegistry::is_empty) {
            return Vec::new();
        }

        let n = self.dimension_count;
        let mut out = Vec::with_capacity(self.combination_count());
        let mut positions = vec![0usize; n];
        let mut tuple: SmallVec<[&K; 4]> = SmallVec::with_capacity(n);

        // Odometer iteration, rightmost dimension fastest.
        loop {
            tuple.clear();
            tuple.extend(
                self.registries
                    .iter()
                    .zip(&positions)
                    .filter_map(|(registry, &pos)| registry.get(pos)),
            );
            let value = node::lookup(&self.root, tuple.as_slice());
            let keys: KeyTuple<K> = tuple.iter().map(|&key| key.clone()).collect();
            out.push(Combination::new(keys, value));

            let mut carry = true;
            for d in (0..n).rev() {
                positions[d] += 1;
                if positions[d] < self.registries[d].len() {
                    carry = false;
                    break;
                }
                positions[d] = 0;
            }
            if carry {
                break;
            }
        }
        out
    }
}
