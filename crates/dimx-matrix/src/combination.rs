//! Entries of the cartesian key product.

use std::fmt;

use dimx_core::KeyTuple;

/// One tuple of the cartesian product of all dimension registries, paired
/// with the value stored there.
///
/// `value` is `None` for tuples that were never set or whose value has since
/// been removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Combination<'a, K, V> {
    keys: KeyTuple<K>,
    value: Option<&'a V>,
}

impl<'a, K, V> Combination<'a, K, V> {
    pub(crate) fn new(keys: KeyTuple<K>, value: Option<&'a V>) -> Self {
        Self { keys, value }
    }

    /// The key tuple, one key per dimension, outermost dimension first.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// The value stored at this tuple, if any.
    pub fn value(&self) -> Option<&'a V> {
        self.value
    }

    /// Whether a value is stored at this tuple.
    pub fn is_populated(&self) -> bool {
        self.value.is_some()
    }

    /// Split into key tuple and value.
    pub fn into_parts(self) -> (KeyTuple<K>, Option<&'a V>) {
        (self.keys, self.value)
    }
}

/// Renders as `[k0, k1, ...] value`, with `-` standing in for an absent value.
impl<K: fmt::Display, V: fmt::Display> fmt::Display for Combination<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}")?;
        }
        write!(f, "]")?;
        match self.value {
            Some(value) => write!(f, " {value}"),
            None => write!(f, " -"),
        }
    }
}
