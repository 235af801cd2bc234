//! Key tuples and key comparators.

use smallvec::SmallVec;
use std::cmp::Ordering;

/// An ordered sequence of one key per dimension.
///
/// Inline storage covers matrices of up to four dimensions without a heap
/// allocation; wider matrices spill transparently.
pub type KeyTuple<K> = SmallVec<[K; 4]>;

/// Ordering used to keep every dimension's key registry sorted.
///
/// The closure must be usable from any thread so a matrix holding it stays
/// `Send + Sync` when its keys and values are.
pub type Comparator<K> = Box<dyn Fn(&K, &K) -> Ordering + Send + Sync>;

/// Comparator that sorts keys by their [`Ord`] implementation.
pub fn natural_order<K: Ord + 'static>() -> Comparator<K> {
    Box::new(|a: &K, b: &K| a.cmp(b))
}

/// Comparator that sorts keys in descending [`Ord`] order.
pub fn reverse_order<K: Ord + 'static>() -> Comparator<K> {
    Box::new(|a: &K, b: &K| b.cmp(a))
}
