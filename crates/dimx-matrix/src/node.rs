//! Value tree nodes.
//!
//! The tree has exactly `dimension_count` levels. Every level except the
//! last maps a key to a [`Node::Branch`]; the last level maps a key to a
//! [`Node::Value`]. Which variant lives at a given level is decided purely by
//! depth, so callers always pass a key slice whose length equals the depth of
//! the tree below `level`.

use std::borrow::Borrow;
use std::hash::Hash;

use indexmap::IndexMap;

/// One level of the value tree.
pub(crate) type Level<K, V> = IndexMap<K, Node<K, V>>;

/// A tree node: either a stored value or a mapping to the next level.
#[derive(Clone, Debug)]
pub(crate) enum Node<K, V> {
    Value(V),
    Branch(Level<K, V>),
}

impl<K, V> Node<K, V> {
    fn branch() -> Self {
        Node::Branch(IndexMap::new())
    }

    /// Borrow the child level, turning a misplaced value into an empty
    /// branch first.
    fn branch_mut(&mut self) -> &mut Level<K, V> {
        if let Node::Value(_) = self {
            *self = Node::branch();
        }
        match self {
            Node::Branch(level) => level,
            Node::Value(_) => unreachable!("value node replaced by a branch above"),
        }
    }
}

/// Walk `keys` from `level` and return the value at the end of the path.
///
/// Short-circuits to `None` as soon as a level is missing. Accepts owned
/// keys or references to them.
pub(crate) fn lookup<'a, K, V, Q>(level: &'a Level<K, V>, keys: &[Q]) -> Option<&'a V>
where
    K: Hash + Eq,
    Q: Borrow<K>,
{
    let (last, prefix) = keys.split_last()?;
    let mut level = level;
    for key in prefix {
        match level.get(key.borrow())? {
            Node::Branch(next) => level = next,
            Node::Value(_) => return None,
        }
    }
    match level.get(last.borrow())? {
        Node::Value(value) => Some(value),
        Node::Branch(_) => None,
    }
}

/// Mutable counterpart of [`lookup`].
pub(crate) fn lookup_mut<'a, K: Hash + Eq, V>(
    level: &'a mut Level<K, V>,
    keys: &[K],
) -> Option<&'a mut V> {
    let (last, prefix) = keys.split_last()?;
    let mut level = level;
    for key in prefix {
        match level.get_mut(key)? {
            Node::Branch(next) => level = next,
            Node::Value(_) => return None,
        }
    }
    match level.get_mut(last)? {
        Node::Value(value) => Some(value),
        Node::Branch(_) => None,
    }
}

/// Store `value` at the end of `keys`, creating intermediate branches on the
/// way down. Returns the value previously stored there.
pub(crate) fn insert<K: Hash + Eq + Clone, V>(
    level: &mut Level<K, V>,
    keys: &[K],
    value: V,
) -> Option<V> {
    let (last, prefix) = keys.split_last()?;
    let mut level = level;
    for key in prefix {
        level = level
            .entry(key.clone())
            .or_insert_with(Node::branch)
            .branch_mut();
    }
    match level.insert(last.clone(), Node::Value(value))? {
        Node::Value(previous) => Some(previous),
        Node::Branch(_) => None,
    }
}

/// Remove the value at the end of `keys` without creating anything.
///
/// Stops at the first missing level. Branches left empty by the removal are
/// pruned on the way back up.
pub(crate) fn remove<K: Hash + Eq, V>(level: &mut Level<K, V>, keys: &[K]) -> Option<V> {
    match keys {
        [] => None,
        [last] => {
            if !matches!(level.get(last), Some(Node::Value(_))) {
                return None;
            }
            match level.swap_remove(last) {
                Some(Node::Value(value)) => Some(value),
                _ => None,
            }
        }
        [first, rest @ ..] => {
            let Node::Branch(next) = level.get_mut(first)? else {
                return None;
            };
            let removed = remove(next, rest);
            if next.is_empty() {
                level.swap_remove(first);
            }
            removed
        }
    }
}
