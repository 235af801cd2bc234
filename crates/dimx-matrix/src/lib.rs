//! Sparse N-dimensional keyed matrix.
//!
//! A [`DimensionalMatrix`] maps a tuple of per-dimension keys to a value.
//! Alongside the values it keeps, for every dimension, the ordered set of
//! keys observed so far. Those registries drive index-based access and the
//! cartesian [`combinations`](DimensionalMatrix::combinations) enumeration.
//!
//! # Architecture
//!
//! ```text
//! DimensionalMatrix<K, V>
//! ├── KeyRegistry<K> × dimension_count (insertion-ordered or sorted)
//! ├── Branch root: IndexMap<K, Node<K, V>>
//! │   └── Node::Branch (dimension_count − 1 levels) → Node::Value
//! └── Option<Comparator<K>> (shared by every registry)
//! ```
//!
//! # Registry retention
//!
//! Removing a value never retracts its keys from the registries. Only
//! [`clear`](DimensionalMatrix::clear) shrinks them, so key counts are
//! monotone between clears and `combinations()` keeps reporting tuples whose
//! value has been removed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod combination;
pub mod config;
pub mod matrix;
mod node;
pub mod registry;

pub use combination::Combination;
pub use config::MatrixConfig;
pub use matrix::DimensionalMatrix;
pub use registry::KeyRegistry;

pub use dimx_core::{natural_order, reverse_order, Comparator, ErrorKind, KeyTuple, MatrixError};
