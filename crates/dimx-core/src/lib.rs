//! Core types for the dimx sparse matrix.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the rest of the workspace: the [`KeyTuple`] used to
//! address a single cell, the [`Comparator`] that keeps dimension keys
//! sorted, and the [`MatrixError`] taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod key;

pub use error::{ErrorKind, MatrixError};
pub use key::{natural_order, reverse_order, Comparator, KeyTuple};
