//! dimx: a sparse N-dimensional keyed matrix.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the dimx sub-crates. For most users, adding `dimx` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use dimx::prelude::*;
//!
//! // Rows × columns, keys kept in insertion order.
//! let mut sales: DimensionalMatrix<&str, u32> = DimensionalMatrix::new(2).unwrap();
//! sales.set_value(Some(10), &["north", "q1"]).unwrap();
//! sales.set_value(Some(20), &["north", "q2"]).unwrap();
//! sales.set_value(Some(30), &["south", "q1"]).unwrap();
//!
//! assert_eq!(sales.get_by_key(&["north", "q2"]).unwrap(), Some(&20));
//! assert_eq!(sales.get_by_index(&[1, 0]).unwrap(), Some(&30));
//!
//! // Every registered row × column, including the empty (south, q2) cell.
//! let cells: Vec<String> = sales.combinations().iter().map(|c| c.to_string()).collect();
//! assert_eq!(
//!     cells,
//!     ["[north, q1] 10", "[north, q2] 20", "[south, q1] 30", "[south, q2] -"]
//! );
//!
//! // Removal keeps the keys registered.
//! sales.remove_value(&["south", "q1"]).unwrap();
//! assert_eq!(sales.key_count(0).unwrap(), 2);
//!
//! // Switch to sorted keys; every registry is re-sorted immediately.
//! sales.set_comparator(Some(reverse_order()));
//! assert_eq!(sales.key_at(0, 0).unwrap(), &"south");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `dimx-core` | Error taxonomy, key tuples, comparators |
//! | [`matrix`] | `dimx-matrix` | The matrix, its registries, config, and combinations |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`dimx-core`).
///
/// Contains [`types::MatrixError`], [`types::ErrorKind`], the
/// [`types::KeyTuple`] alias, and the stock comparators.
pub use dimx_core as types;

/// The dimensional matrix (`dimx-matrix`).
///
/// [`matrix::DimensionalMatrix`] is the entry point; its per-dimension
/// registries are exposed as [`matrix::KeyRegistry`].
pub use dimx_matrix as matrix;

/// Common imports for typical dimx usage.
///
/// ```rust
/// use dimx::prelude::*;
/// ```
pub mod prelude {
    pub use dimx_core::{
        natural_order, reverse_order, Comparator, ErrorKind, KeyTuple, MatrixError,
    };
    pub use dimx_matrix::{Combination, DimensionalMatrix, KeyRegistry, MatrixConfig};
}
