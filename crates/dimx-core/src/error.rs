//! Error types for matrix construction and access.
//!
//! Every failure is a contract violation detected before any mutation takes
//! place. Variants are grouped into two [`ErrorKind`] buckets so callers can
//! branch on the class of mistake without matching every variant.

use std::error::Error;
use std::fmt;

/// Coarse classification of a [`MatrixError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required input is malformed: a dimension count below one, or a
    /// key tuple whose length does not match the dimension count.
    InvalidArgument,
    /// A dimension index, a key index within a dimension, or an index
    /// tuple length lies outside its valid bound.
    OutOfRange,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "invalid argument"),
            Self::OutOfRange => write!(f, "out of range"),
        }
    }
}

/// Errors arising from matrix construction, lookup, or mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// Attempted to build a matrix with fewer than one dimension.
    InvalidDimensionCount {
        /// The dimension count that was requested.
        requested: usize,
    },
    /// A dimension index is not in `[0, dimension_count)`.
    DimensionOutOfRange {
        /// The offending dimension index.
        dimension: usize,
        /// Number of dimensions in the matrix.
        dimension_count: usize,
    },
    /// A key index is not in `[0, key_count)` for its dimension.
    KeyIndexOutOfRange {
        /// The dimension the index was resolved against.
        dimension: usize,
        /// The offending key index.
        index: usize,
        /// Number of keys currently registered in that dimension.
        key_count: usize,
    },
    /// A key tuple does not carry exactly one key per dimension.
    KeyCountMismatch {
        /// Number of dimensions in the matrix.
        expected: usize,
        /// Number of keys supplied.
        actual: usize,
    },
    /// An index tuple does not carry exactly one index per dimension.
    IndexCountMismatch {
        /// Number of dimensions in the matrix.
        expected: usize,
        /// Number of indexes supplied.
        actual: usize,
    },
}

impl MatrixError {
    /// The taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDimensionCount { .. } | Self::KeyCountMismatch { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::DimensionOutOfRange { .. }
            | Self::KeyIndexOutOfRange { .. }
            | Self::IndexCountMismatch { .. } => ErrorKind::OutOfRange,
        }
    }
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensionCount { requested } => {
                write!(f, "dimension count must be at least 1, got {requested}")
            }
            Self::DimensionOutOfRange {
                dimension,
                dimension_count,
            } => {
                write!(
                    f,
                    "dimension {dimension} out of range: matrix has {dimension_count} dimensions"
                )
            }
            Self::KeyIndexOutOfRange {
                dimension,
                index,
                key_count,
            } => {
                write!(
                    f,
                    "key index {index} out of range for dimension {dimension}: {key_count} keys registered"
                )
            }
            Self::KeyCountMismatch { expected, actual } => {
                write!(f, "expected {expected} keys, one per dimension, got {actual}")
            }
            Self::IndexCountMismatch { expected, actual } => {
                write!(
                    f,
                    "expected {expected} indexes, one per dimension, got {actual}"
                )
            }
        }
    }
}

impl Error for MatrixError {}
