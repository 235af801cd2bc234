//! Matrix construction parameters.

use dimx_core::MatrixError;

/// Configuration for a [`DimensionalMatrix`](crate::DimensionalMatrix).
///
/// Validated at construction; the dimension count is immutable for the
/// lifetime of the matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatrixConfig {
    /// Number of dimensions. Must be at least 1.
    pub dimension_count: usize,

    /// Initial capacity reserved in every dimension's key registry.
    ///
    /// Default: 0. Purely a sizing hint; registries grow past it freely.
    pub key_capacity: usize,
}

impl MatrixConfig {
    /// Default per-dimension registry capacity.
    pub const DEFAULT_KEY_CAPACITY: usize = 0;

    /// Smallest valid dimension count.
    pub const MIN_DIMENSION_COUNT: usize = 1;

    /// Create a config for the given dimension count with default sizing.
    pub fn new(dimension_count: usize) -> Self {
        Self {
            dimension_count,
            key_capacity: Self::DEFAULT_KEY_CAPACITY,
        }
    }

    /// Reserve room for `key_capacity` keys in every dimension.
    pub fn with_key_capacity(mut self, key_capacity: usize) -> Self {
        self.key_capacity = key_capacity;
        self
    }

    /// Check structural invariants.
    ///
    /// Returns `Err(MatrixError::InvalidDimensionCount)` if
    /// `dimension_count` is below [`MIN_DIMENSION_COUNT`](Self::MIN_DIMENSION_COUNT).
    pub fn validate(&self) -> Result<(), MatrixError> {
        if self.dimension_count < Self::MIN_DIMENSION_COUNT {
            return Err(MatrixError::InvalidDimensionCount {
                requested: self.dimension_count,
            });
        }
        Ok(())
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self::new(Self::MIN_DIMENSION_COUNT)
    }
}
