//! Benchmark profiles for the dimx matrix.
//!
//! Provides deterministic, seeded fills so every benchmark run exercises the
//! same key distribution:
//!
//! - [`FillProfile`]: shape of a synthetic matrix
//! - [`sparse_fill`]: build a matrix from a profile and a seed
//! - [`key_tuples`]: the tuples a profile would write, for lookup benches

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dimx_matrix::DimensionalMatrix;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Shape of a synthetic benchmark matrix.
#[derive(Clone, Copy, Debug)]
pub struct FillProfile {
    /// Number of dimensions.
    pub dimensions: usize,
    /// Number of distinct keys drawn per dimension.
    pub keys_per_dimension: u32,
    /// Number of `set_value` calls.
    pub cells: usize,
}

impl FillProfile {
    /// 3 dimensions × 32 keys, 2K writes: a sparse cube of ~32K tuples.
    pub fn reference() -> Self {
        Self {
            dimensions: 3,
            keys_per_dimension: 32,
            cells: 2_000,
        }
    }

    /// 6 dimensions × 8 keys, 20K writes: deep tree, ~262K tuples.
    pub fn deep() -> Self {
        Self {
            dimensions: 6,
            keys_per_dimension: 8,
            cells: 20_000,
        }
    }
}

/// Generate the key tuples a profile writes, deterministically from `seed`.
pub fn key_tuples(profile: FillProfile, seed: u64) -> Vec<Vec<u32>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..profile.cells)
        .map(|_| {
            (0..profile.dimensions)
                .map(|_| rng.next_u32() % profile.keys_per_dimension)
                .collect()
        })
        .collect()
}

/// Build a matrix populated with `profile.cells` seeded writes.
///
/// The value stored at each tuple is the write ordinal, so later writes to
/// the same tuple overwrite earlier ones.
pub fn sparse_fill(profile: FillProfile, seed: u64) -> DimensionalMatrix<u32, u64> {
    let mut matrix = DimensionalMatrix::new(profile.dimensions)
        .expect("benchmark profiles have at least one dimension");
    for (ordinal, keys) in key_tuples(profile, seed).iter().enumerate() {
        matrix
            .set_value(Some(ordinal as u64), keys)
            .expect("key tuples match the profile dimension count");
    }
    matrix
}
