// src/bitrev/complex.rs

use super::core::{ReversedIndices, for_each_swap};
use super::interleaved::permute_unchecked;
use crate::common::{PermuteError, Permute, check_len, entry_count};
use num_complex::Complex;

/// Bit-reverse permutation of a buffer of `2^stages` complex entries.
///
/// Same contract as [`permute`](super::permute), with each entry stored as a
/// `Complex<T>` instead of two interleaved components.
pub fn permute_complex<T>(entries: &mut [Complex<T>], stages: i32) -> Result<(), PermuteError> {
    let n = entry_count(stages)?;
    check_len(n, entries.len())?;

    for_each_swap(n - 1, |i, j| entries.swap(i, j));
    Ok(())
}

/// A validated stage count that can reorder any number of buffers of the
/// same size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitReversal {
    stages: u32,
    n: usize,
}

impl BitReversal {
    pub fn new(stages: i32) -> Result<Self, PermuteError> {
        let n = entry_count(stages)?;
        Ok(Self {
            stages: n.trailing_zeros(),
            n,
        })
    }

    #[inline]
    pub fn stages(&self) -> u32 {
        self.stages
    }

    /// Number of complex entries, `2^stages`.
    #[inline]
    pub fn entries(&self) -> usize {
        self.n
    }

    /// Pairs `(index, bitreverse(index))` for every entry.
    pub fn indices(&self) -> ReversedIndices {
        ReversedIndices::with_entries(self.n)
    }

    /// Reorders a buffer of `Complex<T>` entries in place.
    pub fn process<T>(&self, buffer: &mut [Complex<T>]) -> Result<(), PermuteError> {
        check_len(self.n, buffer.len())?;

        for_each_swap(self.n - 1, |i, j| buffer.swap(i, j));
        Ok(())
    }

    /// Reorders an interleaved `[re0, im0, re1, im1, ...]` buffer in place.
    pub fn process_interleaved<T>(&self, components: &mut [T]) -> Result<(), PermuteError> {
        check_len(2 * self.n, components.len())?;

        permute_unchecked(components, self.n);
        Ok(())
    }
}

impl<T> Permute<Complex<T>> for BitReversal {
    fn permute(&self, buffer: &mut [Complex<T>]) -> Result<(), PermuteError> {
        self.process(buffer)
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
