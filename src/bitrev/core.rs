// src/bitrev/core.rs

use crate::common::{PermuteError, check_len, entry_count};
use core::iter::FusedIterator;

/// Reverses the low `stages` bits of `index`.
///
/// This is the straightforward per-index computation. The permutation routines
/// never call it; it is kept as the reference the incremental counter is
/// checked against.
#[inline]
pub fn reverse_bits(index: usize, stages: u32) -> usize {
    if stages == 0 {
        return 0;
    }
    index.reverse_bits() >> (usize::BITS - stages)
}

/// Advances a bit-reversed counter by one.
///
/// Given `prev_reversed = bitreverse(i)` and `max_index = 2^stages - 1`,
/// returns `bitreverse(i + 1)`. The counter increments from the top bit down:
/// the highest zero bit of `prev_reversed` is set and every bit above it is
/// cleared.
///
/// `max_index` must be one less than a power of two and
/// `prev_reversed < max_index`.
///
/// # Example
/// ```
/// use rs_simple_bitrev::next_reversed_index;
///
/// // 3 bits: 000 -> 100 -> 010 -> 110
/// assert_eq!(next_reversed_index(0b000, 7), 0b100);
/// assert_eq!(next_reversed_index(0b100, 7), 0b010);
/// assert_eq!(next_reversed_index(0b010, 7), 0b110);
/// ```
#[inline]
pub fn next_reversed_index(prev_reversed: usize, max_index: usize) -> usize {
    debug_assert!(prev_reversed < max_index);

    // `max_index - prev_reversed` is the complement of `prev_reversed`, so the
    // largest power of two not above it is the highest zero bit.
    let mut bit = max_index + 1;
    loop {
        bit >>= 1;
        if bit <= max_index - prev_reversed {
            break;
        }
    }

    (prev_reversed & (bit - 1)) + bit
}

/// Calls `swap(index, reversed)` exactly once for every pair with
/// `index < reversed`, over the indices `0..=max_index`.
///
/// The reversed index is the fold accumulator, so no state outlives the walk.
#[inline]
pub(crate) fn for_each_swap(max_index: usize, mut swap: impl FnMut(usize, usize)) {
    (1..=max_index).fold(0, |reversed, index| {
        let reversed = next_reversed_index(reversed, max_index);
        if reversed > index {
            swap(index, reversed);
        }
        reversed
    });
}

/// Iterator over `(index, bitreverse(index))` in ascending index order.
#[derive(Debug, Clone)]
pub struct ReversedIndices {
    index: usize,
    reversed: usize,
    max_index: usize,
}

impl ReversedIndices {
    pub fn new(stages: i32) -> Result<Self, PermuteError> {
        entry_count(stages).map(Self::with_entries)
    }

    /// `n` must be a power of two.
    pub(crate) fn with_entries(n: usize) -> Self {
        Self {
            index: 0,
            reversed: 0,
            max_index: n - 1,
        }
    }
}

impl Iterator for ReversedIndices {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index > self.max_index {
            return None;
        }

        let item = (self.index, self.reversed);
        if self.index < self.max_index {
            self.reversed = next_reversed_index(self.reversed, self.max_index);
        }
        self.index += 1;

        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.max_index + 1).saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ReversedIndices {}

impl FusedIterator for ReversedIndices {}

/// Reorders `samples` into bit-reversed order, deriving the stage count from
/// the slice length.
///
/// Works for any element type, e.g. a plain buffer of real samples.
pub fn bit_reverse_in_place<T>(samples: &mut [T]) -> Result<(), PermuteError> {
    let len = samples.len();
    if !len.is_power_of_two() {
        return Err(PermuteError::NotPowerOfTwo(len));
    }

    for_each_swap(len - 1, |i, j| samples.swap(i, j));
    Ok(())
}

/// Fills the bit-reversal table: `table[i] = bitreverse(i, stages)`.
pub fn fill_bitrev_table(table: &mut [usize], stages: i32) -> Result<(), PermuteError> {
    let indices = ReversedIndices::new(stages)?;
    check_len(indices.len(), table.len())?;

    for (slot, (_, reversed)) in table.iter_mut().zip(indices) {
        *slot = reversed;
    }
    Ok(())
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
