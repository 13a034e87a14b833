// src/bitrev/interleaved.rs

use super::core::for_each_swap;
use crate::common::{PermuteError, check_len, entry_count};

/// Bit-reverse permutation of an interleaved complex buffer.
///
/// `components` holds `2^stages` complex entries laid out as
/// `[re0, im0, re1, im1, ...]`. On success the entry that was at index `i` is
/// at `bitreverse(i, stages)`, with its real and imaginary parts still adjacent.
///
/// Both checks run before the buffer is touched, so on error it is unchanged.
///
/// # Example
/// ```
/// use rs_simple_bitrev::permute;
///
/// let mut data: [i16; 8] = [0, 10, 1, 11, 2, 12, 3, 13];
/// permute(&mut data, 2).unwrap();
/// assert_eq!(data, [0, 10, 2, 12, 1, 11, 3, 13]);
/// ```
pub fn permute<T>(components: &mut [T], stages: i32) -> Result<(), PermuteError> {
    let n = entry_count(stages)?;
    check_len(2 * n, components.len())?;

    permute_unchecked(components, n);
    Ok(())
}

/// `components.len()` must already be `2 * n`.
pub(crate) fn permute_unchecked<T>(components: &mut [T], n: usize) {
    for_each_swap(n - 1, |i, j| swap_entries(components, i, j));
}

/// Swaps the (re, im) pairs of entries `i` and `j`. Requires `i < j`.
#[inline]
fn swap_entries<T>(components: &mut [T], i: usize, j: usize) {
    let (head, tail) = components.split_at_mut(2 * j);
    head[2 * i..2 * i + 2].swap_with_slice(&mut tail[..2]);
}

#[cfg(test)]
#[path = "interleaved_tests.rs"]
mod tests;
