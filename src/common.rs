// src/common.rs

use core::fmt;

/// Largest supported stage count.
///
/// `2 * 2^30` components is `2^31`, which still fits a 32-bit `usize`.
pub const MAX_STAGES: u32 = 30;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PermuteError {
    /// Stage count is negative or above [`MAX_STAGES`].
    InvalidArgument(i32),
    /// Buffer length does not match the stage count.
    SizeMismatch { expected: usize, actual: usize },
    /// Slice length is zero or not a power of two.
    NotPowerOfTwo(usize),
}

impl fmt::Display for PermuteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermuteError::InvalidArgument(stages) => write!(
                f,
                "Stage count {} is outside the supported range 0..={}",
                stages, MAX_STAGES
            ),
            PermuteError::SizeMismatch { expected, actual } => write!(
                f,
                "Buffer length {} does not match the expected length {}",
                actual, expected
            ),
            PermuteError::NotPowerOfTwo(len) => write!(f, "Length {} is not a power of 2", len),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PermuteError {}

pub trait Permute<T> {
    fn permute(&self, buffer: &mut [T]) -> Result<(), PermuteError>;
}

/// Validates `stages` and returns the number of complex entries, `2^stages`.
pub(crate) fn entry_count(stages: i32) -> Result<usize, PermuteError> {
    u32::try_from(stages)
        .ok()
        .filter(|&s| s <= MAX_STAGES)
        .map(|s| 1usize << s)
        .ok_or(PermuteError::InvalidArgument(stages))
}

/// Fails with `SizeMismatch` unless `actual == expected`.
#[inline]
pub(crate) fn check_len(expected: usize, actual: usize) -> Result<(), PermuteError> {
    if actual != expected {
        return Err(PermuteError::SizeMismatch { expected, actual });
    }
    Ok(())
}
