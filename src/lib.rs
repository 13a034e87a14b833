#![no_std]

// Enables the standard library for tests and for the `std` feature,
// so you can run 'cargo test' on your PC normally.
#[cfg(any(test, feature = "std"))]
#[macro_use]
extern crate std;

pub mod common;
pub mod bitrev;

pub use bitrev::{
    BitReversal, ReversedIndices, bit_reverse_in_place, fill_bitrev_table, next_reversed_index,
    permute, permute_complex, reverse_bits,
};
pub use common::{MAX_STAGES, Permute, PermuteError};
