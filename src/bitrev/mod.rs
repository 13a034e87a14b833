mod core;
pub mod complex;
pub mod interleaved;

pub use self::core::{
    ReversedIndices, bit_reverse_in_place, fill_bitrev_table, next_reversed_index, reverse_bits,
};
pub use complex::{BitReversal, permute_complex};
pub use interleaved::permute;
