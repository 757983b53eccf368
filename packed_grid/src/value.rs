//! Conversion between stored values and their raw word-sized bit pattern.

use crate::bit_ops::{WORD_BYTES, Word};
use bytemuck::Pod;

/// A plain-old-data value that can live in a packed grid cell.
///
/// The value's in-memory representation is copied into a zeroed word so
/// that, for integer types, the numeric low bits land in the word's low
/// bits on either host endianness. Any `Pod` type up to one word wide
/// qualifies; using a wider type fails to compile:
///
/// ```compile_fail
/// use packed_grid::PackedValue;
///
/// let _ = [7u8; 16].to_bits();
/// ```
pub trait PackedValue: Pod {
    fn to_bits(self) -> Word;
    fn from_bits(bits: Word) -> Self;
}

/// Byte offset of a `size`-byte value inside a native-endian word.
#[inline(always)]
const fn value_offset(size: usize) -> usize {
    if cfg!(target_endian = "big") {
        WORD_BYTES - size
    } else {
        0
    }
}

impl<T: Pod> PackedValue for T {
    #[inline]
    fn to_bits(self) -> Word {
        const { assert!(core::mem::size_of::<T>() <= WORD_BYTES, "value wider than a word") };
        let src = bytemuck::bytes_of(&self);
        let start = value_offset(src.len());
        let mut scratch = [0u8; WORD_BYTES];
        scratch[start..start + src.len()].copy_from_slice(src);
        Word::from_ne_bytes(scratch)
    }

    #[inline]
    fn from_bits(bits: Word) -> Self {
        const { assert!(core::mem::size_of::<T>() <= WORD_BYTES, "value wider than a word") };
        let size = core::mem::size_of::<T>();
        let start = value_offset(size);
        let scratch = bits.to_ne_bytes();
        bytemuck::pod_read_unaligned(&scratch[start..start + size])
    }
}
