//! Word-sized masked loads and stores at arbitrary byte offsets.
//!
//! Fields are addressed LSB-first: bit `k` of byte `j` is logical bit
//! `8 * j + k`. A field of up to `WORD_BITS - 8` bits starting anywhere in
//! byte `j` is therefore fully covered by the word loaded from `j`.

pub type Word = u64;

pub const WORD_BITS: usize = Word::BITS as usize;
pub const WORD_BYTES: usize = core::mem::size_of::<Word>();

/// Mask with the low `bits` bits set.
#[inline]
pub const fn low_mask(bits: usize) -> Word {
    if bits == 0 {
        0
    } else if bits >= WORD_BITS {
        Word::MAX
    } else {
        (1 << bits) - 1
    }
}

/// Loads the word whose first byte is `bytes[byte_offset]`.
#[inline(always)]
pub fn load_word(bytes: &[u8], byte_offset: usize) -> Word {
    Word::from_le(bytemuck::pod_read_unaligned(
        &bytes[byte_offset..byte_offset + WORD_BYTES],
    ))
}

#[inline(always)]
pub fn store_word(bytes: &mut [u8], byte_offset: usize, word: Word) {
    bytes[byte_offset..byte_offset + WORD_BYTES].copy_from_slice(&word.to_le_bytes());
}

/// Reads the field `mask << shift` of the word at `byte_offset`, shifted down.
#[inline(always)]
pub fn read_field(bytes: &[u8], byte_offset: usize, shift: u32, mask: Word) -> Word {
    (load_word(bytes, byte_offset) & (mask << shift)) >> shift
}

/// Replaces the field `mask << shift` of the word at `byte_offset` with the
/// low bits of `value`. Bits of `value` outside `mask` are dropped.
#[inline(always)]
pub fn write_field(bytes: &mut [u8], byte_offset: usize, shift: u32, mask: Word, value: Word) {
    let mut word = load_word(bytes, byte_offset);
    word &= !(mask << shift);
    word |= (value & mask) << shift;
    store_word(bytes, byte_offset, word);
}

#[inline]
pub fn popcount(word: Word) -> u32 {
    word.count_ones()
}

pub fn popcount_words(words: &[Word]) -> usize {
    words.iter().map(|&w| popcount(w) as usize).sum()
}
