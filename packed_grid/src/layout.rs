//! Buffer sizing and layout validation.

use crate::GridError;
use crate::bit_ops::{WORD_BITS, WORD_BYTES};

/// Widest field a cell may use. One byte of the word is reserved so that a
/// field starting anywhere inside a byte still fits a single word load.
pub const MAX_BITS: usize = WORD_BITS - 8;

/// Validates a grid of `width` x `height` cells, `bits` bits each, storing
/// an object of `object_bytes` bytes.
pub const fn check_layout(
    width: usize,
    height: usize,
    bits: usize,
    object_bytes: usize,
) -> Result<(), GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::EmptyGrid);
    }
    if bits == 0 {
        return Err(GridError::ZeroBitWidth);
    }
    if bits > MAX_BITS {
        return Err(GridError::BitWidthTooLarge {
            bits,
            max: MAX_BITS,
        });
    }
    if object_bytes > WORD_BYTES {
        return Err(GridError::ObjectTooWide { object_bytes });
    }
    if bits > object_bytes * 8 {
        return Err(GridError::ObjectTooNarrow {
            bits,
            object_bits: object_bytes * 8,
        });
    }
    Ok(())
}

/// Words needed for `bits_all` packed bits, plus one slack word so that the
/// word load of the last field never runs past the allocation.
#[inline]
pub const fn buffer_words(bits_all: usize) -> usize {
    bits_all.div_ceil(WORD_BITS) + 1
}

/// True when no bit at or beyond `bits_all` is set in `bytes`.
pub fn slack_is_clear(bytes: &[u8], bits_all: usize) -> bool {
    let first = bits_all / 8;
    let partial = bits_all % 8;
    let tail = match bytes.get(first..) {
        Some(tail) => tail,
        None => return true,
    };
    let (head, rest) = match tail.split_first() {
        Some(split) => split,
        None => return true,
    };
    let head_clear = if partial == 0 {
        *head == 0
    } else {
        *head >> partial == 0
    };
    head_clear && rest.iter().all(|&b| b == 0)
}
