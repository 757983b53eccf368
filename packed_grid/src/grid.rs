//! Fixed-shape bit-packed grid.
//!
//! # Examples
//!
//! ```rust
//! use packed_grid::{GridPoint, PackedGrid};
//!
//! // 19x19 board, 21 bits per cell
//! let mut board = PackedGrid::<i32, 19, 19, 21>::new();
//! board.set(GridPoint::new(2, 3), 17);
//! board.set(GridPoint::new(2, 4), 1022);
//!
//! assert_eq!(board.get(GridPoint::new(2, 3)), 17);
//! assert_eq!(board.get(GridPoint::new(2, 4)), 1022);
//! assert_eq!(board.get(GridPoint::new(7, 5)), 0);
//! ```
//!
//! ## Persistence
//!
//! ```rust
//! use packed_grid::{GridPoint, PackedGrid};
//!
//! type Board = PackedGrid<u16, 9, 9, 10>;
//!
//! let mut board = Board::new();
//! board.set(GridPoint::new(4, 4), 512);
//!
//! // Save the raw bit layout
//! let bytes = board.raw().to_vec();
//!
//! // Restore later
//! let restored = Board::from_raw(&bytes).unwrap();
//! assert_eq!(restored.get(GridPoint::new(4, 4)), 512);
//! assert_eq!(restored, board);
//! ```

use core::fmt;
use core::marker::PhantomData;

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::bit_ops::{self, WORD_BYTES, Word};
use crate::iter::{Cells, Points};
use crate::layout;
use crate::{GridError, GridPoint, PackedValue};

type Result<T> = core::result::Result<T, GridError>;

/// A `W` x `H` grid of `T` values, each stored in exactly `BITS` bits.
///
/// Cells are laid out back to back in raster order with no padding. The
/// buffer is a whole number of words and always ends with one slack word,
/// so every cell can be read and written with a single unaligned word
/// access.
///
/// Values wider than `BITS` are truncated to their low `BITS` bits on
/// [`set`](Self::set). Negative signed values come back as their truncated
/// bit pattern; nothing is sign-extended.
#[derive(Clone)]
pub struct PackedGrid<T, const W: usize, const H: usize, const BITS: usize> {
    words: Vec<Word>,
    _marker: PhantomData<T>,
}

impl<T: PackedValue, const W: usize, const H: usize, const BITS: usize> PackedGrid<T, W, H, BITS> {
    pub const WIDTH: usize = W;
    pub const HEIGHT: usize = H;
    pub const CELLS: usize = W * H;
    /// Bits occupied by cell data.
    pub const BITS_ALL: usize = W * H * BITS;
    /// Buffer length in words, slack word included.
    pub const WORDS: usize = layout::buffer_words(Self::BITS_ALL);
    pub const BYTES: usize = Self::WORDS * WORD_BYTES;
    pub const MASK: Word = bit_ops::low_mask(BITS);

    const VALID_LAYOUT: () = match layout::check_layout(W, H, BITS, core::mem::size_of::<T>()) {
        Ok(()) => (),
        Err(err) => panic!("{}", err.describe()),
    };

    /// Creates a zeroed grid.
    ///
    /// An invalid shape, bit width or stored type fails to compile.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_grid::{GridPoint, PackedGrid};
    ///
    /// let grid = PackedGrid::<u8, 4, 4, 3>::new();
    /// assert_eq!(grid.count(), 0);
    /// assert_eq!(grid.get(GridPoint::new(3, 3)), 0);
    /// ```
    pub fn new() -> Self {
        let () = Self::VALID_LAYOUT;
        Self::zeroed()
    }

    /// Creates a grid with every cell set to `init`.
    pub fn with_value(init: T) -> Self {
        let mut grid = Self::new();
        grid.fill(init);
        grid
    }

    /// Checked constructor: reports an invalid layout at runtime instead of
    /// failing the build.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_grid::{GridError, PackedGrid};
    ///
    /// // 9 bits cannot be stored losslessly in a u8
    /// let result = PackedGrid::<u8, 4, 4, 9>::try_new();
    /// assert!(matches!(result, Err(GridError::ObjectTooNarrow { .. })));
    /// ```
    pub fn try_new() -> Result<Self> {
        if let Err(err) = layout::check_layout(W, H, BITS, core::mem::size_of::<T>()) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                width = W,
                height = H,
                bits = BITS,
                object_bytes = core::mem::size_of::<T>(),
                %err,
                "rejected packed grid layout"
            );
            return Err(err);
        }
        Ok(Self::zeroed())
    }

    /// Rebuilds a grid from bytes previously taken from [`raw`](Self::raw).
    ///
    /// The slice must be exactly [`BYTES`](Self::BYTES) long and carry no
    /// set bits past the packed region.
    pub fn from_raw(bytes: &[u8]) -> Result<Self> {
        let mut grid = Self::try_new()?;
        if bytes.len() != Self::BYTES {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                expected = Self::BYTES,
                found = bytes.len(),
                "rejected raw grid buffer"
            );
            return Err(GridError::BufferLength {
                expected: Self::BYTES,
                found: bytes.len(),
            });
        }
        if !layout::slack_is_clear(bytes, Self::BITS_ALL) {
            #[cfg(feature = "tracing")]
            tracing::debug!(bits_all = Self::BITS_ALL, "raw grid buffer has dirty slack");
            return Err(GridError::DirtySlack);
        }
        grid.raw_mut().copy_from_slice(bytes);
        Ok(grid)
    }

    fn zeroed() -> Self {
        Self {
            words: vec![0; Self::WORDS],
            _marker: PhantomData,
        }
    }

    /// First bit of the cell at `p`.
    #[inline]
    pub const fn bit_index(p: GridPoint<W, H>) -> usize {
        BITS * p.index()
    }

    /// Splits a bit index into `(byte offset, bit shift within that byte)`.
    #[inline]
    pub const fn byte_bit_offset(bit_index: usize) -> (usize, u32) {
        (bit_index / 8, (bit_index % 8) as u32)
    }

    /// Reads the `BITS`-wide field starting at `bit_index`.
    #[inline]
    pub fn get_raw_bits(&self, bit_index: usize) -> Word {
        let (byte, shift) = Self::byte_bit_offset(bit_index);
        bit_ops::read_field(self.raw(), byte, shift, Self::MASK)
    }

    /// Writes the low `BITS` bits of `bits` to the field at `bit_index`.
    #[inline]
    pub fn set_raw_bits(&mut self, bit_index: usize, bits: Word) {
        let (byte, shift) = Self::byte_bit_offset(bit_index);
        bit_ops::write_field(self.raw_mut(), byte, shift, Self::MASK, bits);
    }

    /// Returns the value stored at `p`.
    ///
    /// `p` must be in bounds; this is only checked in debug builds. Use
    /// [`try_get`](Self::try_get) for a checked read.
    #[inline]
    pub fn get(&self, p: GridPoint<W, H>) -> T {
        debug_assert!(p.in_bounds(), "point {} out of bounds for {}x{} grid", p, W, H);
        T::from_bits(self.get_raw_bits(Self::bit_index(p)))
    }

    /// Stores `value` at `p`, keeping only its low `BITS` bits.
    ///
    /// `p` must be in bounds; this is only checked in debug builds.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_grid::{GridPoint, PackedGrid};
    ///
    /// let mut grid = PackedGrid::<u16, 2, 2, 4>::new();
    /// grid.set(GridPoint::new(1, 0), 0x1F); // does not fit in 4 bits
    /// assert_eq!(grid.get(GridPoint::new(1, 0)), 0xF);
    /// ```
    #[inline]
    pub fn set(&mut self, p: GridPoint<W, H>, value: T) {
        debug_assert!(p.in_bounds(), "point {} out of bounds for {}x{} grid", p, W, H);
        self.set_raw_bits(Self::bit_index(p), value.to_bits());
    }

    pub fn try_get(&self, p: GridPoint<W, H>) -> Result<T> {
        Self::check_point(p)?;
        Ok(self.get(p))
    }

    pub fn try_set(&mut self, p: GridPoint<W, H>, value: T) -> Result<()> {
        Self::check_point(p)?;
        self.set(p, value);
        Ok(())
    }

    fn check_point(p: GridPoint<W, H>) -> Result<()> {
        if p.in_bounds() {
            Ok(())
        } else {
            Err(GridError::PointOutOfBounds {
                row: p.row,
                col: p.col,
                width: W,
                height: H,
            })
        }
    }

    /// Zeroes every bit of the buffer.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Sets every cell to `value`, walking the grid in raster order.
    pub fn fill(&mut self, value: T) {
        let mut p = GridPoint::ORIGIN;
        while p.row < H {
            self.set(p, value);
            p.increment();
        }
    }

    /// Total number of set bits across all cells.
    ///
    /// This counts bits, not cells: a cell holding `0b101` contributes 2.
    pub fn count(&self) -> usize {
        bit_ops::popcount_words(&self.words)
    }

    /// Number of cells whose stored bits are not all zero.
    pub fn count_nonzero(&self) -> usize {
        self.points()
            .filter(|&p| self.get_raw_bits(Self::bit_index(p)) != 0)
            .count()
    }

    pub fn points(&self) -> Points<W, H> {
        GridPoint::all()
    }

    /// `(point, value)` pairs in raster order.
    pub fn iter(&self) -> Cells<'_, T, W, H, BITS> {
        Cells::new(self)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// The packed buffer as bytes, slack word included.
    ///
    /// Cells are laid out LSB-first on every host: bit `k` of the packed
    /// region is bit `k % 8` of byte `k / 8`, so the bytes can be persisted
    /// and reloaded across endianness.
    pub fn raw(&self) -> &[u8] {
        bytemuck::cast_slice(&self.words)
    }

    /// Mutable byte view of the packed buffer.
    ///
    /// Bits past [`BITS_ALL`](Self::BITS_ALL) must be left zero, otherwise
    /// [`count`](Self::count) and the hash include them.
    pub fn raw_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.words)
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Mutable word view; the same slack rule as [`raw_mut`](Self::raw_mut)
    /// applies.
    pub fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }
}

impl<T: PackedValue, const W: usize, const H: usize, const BITS: usize> Default
    for PackedGrid<T, W, H, BITS>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const W: usize, const H: usize, const BITS: usize> PartialEq for PackedGrid<T, W, H, BITS> {
    fn eq(&self, other: &Self) -> bool {
        self.words == other.words
    }
}

impl<T, const W: usize, const H: usize, const BITS: usize> Eq for PackedGrid<T, W, H, BITS> {}

impl<T: PackedValue + fmt::Debug, const W: usize, const H: usize, const BITS: usize> fmt::Debug
    for PackedGrid<T, W, H, BITS>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<Vec<T>> = (0..H)
            .map(|row| (0..W).map(|col| self.get(GridPoint::new(row, col))).collect())
            .collect();
        f.debug_struct("PackedGrid")
            .field("width", &W)
            .field("height", &H)
            .field("bits", &BITS)
            .field("rows", &rows)
            .finish()
    }
}
