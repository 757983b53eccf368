//! # packed_grid
//!
//! A `no_std` compatible, fixed-shape 2D grid whose cells are bit-packed.
//!
//! Each of the `W * H` cells stores a small plain-old-data value in exactly
//! `BITS` bits, back to back in raster order. Cells are read and written
//! with one unaligned word access, and the whole grid doubles as a bitset
//! for population counts, OR/AND/XOR and hashing.
//!
//! ```rust
//! use packed_grid::{GridPoint, PackedGrid};
//!
//! // A 19x19 board of ints, 21 bits per cell
//! let mut board = PackedGrid::<i32, 19, 19, 21>::new();
//! board.set(GridPoint::new(0, 0), 157);
//!
//! assert_eq!(board.get(GridPoint::new(0, 0)), 157);
//! assert_eq!(board.count(), 157u32.count_ones() as usize);
//!
//! board.clear();
//! assert_eq!(board.count(), 0);
//! ```
//!
//! ## Memory Savings Example
//!
//! ```rust
//! use packed_grid::PackedGrid;
//!
//! // [[i32; 19]; 19]: 361 cells x 4 bytes = 1444 bytes
//! let dense = [[0i32; 19]; 19];
//!
//! // 361 cells x 11 bits = 3971 bits -> 64 words incl. slack = 512 bytes
//! let packed = PackedGrid::<i32, 19, 19, 11>::new();
//!
//! assert_eq!(core::mem::size_of_val(&dense), 1444);
//! assert_eq!(packed.raw().len(), 512);
//! ```
//!
//! Shapes and widths are checked when the grid type is instantiated; a
//! 9-bit cell for a `u8`, say, does not compile with [`PackedGrid::new`]
//! and is reported as a [`GridError`] by [`PackedGrid::try_new`].

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub use error::GridError;

pub mod bit_ops;
pub use bit_ops::Word;

pub mod layout;

mod value;
pub use value::PackedValue;

pub mod point;
pub use point::GridPoint;

pub mod grid;
pub use grid::PackedGrid;

pub mod iter;
pub use iter::{Cells, Points};

pub mod ops;
pub use ops::CombineOp;

pub mod hash;
