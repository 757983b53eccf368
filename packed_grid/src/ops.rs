//! Whole-buffer bitwise set algebra.
//!
//! OR, AND and XOR act on each bit independently, so they can run a word at
//! a time over the packed buffer without regard to cell boundaries. Slack
//! bits are zero on both sides and stay zero under all three.
//!
//! ```rust
//! use packed_grid::{GridPoint, PackedGrid};
//!
//! type Flags = PackedGrid<u8, 8, 8, 3>;
//!
//! let mut a = Flags::new();
//! let mut b = Flags::new();
//! let p = GridPoint::new(3, 5);
//! a.set(p, 0b001);
//! b.set(p, 0b100);
//!
//! assert_eq!((&a | &b).get(p), 0b101);
//! assert_eq!((&a & &b).get(p), 0b000);
//!
//! a ^= &b;
//! assert_eq!(a.get(p), 0b101);
//! ```

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};

use crate::bit_ops::Word;
use crate::{PackedGrid, PackedValue};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CombineOp {
    Or,
    And,
    Xor,
}

impl CombineOp {
    #[inline(always)]
    pub const fn apply(self, lhs: Word, rhs: Word) -> Word {
        match self {
            CombineOp::Or => lhs | rhs,
            CombineOp::And => lhs & rhs,
            CombineOp::Xor => lhs ^ rhs,
        }
    }
}

impl<T: PackedValue, const W: usize, const H: usize, const BITS: usize> PackedGrid<T, W, H, BITS> {
    /// Combines `other` into `self` word by word.
    ///
    /// Both grids share one type, so their shapes and widths always match.
    pub fn combine(&mut self, other: &Self, op: CombineOp) {
        for (lhs, &rhs) in self.words_mut().iter_mut().zip(other.words()) {
            *lhs = op.apply(*lhs, rhs);
        }
    }

    /// Value-returning form of [`combine`](Self::combine).
    pub fn combined(&self, other: &Self, op: CombineOp) -> Self {
        let mut out = self.clone();
        out.combine(other, op);
        out
    }
}

macro_rules! combine_operator {
    ($op:expr, $assign_trait:ident, $assign_fn:ident, $trait:ident, $fn:ident) => {
        impl<T: PackedValue, const W: usize, const H: usize, const BITS: usize>
            $assign_trait<&PackedGrid<T, W, H, BITS>> for PackedGrid<T, W, H, BITS>
        {
            #[inline]
            fn $assign_fn(&mut self, rhs: &PackedGrid<T, W, H, BITS>) {
                self.combine(rhs, $op);
            }
        }

        impl<T: PackedValue, const W: usize, const H: usize, const BITS: usize>
            $trait<&PackedGrid<T, W, H, BITS>> for PackedGrid<T, W, H, BITS>
        {
            type Output = PackedGrid<T, W, H, BITS>;

            #[inline]
            fn $fn(mut self, rhs: &PackedGrid<T, W, H, BITS>) -> Self::Output {
                self.combine(rhs, $op);
                self
            }
        }

        impl<T: PackedValue, const W: usize, const H: usize, const BITS: usize>
            $trait<&PackedGrid<T, W, H, BITS>> for &PackedGrid<T, W, H, BITS>
        {
            type Output = PackedGrid<T, W, H, BITS>;

            #[inline]
            fn $fn(self, rhs: &PackedGrid<T, W, H, BITS>) -> Self::Output {
                self.combined(rhs, $op)
            }
        }
    };
}

combine_operator!(CombineOp::Or, BitOrAssign, bitor_assign, BitOr, bitor);
combine_operator!(CombineOp::And, BitAndAssign, bitand_assign, BitAnd, bitand);
combine_operator!(CombineOp::Xor, BitXorAssign, bitxor_assign, BitXor, bitxor);
