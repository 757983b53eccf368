//! Grid coordinates with raster-order stepping.

use core::fmt;

use crate::iter::Points;

/// A `(row, col)` position in a `W`-wide, `H`-tall grid.
///
/// Valid points satisfy `row < H` and `col < W`. Stepping past the last cell
/// with [`increment`](Self::increment) lands on [`END`](Self::END), the
/// one-past-the-end sentinel `(H, 0)`.
///
/// The derived ordering compares `row` first, which is raster order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPoint<const W: usize, const H: usize> {
    pub row: usize,
    pub col: usize,
}

impl<const W: usize, const H: usize> GridPoint<W, H> {
    pub const ORIGIN: Self = Self::new(0, 0);
    pub const END: Self = Self::new(H, 0);

    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Point at raster position `index` (`row * W + col`).
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self::new(index / W, index % W)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.row * W + self.col
    }

    /// Every valid point, in raster order.
    pub fn all() -> Points<W, H> {
        Points::new()
    }

    /// Advances to the next point in raster order.
    #[inline]
    pub fn increment(&mut self) -> &mut Self {
        self.col += 1;
        if self.col == W {
            self.col = 0;
            self.row += 1;
        }
        self
    }

    /// Steps back to the previous point in raster order.
    #[inline]
    pub fn decrement(&mut self) -> &mut Self {
        if self.col == 0 {
            self.col = W - 1;
            self.row = self.row.wrapping_sub(1);
        } else {
            self.col -= 1;
        }
        self
    }

    // Single-axis steps. No wraparound: stepping off an edge leaves an
    // out-of-range point and keeping it in range is the caller's job.

    #[inline]
    pub fn up(&mut self) {
        self.row = self.row.wrapping_sub(1);
    }

    #[inline]
    pub fn down(&mut self) {
        self.row = self.row.wrapping_add(1);
    }

    #[inline]
    pub fn left(&mut self) {
        self.col = self.col.wrapping_sub(1);
    }

    #[inline]
    pub fn right(&mut self) {
        self.col = self.col.wrapping_add(1);
    }

    #[inline]
    pub const fn is_top(self) -> bool {
        self.row == 0
    }

    #[inline]
    pub const fn is_bottom(self) -> bool {
        self.row == H - 1
    }

    #[inline]
    pub const fn is_left(self) -> bool {
        self.col == 0
    }

    #[inline]
    pub const fn is_right(self) -> bool {
        self.col == W - 1
    }

    #[inline]
    pub const fn is_end(self) -> bool {
        self.row == H && self.col == 0
    }

    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.row < H && self.col < W
    }
}

impl<const W: usize, const H: usize> fmt::Display for GridPoint<W, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type P = GridPoint<3, 2>;

    #[test]
    fn increment_wraps_rows() {
        let mut p = P::new(0, 2);
        p.increment();
        assert_eq!(p, P::new(1, 0));
        p.increment().increment().increment();
        assert!(p.is_end());
        assert_eq!(p, P::END);
    }

    #[test]
    fn decrement_is_inverse() {
        let mut p = P::END;
        p.decrement();
        assert_eq!(p, P::new(1, 2));
        p.decrement().decrement().decrement();
        assert_eq!(p, P::new(0, 2));
        p.increment();
        assert_eq!(p, P::new(1, 0));
    }

    #[test]
    fn edge_predicates() {
        let p = P::new(0, 0);
        assert!(p.is_top() && p.is_left());
        assert!(!p.is_bottom() && !p.is_right());

        let q = P::new(1, 2);
        assert!(q.is_bottom() && q.is_right());
        assert!(!q.is_top() && !q.is_left());
    }

    #[test]
    fn directional_steps() {
        let mut p = P::new(1, 1);
        p.up();
        assert_eq!(p, P::new(0, 1));
        p.right();
        assert_eq!(p, P::new(0, 2));
        p.down();
        p.left();
        assert_eq!(p, P::new(1, 1));
    }

    #[test]
    fn stepping_off_an_edge_leaves_bounds() {
        let mut p = P::ORIGIN;
        p.up();
        assert!(!p.in_bounds());
        let mut q = P::new(1, 2);
        q.right();
        assert!(!q.in_bounds());
    }

    #[test]
    fn index_roundtrip() {
        for i in 0..6 {
            assert_eq!(P::from_index(i).index(), i);
        }
        assert_eq!(P::END.index(), 6);
        assert_eq!(P::from_index(4), P::new(1, 1));
    }

    #[test]
    fn ordering_is_raster_order() {
        assert!(P::new(0, 2) < P::new(1, 0));
        assert!(P::new(1, 0) < P::new(1, 1));
        assert!(P::new(1, 2) < P::END);
    }

    #[cfg(feature = "std")]
    #[test]
    fn display() {
        assert_eq!(P::new(1, 2).to_string(), "(1, 2)");
    }
}
