//! Raster-order iterators over points and cells.

use core::iter::FusedIterator;

use crate::{GridPoint, PackedGrid, PackedValue};

/// Iterator over every valid [`GridPoint`] in raster order.
#[derive(Clone, Debug)]
pub struct Points<const W: usize, const H: usize> {
    front: GridPoint<W, H>,
    back: GridPoint<W, H>,
}

impl<const W: usize, const H: usize> Points<W, H> {
    pub(crate) fn new() -> Self {
        let front = if W == 0 || H == 0 {
            GridPoint::END
        } else {
            GridPoint::ORIGIN
        };
        Self {
            front,
            back: GridPoint::END,
        }
    }
}

impl<const W: usize, const H: usize> Iterator for Points<W, H> {
    type Item = GridPoint<W, H>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let p = self.front;
        self.front.increment();
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.index() - self.front.index();
        (remaining, Some(remaining))
    }
}

impl<const W: usize, const H: usize> DoubleEndedIterator for Points<W, H> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.decrement();
        Some(self.back)
    }
}

impl<const W: usize, const H: usize> ExactSizeIterator for Points<W, H> {}

impl<const W: usize, const H: usize> FusedIterator for Points<W, H> {}

/// Iterator over `(point, value)` pairs of a [`PackedGrid`], in raster order.
pub struct Cells<'a, T, const W: usize, const H: usize, const BITS: usize> {
    grid: &'a PackedGrid<T, W, H, BITS>,
    points: Points<W, H>,
}

impl<'a, T, const W: usize, const H: usize, const BITS: usize> Cells<'a, T, W, H, BITS> {
    pub(crate) fn new(grid: &'a PackedGrid<T, W, H, BITS>) -> Self {
        Self {
            grid,
            points: Points::new(),
        }
    }
}

impl<'a, T: PackedValue, const W: usize, const H: usize, const BITS: usize> Iterator
    for Cells<'a, T, W, H, BITS>
{
    type Item = (GridPoint<W, H>, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.points.next().map(|p| (p, self.grid.get(p)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.points.size_hint()
    }
}

impl<'a, T: PackedValue, const W: usize, const H: usize, const BITS: usize> DoubleEndedIterator
    for Cells<'a, T, W, H, BITS>
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.points.next_back().map(|p| (p, self.grid.get(p)))
    }
}

impl<'a, T: PackedValue, const W: usize, const H: usize, const BITS: usize> ExactSizeIterator
    for Cells<'a, T, W, H, BITS>
{
}

impl<'a, T: PackedValue, const W: usize, const H: usize, const BITS: usize> IntoIterator
    for &'a PackedGrid<T, W, H, BITS>
{
    type Item = (GridPoint<W, H>, T);
    type IntoIter = Cells<'a, T, W, H, BITS>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "std"))]
    use alloc::vec::Vec;

    #[test]
    fn points_cover_grid_in_raster_order() {
        let points: Vec<_> = GridPoint::<3, 2>::all().collect();
        assert_eq!(points.len(), 6);
        assert_eq!(points[0], GridPoint::new(0, 0));
        assert_eq!(points[3], GridPoint::new(1, 0));
        assert_eq!(points[5], GridPoint::new(1, 2));
        assert!(points.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn points_from_both_ends() {
        let mut it = GridPoint::<2, 2>::all();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next_back(), Some(GridPoint::new(1, 1)));
        assert_eq!(it.next(), Some(GridPoint::new(0, 0)));
        assert_eq!(it.len(), 2);
        assert_eq!(it.next_back(), Some(GridPoint::new(1, 0)));
        assert_eq!(it.next(), Some(GridPoint::new(0, 1)));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn degenerate_grid_has_no_points() {
        assert_eq!(GridPoint::<0, 4>::all().count(), 0);
        assert_eq!(GridPoint::<4, 0>::all().count(), 0);
    }

    #[test]
    fn cells_yield_values() {
        let mut grid = PackedGrid::<u8, 3, 2, 4>::new();
        grid.set(GridPoint::new(1, 1), 9);
        let cells: Vec<_> = grid.iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[4], (GridPoint::new(1, 1), 9));
        assert_eq!(grid.iter().rev().nth(1), Some((GridPoint::new(1, 1), 9)));
        let sum: u32 = (&grid).into_iter().map(|(_, v)| v as u32).sum();
        assert_eq!(sum, 9);
    }
}
