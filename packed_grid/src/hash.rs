//! Structural hash of the packed buffer.
//!
//! The digest is the XOR of every buffer word: no seed, no mixing. It is
//! meant for bucketing equal grids, not for adversarial input.

use core::hash::{Hash, Hasher};

use crate::bit_ops::Word;
use crate::{PackedGrid, PackedValue};

/// XOR-folds `words` into one word.
#[inline]
pub fn fold_words(words: &[Word]) -> Word {
    words.iter().fold(0, |acc, &w| acc ^ w)
}

impl<T: PackedValue, const W: usize, const H: usize, const BITS: usize> PackedGrid<T, W, H, BITS> {
    pub fn fold_hash(&self) -> Word {
        fold_words(self.words())
    }
}

impl<T: PackedValue, const W: usize, const H: usize, const BITS: usize> Hash
    for PackedGrid<T, W, H, BITS>
{
    fn hash<S: Hasher>(&self, state: &mut S) {
        state.write_u64(self.fold_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridPoint;

    type Board = PackedGrid<i32, 19, 19, 21>;

    #[test]
    fn fold_of_words() {
        assert_eq!(fold_words(&[]), 0);
        assert_eq!(fold_words(&[0b1100, 0b1010]), 0b0110);
        assert_eq!(fold_words(&[Word::MAX, Word::MAX]), 0);
        let hash: Word = Board::new().fold_hash();
        assert_eq!(hash, 0);
    }

    #[test]
    fn equal_grids_hash_equal() {
        let mut a = Board::new();
        let mut b = Board::new();
        assert_eq!(a.fold_hash(), 0);
        a.set(GridPoint::new(4, 7), 300);
        b.set(GridPoint::new(4, 7), 300);
        assert_eq!(a.fold_hash(), b.fold_hash());
    }

    #[test]
    fn single_cell_change_moves_hash() {
        let mut board = Board::new();
        let mut last = board.fold_hash();
        for (i, p) in GridPoint::all().enumerate() {
            board.set(p, (i as i32 % 1023) + 1);
            let cur = board.fold_hash();
            assert_ne!(cur, last, "collision at {p}");
            last = cur;
        }
    }

    #[cfg(feature = "std")]
    #[test]
    fn usable_as_hash_set_key() {
        use std::collections::HashSet;

        let mut a = Board::new();
        a.set(GridPoint::new(1, 1), 5);
        let b = a.clone();
        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&Board::new()));
    }
}
