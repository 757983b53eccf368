//! Seeded randomized scenarios on a 19x19 board of 21-bit ints.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use packed_grid::{GridPoint, PackedGrid};

type Board = PackedGrid<i32, 19, 19, 21>;
type Point = GridPoint<19, 19>;

fn random_point(rng: &mut StdRng) -> Point {
    Point::new(rng.random_range(0..19), rng.random_range(0..19))
}

fn dense_popcount(dense: &[[i32; 19]; 19]) -> usize {
    dense
        .iter()
        .flatten()
        .map(|v| v.count_ones() as usize)
        .sum()
}

#[test]
fn single_cell_scenario() {
    let mut board = Board::new();
    board.set(Point::new(0, 0), 157);
    assert_eq!(board.get(Point::new(0, 0)), 157);
    assert_eq!(board.count(), 157u32.count_ones() as usize);
    board.clear();
    assert_eq!(board.count(), 0);
}

#[test]
fn or_assign_after_random_assignments() {
    let mut rng = StdRng::seed_from_u64(0x0019_0019);
    let mut a = Board::new();
    let mut b = Board::new();
    for _ in 0..360 {
        a.set(random_point(&mut rng), rng.random_range(0..1024));
        b.set(random_point(&mut rng), rng.random_range(0..1024));
    }

    let original = a.clone();
    a |= &b;

    for p in Point::all() {
        assert_eq!(a.get(p), original.get(p) | b.get(p), "mismatch at {p}");
    }
}

#[test]
fn random_reads_and_writes_match_dense_array() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut board = Board::new();
    let mut dense = [[0i32; 19]; 19];

    for _ in 0..200_000 {
        let p = random_point(&mut rng);
        if rng.random_bool(0.5) {
            let value = rng.random_range(0..1024);
            board.set(p, value);
            dense[p.row][p.col] = value;
        } else {
            assert_eq!(board.get(p), dense[p.row][p.col], "mismatch at {p}");
        }
    }
    assert_eq!(board.count(), dense_popcount(&dense));
}

#[test]
fn count_tracks_every_write() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut board = Board::new();
    let mut dense = [[0i32; 19]; 19];

    for _ in 0..5_000 {
        let p = random_point(&mut rng);
        let value = rng.random_range(0..1024);
        board.set(p, value);
        dense[p.row][p.col] = value;
        assert_eq!(board.count(), dense_popcount(&dense));
    }
}

// Each write changes a cell to a different value; the XOR fold of the
// buffer should move on nearly every one of them.
#[test]
fn hash_collision_rate_is_low() {
    const MUTATIONS: usize = 100_000;
    const MAX_COLLISION_RATE: f64 = 0.001;

    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut board = Board::new();
    let mut dense = [[0i32; 19]; 19];
    let mut last = board.fold_hash();
    let mut collisions = 0usize;

    for _ in 0..MUTATIONS {
        let p = random_point(&mut rng);
        let value = loop {
            let v = rng.random_range(0..1024);
            if v != dense[p.row][p.col] {
                break v;
            }
        };
        dense[p.row][p.col] = value;
        board.set(p, value);

        let cur = board.fold_hash();
        if cur == last {
            collisions += 1;
        }
        last = cur;
    }

    let rate = collisions as f64 / MUTATIONS as f64;
    assert!(rate <= MAX_COLLISION_RATE, "collision rate {rate}");
}

#[test]
fn distinct_boards_rarely_share_a_hash() {
    use std::collections::HashSet;

    let mut rng = StdRng::seed_from_u64(1);
    let mut boards = HashSet::new();
    let mut hashes = HashSet::new();

    for _ in 0..2_000 {
        let mut board = Board::new();
        for _ in 0..360 {
            board.set(random_point(&mut rng), rng.random_range(0..1024));
        }
        hashes.insert(board.fold_hash());
        boards.insert(board);
    }

    let distinct = boards.len();
    assert!(hashes.len() * 100 >= distinct * 99, "{} hashes for {distinct} boards", hashes.len());
}
