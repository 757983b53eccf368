use bytemuck_derive::{Pod, Zeroable};
use packed_grid::{GridError, GridPoint, PackedGrid};

fn main() {
    println!("=== Packed Grid Examples ===\n");

    // Example 1: Counters on a Go-sized board
    example_counters();

    // Example 2: Board-game stones as a custom cell type
    example_stones();

    // Example 3: Set algebra over whole boards
    example_set_algebra();

    // Example 4: Memory comparison
    example_memory_savings();

    // Example 5: Checked construction
    if let Err(err) = example_checked() {
        println!("  rejected: {err}");
    }
}

fn example_counters() {
    println!("Example 1: 21-bit counters on a 19x19 board");

    let mut board = PackedGrid::<i32, 19, 19, 21>::new();
    board.set(GridPoint::new(2, 3), 17);
    board.set(GridPoint::new(2, 4), 1022);

    println!("  (2, 3) = {}", board.get(GridPoint::new(2, 3)));
    println!("  (2, 4) = {}", board.get(GridPoint::new(2, 4)));
    println!("  (7, 5) = {}", board.get(GridPoint::new(7, 5)));
    println!("  set bits: {}", board.count());
    println!();
}

#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
struct Stone(u8);

impl Stone {
    const EMPTY: Stone = Stone(0);
    const BLACK: Stone = Stone(1);
    const WHITE: Stone = Stone(2);
}

fn example_stones() {
    println!("Example 2: Stones, 2 bits each");

    let mut board = PackedGrid::<Stone, 9, 9, 2>::with_value(Stone::EMPTY);
    board.set(GridPoint::new(4, 4), Stone::BLACK);
    board.set(GridPoint::new(4, 5), Stone::WHITE);

    // walk the neighbours of the centre stone
    let mut p = GridPoint::<9, 9>::new(4, 4);
    p.right();
    println!("  right of centre: {:?}", board.get(p));
    p.left();
    p.up();
    println!("  above centre:    {:?}", board.get(p));

    let stones = board.values().filter(|&s| s != Stone::EMPTY).count();
    println!("  stones on board: {}", stones);
    println!();
}

fn example_set_algebra() {
    println!("Example 3: OR / AND / XOR");

    type Marks = PackedGrid<u8, 8, 8, 3>;
    let mut seen = Marks::new();
    let mut hit = Marks::new();
    for i in 0..8 {
        seen.set(GridPoint::new(i, i), 0b011);
        hit.set(GridPoint::new(i, 7 - i), 0b110);
    }

    let union = &seen | &hit;
    let both = &seen & &hit;
    let diff = &seen ^ &hit;
    println!("  union bits:        {}", union.count());
    println!("  intersection bits: {}", both.count());
    println!("  difference bits:   {}", diff.count());
    println!("  union hash:        {:#018x}", union.fold_hash());
    println!();
}

fn example_memory_savings() {
    println!("Example 4: Memory savings comparison");

    let dense_bytes = core::mem::size_of::<[[i32; 19]; 19]>();
    let packed = PackedGrid::<i32, 19, 19, 11>::new();
    let packed_bytes = packed.raw().len();

    let savings = 100.0 * (1.0 - (packed_bytes as f64 / dense_bytes as f64));

    println!("  Storing 361 11-bit values:");
    println!("  [[i32; 19]; 19]: {} bytes", dense_bytes);
    println!("  Packed:          {} bytes", packed_bytes);
    println!("  Savings:         {:.1}%", savings);
    println!();
}

fn example_checked() -> Result<(), GridError> {
    println!("Example 5: Checked construction");

    let grid = PackedGrid::<u16, 4, 4, 12>::try_new()?;
    println!("  4x4 of 12-bit u16 uses {} bytes", grid.raw().len());

    // a u8 cannot hold 9 bits
    let _ = PackedGrid::<u8, 4, 4, 9>::try_new()?;
    Ok(())
}
