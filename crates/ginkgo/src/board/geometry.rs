//! Coordinate predicates and the coordinate ↔ slot bijection.

/// City-block radius of the board around the center cell.
pub const RADIUS: i32 = 3;
/// Side length of the square grid bounding the board.
pub const GRID: i32 = 2 * RADIUS + 1;
/// Slots in the backing array (the full bounding grid).
pub const SLOTS: usize = (GRID * GRID) as usize;
/// On-board cells: coordinates with `|x| + |y| <= RADIUS`.
pub const CELLS: usize = 25;

/// True iff `(x, y)` is an on-board cell.
///
/// Innermost check of the search; kept as the plain absolute-value sum,
/// which optimizes to branch-free arithmetic. Alternative sign-branching
/// formulations are compared in `benches/search_bench.rs`.
#[inline]
pub fn is_on_board(x: i32, y: i32) -> bool {
    x.abs() + y.abs() <= RADIUS
}

/// Slot in the 7×7 backing array holding the direction at `(x, y)`.
///
/// Bijective over the bounding grid; off-board grid coordinates map to
/// valid slots that stay permanently empty. Callers must keep `x` and `y`
/// within `[-RADIUS, RADIUS]`.
#[inline]
pub fn slot_of(x: i32, y: i32) -> usize {
    ((x + RADIUS) * GRID + (y + RADIUS)) as usize
}

/// Inverse of [`slot_of`].
#[inline]
pub fn coord_of(slot: usize) -> (i32, i32) {
    let s = slot as i32;
    (s / GRID - RADIUS, s % GRID - RADIUS)
}
