//! Fixed placement order over the 25 on-board cells.

/// Cells in the order the search assigns them: the center first, then each
/// city-block ring outward. Visiting neighbors of already-placed cells early
/// keeps the legality pruning effective; beyond that the exact order does
/// not affect the final count.
pub const SPIRAL: [(i32, i32); super::CELLS] = [
    // ring 0
    (0, 0),
    // ring 1
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    // ring 2
    (1, -1),
    (2, 0),
    (1, 1),
    (0, 2),
    (-1, 1),
    (-2, 0),
    (-1, -1),
    (0, -2),
    // ring 3
    (1, -2),
    (2, -1),
    (3, 0),
    (2, 1),
    (1, 2),
    (0, 3),
    (-1, 2),
    (-2, 1),
    (-3, 0),
    (-2, -1),
    (-1, -2),
    (0, -3),
];
