//! Piece directions and the mutable assignment state.

use std::fmt;

use super::geometry::{is_on_board, slot_of, RADIUS, SLOTS};

/// Direction a piece's protruding edge (its "outie") points.
///
/// `Empty` is the sentinel for "no piece here": a cell not yet reached by
/// the search, a cell undone by backtracking, or a coordinate outside the
/// board. It never matches any required direction in the legality tables.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    North = 0,
    East = 1,
    West = 2,
    South = 3,
    Empty = 4,
}

impl Dir {
    /// Fixed order in which the search tries directions at each cell.
    pub const TRIALS: [Dir; 4] = [Dir::North, Dir::East, Dir::West, Dir::South];
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Dir::North => "N",
            Dir::East => "E",
            Dir::West => "W",
            Dir::South => "S",
            Dir::Empty => ".",
        };
        f.write_str(s)
    }
}

/// Current direction assignment for every grid slot.
///
/// Exactly one instance lives inside the search context; the engine mutates
/// it in place with a strict assign-before-recurse, clear-after-recurse
/// discipline, so no copies are ever taken. Off-board slots stay `Empty`
/// for the lifetime of the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Dir; SLOTS],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [Dir::Empty; SLOTS],
        }
    }
}

impl Board {
    /// Direction at `(x, y)`; `Empty` for any off-board coordinate.
    ///
    /// The on-board test doubles as the bounds guard: neighbor offsets may
    /// leave the bounding grid entirely, but never while on the board.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Dir {
        if is_on_board(x, y) {
            self.cells[slot_of(x, y)]
        } else {
            Dir::Empty
        }
    }

    /// Assign `dir` at the on-board coordinate `(x, y)`.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, dir: Dir) {
        debug_assert!(is_on_board(x, y), "set() off board at ({x}, {y})");
        self.cells[slot_of(x, y)] = dir;
    }

    /// True iff every on-board cell is `Empty`.
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(|&d| d == Dir::Empty)
    }
}

impl fmt::Display for Board {
    /// One line per on-board cell, in raster order. Debug/diagnostic aid.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in -RADIUS..=RADIUS {
            for y in -RADIUS..=RADIUS {
                if is_on_board(x, y) {
                    writeln!(f, "[{x:2}, {y:2}] = {}", self.get(x, y))?;
                }
            }
        }
        Ok(())
    }
}
