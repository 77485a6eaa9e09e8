//! Board model: diagonal coordinates, piece directions, placement order.
//!
//! Purpose
//! - Map between signed diagonal coordinates and a dense 7×7 backing array.
//! - Hold the single mutable assignment state (`Board`) the search mutates
//!   in place.
//! - Fix the ring-by-ring order in which the search visits the 25 cells.
//!
//! Conventions
//! - Axes run diagonally relative to the physical board: +y is to the
//!   northeast of the center piece, +x to the southeast. A coordinate is on
//!   the board iff its city-block distance from the center is at most 3,
//!   which admits exactly 25 of the 49 grid slots.

mod geometry;
mod spiral;
mod types;

pub use geometry::{coord_of, is_on_board, slot_of, CELLS, GRID, RADIUS, SLOTS};
pub use spiral::SPIRAL;
pub use types::{Board, Dir};
