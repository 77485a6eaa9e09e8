//! Backtracking enumeration of complete boards.
//!
//! Purpose
//! - Walk the placement order depth-first, trying all four directions at
//!   each cell, pruning with the legality oracle, and counting every full
//!   legal assignment.
//! - Exploit the board's 4-fold rotational symmetry: fixing the center
//!   piece's direction searches exactly a quarter of the space, and the
//!   final count is scaled by 4. Running unseeded instead must produce the
//!   identical total, which the tests use as a cross-check.
//!
//! Notes
//! - Recursion depth is bounded by the 25-cell spiral, so a plain recursive
//!   engine is appropriate; the board is mutated in place and restored on
//!   unwind, never copied.

mod engine;

pub use engine::{
    count_boards, count_boards_with_progress, count_prefix, count_prefix_with_progress, SearchCfg,
};
