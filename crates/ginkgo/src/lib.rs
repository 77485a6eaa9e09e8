//! Exhaustive enumeration of complete Ginkgo puzzle boards.
//!
//! The puzzle places 25 directional pieces on a diagonal board; a layout is
//! valid when every cell is covered, no two neighboring pieces overlap, and
//! no four pieces lock each other in a rotational loop. This crate provides
//! the board model, the per-placement legality oracle, and the backtracking
//! enumerator over the full configuration space.
//!
//! The hot path is pure and allocation-free; the only observable outputs are
//! the final count and an optional progress callback, so embedding hosts
//! need no configuration beyond choosing a [`legality::Policy`].

pub mod board;
pub mod legality;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::board::{coord_of, is_on_board, slot_of, Board, Dir, CELLS, SPIRAL};
    pub use crate::legality::{placement_legal, Policy};
    pub use crate::search::{
        count_boards, count_boards_with_progress, count_prefix, count_prefix_with_progress,
        SearchCfg,
    };
}
