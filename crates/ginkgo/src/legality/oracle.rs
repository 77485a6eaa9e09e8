//! The legality decision itself.

use crate::board::{Board, Dir};

use super::tables::{LOOP_RULES, OVERLAP_RULES};

/// Which rules define a legal placement.
///
/// `Full` is the authoritative definition for the physical puzzle; it
/// rejects both overlaps and locked 4-piece loops. `OverlapOnly` admits
/// loops and therefore counts strictly more boards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Policy {
    #[default]
    Full,
    OverlapOnly,
}

/// True iff the piece just placed at `(x, y)` is consistent with its
/// already-placed neighbors under `policy`.
///
/// The coordinate must hold a concrete direction; probing an empty cell is
/// a broken engine invariant, not an input error. Neighbors that are off
/// the board or not yet placed read as `Empty`, which matches no rule, so
/// a loop can only be detected once all four of its cells are placed.
#[inline]
pub fn placement_legal(board: &Board, x: i32, y: i32, policy: Policy) -> bool {
    let me = board.get(x, y);
    debug_assert!(me != Dir::Empty, "legality probe on empty cell ({x}, {y})");

    for rule in &OVERLAP_RULES {
        let other = board.get(x + rule.dx, y + rule.dy);
        if other == Dir::Empty {
            continue;
        }
        if (me == rule.mine[0] || me == rule.mine[1])
            && (other == rule.theirs[0] || other == rule.theirs[1])
        {
            return false;
        }
    }

    if policy == Policy::OverlapOnly {
        return true;
    }

    for rule in &LOOP_RULES[me as usize] {
        if board.get(x + rule.a.dx, y + rule.a.dy) == rule.a.dir
            && board.get(x + rule.far.dx, y + rule.far.dy) == rule.far.dir
            && board.get(x + rule.b.dx, y + rule.b.dy) == rule.b.dir
        {
            return false;
        }
    }

    true
}
