//! The recursive placement engine and its entry points.

use crate::board::{Board, Dir, SPIRAL};
use crate::legality::{placement_legal, Policy};

/// Search configuration.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    /// Legality definition in force; `Policy::Full` matches the physical
    /// puzzle.
    pub policy: Policy,
    /// Fix the center piece to North and scale the result by 4 instead of
    /// enumerating all four rotationally equivalent quadrants. Affects
    /// running time only, never the total.
    pub seed_symmetry: bool,
    /// Invoke the progress callback every this many completed boards;
    /// 0 disables progress reporting.
    pub progress_every: u64,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            policy: Policy::Full,
            seed_symmetry: true,
            progress_every: 100_000,
        }
    }
}

/// Count all legal complete boards.
pub fn count_boards(cfg: SearchCfg) -> u64 {
    count_boards_with_progress(cfg, |_| {})
}

/// Count all legal complete boards, reporting the running completion count
/// through `on_progress` at the cadence `cfg.progress_every`.
pub fn count_boards_with_progress<F: FnMut(u64)>(cfg: SearchCfg, on_progress: F) -> u64 {
    Enumerator::new(cfg, SPIRAL.len(), on_progress).run()
}

/// Count legal assignments of the first `depth` spiral cells only.
///
/// Truncated runs finish quickly and back regression tests, benches, and
/// timing estimates; `depth` is clamped to the spiral length. With
/// `seed_symmetry` the ×4 relation only holds when the prefix is itself
/// rotationally symmetric (a whole number of rings).
pub fn count_prefix(cfg: SearchCfg, depth: usize) -> u64 {
    count_prefix_with_progress(cfg, depth, on_progress_noop)
}

/// Truncated variant of [`count_boards_with_progress`].
pub fn count_prefix_with_progress<F: FnMut(u64)>(
    cfg: SearchCfg,
    depth: usize,
    on_progress: F,
) -> u64 {
    Enumerator::new(cfg, depth.min(SPIRAL.len()), on_progress).run()
}

fn on_progress_noop(_: u64) {}

/// Search context: the sole owner and writer of the board, plus the
/// accumulators threaded through the recursion.
pub(super) struct Enumerator<F: FnMut(u64)> {
    pub(super) board: Board,
    cfg: SearchCfg,
    /// Spiral prefix length to fill; `SPIRAL.len()` for full runs.
    limit: usize,
    found: u64,
    on_progress: F,
}

impl<F: FnMut(u64)> Enumerator<F> {
    pub(super) fn new(cfg: SearchCfg, limit: usize, on_progress: F) -> Self {
        Self {
            board: Board::default(),
            cfg,
            limit,
            found: 0,
            on_progress,
        }
    }

    pub(super) fn run(&mut self) -> u64 {
        if self.cfg.seed_symmetry && self.limit > 0 {
            let (x0, y0) = SPIRAL[0];
            self.board.set(x0, y0, Dir::North);
            self.place(1);
            self.board.set(x0, y0, Dir::Empty);
            self.found * 4
        } else {
            self.place(0);
            self.found
        }
    }

    /// Assign a direction to spiral position `d` and recurse.
    ///
    /// All four directions are always tried; on return the cell is back to
    /// `Empty`, leaving the caller's board exactly as it found it.
    pub(super) fn place(&mut self, d: usize) {
        if d == self.limit {
            self.record();
            return;
        }
        let (x, y) = SPIRAL[d];
        for dir in Dir::TRIALS {
            self.board.set(x, y, dir);
            if placement_legal(&self.board, x, y, self.cfg.policy) {
                self.place(d + 1);
            }
        }
        self.board.set(x, y, Dir::Empty);
    }

    fn record(&mut self) {
        self.found += 1;
        if self.cfg.progress_every > 0 && self.found % self.cfg.progress_every == 0 {
            (self.on_progress)(self.found);
        }
    }
}
