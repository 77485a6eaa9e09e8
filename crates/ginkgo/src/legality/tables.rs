//! Rule tables for the overlap and loop checks.
//!
//! Neighbor naming follows the physical board: the +x axis runs southeast,
//! the +y axis northeast, so the axis neighbors of a cell sit to its NW,
//! SW, SE, and NE.

use crate::board::Dir;

/// One axis-neighbor overlap rule: two pieces overlap across a shared edge
/// iff my outie faces the neighbor and the neighbor's outie faces me.
pub(super) struct OverlapRule {
    /// Neighbor offset from the placed piece.
    pub dx: i32,
    pub dy: i32,
    /// My directions whose outie faces this neighbor.
    pub mine: [Dir; 2],
    /// Neighbor directions whose outie faces me.
    pub theirs: [Dir; 2],
}

pub(super) const OVERLAP_RULES: [OverlapRule; 4] = [
    // northwest neighbor
    OverlapRule {
        dx: -1,
        dy: 0,
        mine: [Dir::South, Dir::East],
        theirs: [Dir::North, Dir::West],
    },
    // southwest neighbor
    OverlapRule {
        dx: 0,
        dy: -1,
        mine: [Dir::North, Dir::East],
        theirs: [Dir::South, Dir::West],
    },
    // southeast neighbor
    OverlapRule {
        dx: 1,
        dy: 0,
        mine: [Dir::North, Dir::West],
        theirs: [Dir::South, Dir::East],
    },
    // northeast neighbor
    OverlapRule {
        dx: 0,
        dy: 1,
        mine: [Dir::South, Dir::West],
        theirs: [Dir::North, Dir::East],
    },
];

/// One required (offset, direction) participant of a loop signature.
pub(super) struct Probe {
    pub dx: i32,
    pub dy: i32,
    pub dir: Dir,
}

/// A 4-cycle signature relative to the placed piece: two orthogonal
/// neighbors and the diagonal far corner, all holding the directions that
/// close the rotation. The piece's own direction selects which pair of
/// signatures can involve it.
pub(super) struct LoopRule {
    pub a: Probe,
    pub far: Probe,
    pub b: Probe,
}

const fn probe(dx: i32, dy: i32, dir: Dir) -> Probe {
    Probe { dx, dy, dir }
}

/// Indexed by the placed piece's direction (`Dir as usize`); each entry is
/// the counter-clockwise and clockwise cycle through that piece.
pub(super) const LOOP_RULES: [[LoopRule; 2]; 4] = [
    // North
    [
        LoopRule {
            a: probe(-1, 0, Dir::West),
            far: probe(-1, -1, Dir::South),
            b: probe(0, -1, Dir::East),
        },
        LoopRule {
            a: probe(0, 1, Dir::East),
            far: probe(1, 1, Dir::South),
            b: probe(1, 0, Dir::West),
        },
    ],
    // East
    [
        LoopRule {
            a: probe(0, 1, Dir::North),
            far: probe(-1, 1, Dir::West),
            b: probe(-1, 0, Dir::South),
        },
        LoopRule {
            a: probe(1, 0, Dir::South),
            far: probe(1, -1, Dir::West),
            b: probe(0, -1, Dir::North),
        },
    ],
    // West
    [
        LoopRule {
            a: probe(0, -1, Dir::South),
            far: probe(1, -1, Dir::East),
            b: probe(1, 0, Dir::North),
        },
        LoopRule {
            a: probe(-1, 0, Dir::North),
            far: probe(-1, 1, Dir::East),
            b: probe(0, 1, Dir::South),
        },
    ],
    // South
    [
        LoopRule {
            a: probe(1, 0, Dir::East),
            far: probe(1, 1, Dir::North),
            b: probe(0, 1, Dir::West),
        },
        LoopRule {
            a: probe(0, -1, Dir::West),
            far: probe(-1, -1, Dir::North),
            b: probe(-1, 0, Dir::East),
        },
    ],
];
