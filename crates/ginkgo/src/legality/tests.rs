use super::*;
use crate::board::{Board, Dir};

const DIRS: [Dir; 4] = Dir::TRIALS;

/// Independent formulation of the outie geometry: does a piece pointing
/// `dir` protrude across the edge toward the neighbor at `(dx, dy)`?
fn outie_faces(dir: Dir, dx: i32, dy: i32) -> bool {
    match (dx, dy) {
        (-1, 0) => dir == Dir::South || dir == Dir::East, // NW edge
        (0, -1) => dir == Dir::North || dir == Dir::East, // SW edge
        (1, 0) => dir == Dir::North || dir == Dir::West,  // SE edge
        (0, 1) => dir == Dir::South || dir == Dir::West,  // NE edge
        _ => panic!("not an axis neighbor: ({dx}, {dy})"),
    }
}

#[test]
fn overlap_table_matches_outie_geometry_exhaustively() {
    // Every neighbor offset, every direction pair, checked from both sides.
    for (dx, dy) in [(-1, 0), (0, -1), (1, 0), (0, 1)] {
        for me in DIRS {
            for other in DIRS {
                let mut board = Board::default();
                board.set(0, 0, me);
                board.set(dx, dy, other);
                let overlap = outie_faces(me, dx, dy) && outie_faces(other, -dx, -dy);
                assert_eq!(
                    placement_legal(&board, 0, 0, Policy::OverlapOnly),
                    !overlap,
                    "me={me:?} other={other:?} at ({dx}, {dy})"
                );
                // The relation is symmetric: probing the neighbor agrees.
                assert_eq!(
                    placement_legal(&board, dx, dy, Policy::OverlapOnly),
                    !overlap,
                    "probed from neighbor: me={me:?} other={other:?} at ({dx}, {dy})"
                );
            }
        }
    }
}

#[test]
fn south_against_north_northwest_neighbor_overlaps() {
    // South points into the NW edge and North points back across it.
    let mut board = Board::default();
    board.set(0, 0, Dir::South);
    board.set(-1, 0, Dir::North);
    assert!(!placement_legal(&board, 0, 0, Policy::OverlapOnly));
    assert!(!placement_legal(&board, -1, 0, Policy::OverlapOnly));
}

#[test]
fn south_against_north_southeast_neighbor_is_legal() {
    // Same pair mirrored across the SE edge: a South outie points away
    // from the SE neighbor, so nothing collides.
    let mut board = Board::default();
    board.set(0, 0, Dir::South);
    board.set(1, 0, Dir::North);
    assert!(placement_legal(&board, 0, 0, Policy::OverlapOnly));
    assert!(placement_legal(&board, 1, 0, Policy::OverlapOnly));
}

#[test]
fn outies_pointing_off_board_are_legal() {
    let mut board = Board::default();
    // (0, 3) is the northern tip; its NE and NW neighbors are off-board.
    board.set(0, 3, Dir::West);
    assert!(placement_legal(&board, 0, 3, Policy::Full));
}

fn fill(board: &mut Board, cells: &[((i32, i32), Dir)]) {
    for &((x, y), dir) in cells {
        board.set(x, y, dir);
    }
}

#[test]
fn clockwise_loop_is_rejected_at_every_member() {
    // Covers the clockwise signature row for each piece direction.
    let mut board = Board::default();
    fill(
        &mut board,
        &[
            ((0, 0), Dir::North),
            ((0, 1), Dir::East),
            ((1, 1), Dir::South),
            ((1, 0), Dir::West),
        ],
    );
    for (x, y) in [(0, 0), (0, 1), (1, 1), (1, 0)] {
        assert!(
            !placement_legal(&board, x, y, Policy::Full),
            "loop not caught at ({x}, {y}) on\n{board}"
        );
        // The looser policy admits the loop: no outies collide.
        assert!(placement_legal(&board, x, y, Policy::OverlapOnly));
    }
}

#[test]
fn counterclockwise_loop_is_rejected_at_every_member() {
    // Covers the counter-clockwise signature row for each piece direction.
    let mut board = Board::default();
    fill(
        &mut board,
        &[
            ((0, 0), Dir::North),
            ((-1, 0), Dir::West),
            ((-1, -1), Dir::South),
            ((0, -1), Dir::East),
        ],
    );
    for (x, y) in [(0, 0), (-1, 0), (-1, -1), (0, -1)] {
        assert!(
            !placement_legal(&board, x, y, Policy::Full),
            "loop not caught at ({x}, {y}) on\n{board}"
        );
        assert!(placement_legal(&board, x, y, Policy::OverlapOnly));
    }
}

#[test]
fn incomplete_loop_is_legal() {
    // Same clockwise cycle with the far corner missing: three pieces never
    // form a loop, so the placement must stand.
    let mut board = Board::default();
    fill(
        &mut board,
        &[
            ((0, 0), Dir::North),
            ((0, 1), Dir::East),
            ((1, 0), Dir::West),
        ],
    );
    for (x, y) in [(0, 0), (0, 1), (1, 0)] {
        assert!(placement_legal(&board, x, y, Policy::Full));
    }
}

#[test]
fn loop_crossing_the_board_edge_cannot_close() {
    // A would-be cycle whose far corner lies off the board: (2, 2) is
    // outside, so the three on-board members stay legal.
    let mut board = Board::default();
    fill(
        &mut board,
        &[
            ((1, 1), Dir::North),
            ((1, 2), Dir::East),
            ((2, 1), Dir::West),
        ],
    );
    for (x, y) in [(1, 1), (1, 2), (2, 1)] {
        assert!(placement_legal(&board, x, y, Policy::Full));
    }
}
