//! Per-placement legality oracle.
//!
//! Purpose
//! - Decide whether a tentatively placed piece is consistent with its
//!   already-placed neighbors: no two outies meet across a shared edge, and
//!   no group of four pieces closes a rotational dependency loop.
//!
//! Why this design
//! - Both rules are pure pattern matches on the four axis neighbors (plus a
//!   diagonal corner for loops), so they live in fixed lookup tables rather
//!   than conditional chains; each table row is unit-tested on its own.
//! - Loop detection is what makes the count match the physical puzzle: a
//!   locked loop covers the board but cannot actually be assembled. The
//!   overlap-only policy is kept selectable because the looser count is a
//!   useful cross-check and matches one historical run.

mod oracle;
mod tables;

pub use oracle::{placement_legal, Policy};

#[cfg(test)]
mod tests;
