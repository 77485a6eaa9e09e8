//! Timing probe for depth-truncated enumerations.
//!
//! Purpose
//! - Provide a quick, code-backed data point for "how long will the full
//!   25-cell run take?" by timing successive spiral prefixes; each extra
//!   ring multiplies the work by a roughly stable factor.
//!
//! Code: crates/ginkgo/src/search/engine.rs::count_prefix

use std::time::Instant;

use ginkgo::prelude::*;

fn main() {
    let cfg = SearchCfg::default();
    for depth in [5, 9, 13, 16] {
        let start = Instant::now();
        let count = count_prefix(cfg, depth);
        let elapsed = start.elapsed().as_secs_f64() * 1e3;
        println!("depth={depth} partial_boards={count} time_ms={elapsed:.3}");
    }
}
