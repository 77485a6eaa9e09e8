use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

use ginkgo::prelude::*;

mod provenance;

#[derive(Parser)]
#[command(name = "ginkgo-count")]
#[command(about = "Enumerate the valid Ginkgo puzzle board layouts")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Enumerate every legal complete board and print the total
    Count {
        #[arg(long, value_enum, default_value_t = PolicyArg::Full)]
        policy: PolicyArg,
        /// Enumerate all four center directions instead of seeding one and
        /// scaling the result by 4 (slower; identical total)
        #[arg(long)]
        no_symmetry: bool,
        /// Log progress every N completed boards (0 disables)
        #[arg(long, default_value_t = 100_000)]
        progress_every: u64,
        /// Also write the JSON report to this path, with a provenance sidecar
        #[arg(long)]
        out: Option<String>,
    },
    /// Enumerate assignments of only the first DEPTH placement-order cells
    /// (quick timing and regression runs)
    Prefix {
        #[arg(long)]
        depth: usize,
        #[arg(long, value_enum, default_value_t = PolicyArg::Full)]
        policy: PolicyArg,
        /// Log progress every N completed partial boards (0 disables)
        #[arg(long, default_value_t = 100_000)]
        progress_every: u64,
        /// Also write the JSON report to this path, with a provenance sidecar
        #[arg(long)]
        out: Option<String>,
    },
    /// Print the placement order over the 25 board cells
    Spiral,
}

/// Legality policy as a CLI flag value.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    /// Reject overlaps and locked 4-piece loops (the physical puzzle rule)
    Full,
    /// Reject overlaps only (looser historical count)
    OverlapOnly,
}

impl From<PolicyArg> for Policy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Full => Policy::Full,
            PolicyArg::OverlapOnly => Policy::OverlapOnly,
        }
    }
}

#[derive(Serialize)]
struct Report {
    total: u64,
    policy: String,
    seeded_symmetry: bool,
    depth: usize,
    elapsed_secs: f64,
    version: &'static str,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Count {
            policy,
            no_symmetry,
            progress_every,
            out,
        } => count(policy, no_symmetry, progress_every, out),
        Action::Prefix {
            depth,
            policy,
            progress_every,
            out,
        } => prefix(depth, policy, progress_every, out),
        Action::Spiral => spiral(),
    }
}

fn count(
    policy: PolicyArg,
    no_symmetry: bool,
    progress_every: u64,
    out: Option<String>,
) -> Result<()> {
    let cfg = SearchCfg {
        policy: policy.into(),
        seed_symmetry: !no_symmetry,
        progress_every,
    };
    tracing::info!(policy = ?policy, seeded = cfg.seed_symmetry, "count");
    let start = Instant::now();
    let total = count_boards_with_progress(cfg, |found| {
        tracing::info!(found, "progress");
    });
    let report = Report {
        total,
        policy: format!("{policy:?}"),
        seeded_symmetry: cfg.seed_symmetry,
        depth: CELLS,
        elapsed_secs: start.elapsed().as_secs_f64(),
        version: ginkgo::VERSION,
    };
    emit(&report, out.as_deref())
}

fn prefix(depth: usize, policy: PolicyArg, progress_every: u64, out: Option<String>) -> Result<()> {
    let cfg = SearchCfg {
        policy: policy.into(),
        seed_symmetry: false,
        progress_every,
    };
    tracing::info!(depth, policy = ?policy, "prefix");
    let start = Instant::now();
    let total = count_prefix_with_progress(cfg, depth, |found| {
        tracing::info!(found, "progress");
    });
    let report = Report {
        total,
        policy: format!("{policy:?}"),
        seeded_symmetry: false,
        depth: depth.min(CELLS),
        elapsed_secs: start.elapsed().as_secs_f64(),
        version: ginkgo::VERSION,
    };
    emit(&report, out.as_deref())
}

fn spiral() -> Result<()> {
    for (i, (x, y)) in SPIRAL.iter().enumerate() {
        println!("{i:2}: ({x:2}, {y:2})");
    }
    Ok(())
}

/// Print the report to stdout and, when requested, persist it next to a
/// provenance sidecar.
fn emit(report: &Report, out: Option<&str>) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    if let Some(out) = out {
        let out_path = Path::new(out);
        if let Some(parent) = out_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating output dir {}", parent.display()))?;
            }
        }
        std::fs::write(out_path, &json).with_context(|| format!("writing {out}"))?;
        let params = serde_json::json!({
            "policy": report.policy,
            "seeded_symmetry": report.seeded_symmetry,
            "depth": report.depth,
        });
        provenance::write_sidecar(out_path, params)?;
    }
    Ok(())
}
