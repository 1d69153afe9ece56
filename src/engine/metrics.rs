//! Scheduler run metrics.
//!
//! Collected by [`Scheduler::run_with_metrics`](super::Scheduler::run_with_metrics)
//! and surfaced through `pronounce_verbose_with` and the CLI `--verbose`
//! report. `Scheduler::run` skips the bookkeeping entirely.

use crate::{Kind, KindSet, Sequence};
use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for the run, resolution included.
    pub total: Duration,
    /// One entry per scheduling round, in execution order.
    pub rounds: Vec<RoundMetrics>,
}

/// One wavefront: every kind that was ready at the start of the round.
#[derive(Debug, Default, Clone)]
pub struct RoundMetrics {
    /// Zero-based round index; round 0 is always the tokenizer.
    pub round: usize,
    pub kinds: KindSet,
    pub duration: Duration,
    pub nodes_in: usize,
    pub nodes_out: usize,
    /// Per-compressor detail, in the order the passes ran.
    pub passes: Vec<PassMetrics>,
}

/// Timing and node counts for a single compressor pass.
#[derive(Debug, Clone)]
pub struct PassMetrics {
    pub kind: Kind,
    pub duration: Duration,
    pub nodes_in: usize,
    pub nodes_out: usize,
    /// Nodes of `kind` present after the pass.
    pub produced: usize,
}

/// Scheduler output bundled with timing information.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub sequence: Sequence,
    /// Kinds the target resolved to.
    pub required: KindSet,
    pub metrics: RunMetrics,
}
