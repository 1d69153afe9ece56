//! Wavefront pass scheduler.
//!
//! The scheduler owns the node list for the duration of a build and drives
//! compressors over it in rounds:
//!
//! ```text
//! pending = required kinds, done = {}
//! loop while pending ≠ {}:
//!     ready = { k ∈ pending : prerequisites(k) ⊆ done }
//!     ready = {}  → Error::Stuck { pending }
//!     for k in ready (Kind declaration order):
//!         nodes = compress_k(nodes)?
//!         done += k, pending -= k
//! ```
//!
//! `ready` is fixed at the start of a round: a kind whose prerequisites are
//! completed mid-round waits for the next one. The first round is always the
//! tokenizer, since every other kind depends on it.
//!
//! ## Debugging
//!
//! With `VERBALIZE_DEBUG_PASSES` set, every round and pass prints a line to
//! stderr.

use super::debug_enabled;
use super::metrics::{PassMetrics, RoundMetrics, RunMetrics, RunResult};
use super::registry::{Compressor, Pass, Registry};
use super::resolve::required_kinds;
use crate::{Context, Error, KindSet, Node, Result, Sequence, Target};
use std::time::Instant;

/// Runs the compressors a target needs, in prerequisite order.
///
/// ```ignore
/// let scheduler = Scheduler::new(Registry::builtin(), Target::All);
/// let sequence = scheduler.run("Meet me at 7:30 PM.", &Context::default())?;
/// ```
#[derive(Debug)]
pub struct Scheduler<'a> {
    registry: &'a Registry,
    target: Target,
}

impl<'a> Scheduler<'a> {
    pub fn new(registry: &'a Registry, target: Target) -> Self {
        Scheduler { registry, target }
    }

    pub fn required(&self) -> KindSet {
        required_kinds(self.registry, self.target)
    }

    /// Build the node sequence for `text`.
    pub fn run(&self, text: &str, context: &Context) -> Result<Sequence> {
        let pass = Pass { text, context };
        let nodes = self.drive(&pass, self.required(), None)?;
        Ok(Sequence::new(nodes))
    }

    /// Like [`run`](Self::run), also recording per-round timings and node counts.
    pub fn run_with_metrics(&self, text: &str, context: &Context) -> Result<RunResult> {
        let started = Instant::now();
        let pass = Pass { text, context };
        let required = self.required();
        let mut metrics = RunMetrics::default();
        let nodes = self.drive(&pass, required, Some(&mut metrics))?;
        metrics.total = started.elapsed();
        Ok(RunResult { sequence: Sequence::new(nodes), required, metrics })
    }

    fn drive(&self, pass: &Pass<'_>, required: KindSet, mut metrics: Option<&mut RunMetrics>) -> Result<Vec<Node>> {
        let debug = debug_enabled();
        let mut nodes: Vec<Node> = Vec::new();
        let mut done = KindSet::empty();
        let mut pending = required;
        let mut round = 0;

        while !pending.is_empty() {
            let ready: Vec<&Compressor> = pending
                .kinds()
                .filter_map(|kind| self.registry.get(kind))
                .filter(|compressor| done.contains(compressor.requires))
                .collect();

            if ready.is_empty() {
                if debug {
                    eprintln!("[round] {round} stuck: pending=[{}]", pending.names().join(", "));
                }
                return Err(Error::Stuck { pending });
            }

            let kinds = ready.iter().fold(KindSet::empty(), |acc, c| acc | c.kind.flag());
            if debug {
                eprintln!("[round] {round} ready=[{}] nodes={}", kinds.names().join(", "), nodes.len());
            }

            let round_started = Instant::now();
            let round_nodes_in = nodes.len();
            let mut passes = Vec::with_capacity(ready.len());

            for compressor in ready {
                let pass_started = Instant::now();
                let nodes_in = nodes.len();
                nodes = (compressor.compress)(pass, nodes)?;
                done |= compressor.kind.flag();
                pending.remove(compressor.kind.flag());

                let produced = nodes.iter().filter(|n| n.kind() == compressor.kind).count();
                if debug {
                    eprintln!(
                        "[pass] {} nodes {} -> {} (produced {})",
                        compressor.kind,
                        nodes_in,
                        nodes.len(),
                        produced
                    );
                }
                if metrics.is_some() {
                    passes.push(PassMetrics {
                        kind: compressor.kind,
                        duration: pass_started.elapsed(),
                        nodes_in,
                        nodes_out: nodes.len(),
                        produced,
                    });
                }
            }

            if let Some(metrics) = metrics.as_deref_mut() {
                metrics.rounds.push(RoundMetrics {
                    round,
                    kinds,
                    duration: round_started.elapsed(),
                    nodes_in: round_nodes_in,
                    nodes_out: nodes.len(),
                    passes,
                });
            }
            round += 1;
        }

        Ok(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Kind, Options, pronounce_with};

    fn noop(_: &Pass<'_>, nodes: Vec<Node>) -> Result<Vec<Node>> {
        Ok(nodes)
    }

    fn tokens(pass: &Pass<'_>, nodes: Vec<Node>) -> Result<Vec<Node>> {
        crate::rules::token::tokenize(pass, nodes)
    }

    #[test]
    fn builtin_kinds_all_terminate() {
        let context = Context::default();
        for kind in Kind::ALL {
            let scheduler = Scheduler::new(Registry::builtin(), Target::Kind(kind));
            assert!(scheduler.run("On 17 Jan 2022 at 7:30 PM, George VI paid 1,000.", &context).is_ok(), "{kind}");
        }
    }

    #[test]
    fn cyclic_registry_is_stuck() {
        let registry = Registry::new(vec![
            Compressor { kind: Kind::Token, requires: KindSet::empty(), compress: tokens },
            Compressor { kind: Kind::Pause, requires: KindSet::TOKEN | KindSet::TERMINAL, compress: noop },
            Compressor { kind: Kind::Terminal, requires: KindSet::TOKEN | KindSet::PAUSE, compress: noop },
        ]);
        let scheduler = Scheduler::new(&registry, Target::All);
        let error = scheduler.run("a b c", &Context::default()).unwrap_err();
        assert_eq!(error, Error::Stuck { pending: KindSet::PAUSE | KindSet::TERMINAL });
        assert_eq!(error.to_string(), "no compressor is ready; stuck on pause, terminal");
    }

    #[test]
    fn missing_prerequisite_is_stuck() {
        let registry = Registry::new(vec![Compressor { kind: Kind::Pause, requires: KindSet::TOKEN, compress: noop }]);
        let scheduler = Scheduler::new(&registry, Target::All);
        let error = scheduler.run("a", &Context::default()).unwrap_err();
        assert_eq!(error, Error::Stuck { pending: KindSet::TOKEN | KindSet::PAUSE });
    }

    #[test]
    fn first_round_is_the_tokenizer() {
        let scheduler = Scheduler::new(Registry::builtin(), Target::All);
        let result = scheduler.run_with_metrics("The time is 7:30 PM.", &Context::default()).unwrap();
        let rounds = &result.metrics.rounds;
        assert_eq!(rounds[0].kinds, KindSet::TOKEN);
        assert_eq!(rounds[0].nodes_in, 0);
        assert_eq!(rounds[0].nodes_out, 5);
        assert_eq!(rounds[1].kinds, KindSet::PAUSE);

        // Every required kind ran exactly once.
        let ran = rounds.iter().fold(KindSet::empty(), |acc, r| acc | r.kinds);
        assert_eq!(ran, result.required);
        let passes: usize = rounds.iter().map(|r| r.passes.len()).sum();
        assert_eq!(passes, Kind::ALL.len());
        assert_eq!(result.sequence.pronunciation().unwrap(), "The time is seven thirty in the evening.");
    }

    #[test]
    fn kinds_outside_the_target_do_not_run() {
        let context = Context::default();
        let options = Options { target: Target::Kind(Kind::RomanNumeral) };
        // Integer is not a prerequisite of RomanNumeral, so digits stay plain tokens.
        assert_eq!(pronounce_with("XIV and 14", &context, &options).unwrap(), "Fourteen and 14");
    }
}
