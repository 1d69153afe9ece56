use crate::engine::{self, Registry, Scheduler};
use crate::names::{BuiltinNames, NameSource};
use crate::{Kind, Node, Result, Sequence};
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Pronunciation context.
///
/// Holds the data compressors consult beyond the input text itself. Today
/// that is only the set of known given names.
#[derive(Debug, Clone)]
pub struct Context {
    /// Upper-cased given names recognized by the forename pass.
    pub forenames: HashSet<String>,
}

impl Context {
    /// Build a context from any name source. Names are trimmed and
    /// upper-cased; blank entries are dropped.
    pub fn from_source<S: NameSource + ?Sized>(source: &S) -> Self {
        let forenames = source
            .forenames()
            .into_iter()
            .map(|name| name.trim().to_uppercase())
            .filter(|name| !name.is_empty())
            .collect();
        Context { forenames }
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::from_source(&BuiltinNames)
    }
}

/// Which part of the pipeline to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target {
    /// Every registered kind.
    #[default]
    All,
    /// One kind and, transitively, its prerequisites.
    Kind(Kind),
}

/// Options that affect which compressors run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub target: Target,
}

/// Per-round summary used in verbose traces.
#[derive(Debug, Clone)]
pub struct RoundSummary {
    pub round: usize,
    /// Kind names that ran in this round, in execution order.
    pub kinds: Vec<String>,
    pub duration: Duration,
    pub nodes_in: usize,
    pub nodes_out: usize,
}

/// A compact node summary used in verbose traces.
#[derive(Debug, Clone)]
pub struct NodeSummary {
    pub kind: String,
    pub written: String,
    /// Spoken form, or `None` when the node cannot be pronounced.
    pub spoken: Option<String>,
}

/// Additional details returned by [`pronounce_verbose_with`].
#[derive(Debug, Clone)]
pub struct PronounceDetails {
    /// Time spent in the scheduler.
    pub total: Duration,
    /// Kind names the target resolved to.
    pub required: Vec<String>,
    pub rounds: Vec<RoundSummary>,
    /// The final node sequence.
    pub nodes: Vec<NodeSummary>,
}

/// Result from [`pronounce_verbose_with`].
#[derive(Debug, Clone)]
pub struct PronounceVerbose {
    pub text: String,
    pub output: String,
    /// Scheduling plus rendering.
    pub elapsed: Duration,
    pub details: PronounceDetails,
}

/// Pronounce `text` with the built-in names, running every kind.
///
/// # Example
/// ```
/// use verbalize::pronounce;
///
/// assert_eq!(pronounce("George VI paid 1,000.").unwrap(), "George the Sixth paid one thousand.");
/// ```
pub fn pronounce(text: &str) -> Result<String> {
    pronounce_with(text, &Context::default(), &Options::default())
}

/// Pronounce `text` with the provided `context`/`options`.
pub fn pronounce_with(text: &str, context: &Context, options: &Options) -> Result<String> {
    represent(text, context, options)?.pronunciation()
}

/// The resolved node sequence for `text`, before rendering.
pub fn represent(text: &str, context: &Context, options: &Options) -> Result<Sequence> {
    Scheduler::new(Registry::builtin(), options.target).run(text, context)
}

/// Pronounce `text` and return a compact trace of the scheduler run.
///
/// The plain [`pronounce_with`] path does not record any of this.
pub fn pronounce_verbose_with(text: &str, context: &Context, options: &Options) -> Result<PronounceVerbose> {
    let started = Instant::now();
    let run = Scheduler::new(Registry::builtin(), options.target).run_with_metrics(text, context)?;
    let output = run.sequence.pronunciation()?;
    let elapsed = started.elapsed();

    let rounds = run.metrics.rounds.iter().map(round_to_summary).collect();
    let nodes = run.sequence.iter().map(node_to_summary).collect();
    let details = PronounceDetails {
        total: run.metrics.total,
        required: run.required.names().into_iter().map(str::to_string).collect(),
        rounds,
        nodes,
    };

    Ok(PronounceVerbose { text: text.to_string(), output, elapsed, details })
}

fn round_to_summary(round: &engine::RoundMetrics) -> RoundSummary {
    RoundSummary {
        round: round.round,
        kinds: round.passes.iter().map(|pass| pass.kind.name().to_string()).collect(),
        duration: round.duration,
        nodes_in: round.nodes_in,
        nodes_out: round.nodes_out,
    }
}

fn node_to_summary(node: &Node) -> NodeSummary {
    NodeSummary { kind: node.kind().name().to_string(), written: node.written(), spoken: node.render().ok() }
}
