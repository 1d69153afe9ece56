//! Pass engine.
//!
//! The engine turns raw text into a [`Sequence`](crate::Sequence) of typed
//! nodes by running *compressors*: pure functions that scan the current node
//! list and fold matching spans into higher-level nodes. Each compressor
//! produces exactly one [`Kind`](crate::Kind) and declares the kinds that must
//! have run before it.
//!
//! ## How the parts work together
//!
//! ```text
//! Registry::builtin()                          (registry.rs)
//!   (kind, prerequisites, compress fn) × 11
//!          │
//! target ──┼── required_kinds                  (resolve.rs)
//!          │     {target} ∪ transitive prerequisites
//!          v
//!   Scheduler::run                             (scheduler.rs)
//!     round 0: tokenizer (text → Token nodes)
//!     round n: every pending kind whose prerequisites are done,
//!              in Kind declaration order
//!     no ready kind while some are pending → Error::Stuck
//!          │
//!          v
//!   pronunciation                              (render.rs)
//!     spacing + capitalization + per-node rendering
//! ```
//!
//! A kind runs at most once per build, and is marked done even when its pass
//! changed nothing. Ordering between compressors comes only from the
//! prerequisite table, so the same input always produces the same rounds.
//!
//! ## Responsibilities by module
//!
//! - `registry.rs`: the [`Compressor`] entry type and the built-in table.
//! - `resolve.rs`: expands a [`Target`](crate::Target) into the kinds to run.
//! - `scheduler.rs`: wavefront execution over the owned node list.
//! - `render.rs`: final left-to-right walk producing the spoken string.
//! - `metrics.rs`: per-round timings and node counts.
//!
//! ## Adding a kind
//!
//! - Add the `Kind` variant, its `KindSet` bit, and the `Node` variant.
//! - Write the compressor under `src/rules/**`.
//! - Register it in `Registry::builtin` with its prerequisites.
//!
//! ## Debugging
//!
//! Set `VERBALIZE_DEBUG_PASSES=1` to print resolution and round traces.

#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/registry.rs"]
mod registry;
#[path = "engine/render.rs"]
pub(crate) mod render;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/scheduler.rs"]
mod scheduler;

pub use metrics::{PassMetrics, RoundMetrics, RunMetrics, RunResult};
pub use registry::{CompressFn, Compressor, Pass, Registry};
pub use resolve::required_kinds;
pub use scheduler::Scheduler;

pub(crate) fn debug_enabled() -> bool {
    std::env::var_os("VERBALIZE_DEBUG_PASSES").is_some()
}
