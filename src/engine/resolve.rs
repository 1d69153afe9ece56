//! Target resolution.
//!
//! Expands what the caller asked for into the set of kinds the scheduler must
//! run:
//!
//! ```text
//! Target::Kind(RegnalName)
//!   worklist [RegnalName]
//!     RegnalName   → + Forename, RomanNumeral
//!     Forename     → + Pause, Terminal
//!     RomanNumeral → (Pause, Terminal already seen)
//!     Pause        → + Token
//!     Terminal     → + ClockTime12
//!     ...
//! ```
//!
//! A kind is expanded once, so cyclic declarations terminate here; the
//! scheduler reports them as stuck. A prerequisite with no registry entry is
//! kept in the set (and will never become ready).

use super::registry::Registry;
use crate::{Kind, KindSet, Target};

/// `{target} ∪ transitive prerequisites(target)`, or every registered kind
/// for [`Target::All`].
pub fn required_kinds(registry: &Registry, target: Target) -> KindSet {
    let roots: Vec<Kind> = match target {
        Target::All => registry.entries().iter().map(|e| e.kind).collect(),
        Target::Kind(kind) => vec![kind],
    };

    let mut required = KindSet::empty();
    let mut worklist = roots;
    while let Some(kind) = worklist.pop() {
        if required.has(kind) {
            continue;
        }
        required |= kind.flag();
        if let Some(requires) = registry.prerequisites(kind) {
            worklist.extend(requires.kinds().filter(|k| !required.has(*k)));
        }
    }

    if super::debug_enabled() {
        eprintln!("[resolve] target={target:?} required=[{}]", required.names().join(", "));
    }

    required
}
