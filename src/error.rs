//! Pipeline errors.
//!
//! Every failure is fatal for the whole call: compressors, the scheduler and the
//! numeral renderer return `Err` and callers propagate it with `?`. Nothing is
//! retried and no partial output is produced.

use crate::{Kind, KindSet};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A compressor was handed a node it cannot process. This points at a
    /// scheduling/ordering bug, never at unusual input.
    #[error("the {kind} compressor cannot process {found}")]
    Compression { kind: Kind, found: String },

    /// Kinds remain pending but none has its prerequisites satisfied
    /// (cyclic or incomplete prerequisite declarations).
    #[error("no compressor is ready; stuck on {}", pending.names().join(", "))]
    Stuck { pending: KindSet },

    /// The numeral renderer was given something it cannot spell.
    #[error("cannot pronounce '{input}': {reason}")]
    Pronunciation { input: String, reason: &'static str },
}

impl Error {
    pub(crate) fn compression(kind: Kind, found: impl Into<String>) -> Self {
        Error::Compression { kind, found: found.into() }
    }

    pub(crate) fn pronunciation(input: impl Into<String>, reason: &'static str) -> Self {
        Error::Pronunciation { input: input.into(), reason }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
