//! Compressor registry.
//!
//! The prerequisite graph is plain data: one [`Compressor`] entry per kind,
//! pairing the kind with the kinds it waits for and the function that
//! produces it. Node payloads know nothing about ordering.
//!
//! ## Built-in graph
//!
//! ```text
//! Token ─┬─ Pause ──┬─ ClockTime12 ─ Terminal ─┬─ ClockTime24
//!        │          │                          │
//!        │          └──────────────┬───────────┘
//!        │                         ├─ CalendarDate ───┐
//!        │                         ├─ GroupedNumeral ─┼─ Integer
//!        │                         ├─ RomanNumeral ─┐ │ (also ClockTime12/24)
//!        │                         └─ Forename ─────┴─┴─ RegnalName
//! ```
//!
//! The 12-hour clock runs before terminal punctuation so that `p.m.` keeps its
//! periods. The integer pass waits for every chronometry pass so dates and
//! clock times claim their digits first.

use crate::rules::{noun, numeral, punctuation, time, token};
use crate::{Context, Kind, KindSet, Node, Result};
use once_cell::sync::Lazy;

/// Everything a compressor may read besides the node list.
#[derive(Debug, Clone, Copy)]
pub struct Pass<'a> {
    /// Raw input. Only the tokenizer reads it.
    pub text: &'a str,
    pub context: &'a Context,
}

pub type CompressFn = fn(&Pass<'_>, Vec<Node>) -> Result<Vec<Node>>;

/// One registry entry.
#[derive(Debug, Clone, Copy)]
pub struct Compressor {
    pub kind: Kind,
    pub requires: KindSet,
    pub compress: CompressFn,
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<Compressor>,
}

static BUILTIN: Lazy<Registry> = Lazy::new(|| {
    Registry::new(vec![
        compressor! {
            kind: Kind::Token,
            requires: [],
            compress: token::tokenize,
        },
        compressor! {
            kind: Kind::Pause,
            requires: [Kind::Token],
            compress: punctuation::compress_pauses,
        },
        compressor! {
            kind: Kind::Terminal,
            requires: [Kind::Token, Kind::ClockTime12],
            compress: punctuation::compress_terminals,
        },
        compressor! {
            kind: Kind::ClockTime12,
            requires: [Kind::Token, Kind::Pause],
            compress: time::clock::compress_twelve_hour,
        },
        compressor! {
            kind: Kind::ClockTime24,
            requires: [Kind::ClockTime12, Kind::Terminal],
            compress: time::clock::compress_twenty_four_hour,
        },
        compressor! {
            kind: Kind::CalendarDate,
            requires: [Kind::Pause, Kind::Terminal],
            compress: time::calendar_date::compress,
        },
        compressor! {
            kind: Kind::GroupedNumeral,
            requires: [Kind::Pause, Kind::Terminal],
            compress: numeral::grouping::compress,
        },
        compressor! {
            kind: Kind::RomanNumeral,
            requires: [Kind::Pause, Kind::Terminal],
            compress: numeral::roman::compress,
        },
        compressor! {
            kind: Kind::Forename,
            requires: [Kind::Pause, Kind::Terminal],
            compress: noun::compress_forenames,
        },
        compressor! {
            kind: Kind::Integer,
            requires: [
                Kind::Pause,
                Kind::Terminal,
                Kind::CalendarDate,
                Kind::ClockTime12,
                Kind::ClockTime24,
                Kind::GroupedNumeral,
            ],
            compress: numeral::integer::compress,
        },
        compressor! {
            kind: Kind::RegnalName,
            requires: [Kind::Forename, Kind::RomanNumeral],
            compress: noun::compress_regnal_names,
        },
    ])
});

impl Registry {
    /// Build a registry from explicit entries. A later entry for the same kind
    /// replaces an earlier one.
    pub fn new(entries: Vec<Compressor>) -> Self {
        let mut registry = Registry::default();
        for entry in entries {
            registry.entries.retain(|e| e.kind != entry.kind);
            registry.entries.push(entry);
        }
        registry.entries.sort_by_key(|e| e.kind);
        registry
    }

    /// The table used by the public API.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    pub fn get(&self, kind: Kind) -> Option<&Compressor> {
        self.entries.iter().find(|e| e.kind == kind)
    }

    pub fn prerequisites(&self, kind: Kind) -> Option<KindSet> {
        self.get(kind).map(|e| e.requires)
    }

    /// Entries in `Kind` declaration order.
    pub fn entries(&self) -> &[Compressor] {
        &self.entries
    }
}
