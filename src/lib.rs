extern crate self as verbalize;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod names;
pub mod numerals;
mod rules;

pub use api::{
    Context, NodeSummary, Options, PronounceDetails, PronounceVerbose, RoundSummary, Target, pronounce,
    pronounce_verbose_with, pronounce_with, represent,
};
pub use error::{Error, Result};
pub use names::{BuiltinNames, NameSource};
pub use rules::noun::RegnalName;
pub use rules::numeral::{GroupedNumeral, Integer, RomanNumeral, decode_roman};
pub use rules::time::{CalendarDate, ClockTime};

use std::fmt;
use std::str::FromStr;

// --- Kinds ------------------------------------------------------------------

/// Tag of a node variant. Declaration order is the order in which ready
/// compressors run within one scheduling round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Token,
    Pause,
    Terminal,
    ClockTime12,
    ClockTime24,
    CalendarDate,
    GroupedNumeral,
    RomanNumeral,
    Forename,
    Integer,
    RegnalName,
}

impl Kind {
    pub const ALL: [Kind; 11] = [
        Kind::Token,
        Kind::Pause,
        Kind::Terminal,
        Kind::ClockTime12,
        Kind::ClockTime24,
        Kind::CalendarDate,
        Kind::GroupedNumeral,
        Kind::RomanNumeral,
        Kind::Forename,
        Kind::Integer,
        Kind::RegnalName,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Kind::Token => "token",
            Kind::Pause => "pause",
            Kind::Terminal => "terminal",
            Kind::ClockTime12 => "clock-12h",
            Kind::ClockTime24 => "clock-24h",
            Kind::CalendarDate => "calendar-date",
            Kind::GroupedNumeral => "grouped-numeral",
            Kind::RomanNumeral => "roman-numeral",
            Kind::Forename => "forename",
            Kind::Integer => "integer",
            Kind::RegnalName => "regnal-name",
        }
    }

    /// The single-bit set holding this kind.
    pub fn flag(self) -> KindSet {
        match self {
            Kind::Token => KindSet::TOKEN,
            Kind::Pause => KindSet::PAUSE,
            Kind::Terminal => KindSet::TERMINAL,
            Kind::ClockTime12 => KindSet::CLOCK_12H,
            Kind::ClockTime24 => KindSet::CLOCK_24H,
            Kind::CalendarDate => KindSet::CALENDAR_DATE,
            Kind::GroupedNumeral => KindSet::GROUPED_NUMERAL,
            Kind::RomanNumeral => KindSet::ROMAN_NUMERAL,
            Kind::Forename => KindSet::FORENAME,
            Kind::Integer => KindSet::INTEGER,
            Kind::RegnalName => KindSet::REGNAL_NAME,
        }
    }

    /// Prerequisites declared by the built-in compressor registry.
    pub fn prerequisites(self) -> KindSet {
        engine::Registry::builtin().prerequisites(self).unwrap_or(KindSet::empty())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Kind::ALL.into_iter().find(|k| k.name() == wanted).ok_or_else(|| {
            let known: Vec<&str> = Kind::ALL.iter().map(|k| k.name()).collect();
            format!("unknown kind '{s}' (expected one of: {})", known.join(", "))
        })
    }
}

bitflags::bitflags! {
    /// A set of kinds. Used for prerequisite declarations and for the
    /// scheduler's `done`/`pending` bookkeeping.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct KindSet: u16 {
        const TOKEN           = 1 << 0;
        const PAUSE           = 1 << 1;
        const TERMINAL        = 1 << 2;
        const CLOCK_12H       = 1 << 3;
        const CLOCK_24H       = 1 << 4;
        const CALENDAR_DATE   = 1 << 5;
        const GROUPED_NUMERAL = 1 << 6;
        const ROMAN_NUMERAL   = 1 << 7;
        const FORENAME        = 1 << 8;
        const INTEGER         = 1 << 9;
        const REGNAL_NAME     = 1 << 10;
    }
}

impl KindSet {
    pub fn of(kinds: &[Kind]) -> Self {
        kinds.iter().fold(KindSet::empty(), |acc, k| acc | k.flag())
    }

    pub fn has(self, kind: Kind) -> bool {
        self.contains(kind.flag())
    }

    /// Members in `Kind` declaration order.
    pub fn kinds(self) -> impl Iterator<Item = Kind> {
        Kind::ALL.into_iter().filter(move |k| self.has(*k))
    }

    pub fn names(self) -> Vec<&'static str> {
        self.kinds().map(Kind::name).collect()
    }
}

// --- Nodes ------------------------------------------------------------------

/// One recognized unit of meaning. Nodes are never mutated after construction;
/// a compression pass replaces spans of nodes with new ones.
#[derive(Debug, Clone)]
pub enum Node {
    Token(String),
    Pause(char),
    Terminal(char),
    Integer(Integer),
    GroupedNumeral(GroupedNumeral),
    RomanNumeral(RomanNumeral),
    Forename(String),
    RegnalName(RegnalName),
    CalendarDate(CalendarDate),
    ClockTime12(ClockTime),
    ClockTime24(ClockTime),
}

impl Node {
    pub fn kind(&self) -> Kind {
        match self {
            Node::Token(_) => Kind::Token,
            Node::Pause(_) => Kind::Pause,
            Node::Terminal(_) => Kind::Terminal,
            Node::Integer(_) => Kind::Integer,
            Node::GroupedNumeral(_) => Kind::GroupedNumeral,
            Node::RomanNumeral(_) => Kind::RomanNumeral,
            Node::Forename(_) => Kind::Forename,
            Node::RegnalName(_) => Kind::RegnalName,
            Node::CalendarDate(_) => Kind::CalendarDate,
            Node::ClockTime12(_) => Kind::ClockTime12,
            Node::ClockTime24(_) => Kind::ClockTime24,
        }
    }

    /// Whether a separating space precedes this node when rendering.
    pub fn space_before(&self) -> bool {
        !matches!(self, Node::Pause(_) | Node::Terminal(_))
    }

    /// Whether the node rendered after this one starts with a capital letter.
    pub fn capitalize_next(&self) -> bool {
        matches!(self, Node::Terminal(_))
    }

    /// Spoken form of the node.
    pub fn render(&self) -> Result<String> {
        match self {
            Node::Token(text) | Node::Forename(text) => Ok(text.clone()),
            Node::Pause(c) | Node::Terminal(c) => Ok(c.to_string()),
            Node::Integer(n) => n.render(),
            Node::GroupedNumeral(g) => g.render(),
            Node::RomanNumeral(r) => r.render(),
            Node::RegnalName(r) => r.render(),
            Node::CalendarDate(d) => d.render(),
            Node::ClockTime12(t) | Node::ClockTime24(t) => Ok(t.render()),
        }
    }

    /// Written (source-like) form of the node, e.g. `123,456` for a grouped numeral.
    pub fn written(&self) -> String {
        match self {
            Node::Token(text) | Node::Forename(text) => text.clone(),
            Node::Pause(c) | Node::Terminal(c) => c.to_string(),
            Node::Integer(n) => n.written(),
            Node::GroupedNumeral(g) => g.written(),
            Node::RomanNumeral(r) => r.text().to_string(),
            Node::RegnalName(r) => r.written(),
            Node::CalendarDate(d) => d.written(),
            Node::ClockTime12(t) | Node::ClockTime24(t) => t.written(),
        }
    }

    /// Rendered text, falling back to the written form when the node cannot be
    /// spoken (e.g. an integer beyond the largest named group).
    fn rendered_or_written(&self) -> String {
        self.render().unwrap_or_else(|_| self.written())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered_or_written())
    }
}

/// Nodes are equal when they are the same kind and render to the same text,
/// regardless of their internal fields: `Integer(7)` parsed from `"007"` equals
/// one parsed from `"7"`, and `GroupedNumeral` `123,456` equals `0,123,456`.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.rendered_or_written() == other.rendered_or_written()
    }
}

// --- Sequence ---------------------------------------------------------------

/// Ordered node list produced by the pass scheduler.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence {
    nodes: Vec<Node>,
}

impl Sequence {
    pub fn new(nodes: Vec<Node>) -> Self {
        Sequence { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Number of nodes of the given kind.
    pub fn count_kind(&self, kind: Kind) -> usize {
        self.nodes.iter().filter(|n| n.kind() == kind).count()
    }

    /// Nodes of the given kind, in sequence order.
    pub fn with_kind(&self, kind: Kind) -> Vec<&Node> {
        self.nodes.iter().filter(|n| n.kind() == kind).collect()
    }

    /// Spoken string with spacing and capitalization applied.
    pub fn pronunciation(&self) -> Result<String> {
        engine::render::pronunciation(&self.nodes)
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Rendered nodes joined with the spacing rules, without capitalization.
impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&engine::render::joined(&self.nodes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_equality_compares_rendered_text() {
        let a = Node::Integer(Integer::parse("007").unwrap());
        let b = Node::Integer(Integer::parse("7").unwrap());
        assert_eq!(a, b);

        // Same text, different kinds.
        assert_ne!(Node::Token("seven".into()), Node::Integer(Integer::parse("7").unwrap()));

        // Roman numeral and integer of equal value still differ by kind.
        let roman = Node::RomanNumeral(RomanNumeral::parse("VII").unwrap());
        assert_ne!(roman, b);
        assert_eq!(roman.to_string(), b.to_string());
    }

    #[test]
    fn structurally_different_dates_with_same_rendering_are_equal() {
        let a = Node::CalendarDate(CalendarDate::new(17, 1, Some(2022)).unwrap());
        let b = Node::CalendarDate(CalendarDate::new(17, 1, Some(2022)).unwrap());
        assert_eq!(a, b);
        let c = Node::CalendarDate(CalendarDate::new(17, 1, None).unwrap());
        assert_ne!(a, c);
    }

    #[test]
    fn punctuation_hints() {
        assert!(!Node::Pause(',').space_before());
        assert!(!Node::Terminal('.').space_before());
        assert!(Node::Terminal('?').capitalize_next());
        assert!(!Node::Pause(';').capitalize_next());
        assert!(Node::Token("word".into()).space_before());
    }

    #[test]
    fn kind_round_trips_through_its_name() {
        for kind in Kind::ALL {
            assert_eq!(kind.name().parse::<Kind>(), Ok(kind));
        }
        assert_eq!("Calendar_Date".parse::<Kind>(), Ok(Kind::CalendarDate));
        assert!("weekday".parse::<Kind>().is_err());
    }

    #[test]
    fn kind_set_iterates_in_declaration_order() {
        let set = KindSet::of(&[Kind::RegnalName, Kind::Token, Kind::Terminal]);
        assert_eq!(set.kinds().collect::<Vec<_>>(), vec![Kind::Token, Kind::Terminal, Kind::RegnalName]);
        assert_eq!(set.names(), vec!["token", "terminal", "regnal-name"]);
    }

    #[test]
    fn sequence_kind_helpers() {
        let seq = Sequence::new(vec![
            Node::Token("In".into()),
            Node::RomanNumeral(RomanNumeral::parse("MMXXIV").unwrap()),
            Node::Pause(','),
            Node::RomanNumeral(RomanNumeral::parse("V").unwrap()),
        ]);
        assert_eq!(seq.count_kind(Kind::RomanNumeral), 2);
        let Node::RomanNumeral(first) = seq.with_kind(Kind::RomanNumeral)[0] else {
            panic!("expected roman numeral");
        };
        assert_eq!(first.value(), 2024);
        assert_eq!(seq.to_string(), "In two thousand twenty-four, five");
    }
}
