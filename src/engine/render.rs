//! Final rendering walk.
//!
//! ```text
//! [Token "the"] [ClockTime12 7:30] [Terminal '.'] [Token "see"]
//!       │              │                 │              │
//!      The  ␠ seven thirty in the evening .  ␠         See
//! ```
//!
//! A space goes before every node that asks for one, except the first. The
//! first node, and any node following one that signals `capitalize_next`, has
//! its first character upper-cased; the rest of its rendering is untouched.

use crate::{Node, Result};

/// Spoken string for `nodes`.
pub fn pronunciation(nodes: &[Node]) -> Result<String> {
    let mut out = String::new();
    let mut capitalize = true;
    for (i, node) in nodes.iter().enumerate() {
        if i != 0 && node.space_before() {
            out.push(' ');
        }
        let spoken = node.render()?;
        if capitalize {
            out.push_str(&capitalize_first(&spoken));
        } else {
            out.push_str(&spoken);
        }
        capitalize = node.capitalize_next();
    }
    Ok(out)
}

/// Display form: same spacing, no capitalization, and nodes that cannot be
/// spoken fall back to their written text.
pub fn joined(nodes: &[Node]) -> String {
    let mut out = String::new();
    for (i, node) in nodes.iter().enumerate() {
        if i != 0 && node.space_before() {
            out.push(' ');
        }
        out.push_str(&node.to_string());
    }
    out
}

/// Upper-case the first character only: `iPhone` → `IPhone`.
pub(crate) fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
