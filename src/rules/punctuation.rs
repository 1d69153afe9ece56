//! Trailing punctuation.
//!
//! A token of two or more characters ending in a pause mark (`,` `;`) or a
//! terminal mark (`.` `!` `?`) is split into the shortened token and a
//! standalone punctuation node. Only the last character is split off.

use super::rewrite_tokens;
use crate::engine::Pass;
use crate::{Node, Result};

const PAUSE_MARKS: [char; 2] = [',', ';'];
const TERMINAL_MARKS: [char; 3] = ['.', '!', '?'];

pub fn compress_pauses(_: &Pass<'_>, nodes: Vec<Node>) -> Result<Vec<Node>> {
    Ok(split_trailing(nodes, &PAUSE_MARKS, Node::Pause))
}

/// Runs after the 12-hour clock, so `p.m.` has already been folded away.
pub fn compress_terminals(_: &Pass<'_>, nodes: Vec<Node>) -> Result<Vec<Node>> {
    Ok(split_trailing(nodes, &TERMINAL_MARKS, Node::Terminal))
}

fn split_trailing(nodes: Vec<Node>, marks: &[char], make: fn(char) -> Node) -> Vec<Node> {
    rewrite_tokens(nodes, |text| {
        let mut chars = text.chars();
        let last = chars.next_back()?;
        if chars.as_str().is_empty() || !marks.contains(&last) {
            return None;
        }
        Some(vec![Node::Token(chars.as_str().to_string()), make(last)])
    })
}
