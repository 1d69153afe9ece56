//! Compressors, one module per family.
//!
//! Every compressor has the [`CompressFn`](crate::engine::CompressFn) shape:
//! it takes the node list by value and returns the rewritten list. Most of
//! them only look at plain `Token` nodes and replace each match in place;
//! [`rewrite_tokens`] covers that case.

pub mod noun;
pub mod numeral;
pub mod punctuation;
pub mod time;
pub mod token;

use crate::{Error, Kind, Node};

/// Replace every `Token` node for which `f` returns `Some` with the returned
/// nodes. Other nodes pass through untouched.
pub(crate) fn rewrite_tokens(nodes: Vec<Node>, mut f: impl FnMut(&str) -> Option<Vec<Node>>) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            Node::Token(text) => match f(&text) {
                Some(replacement) => out.extend(replacement),
                None => out.push(Node::Token(text)),
            },
            other => out.push(other),
        }
    }
    out
}

/// Error for a compressor helper handed a node it does not handle.
pub(crate) fn unexpected(kind: Kind, node: &Node) -> Error {
    Error::compression(kind, format!("{} node '{}'", node.kind(), node.written()))
}
