//! Bare integers, plus promotion of grouped numerals without a decimal part.

use super::Integer;
use crate::engine::Pass;
use crate::rules::unexpected;
use crate::{Kind, Node, Result};

pub fn compress(_: &Pass<'_>, nodes: Vec<Node>) -> Result<Vec<Node>> {
    nodes
        .into_iter()
        .map(|node| match node {
            Node::Token(text) => Ok(Integer::parse(&text).map(Node::Integer).unwrap_or(Node::Token(text))),
            Node::GroupedNumeral(ref grouped) if grouped.decimal_part().is_none() => promote(&node),
            other => Ok(other),
        })
        .collect()
}

/// `GroupedNumeral` without decimals → `Integer` with the same digits.
fn promote(node: &Node) -> Result<Node> {
    match node {
        Node::GroupedNumeral(grouped) if grouped.decimal_part().is_none() => {
            Ok(Node::Integer(Integer::from_parts(grouped.is_negative(), grouped.integer_part())))
        }
        other => Err(unexpected(Kind::Integer, other)),
    }
}
