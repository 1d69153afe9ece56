//! Comma-grouped numerals.

use super::GroupedNumeral;
use crate::engine::Pass;
use crate::rules::rewrite_tokens;
use crate::{Node, Result};

pub fn compress(_: &Pass<'_>, nodes: Vec<Node>) -> Result<Vec<Node>> {
    Ok(rewrite_tokens(nodes, |text| {
        GroupedNumeral::parse(text).map(|grouped| vec![Node::GroupedNumeral(grouped)])
    }))
}
