//! Whitespace tokenizer, the first pass of every build.

use super::unexpected;
use crate::engine::Pass;
use crate::{Kind, Node, Result};

/// Split the raw text on whitespace into `Token` nodes.
///
/// The tokenizer starts from nothing; being handed existing nodes means it
/// was scheduled twice or after another pass.
pub fn tokenize(pass: &Pass<'_>, nodes: Vec<Node>) -> Result<Vec<Node>> {
    if let Some(node) = nodes.first() {
        return Err(unexpected(Kind::Token, node));
    }
    Ok(pass.text.split_whitespace().map(|word| Node::Token(word.to_string())).collect())
}
