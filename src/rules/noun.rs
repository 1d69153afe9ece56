//! Given names and regnal names.
//!
//! ```text
//! "George" "VI"  ── forename, roman ──▶ Forename, RomanNumeral ── regnal ──▶ "George the Sixth"
//! ```

use super::{rewrite_tokens, unexpected};
use crate::engine::Pass;
use crate::engine::render::capitalize_first;
use crate::numerals::render_ordinal;
use crate::{Kind, Node, Result, RomanNumeral};

/// A forename followed by its regnal number, e.g. `Elizabeth II`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegnalName {
    forename: String,
    numeral: RomanNumeral,
}

impl RegnalName {
    pub fn forename(&self) -> &str {
        &self.forename
    }

    pub fn numeral(&self) -> &RomanNumeral {
        &self.numeral
    }

    /// `<name> the <Ordinal>`, with the ordinal's first letter upper-cased.
    pub fn render(&self) -> Result<String> {
        let ordinal = capitalize_first(&render_ordinal(self.numeral.value().into()));
        Ok(format!("{} the {ordinal}", self.forename))
    }

    pub fn written(&self) -> String {
        format!("{} {}", self.forename, self.numeral.text())
    }
}

/// Titlecase alphabetic tokens whose upper-cased form is a known forename.
pub fn compress_forenames(pass: &Pass<'_>, nodes: Vec<Node>) -> Result<Vec<Node>> {
    let names = &pass.context.forenames;
    Ok(rewrite_tokens(nodes, |text| {
        (is_titlecase_word(text) && names.contains(&text.to_uppercase())).then(|| vec![Node::Forename(text.into())])
    }))
}

fn is_titlecase_word(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let rest = chars.as_str();
    !rest.is_empty() && first.is_uppercase() && rest.chars().all(|c| c.is_alphabetic() && c.is_lowercase())
}

/// Fold every `Forename` directly followed by a `RomanNumeral`.
pub fn compress_regnal_names(_: &Pass<'_>, nodes: Vec<Node>) -> Result<Vec<Node>> {
    let mut out = Vec::with_capacity(nodes.len());
    let mut iter = nodes.into_iter().peekable();
    while let Some(node) = iter.next() {
        let folds = node.kind() == Kind::Forename;
        match iter.next_if(|next| folds && next.kind() == Kind::RomanNumeral) {
            Some(numeral) => out.push(fold_regnal(node, numeral)?),
            None => out.push(node),
        }
    }
    Ok(out)
}

fn fold_regnal(forename: Node, numeral: Node) -> Result<Node> {
    match (forename, numeral) {
        (Node::Forename(forename), Node::RomanNumeral(numeral)) => {
            Ok(Node::RegnalName(RegnalName { forename, numeral }))
        }
        (Node::Forename(_), other) | (other, _) => Err(unexpected(Kind::RegnalName, &other)),
    }
}
