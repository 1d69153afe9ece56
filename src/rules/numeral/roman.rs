//! Roman numerals.

use super::RomanNumeral;
use crate::engine::Pass;
use crate::rules::rewrite_tokens;
use crate::{Node, Result};

fn letter_value(c: char) -> Option<u64> {
    Some(match c {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => return None,
    })
}

/// Decode a Roman numeral with the subtractive rule.
///
/// Scans right to left keeping the largest letter value seen so far; a
/// letter smaller than that maximum is subtracted, anything else is added.
/// Non-canonical spellings are accepted (`IIII` is 4, `IC` is 99). Returns
/// `None` for empty input, letters outside `IVXLCDM`, and totals that are
/// not strictly positive.
pub fn decode(text: &str) -> Option<u64> {
    let mut total: i128 = 0;
    let mut max_seen = 0;
    for c in text.chars().rev() {
        let value = letter_value(c)?;
        if value < max_seen {
            total -= i128::from(value);
        } else {
            total += i128::from(value);
            max_seen = value;
        }
    }
    u64::try_from(total).ok().filter(|v| *v > 0)
}

pub fn compress(_: &Pass<'_>, nodes: Vec<Node>) -> Result<Vec<Node>> {
    Ok(rewrite_tokens(nodes, |text| RomanNumeral::parse(text).map(|numeral| vec![Node::RomanNumeral(numeral)])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_subtractive_forms() {
        let cases: &[(&str, u64)] = &[
            ("I", 1),
            ("IV", 4),
            ("IX", 9),
            ("XIV", 14),
            ("XL", 40),
            ("XC", 90),
            ("CD", 400),
            ("CM", 900),
            ("MCMXCIV", 1994),
            ("MMXXIV", 2024),
            ("IIII", 4),
        ];
        for (text, value) in cases {
            assert_eq!(decode(text), Some(*value), "decode({text})");
        }
    }

    #[test]
    fn rejects_non_roman_text() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("mmxxiv"), None);
        assert_eq!(decode("XIVa"), None);
        assert_eq!(decode("X1"), None);
    }

    #[test]
    fn bare_i_is_not_a_numeral() {
        assert!(RomanNumeral::parse("I").is_none());
        assert_eq!(RomanNumeral::parse("II").map(|r| r.value()), Some(2));
    }
}
