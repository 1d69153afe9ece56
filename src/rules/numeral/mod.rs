//! Numeric nodes: integers, comma-grouped numerals and Roman numerals.
//!
//! ```text
//! "-8,019,876"   ── grouping ──▶ GroupedNumeral ── integer ──▶ Integer
//! "1,234.5"      ── grouping ──▶ GroupedNumeral (kept: has a decimal part)
//! "007"          ── integer  ──▶ Integer (renders "seven")
//! "MMXXIV"       ── roman    ──▶ RomanNumeral (2024)
//! ```

pub mod grouping;
pub mod integer;
pub mod roman;


pub use roman::decode as decode_roman;

use crate::numerals::{NumeralForm, render_cardinal, render_decimal, spell_digits};
use crate::Result;

/// A whole number of any length, sign kept separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integer {
    negative: bool,
    /// ASCII digits without leading zeros (`"0"` for zero).
    digits: String,
}

impl Integer {
    /// Parse an optionally negative ASCII digit string. `-0` is zero; other
    /// scripts' digits (`１２３`, `٣`) are not numerals here.
    pub fn parse(text: &str) -> Option<Integer> {
        let caps = regex!(r"^(-)?([0-9]+)$").captures(text)?;
        Some(Integer::from_parts(caps.get(1).is_some(), &caps[2]))
    }

    /// `digits` must be ASCII digits.
    pub(crate) fn from_parts(negative: bool, digits: &str) -> Integer {
        let significant = digits.trim_start_matches('0');
        let digits = if significant.is_empty() { "0" } else { significant };
        Integer { negative: negative && digits != "0", digits: digits.to_string() }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Value as a machine integer, when it fits.
    pub fn value(&self) -> Option<i128> {
        let magnitude: i128 = self.digits.parse().ok()?;
        Some(if self.negative { -magnitude } else { magnitude })
    }

    pub fn render(&self) -> Result<String> {
        let words = spell_digits(&self.digits, NumeralForm::Cardinal)?;
        Ok(if self.negative { format!("minus {words}") } else { words })
    }

    pub fn written(&self) -> String {
        if self.negative { format!("-{}", self.digits) } else { self.digits.clone() }
    }
}

/// A comma-grouped numeral such as `8,019,876,189` or `-1,234.56`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedNumeral {
    negative: bool,
    /// Integer digits with the commas removed and leading zeros stripped.
    integer_part: String,
    decimal_part: Option<String>,
}

impl GroupedNumeral {
    /// Recognize `[-]d{1,3}(,ddd)+[.d+]`. Group widths other than three, a
    /// missing comma, non-ASCII digits, or stray characters give `None`.
    pub fn parse(text: &str) -> Option<GroupedNumeral> {
        let caps = regex!(r"^(-)?([0-9]{1,3}(?:,[0-9]{3})+)(?:\.([0-9]+))?$").captures(text)?;
        let digits: String = caps[2].chars().filter(|c| *c != ',').collect();
        let significant = digits.trim_start_matches('0');
        Some(GroupedNumeral {
            negative: caps.get(1).is_some(),
            integer_part: if significant.is_empty() { "0".to_string() } else { significant.to_string() },
            decimal_part: caps.get(3).map(|m| m.as_str().to_string()),
        })
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn integer_part(&self) -> &str {
        &self.integer_part
    }

    pub fn decimal_part(&self) -> Option<&str> {
        self.decimal_part.as_deref()
    }

    pub fn render(&self) -> Result<String> {
        render_decimal(self.negative, &self.integer_part, self.decimal_part.as_deref())
    }

    /// Regrouped source form: `-123456.7` → `-123,456.7`.
    pub fn written(&self) -> String {
        let mut out = String::new();
        if self.negative {
            out.push('-');
        }
        let len = self.integer_part.len();
        for (i, c) in self.integer_part.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        if let Some(decimal) = &self.decimal_part {
            out.push('.');
            out.push_str(decimal);
        }
        out
    }
}

/// A Roman numeral token and its decoded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomanNumeral {
    text: String,
    value: u64,
}

impl RomanNumeral {
    /// Accepts tokens made only of `I V X L C D M` that decode to a positive
    /// value. The lone pronoun `I` is never a numeral.
    pub fn parse(text: &str) -> Option<RomanNumeral> {
        if text == "I" {
            return None;
        }
        let value = roman::decode(text)?;
        Some(RomanNumeral { text: text.to_string(), value })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn render(&self) -> Result<String> {
        Ok(render_cardinal(self.value.into()))
    }
}
