//! Numbers to English words.
//!
//! Everything here is a pure function over digit strings or integers. The
//! recursion works on digit strings rather than machine integers so that
//! arbitrarily long digit runs from the input can be spelled (up to the
//! `undecillion` group, i.e. 39 digits):
//!
//! ```text
//! "394234873200"
//!   └─ group = (12 - 1) / 3 * 3 = 9  → "billion"
//!        head "394"        → three hundred ninety-four
//!        rest "234873200"  → recurse (group 6, "million") ...
//! ```
//!
//! Short-scale names only. The multiplier in front of a group name is always
//! cardinal; only the final word carries the ordinal form.

use crate::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Which base table the last word of a rendering comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralForm {
    Cardinal,
    Ordinal,
}

/// 0..=19 and the round tens, as `(cardinal, ordinal)`.
static BASE_WORDS: Lazy<HashMap<u8, (&'static str, &'static str)>> = Lazy::new(|| {
    HashMap::from([
        (0, ("zero", "zeroth")),
        (1, ("one", "first")),
        (2, ("two", "second")),
        (3, ("three", "third")),
        (4, ("four", "fourth")),
        (5, ("five", "fifth")),
        (6, ("six", "sixth")),
        (7, ("seven", "seventh")),
        (8, ("eight", "eighth")),
        (9, ("nine", "ninth")),
        (10, ("ten", "tenth")),
        (11, ("eleven", "eleventh")),
        (12, ("twelve", "twelfth")),
        (13, ("thirteen", "thirteenth")),
        (14, ("fourteen", "fourteenth")),
        (15, ("fifteen", "fifteenth")),
        (16, ("sixteen", "sixteenth")),
        (17, ("seventeen", "seventeenth")),
        (18, ("eighteen", "eighteenth")),
        (19, ("nineteen", "nineteenth")),
        (20, ("twenty", "twentieth")),
        (30, ("thirty", "thirtieth")),
        (40, ("forty", "fortieth")),
        (50, ("fifty", "fiftieth")),
        (60, ("sixty", "sixtieth")),
        (70, ("seventy", "seventieth")),
        (80, ("eighty", "eightieth")),
        (90, ("ninety", "ninetieth")),
    ])
});

/// Group names keyed by the number of digits to their right.
static LARGE_GROUPS: Lazy<HashMap<usize, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (3, "thousand"),
        (6, "million"),
        (9, "billion"),
        (12, "trillion"),
        (15, "quadrillion"),
        (18, "quintillion"),
        (21, "sextillion"),
        (24, "septillion"),
        (27, "octillion"),
        (30, "nonillion"),
        (33, "decillion"),
        (36, "undecillion"),
    ])
});

/// Longest digit string with a group name.
pub const MAX_DIGITS: usize = 39;

fn base_word(value: u8, form: NumeralForm) -> &'static str {
    let (cardinal, ordinal) = BASE_WORDS[&value];
    match form {
        NumeralForm::Cardinal => cardinal,
        NumeralForm::Ordinal => ordinal,
    }
}

fn digit(c: u8) -> u8 {
    c - b'0'
}

/// Spell a digit string in the requested form.
///
/// Leading zeros are ignored (`"007"` is seven). Fails for empty input,
/// non-digit characters, and anything longer than [`MAX_DIGITS`].
pub fn spell_digits(digits: &str, form: NumeralForm) -> Result<String> {
    if digits.is_empty() {
        return Err(Error::pronunciation(digits, "no digits"));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::pronunciation(digits, "not a digit string"));
    }
    let significant = digits.trim_start_matches('0');
    if significant.len() > MAX_DIGITS {
        return Err(Error::pronunciation(digits, "larger than the largest named group"));
    }
    Ok(spell_significant(significant, form))
}

/// `digits` holds ASCII digits only, without leading zeros, and at most
/// `MAX_DIGITS` of them. Empty means zero.
fn spell_significant(digits: &str, form: NumeralForm) -> String {
    let bytes = digits.as_bytes();
    match bytes.len() {
        0 => base_word(0, form).to_string(),
        1 => base_word(digit(bytes[0]), form).to_string(),
        2 => {
            let value = digit(bytes[0]) * 10 + digit(bytes[1]);
            if BASE_WORDS.contains_key(&value) {
                base_word(value, form).to_string()
            } else {
                let tens = base_word(value / 10 * 10, NumeralForm::Cardinal);
                format!("{tens}-{}", base_word(value % 10, form))
            }
        }
        3 => {
            let head = base_word(digit(bytes[0]), NumeralForm::Cardinal);
            let rest = digits[1..].trim_start_matches('0');
            match (rest.is_empty(), form) {
                (true, NumeralForm::Cardinal) => format!("{head} hundred"),
                (true, NumeralForm::Ordinal) => format!("{head} hundredth"),
                (false, _) => format!("{head} hundred {}", spell_significant(rest, form)),
            }
        }
        len => {
            let group = (len - 1) / 3 * 3;
            let name = LARGE_GROUPS[&group];
            let (head, rest) = digits.split_at(len - group);
            let multiplier = spell_significant(head, NumeralForm::Cardinal);
            let rest = rest.trim_start_matches('0');
            match (rest.is_empty(), form) {
                (true, NumeralForm::Cardinal) => format!("{multiplier} {name}"),
                (true, NumeralForm::Ordinal) => format!("{multiplier} {name}th"),
                (false, _) => format!("{multiplier} {name} {}", spell_significant(rest, form)),
            }
        }
    }
}

pub fn render_cardinal(value: u128) -> String {
    spell_significant(value.to_string().trim_start_matches('0'), NumeralForm::Cardinal)
}

pub fn render_ordinal(value: u128) -> String {
    spell_significant(value.to_string().trim_start_matches('0'), NumeralForm::Ordinal)
}

/// Spoken year.
///
/// Four-digit magnitudes are read in pairs (`1984` → nineteen eighty-four),
/// with two exceptions: `200x` is read as a thousand count (`2008` → two
/// thousand eight) and a zero in the tens place gives a hundred count (`1904`
/// → nineteen hundred four). Negative years get a trailing ` BC`.
pub fn render_year(year: i32) -> String {
    let magnitude = year.unsigned_abs();
    let spoken = if (1000..=9999).contains(&magnitude) {
        let digits = magnitude.to_string();
        let (high, low) = (magnitude / 100, magnitude % 100);
        let last = magnitude % 10;
        if digits.starts_with("200") {
            match last {
                0 => "two thousand".to_string(),
                _ => format!("two thousand {}", render_cardinal(last.into())),
            }
        } else if low < 10 {
            match last {
                0 => format!("{} hundred", render_cardinal(high.into())),
                _ => format!("{} hundred {}", render_cardinal(high.into()), render_cardinal(last.into())),
            }
        } else {
            format!("{} {}", render_cardinal(high.into()), render_cardinal(low.into()))
        }
    } else {
        render_cardinal(magnitude.into())
    };
    if year < 0 { format!("{spoken} BC") } else { spoken }
}

/// Spoken decimal number: optional `minus`, the integer part as a cardinal,
/// then `point` and one cardinal word per fractional digit.
///
/// ```text
/// (true, "1234", Some("05")) → minus one thousand two hundred thirty-four point zero five
/// ```
pub fn render_decimal(negative: bool, integer: &str, fraction: Option<&str>) -> Result<String> {
    let mut words = Vec::new();
    if negative {
        words.push("minus".to_string());
    }
    words.push(spell_digits(integer, NumeralForm::Cardinal)?);
    if let Some(fraction) = fraction {
        words.push("point".to_string());
        for c in fraction.chars() {
            let d = c.to_digit(10).ok_or_else(|| Error::pronunciation(fraction, "not a digit string"))?;
            words.push(base_word(d as u8, NumeralForm::Cardinal).to_string());
        }
    }
    Ok(words.join(" "))
}

/// Written ordinal numeral: `1` → `1st`, `12` → `12th`, `22` → `22nd`.
pub fn ordinal_numeral(value: u32) -> String {
    let suffix = match (value % 100, value % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{value}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinals() {
        let cases: &[(u128, &str)] = &[
            (0, "zero"),
            (2, "two"),
            (13, "thirteen"),
            (20, "twenty"),
            (21, "twenty-one"),
            (99, "ninety-nine"),
            (100, "one hundred"),
            (101, "one hundred one"),
            (110, "one hundred ten"),
            (999, "nine hundred ninety-nine"),
            (1000, "one thousand"),
            (1001, "one thousand one"),
            (2024, "two thousand twenty-four"),
            (10_000, "ten thousand"),
            (100_000, "one hundred thousand"),
            (1_000_000, "one million"),
            (1_000_001, "one million one"),
            (
                394_234_873_200,
                "three hundred ninety-four billion two hundred thirty-four million eight hundred seventy-three \
                 thousand two hundred",
            ),
        ];
        for (value, expected) in cases {
            assert_eq!(render_cardinal(*value), *expected, "cardinal of {value}");
        }
    }

    #[test]
    fn ordinals() {
        let cases: &[(u128, &str)] = &[
            (0, "zeroth"),
            (1, "first"),
            (2, "second"),
            (3, "third"),
            (5, "fifth"),
            (8, "eighth"),
            (9, "ninth"),
            (12, "twelfth"),
            (20, "twentieth"),
            (21, "twenty-first"),
            (42, "forty-second"),
            (100, "one hundredth"),
            (101, "one hundred first"),
            (1000, "one thousandth"),
            (2000, "two thousandth"),
            (1_000_003, "one million third"),
        ];
        for (value, expected) in cases {
            assert_eq!(render_ordinal(*value), *expected, "ordinal of {value}");
        }
    }

    #[test]
    fn thirty_nine_nines() {
        let nines = "9".repeat(39);
        let spoken = spell_digits(&nines, NumeralForm::Cardinal).unwrap();
        assert!(spoken.starts_with("nine hundred ninety-nine undecillion nine hundred ninety-nine decillion"));
        assert!(spoken.ends_with("thousand nine hundred ninety-nine"));

        let error = spell_digits(&"9".repeat(40), NumeralForm::Cardinal).unwrap_err();
        assert!(matches!(error, Error::Pronunciation { .. }));
    }

    #[test]
    fn spell_digits_ignores_leading_zeros() {
        assert_eq!(spell_digits("007", NumeralForm::Cardinal).unwrap(), "seven");
        assert_eq!(spell_digits("000", NumeralForm::Cardinal).unwrap(), "zero");
        assert_eq!(spell_digits("0001000", NumeralForm::Ordinal).unwrap(), "one thousandth");
        assert_eq!(spell_digits(&format!("{}1", "0".repeat(45)), NumeralForm::Cardinal).unwrap(), "one");
    }

    #[test]
    fn spell_digits_rejects_bad_input() {
        assert!(spell_digits("", NumeralForm::Cardinal).is_err());
        assert!(spell_digits("12a", NumeralForm::Cardinal).is_err());
        assert!(spell_digits("-12", NumeralForm::Cardinal).is_err());
    }

    #[test]
    fn years() {
        let cases: &[(i32, &str)] = &[
            (1900, "nineteen hundred"),
            (1901, "nineteen hundred one"),
            (1910, "nineteen ten"),
            (1984, "nineteen eighty-four"),
            (2000, "two thousand"),
            (2001, "two thousand one"),
            (2010, "twenty ten"),
            (2022, "twenty twenty-two"),
            (2024, "twenty twenty-four"),
            (2100, "twenty-one hundred"),
            (476, "four hundred seventy-six"),
            (-44, "forty-four BC"),
            (-1200, "twelve hundred BC"),
        ];
        for (year, expected) in cases {
            assert_eq!(render_year(*year), *expected, "year {year}");
        }
    }

    #[test]
    fn decimals() {
        assert_eq!(
            render_decimal(false, "123456", None).unwrap(),
            "one hundred twenty-three thousand four hundred fifty-six"
        );
        assert_eq!(render_decimal(true, "1", Some("05")).unwrap(), "minus one point zero five");
        assert!(render_decimal(false, "1", Some("5x")).is_err());
    }

    #[test]
    fn ordinal_numerals() {
        let cases: &[(u32, &str)] = &[
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (23, "23rd"),
            (31, "31st"),
            (111, "111th"),
        ];
        for (value, expected) in cases {
            assert_eq!(ordinal_numeral(*value), *expected);
        }
    }
}
