//! Calendar dates.
//!
//! At each position the longest window of consecutive plain tokens is tried
//! first, and the first window that forms a valid date wins:
//!
//! ```text
//! 3 tokens   17 Jan 2022 | Jan 17th 2022 | 2022 January 17
//! 2 tokens   17th January | Jan 17
//! 1 token    17/01/2022 | 17-Jan-2022 | 2022.01.17
//! ```
//!
//! Days are one or two digits or an ordinal numeral (`1st` … `31st`). Month
//! names are Titlecase, full or three letters. Years are exactly four digits.

use super::CalendarDate;
use crate::engine::Pass;
use crate::numerals::ordinal_numeral;
use crate::{Node, Result};
use chrono::Month;

const MAX_WINDOW: usize = 3;

pub fn compress(_: &Pass<'_>, nodes: Vec<Node>) -> Result<Vec<Node>> {
    let mut out = Vec::with_capacity(nodes.len());
    let mut i = 0;
    while i < nodes.len() {
        let window = token_window(&nodes[i..]);
        let longest = (1..=window.len()).rev().find_map(|width| Some((width, match_window(&window[..width])?)));
        match longest {
            Some((width, date)) => {
                out.push(Node::CalendarDate(date));
                i += width;
            }
            None => {
                out.push(nodes[i].clone());
                i += 1;
            }
        }
    }
    Ok(out)
}

/// Text of the leading run of plain tokens, at most `MAX_WINDOW` long.
fn token_window(nodes: &[Node]) -> Vec<&str> {
    nodes
        .iter()
        .take(MAX_WINDOW)
        .map_while(|node| match node {
            Node::Token(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

fn match_window(tokens: &[&str]) -> Option<CalendarDate> {
    match *tokens {
        [first, second, third] => {
            let dmy = || CalendarDate::new(parse_day(first)?, parse_month_name(second)?, Some(parse_year(third)?));
            let mdy = || CalendarDate::new(parse_day(second)?, parse_month_name(first)?, Some(parse_year(third)?));
            let ymd = || CalendarDate::new(parse_day(third)?, parse_month_name(second)?, Some(parse_year(first)?));
            dmy().or_else(mdy).or_else(ymd)
        }
        [first, second] => {
            let dm = || CalendarDate::new(parse_day(first)?, parse_month_name(second)?, None);
            let md = || CalendarDate::new(parse_day(second)?, parse_month_name(first)?, None);
            dm().or_else(md)
        }
        [single] => match_single_token(single),
        _ => None,
    }
}

/// `d/m/yyyy` (day first) or `yyyy/m/d` (year first), with `/`, `-` or `.`
/// as separators and the month as digits or a name.
fn match_single_token(text: &str) -> Option<CalendarDate> {
    let day_first = regex!(r"^([0-9]{1,2})[/.\-]([0-9]{1,2}|[A-Z][a-z]{2,8})[/.\-]([0-9]{4})$");
    if let Some(caps) = day_first.captures(text) {
        return CalendarDate::new(caps[1].parse().ok()?, parse_month(&caps[2])?, Some(caps[3].parse().ok()?));
    }
    let caps = regex!(r"^([0-9]{4})[/.\-]([0-9]{1,2}|[A-Z][a-z]{2,8})[/.\-]([0-9]{1,2})$").captures(text)?;
    CalendarDate::new(caps[3].parse().ok()?, parse_month(&caps[2])?, Some(caps[1].parse().ok()?))
}

/// `7`, `07`, `7th`. Ordinal suffixes must be the right one for the number.
fn parse_day(text: &str) -> Option<u32> {
    if regex!(r"^[0-9]{1,2}$").is_match(text) {
        return text.parse().ok();
    }
    let caps = regex!(r"^([0-9]{1,2})(?:st|nd|rd|th)$").captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    (ordinal_numeral(day) == text).then_some(day)
}

fn parse_month(text: &str) -> Option<u32> {
    if text.bytes().all(|b| b.is_ascii_digit()) { text.parse().ok() } else { parse_month_name(text) }
}

/// `January` or `Jan` → 1. Case-sensitive.
fn parse_month_name(text: &str) -> Option<u32> {
    (1..=12u8).find_map(|number| {
        let month = Month::try_from(number).ok()?;
        let name = month.name();
        (text == name || text == &name[..3]).then_some(u32::from(number))
    })
}

fn parse_year(text: &str) -> Option<i32> {
    regex!(r"^[0-9]{4}$").is_match(text).then(|| text.parse().ok()).flatten()
}
