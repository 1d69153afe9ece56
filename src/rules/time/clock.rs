//! 12- and 24-hour clock times.
//!
//! The 12-hour pass folds `hour[:minute]` plus a meridiem token into one
//! node; it runs before terminal punctuation is split off, so the meridiem
//! token may still carry the sentence's closing mark:
//!
//! ```text
//! "7:30" "p.m."   → ClockTime12(19:30)
//! "7:30" "PM."    → ClockTime12(19:30) Terminal('.')
//! "7:30" "p.m.."  → ClockTime12(19:30) Terminal('.')
//! "7:30" "pm!"    → ClockTime12(19:30) Terminal('!')
//! ```
//!
//! A sentence ending on the dotted form (`at 7 p.m.`) gets no `Terminal`: the
//! final `.` is read as part of the abbreviation.
//!
//! The 24-hour pass takes whatever `H:MM` tokens are left.

use super::ClockTime;
use crate::engine::Pass;
use crate::rules::rewrite_tokens;
use crate::{Node, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

pub fn compress_twelve_hour(_: &Pass<'_>, nodes: Vec<Node>) -> Result<Vec<Node>> {
    let mut out = Vec::with_capacity(nodes.len());
    let mut iter = nodes.into_iter().peekable();
    while let Some(node) = iter.next() {
        let folded = match (&node, iter.peek()) {
            (Node::Token(time), Some(Node::Token(meridiem))) => fold_twelve_hour(time, meridiem),
            _ => None,
        };
        match folded {
            Some((clock, terminal)) => {
                iter.next();
                out.push(Node::ClockTime12(clock));
                out.extend(terminal.map(Node::Terminal));
            }
            None => out.push(node),
        }
    }
    Ok(out)
}

pub fn compress_twenty_four_hour(_: &Pass<'_>, nodes: Vec<Node>) -> Result<Vec<Node>> {
    Ok(rewrite_tokens(nodes, |text| {
        let caps = regex!(r"^([0-9]|[01][0-9]|2[0-3]):([0-5][0-9])$").captures(text)?;
        let clock = ClockTime::new(caps[1].parse().ok()?, caps[2].parse().ok()?)?;
        Some(vec![Node::ClockTime24(clock)])
    }))
}

/// 12 a.m. is hour 0, 12 p.m. stays 12, other p.m. hours add 12.
fn fold_twelve_hour(time: &str, meridiem: &str) -> Option<(ClockTime, Option<char>)> {
    let caps = regex!(r"^([0-9]|0[0-9]|1[0-2])(?::([0-5][0-9]))?$").captures(time)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let (meridiem, terminal) = parse_meridiem(meridiem)?;
    let hour = match (meridiem, hour) {
        (Meridiem::Am, 12) => 0,
        (Meridiem::Am, h) | (Meridiem::Pm, h @ 12) => h,
        (Meridiem::Pm, h) => h + 12,
    };
    Some((ClockTime::new(hour, minute)?, terminal))
}

/// `am`, `AM`, `a.m`, `a.m.`, `A.M.` … plus an optional closing mark.
///
/// On the undotted form a trailing `.` is sentence punctuation (`PM.`); on the
/// dotted form it belongs to the abbreviation and a second `.` is needed.
fn parse_meridiem(text: &str) -> Option<(Meridiem, Option<char>)> {
    let caps = regex!(r"^([AaPp])(\.)?[Mm](\.)?([.!?])?$").captures(text)?;
    let meridiem = if caps[1].eq_ignore_ascii_case("a") { Meridiem::Am } else { Meridiem::Pm };
    let dotted = caps.get(2).is_some();
    let trailing_dot = caps.get(3).is_some();
    let mark = caps.get(4).and_then(|m| m.as_str().chars().next());
    let terminal = match (dotted, trailing_dot, mark) {
        (false, true, None) => Some('.'),
        (false, true, Some(_)) => return None,
        (_, _, mark) => mark,
    };
    Some((meridiem, terminal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meridiem_forms() {
        let cases: &[(&str, Option<(Meridiem, Option<char>)>)] = &[
            ("am", Some((Meridiem::Am, None))),
            ("AM", Some((Meridiem::Am, None))),
            ("a.m", Some((Meridiem::Am, None))),
            ("a.m.", Some((Meridiem::Am, None))),
            ("A.M.", Some((Meridiem::Am, None))),
            ("am.", Some((Meridiem::Am, Some('.')))),
            ("p.m..", Some((Meridiem::Pm, Some('.')))),
            ("pm!", Some((Meridiem::Pm, Some('!')))),
            ("P.M.?", Some((Meridiem::Pm, Some('?')))),
            ("pm..", None),
            ("pmx", None),
            ("a", None),
            ("m", None),
        ];
        for (text, expected) in cases {
            assert_eq!(parse_meridiem(text), *expected, "meridiem '{text}'");
        }
    }

    #[test]
    fn twelve_hour_arithmetic() {
        let hm = |time: &str, meridiem: &str| {
            fold_twelve_hour(time, meridiem).map(|(clock, _)| (clock.hour(), clock.minute()))
        };
        assert_eq!(hm("12:00", "AM"), Some((0, 0)));
        assert_eq!(hm("12:04", "A.M."), Some((0, 4)));
        assert_eq!(hm("12", "pm"), Some((12, 0)));
        assert_eq!(hm("7:30", "PM"), Some((19, 30)));
        assert_eq!(hm("07", "am"), Some((7, 0)));
        assert_eq!(hm("11:59", "p.m."), Some((23, 59)));
        assert_eq!(hm("13:00", "PM"), None);
        assert_eq!(hm("7:60", "PM"), None);
        assert_eq!(hm("7:5", "PM"), None);
        assert_eq!(hm("7:30", "later"), None);
    }
}
