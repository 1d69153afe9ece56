//! Chronometry: calendar dates and clock times.
//!
//! Dates and clocks only check field ranges. `30 Feb` is a valid
//! `CalendarDate`; nothing here knows about month lengths.

pub mod calendar_date;
pub mod clock;

#[cfg(test)]
mod tests;

use crate::Result;
use crate::numerals::{render_cardinal, render_ordinal, render_year};
use chrono::{Month, NaiveTime, Timelike};

/// Day, month and optional year. Ranges: day 1–31, month 1–12, year
/// -9999–9999.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    day: u8,
    month: Month,
    year: Option<i16>,
}

impl CalendarDate {
    /// `None` when any field is out of range.
    pub fn new(day: u32, month: u32, year: Option<i32>) -> Option<CalendarDate> {
        let day = u8::try_from(day).ok().filter(|d| (1..=31).contains(d))?;
        let month = u8::try_from(month).ok().and_then(|m| Month::try_from(m).ok())?;
        let year = match year {
            Some(year) => Some(i16::try_from(year).ok().filter(|y| (-9999..=9999).contains(y))?),
            None => None,
        };
        Some(CalendarDate { day, month, year })
    }

    pub fn day(&self) -> u32 {
        self.day.into()
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> Option<i32> {
        self.year.map(i32::from)
    }

    /// `January seventeenth, twenty twenty-two`.
    pub fn render(&self) -> Result<String> {
        let mut out = format!("{} {}", self.month.name(), render_ordinal(self.day.into()));
        if let Some(year) = self.year {
            out.push_str(", ");
            out.push_str(&render_year(year.into()));
        }
        Ok(out)
    }

    pub fn written(&self) -> String {
        match self.year {
            Some(year) => format!("{} {} {}", self.day, self.month.name(), year),
            None => format!("{} {}", self.day, self.month.name()),
        }
    }
}

/// A time of day, minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    time: NaiveTime,
}

impl ClockTime {
    /// Hour 0–23, minute 0–59.
    pub fn new(hour: u32, minute: u32) -> Option<ClockTime> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(|time| ClockTime { time })
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn render(&self) -> String {
        speak_clock(self.hour(), self.minute())
    }

    pub fn written(&self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Shared phrasing for 12- and 24-hour clocks.
///
/// ```text
/// 00:00 → midnight          12:00 → noon
/// 07:00 → seven o'clock in the morning
/// 13:05 → one oh five in the afternoon
/// 23:59 → eleven fifty-nine in the evening
/// ```
pub fn speak_clock(hour: u32, minute: u32) -> String {
    let hour_word = render_cardinal(match hour % 12 {
        0 => 12,
        h => h.into(),
    });
    let period = match hour {
        0..6 => "in the early morning",
        6..12 => "in the morning",
        12..18 => "in the afternoon",
        _ => "in the evening",
    };
    match (hour, minute) {
        (0, 0) => "midnight".to_string(),
        (12, 0) => "noon".to_string(),
        (_, 0) => format!("{hour_word} o'clock {period}"),
        (_, 1..=9) => format!("{hour_word} oh {} {period}", render_cardinal(minute.into())),
        _ => format!("{hour_word} {} {period}", render_cardinal(minute.into())),
    }
}
