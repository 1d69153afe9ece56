use crate::{CalendarDate, ClockTime, Context, Kind, Node, Options, Target, pronounce, pronounce_with, represent};
use std::collections::HashSet;

fn check_all(cases: &[(&str, &str)]) {
    for (input, expected) in cases {
        let out = pronounce(input).unwrap_or_else(|err| panic!("failed to pronounce '{input}': {err}"));
        assert_eq!(out, *expected, "input '{input}'");
    }
}

#[test]
fn calendar_date_examples() {
    check_all(&[
        ("17 Jan 2022", "January seventeenth, twenty twenty-two"),
        ("Jan 17 2022", "January seventeenth, twenty twenty-two"),
        ("2022 Jan 17", "January seventeenth, twenty twenty-two"),
        ("17th January 2022", "January seventeenth, twenty twenty-two"),
        ("17/01/2022", "January seventeenth, twenty twenty-two"),
        ("2022-01-17", "January seventeenth, twenty twenty-two"),
        ("1st May", "May first"),
        ("Dec 25", "December twenty-fifth"),
        ("4 July 1776", "July fourth, seventeen seventy-six"),
        ("1 Jan 2000", "January first, two thousand"),
        ("9 Nov 1905", "November ninth, nineteen hundred five"),
        ("11 Nov 1900", "November eleventh, nineteen hundred"),
        ("It ends 31 Dec 1999.", "It ends December thirty-first, nineteen ninety-nine."),
    ]);
}

#[test]
fn calendar_date_rejects_out_of_range_fields() {
    check_all(&[
        ("32 Jan 2022", "Thirty-two Jan two thousand twenty-two"),
        ("0 Jan", "Zero Jan"),
        ("17/13/2022", "17/13/2022"),
        ("17 jan 2022", "Seventeen jan two thousand twenty-two"),
    ]);
}

#[test]
fn clock_examples() {
    check_all(&[
        ("12:00 AM", "Midnight"),
        ("12:00 PM", "Noon"),
        ("7:30 PM", "Seven thirty in the evening"),
        ("7 pm!", "Seven o'clock in the evening!"),
        ("12:04 A.M.", "Twelve oh four in the early morning"),
        ("6:15 a.m.", "Six fifteen in the morning"),
        ("00:00", "Midnight"),
        ("13:01", "One oh one in the afternoon"),
        ("00:01", "Twelve oh one in the early morning"),
        ("01:00", "One o'clock in the early morning"),
        ("11:11", "Eleven eleven in the morning"),
        ("23:59", "Eleven fifty-nine in the evening"),
        ("7:30 is late", "Seven thirty in the morning is late"),
        ("24:00", "24:00"),
        ("13:00 PM", "One o'clock in the afternoon PM"),
    ]);
}

#[test]
fn clock_in_a_sentence() {
    check_all(&[
        ("The time is 7:30 PM.", "The time is seven thirty in the evening."),
        ("Meet at 7:30 PM, not 19:45.", "Meet at seven thirty in the evening, not seven forty-five in the evening."),
        ("Leave at 6 am. Arrive by 11:05.", "Leave at six o'clock in the morning. Arrive by eleven oh five in the morning."),
    ]);
}

#[test]
fn twelve_hour_clock_keeps_its_kind() {
    let seq = represent("at 7:30 PM and 19:30", &Context::default(), &Options::default()).unwrap();
    let kinds: Vec<Kind> = seq.iter().map(Node::kind).collect();
    assert_eq!(kinds, vec![Kind::Token, Kind::ClockTime12, Kind::Token, Kind::ClockTime24]);
    assert_eq!(seq.get(1).map(Node::to_string), seq.get(3).map(Node::to_string));
    assert_ne!(seq.get(1), seq.get(3), "same rendering, different kinds");
}

#[test]
fn full_sentence() {
    assert_eq!(
        pronounce("On 17 Jan 2022 at 7:30 PM, George VI paid 1,000.").unwrap(),
        "On January seventeenth, twenty twenty-two at seven thirty in the evening, George the Sixth paid one thousand."
    );
}

#[test]
fn regnal_names() {
    check_all(&[
        ("George VI met Elizabeth II.", "George the Sixth met Elizabeth the Second."),
        ("Louis XIV", "Louis the Fourteenth"),
        ("Henry VIII and I", "Henry the Eighth and I"),
        ("Charles III, king", "Charles the Third, king"),
        ("the george VI", "The george six"),
    ]);
}

#[test]
fn regnal_names_need_a_known_forename() {
    let context = Context { forenames: HashSet::new() };
    let out = pronounce_with("George VI", &context, &Options::default()).unwrap();
    assert_eq!(out, "George six");
}

#[test]
fn forenames_from_a_custom_source() {
    let context = Context::from_source(&["JACK", "JAMES", "JANE", "JAKE", "JILL", "JOHN"][..]);
    let options = Options { target: Target::Kind(Kind::Forename) };

    let seq = represent("Jack and Jill went up the hill.", &context, &options).unwrap();
    assert_eq!(seq.count_kind(Kind::Forename), 2);
    assert_eq!(seq.pronunciation().unwrap(), "Jack and Jill went up the hill.");

    let seq = represent("George and Jake", &context, &options).unwrap();
    assert_eq!(seq.with_kind(Kind::Forename), vec![&Node::Forename("Jake".into())]);
}

#[test]
fn field_ranges() {
    assert!(CalendarDate::new(1, 1, Some(9999)).is_some());
    assert!(CalendarDate::new(1, 1, Some(-9999)).is_some());
    assert!(CalendarDate::new(1, 1, Some(10000)).is_none());
    assert!(CalendarDate::new(1, 1, Some(-10000)).is_none());
    assert!(CalendarDate::new(31, 12, None).is_some());
    assert!(CalendarDate::new(0, 1, None).is_none());
    assert!(CalendarDate::new(1, 13, None).is_none());
    assert_eq!(CalendarDate::new(1, 1, Some(-9999)).and_then(|d| d.year()), Some(-9999));

    assert!(ClockTime::new(23, 59).is_some());
    assert!(ClockTime::new(24, 0).is_none());
    assert!(ClockTime::new(0, 60).is_none());
}

#[test]
fn dotted_meridiem_ends_without_a_terminal() {
    let seq = represent("Meet at 7 p.m.", &Context::default(), &Options::default()).unwrap();
    assert_eq!(seq.count_kind(Kind::Terminal), 0);
    assert_eq!(seq.pronunciation().unwrap(), "Meet at seven o'clock in the evening");
    assert_eq!(pronounce("Meet at 7 p.m..").unwrap(), "Meet at seven o'clock in the evening.");
}
