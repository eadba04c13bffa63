//! Tests for configuration-file parsing and combined set expansion.

use chrono::{NaiveDate, NaiveDateTime};
use downtime_core::{ExclusionError, ExclusionSet, Range};

fn dt(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

// December 2024: Mondays fall on the 2nd, 9th, 16th, 23rd, and 30th.
fn december() -> Range {
    Range::new(dt(2024, 12, 1, 0), dt(2025, 1, 1, 0))
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[test]
fn parse_skips_comments_and_blank_lines() {
    let set = ExclusionSet::parse(
        "# untrackable time\n\
         exc monday <9:00:00\n\
         \n\
         exc day off 2024-12-25\n",
    )
    .expect("configuration should parse");

    assert_eq!(set.len(), 2);
    assert_eq!(set.rules()[0].serialize(), "exc monday <9:00:00");
}

#[test]
fn first_bad_line_fails_the_whole_parse() {
    let err = ExclusionSet::parse(
        "exc monday <9:00:00\n\
         exc day maybe 2024-12-25\n\
         exc tuesday <9:00:00\n",
    )
    .unwrap_err();

    assert_eq!(err, ExclusionError::Syntax("exc day maybe 2024-12-25".to_owned()));
}

#[test]
fn empty_input_parses_to_an_empty_set() {
    let set = ExclusionSet::parse("# comments only\n\n").unwrap();
    assert!(set.is_empty());
    assert!(set.excluded_ranges(&december()).unwrap().is_empty());
}

#[test]
fn serialize_round_trips() {
    let text = "exc monday <9:00:00\nexc day on 2024-12-23\n";
    let set = ExclusionSet::parse(text).unwrap();
    assert_eq!(set.serialize(), text);
    assert_eq!(ExclusionSet::parse(&set.serialize()).unwrap(), set);
}

// ---------------------------------------------------------------------------
// Combined expansion
// ---------------------------------------------------------------------------

#[test]
fn excluded_ranges_merges_overlapping_rules() {
    // Two Monday rules with overlapping blocks collapse into one range per
    // Monday.
    let set = ExclusionSet::parse(
        "exc monday 09:00:00-11:00:00\n\
         exc monday 10:00:00-12:00:00\n",
    )
    .unwrap();

    let ranges = set
        .excluded_ranges(&Range::new(dt(2024, 12, 2, 0), dt(2024, 12, 9, 0)))
        .unwrap();

    assert_eq!(ranges, vec![Range::new(dt(2024, 12, 2, 9), dt(2024, 12, 2, 12))]);
}

#[test]
fn day_on_overrides_a_recurring_exclusion() {
    // Every Monday is excluded all day, except Dec 23 which is worked.
    let set = ExclusionSet::parse(
        "exc monday >0:00:00\n\
         exc day on 2024-12-23\n",
    )
    .unwrap();

    let ranges = set.excluded_ranges(&december()).unwrap();

    assert_eq!(ranges.len(), 4, "five Mondays minus one override");
    assert!(ranges.iter().all(|r| r.start != dt(2024, 12, 23, 0)));
    assert_eq!(ranges[0], Range::new(dt(2024, 12, 2, 0), dt(2024, 12, 3, 0)));
    assert_eq!(ranges[3], Range::new(dt(2024, 12, 30, 0), dt(2024, 12, 31, 0)));
}

#[test]
fn day_on_carves_a_partial_hole() {
    // The override day sits inside a longer excluded stretch; only that day
    // is re-included.
    let set = ExclusionSet::parse(
        "exc day off 2024-12-24\n\
         exc day off 2024-12-25\n\
         exc day off 2024-12-26\n\
         exc day on 2024-12-25\n",
    )
    .unwrap();

    let ranges = set.excluded_ranges(&december()).unwrap();

    assert_eq!(
        ranges,
        vec![
            Range::new(dt(2024, 12, 24, 0), dt(2024, 12, 25, 0)),
            Range::new(dt(2024, 12, 26, 0), dt(2024, 12, 27, 0)),
        ]
    );
}

#[test]
fn additive_rules_alone_exclude_nothing() {
    let set = ExclusionSet::parse("exc day on 2024-12-23\n").unwrap();
    assert!(set.excluded_ranges(&december()).unwrap().is_empty());
}

#[test]
fn expansion_failure_propagates_from_any_rule() {
    let set = ExclusionSet::parse(
        "exc monday <9:00:00\n\
         exc friday notatime\n",
    )
    .unwrap();

    let err = set.excluded_ranges(&december()).unwrap_err();
    assert_eq!(err, ExclusionError::Block("notatime".to_owned()));
}
