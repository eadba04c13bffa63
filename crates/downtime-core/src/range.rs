//! Half-open datetime ranges and range combination.
//!
//! [`Range`] is the currency of this crate: every expansion produces a list
//! of `[start, end)` ranges. The combination helpers merge overlapping
//! coverage and punch holes for re-included time; both are simple sorted
//! sweeps, adequate for reporting-scale inputs.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A half-open datetime range `[start, end)`.
///
/// A range with `start == end` is empty and carries no time. Every range
/// this crate produces satisfies `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Range {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Range {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// True when the range carries no time.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Two ranges overlap iff their open intersection is non-empty.
    ///
    /// Adjacent ranges (one ends exactly where the other starts) do not
    /// overlap, and an empty range overlaps nothing.
    pub fn overlaps(&self, other: &Range) -> bool {
        self.start.max(other.start) < self.end.min(other.end)
    }
}

/// Merge overlapping or adjacent ranges into a sorted, non-overlapping list.
///
/// Empty ranges are dropped.
pub fn merge_ranges(mut ranges: Vec<Range>) -> Vec<Range> {
    ranges.retain(|r| !r.is_empty());
    ranges.sort_by_key(|r| (r.start, r.end));

    let mut merged: Vec<Range> = Vec::new();
    for range in ranges {
        if let Some(last) = merged.last_mut() {
            if range.start <= last.end {
                // Overlapping or adjacent — extend the current range.
                last.end = last.end.max(range.end);
                continue;
            }
        }
        merged.push(range);
    }

    merged
}

/// Remove the coverage of `holes` from `base`.
///
/// Neither input needs to be sorted or disjoint; both are merged first.
/// Returns the uncovered remainder of `base`, sorted and non-overlapping.
pub fn subtract_ranges(base: Vec<Range>, holes: Vec<Range>) -> Vec<Range> {
    let base = merge_ranges(base);
    let holes = merge_ranges(holes);

    let mut results = Vec::new();
    for range in base {
        let mut cursor = range.start;
        for hole in holes.iter().filter(|h| h.overlaps(&range)) {
            if cursor < hole.start {
                results.push(Range::new(cursor, hole.start));
            }
            cursor = cursor.max(hole.end);
        }
        if cursor < range.end {
            results.push(Range::new(cursor, range.end));
        }
    }

    results
}
