//! Range expansion — project a parsed rule onto a bounding range.

use chrono::{Datelike, Duration};

use crate::block;
use crate::calendar;
use crate::error::Result;
use crate::range::Range;
use crate::rule::Exclusion;

impl Exclusion {
    /// Expand this rule into the concrete ranges it covers within `bound`.
    ///
    /// - `exc day on <date>` / `exc day off <date>` yield the single day
    ///   range `[date, date+1day)` when it overlaps `bound`. At most one
    ///   range.
    /// - `exc <weekday> <block>...` yields one range per block token for
    ///   every day inside `bound` whose own weekday matches — partial first
    ///   and last days included. Blocks on one matched day are independent
    ///   and may overlap each other; nothing is merged or deduplicated, and
    ///   day ranges are not clipped to `bound`.
    ///
    /// A pure function of rule and bound: returns an empty vector (not an
    /// error) when nothing in `bound` matches, including the empty bound
    /// `start == end`. The walk is proportional to the number of days in
    /// `bound`, acceptable for reporting-scale windows.
    ///
    /// # Errors
    ///
    /// `ExclusionError::Block` or `ExclusionError::Date` when a time block
    /// or date token cannot be decoded. Values are decoded lazily, so a
    /// rule that parsed cleanly can still fail on its first expansion — and
    /// a bad block is never decoded at all while no day in `bound` matches.
    /// On failure the whole call fails; no partial ranges are returned.
    pub fn ranges(&self, bound: &Range) -> Result<Vec<Range>> {
        let tokens = self.tokens();
        let mut results = Vec::new();

        if tokens[1] == "day" && (tokens[2] == "on" || tokens[2] == "off") {
            let date = calendar::parse_date(&tokens[3])?;
            let (start, end) = calendar::day_bounds(date);
            let day = Range::new(start, end);
            if bound.overlaps(&day) {
                results.push(day);
            }
        } else if let Some(weekday) = calendar::day_of_week(&tokens[1]) {
            let mut cursor = bound.start;
            while cursor < bound.end {
                if cursor.weekday() == weekday {
                    let (day_start, day_end) = calendar::day_bounds(cursor.date());
                    for token in &tokens[2..] {
                        results.push(block::range_from_block(token, day_start, day_end)?);
                    }
                }
                cursor += Duration::days(1);
            }
        }

        Ok(results)
    }
}
