//! Time-block decoding — one block token to a concrete range within a day.
//!
//! Three accepted forms:
//!
//! ```text
//! >HH:MM:SS            from this time to the end of the day
//! <HH:MM:SS            from the start of the day to this time
//! HH:MM:SS-HH:MM:SS    explicit sub-range
//! ```

use chrono::NaiveDateTime;

use crate::error::{ExclusionError, Result};
use crate::range::Range;

/// Decode one time-block token against a day's `[day_start, day_end)` bounds.
///
/// # Errors
///
/// `ExclusionError::Block` naming the block text for any malformed shape:
/// an unrecognized leading character, wrong field count, non-numeric
/// fields, a missing `-` separator for the range form, or a time of day
/// chrono rejects (e.g. hour 25).
pub fn range_from_block(
    block: &str,
    day_start: NaiveDateTime,
    day_end: NaiveDateTime,
) -> Result<Range> {
    let malformed = || ExclusionError::Block(block.to_owned());

    if let Some(rest) = block.strip_prefix('<') {
        let until = time_on(day_start, rest).ok_or_else(malformed)?;
        return Ok(Range::new(day_start, until));
    }

    if let Some(rest) = block.strip_prefix('>') {
        let from = time_on(day_start, rest).ok_or_else(malformed)?;
        return Ok(Range::new(from, day_end));
    }

    let (first, second) = block.split_once('-').ok_or_else(malformed)?;
    let from = time_on(day_start, first).ok_or_else(malformed)?;
    let until = time_on(day_start, second).ok_or_else(malformed)?;
    Ok(Range::new(from, until))
}

/// `day_start`'s calendar day at the given `HH:MM:SS`.
fn time_on(day_start: NaiveDateTime, hms: &str) -> Option<NaiveDateTime> {
    let (hh, mm, ss) = scan_hms(hms)?;
    day_start.date().and_hms_opt(hh, mm, ss)
}

/// Scan an `HH:MM:SS` triple: three `:`-separated fields of 1-2 digits.
/// Field values are left to the datetime constructor.
fn scan_hms(s: &str) -> Option<(u32, u32, u32)> {
    let mut fields = s.split(':');
    let hh = scan_field(fields.next()?)?;
    let mm = scan_field(fields.next()?)?;
    let ss = scan_field(fields.next()?)?;
    if fields.next().is_some() {
        return None;
    }
    Some((hh, mm, ss))
}

fn scan_field(field: &str) -> Option<u32> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
