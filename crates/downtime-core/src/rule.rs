//! Exclusion rule parsing and serialization.
//!
//! An exclusion represents untrackable time such as holidays, weekends,
//! evenings and lunch. Each rule is one line of configuration text:
//!
//! ```text
//! exc day on <date>
//! exc day off <date>
//! exc <weekday> <block> [<block> ...]
//! ```
//!
//! Parsing validates syntax only and keeps the tokens verbatim. Date and
//! time-block values are decoded lazily when the rule is expanded — a cheap
//! check at configuration-load time, the expensive work deferred to the
//! first expansion.

use std::str::FromStr;

use crate::calendar;
use crate::error::{ExclusionError, Result};

/// The marker token every exclusion line starts with.
pub const MARKER: &str = "exc";

/// A validated exclusion rule. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusion {
    tokens: Vec<String>,
    additive: bool,
}

impl Exclusion {
    /// Parse one exclusion line.
    ///
    /// The three accepted forms, tested in order:
    ///
    /// | Form | Tokens | additive |
    /// |---|---|---|
    /// | Day-on override | `exc day on <date>` (exactly 4) | true |
    /// | Day-off override | `exc day off <date>` (exactly 4) | false |
    /// | Weekday recurrence | `exc <weekday> <block>...` (at least 3) | false |
    ///
    /// # Errors
    ///
    /// `ExclusionError::Syntax` carrying the line verbatim when the tokens
    /// match none of the forms: fewer than two tokens, a marker mismatch,
    /// `day` with a keyword other than on/off, an unresolvable weekday
    /// name, or a weekday with no time blocks.
    pub fn parse(line: &str) -> Result<Self> {
        let tokens: Vec<String> = line.split_whitespace().map(str::to_owned).collect();

        if tokens.len() >= 2 && tokens[0] == MARKER {
            if tokens.len() == 4 && tokens[1] == "day" && tokens[2] == "on" {
                return Ok(Self { tokens, additive: true });
            }
            if tokens.len() == 4 && tokens[1] == "day" && tokens[2] == "off" {
                return Ok(Self { tokens, additive: false });
            }
            if tokens.len() >= 3 && calendar::day_of_week(&tokens[1]).is_some() {
                return Ok(Self { tokens, additive: false });
            }
        }

        Err(ExclusionError::Syntax(line.to_owned()))
    }

    /// The rule's tokens, exactly as split from the original line.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// True only for the `day on` form: the expanded ranges re-include time
    /// inside a broader exclusion instead of excluding it. How the two
    /// kinds combine is the consumer's call (see
    /// [`ExclusionSet::excluded_ranges`](crate::ExclusionSet::excluded_ranges)
    /// for the conventional one).
    pub fn additive(&self) -> bool {
        self.additive
    }

    /// Reconstruct the space-joined rule line.
    ///
    /// The round-trip inverse of [`Exclusion::parse`]: re-parsing the result
    /// yields identical tokens and additive flag. Irregular whitespace in
    /// the original line is not preserved.
    pub fn serialize(&self) -> String {
        self.tokens.join(" ")
    }

    /// Labeled, newline-terminated diagnostic form. Not round-tripped.
    pub fn dump(&self) -> String {
        format!("Exclusion {}\n", self.tokens.join(" "))
    }
}

impl FromStr for Exclusion {
    type Err = ExclusionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
