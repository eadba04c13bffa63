//! Exclusion configuration files — many rules, combined coverage.
//!
//! A configuration carries one rule per line. Weekday and `day off` rules
//! subtract time; `day on` rules re-include it. [`ExclusionSet`] parses
//! whole files and offers the conventional combination of the two kinds;
//! consumers that combine differently can expand rule by rule via
//! [`Exclusion::ranges`].

use crate::error::Result;
use crate::range::{self, Range};
use crate::rule::Exclusion;

/// An ordered collection of exclusion rules — one configuration's worth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    rules: Vec<Exclusion>,
}

impl ExclusionSet {
    /// Parse an exclusion configuration: one rule per line, blank lines and
    /// `#` comments skipped.
    ///
    /// # Errors
    ///
    /// The first unparseable line fails the whole call with
    /// `ExclusionError::Syntax`; no partial set escapes.
    pub fn parse(text: &str) -> Result<Self> {
        let mut rules = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            rules.push(Exclusion::parse(line)?);
        }
        Ok(Self { rules })
    }

    /// The rules in configuration order.
    pub fn rules(&self) -> &[Exclusion] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// One serialized rule per line, newline-terminated.
    ///
    /// Round-trips through [`ExclusionSet::parse`]; comments and blank
    /// lines are not preserved.
    pub fn serialize(&self) -> String {
        self.rules.iter().map(|r| r.serialize() + "\n").collect()
    }

    /// The combined excluded time within `bound`: every subtractive rule's
    /// ranges merged, minus the coverage of additive `day on` overrides.
    ///
    /// Output is sorted and non-overlapping.
    ///
    /// # Errors
    ///
    /// The first rule whose expansion fails fails the whole call.
    pub fn excluded_ranges(&self, bound: &Range) -> Result<Vec<Range>> {
        let mut off = Vec::new();
        let mut on = Vec::new();

        for rule in &self.rules {
            let expanded = rule.ranges(bound)?;
            if rule.additive() {
                on.extend(expanded);
            } else {
                off.extend(expanded);
            }
        }

        Ok(range::subtract_ranges(off, on))
    }
}
