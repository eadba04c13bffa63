//! # downtime-core
//!
//! Exclusion rules for a time-tracking system: declarative statements
//! describing recurring or one-off periods that must never be counted as
//! trackable time — weekends, lunch breaks, holidays, single-day overrides.
//!
//! A rule is one line of configuration text. Parsing validates the syntax
//! and keeps the tokens verbatim; expansion projects the rule onto an
//! arbitrary bounding range and yields the concrete half-open ranges the
//! rule covers inside it. Date and time-block values are decoded lazily at
//! expansion time, so a rule can parse cleanly and still fail on its first
//! expansion.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use downtime_core::{Exclusion, Range};
//!
//! let rule = Exclusion::parse("exc monday 12:00:00-13:00:00").unwrap();
//! assert!(!rule.additive());
//!
//! // The first week of December 2024 contains exactly one Monday.
//! let start = NaiveDate::from_ymd_opt(2024, 12, 2).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 12, 9).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let lunches = rule.ranges(&Range::new(start, end)).unwrap();
//! assert_eq!(lunches.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`rule`] — rule line → validated [`Exclusion`] (syntax only)
//! - [`block`] — time-block token → concrete range within a day
//! - [`range`] — half-open [`Range`] type, merge/subtract combination
//! - [`set`] — whole configuration files, combined coverage
//! - [`error`] — error types

pub mod block;
pub mod error;
pub mod range;
pub mod rule;
pub mod set;

mod calendar;
mod expander;

pub use block::range_from_block;
pub use error::ExclusionError;
pub use range::{merge_ranges, subtract_ranges, Range};
pub use rule::Exclusion;
pub use set::ExclusionSet;
