//! Error types for exclusion parsing and expansion.

use thiserror::Error;

/// Errors raised while parsing an exclusion rule or expanding it into ranges.
///
/// All three are terminal to the operation that raised them: a failed parse
/// constructs no rule, and a failed expansion returns no partial ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExclusionError {
    /// The rule line matched none of the recognized grammars (parse time).
    /// Carries the full original line.
    #[error("Unrecognized exclusion syntax: '{0}'.")]
    Syntax(String),

    /// A weekday rule's time block could not be decoded (expansion time).
    /// Carries the offending block text.
    #[error("Malformed time block '{0}'.")]
    Block(String),

    /// A day on/off rule's date token could not be decoded (expansion time).
    #[error("Malformed date '{0}'.")]
    Date(String),
}

/// Convenience alias used throughout downtime-core.
pub type Result<T> = std::result::Result<T, ExclusionError>;
