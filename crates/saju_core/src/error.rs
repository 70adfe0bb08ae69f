//! Error types for saju calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from saju input validation.
///
/// The calculators themselves are total functions; the only fallible
/// surface is civil-date construction, which rejects malformed dates
/// before they reach any pillar arithmetic.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SajuError {
    /// The supplied calendar date is not a valid proleptic-Gregorian date.
    InvalidDate(&'static str),
}

impl Display for SajuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
        }
    }
}

impl Error for SajuError {}
