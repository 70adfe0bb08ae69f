//! Proleptic-Gregorian civil dates and continuous day counting.
//!
//! Day-pillar arithmetic needs only the integer number of days between two
//! calendar dates. We map every date to a continuous day number via the
//! standard civil-from-days era decomposition, which is exact over the whole
//! `i32` year range (no ephemeris, no time zones).

use serde::{Deserialize, Serialize};

use crate::error::SajuError;

/// A proleptic-Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CivilDate {
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Day of month, 1-based.
    pub day: u32,
}

/// Day-count anchor: 1900-01-01, defined to carry stem index 1 and branch
/// index 11 (the Eul-Hae day).
pub const DAY_ANCHOR: CivilDate = CivilDate {
    year: 1900,
    month: 1,
    day: 1,
};

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a calendar month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

impl CivilDate {
    /// Validate and construct a calendar date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, SajuError> {
        if month < 1 || month > 12 {
            return Err(SajuError::InvalidDate("month must be 1-12"));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(SajuError::InvalidDate("day out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Continuous day number (days since 1970-01-01).
    ///
    /// Era decomposition over 400-year Gregorian cycles; advancing the date
    /// by one calendar day always advances the result by exactly 1.
    pub fn day_number(&self) -> i64 {
        let y = if self.month <= 2 {
            self.year as i64 - 1
        } else {
            self.year as i64
        };
        let era = if y >= 0 { y } else { y - 399 } / 400;
        let yoe = y - era * 400;
        let mp = (self.month as i64 + 9) % 12;
        let doy = (153 * mp + 2) / 5 + self.day as i64 - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146_097 + doe - 719_468
    }

    /// Signed day offset from the day-pillar anchor date.
    pub fn days_since_anchor(&self) -> i64 {
        self.day_number() - DAY_ANCHOR.day_number()
    }
}

impl std::fmt::Display for CivilDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
