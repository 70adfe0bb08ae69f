//! Approximate solar-term boundaries for sexagenary month and year rollover.
//!
//! These are fixed-date approximations of the 12 major solar terms, not
//! ephemeris computations: each sexagenary month is taken to begin on a
//! fixed day of the calendar month near its term. Sexagenary month 1 (the
//! Tiger month) begins at the start-of-spring boundary, which also rolls
//! the sexagenary year.

/// Start of spring (Ipchun) approximation: February 4.
pub const SPRING_START_MONTH: u32 = 2;
/// Day of [`SPRING_START_MONTH`] on which spring begins.
pub const SPRING_START_DAY: u32 = 4;

/// True when the date falls before the start-of-spring cutoff, i.e. the
/// sexagenary year is still the previous calendar year's.
pub const fn before_spring_start(month: u32, day: u32) -> bool {
    month < SPRING_START_MONTH || (month == SPRING_START_MONTH && day < SPRING_START_DAY)
}

/// Day of the calendar month (Jan..Dec) on which the sexagenary month rolls
/// over: Jan 6 (Sohan), Feb 4 (Ipchun), Mar 6, Apr 5, May 6, Jun 6, Jul 7,
/// Aug 8, Sep 8, Oct 8, Nov 7, Dec 7.
const MONTH_TERM_CUTOFFS: [u32; 12] = [6, 4, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7];

/// Sexagenary month number (1-12) for a calendar date.
///
/// Month 1 spans roughly Feb 4 - Mar 5, month 2 Mar 6 - Apr 4, and so on;
/// dates before the January cutoff belong to month 11 of the cycle that
/// started the previous spring.
pub fn sexagenary_month(month: u32, day: u32) -> u32 {
    let m = month as i64;
    let offset = if day >= MONTH_TERM_CUTOFFS[(month - 1) as usize] {
        m - 2
    } else {
        m - 3
    };
    offset.rem_euclid(12) as u32 + 1
}
