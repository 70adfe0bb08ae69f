//! Luck-cycle generators derived from the birth chart.
//!
//! This crate provides:
//! - The Decade Luck (Daeun) sequence: eight 10-year segments stepped
//!   around the cyclic tables from the month pillar
//! - The annual fortune pillar labelling an arbitrary calendar year
//!
//! Both are pure functions; neither holds state between calls.

pub mod annual;
pub mod daeun;

pub use annual::{AnnualFortunePillar, annual_fortune, annual_fortune_series};
pub use daeun::{
    DAEUN_SEGMENT_COUNT, DAEUN_SEGMENT_YEARS, LuckCycleSegment, active_segment, age_at,
    calculate_daeun, starting_age,
};
