//! Decade Luck (Daeun) sequence generation.
//!
//! Segment *i* offsets the month pillar's stem and branch by `±(i+1)`
//! positions around their cycles. Direction is keyed on gender alone
//! (forward for Male, reverse for Female) — a fixed convention of this
//! implementation; the classical rule additionally folds in the year
//! stem's polarity. The starting age `4 + (birthYear mod 3)` is likewise a
//! fixed simplification of the distance-to-solar-term rule.

use serde::{Deserialize, Serialize};

use saju_core::{EarthlyBranch, FiveElement, Gender, HeavenlyStem, Pillar};

/// A Daeun sequence always holds eight segments.
pub const DAEUN_SEGMENT_COUNT: usize = 8;

/// Years covered by one segment.
pub const DAEUN_SEGMENT_YEARS: u32 = 10;

/// One 10-year span of the Decade Luck sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckCycleSegment {
    /// Age at which the segment begins.
    pub start_age: u32,
    pub pillar: Pillar,
    /// Element of the segment's stem.
    pub element: FiveElement,
}

impl LuckCycleSegment {
    /// Last age covered by the segment.
    pub const fn end_age(&self) -> u32 {
        self.start_age + DAEUN_SEGMENT_YEARS - 1
    }

    /// Display label for the covered ages, e.g. `"4-13"`.
    pub fn age_label(&self) -> String {
        format!("{}-{}", self.start_age, self.end_age())
    }

    /// True when the segment covers the given age.
    pub fn covers(&self, age: i32) -> bool {
        age >= self.start_age as i32 && age <= self.end_age() as i32
    }
}

/// Age at which the first segment begins: `4 + (birthYear mod 3)`.
pub fn starting_age(birth_year: i32) -> u32 {
    4 + birth_year.rem_euclid(3) as u32
}

/// Generate the eight Decade Luck segments from the month pillar.
pub fn calculate_daeun(
    month_pillar: &Pillar,
    gender: Gender,
    birth_year: i32,
) -> [LuckCycleSegment; DAEUN_SEGMENT_COUNT] {
    let start_age = starting_age(birth_year);
    let stem_idx = month_pillar.stem.index() as i64;
    let branch_idx = month_pillar.branch.index() as i64;

    core::array::from_fn(|i| {
        let step = i as i64 + 1;
        let offset = match gender {
            Gender::Male => step,
            Gender::Female => -step,
        };
        let stem = HeavenlyStem::cyclic(stem_idx + offset);
        let branch = EarthlyBranch::cyclic(branch_idx + offset);
        LuckCycleSegment {
            start_age: start_age + i as u32 * DAEUN_SEGMENT_YEARS,
            pillar: Pillar::new(stem, branch),
            element: stem.element(),
        }
    })
}

/// Age in whole years at a reference calendar year.
pub fn age_at(reference_year: i32, birth_year: i32) -> i32 {
    reference_year - birth_year
}

/// The segment covering the given age, if any.
pub fn active_segment(segments: &[LuckCycleSegment], age: i32) -> Option<&LuckCycleSegment> {
    segments.iter().find(|s| s.covers(age))
}
