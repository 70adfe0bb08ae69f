//! Annual fortune (Seun) pillar for a calendar year.
//!
//! Same base formula as the year pillar but deliberately without the
//! start-of-spring cutoff: the annual figure labels the calendar year as a
//! whole, not a position in a birth chart. Keep the two calculations
//! separate.

use serde::{Deserialize, Serialize};

use saju_core::{EarthlyBranch, FiveElement, HeavenlyStem, Pillar};

/// Sexagenary label and element for one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualFortunePillar {
    pub year: i32,
    pub pillar: Pillar,
    /// Element of the year's stem.
    pub element: FiveElement,
}

/// Annual fortune pillar for a calendar year.
pub fn annual_fortune(year: i32) -> AnnualFortunePillar {
    let base = year as i64 - 4;
    let stem = HeavenlyStem::cyclic(base);
    AnnualFortunePillar {
        year,
        pillar: Pillar::new(stem, EarthlyBranch::cyclic(base)),
        element: stem.element(),
    }
}

/// Annual fortune pillars for `count` consecutive years.
pub fn annual_fortune_series(start_year: i32, count: u32) -> Vec<AnnualFortunePillar> {
    (0..count as i32)
        .map(|i| annual_fortune(start_year + i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_1984_is_gap_ja() {
        let f = annual_fortune(1984);
        assert_eq!(f.pillar.stem, HeavenlyStem::Gap);
        assert_eq!(f.pillar.branch, EarthlyBranch::Ja);
        assert_eq!(f.element, FiveElement::Wood);
    }

    #[test]
    fn no_spring_cutoff() {
        // The annual label never depends on month or day; 1990 is
        // Gyeong-O even though a January birth chart would still carry
        // the 1989 year pillar.
        let f = annual_fortune(1990);
        assert_eq!(f.pillar.stem.index(), 6);
        assert_eq!(f.pillar.branch.index(), 6);
    }

    #[test]
    fn periodicity() {
        for y in [1800, 1984, 2026] {
            assert_eq!(
                annual_fortune(y).pillar.stem,
                annual_fortune(y + 10).pillar.stem
            );
            assert_eq!(
                annual_fortune(y).pillar.branch,
                annual_fortune(y + 12).pillar.branch
            );
        }
    }

    #[test]
    fn negative_years_normalize() {
        let f = annual_fortune(-5);
        assert!(f.pillar.stem.index() < 10);
        assert!(f.pillar.branch.index() < 12);
    }

    #[test]
    fn series_consecutive() {
        let series = annual_fortune_series(2026, 2);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].year, 2026);
        assert_eq!(series[1].year, 2027);
        assert_eq!(
            series[1].pillar.stem.index(),
            (series[0].pillar.stem.index() + 1) % 10
        );
    }
}
