//! The four pillar calculators.
//!
//! Ordering contract: the month stem rule consumes the year stem, and the
//! time stem rule consumes the day stem, so year must be computed before
//! month and day before time. [`four_pillars`] wires the order correctly;
//! everything else is independent and freely parallelizable.

use crate::date::CivilDate;
use crate::ganji::{EarthlyBranch, HeavenlyStem};
use crate::pillar::{FourPillars, Pillar};
use crate::solar_terms::{before_spring_start, sexagenary_month};

/// Starting month stems for sexagenary month 1, one per year-stem group
/// (Byeong, Mu, Gyeong, Im, Gap).
const MONTH_STEM_STARTS: [u8; 5] = [2, 4, 6, 8, 0];

/// Starting time stems for the Ja double-hour, one per day-stem group
/// (Gap, Byeong, Mu, Gyeong, Im).
const TIME_STEM_STARTS: [u8; 5] = [0, 2, 4, 6, 8];

/// Year pillar with the start-of-spring cutoff.
///
/// Dates before ~Feb 4 still belong to the previous sexagenary year. The
/// base formula `(year - 4) mod 10/12` anchors 1984 to Gap-Ja.
pub fn year_pillar(date: &CivilDate) -> Pillar {
    let adjusted = if before_spring_start(date.month, date.day) {
        date.year - 1
    } else {
        date.year
    };
    let base = adjusted as i64 - 4;
    Pillar::new(HeavenlyStem::cyclic(base), EarthlyBranch::cyclic(base))
}

/// Month pillar from the solar-term month number and the year stem.
///
/// The five-groups rule picks the stem of sexagenary month 1 from the year
/// stem's group; the branch is fixed by the month number alone (month 1 is
/// the Tiger month, branch index 2).
pub fn month_pillar(date: &CivilDate, year_stem: HeavenlyStem) -> Pillar {
    let sm = sexagenary_month(date.month, date.day) as i64;
    let start = MONTH_STEM_STARTS[(year_stem.index() % 5) as usize] as i64;
    Pillar::new(
        HeavenlyStem::cyclic(start + sm - 1),
        EarthlyBranch::cyclic(sm + 1),
    )
}

/// Day pillar by day counting from the anchor date.
///
/// 1900-01-01 carries stem index 1 / branch index 11; each following day
/// advances both indices by one around their cycles. Dates before the
/// anchor produce negative offsets and are normalized, not truncated.
pub fn day_pillar(date: &CivilDate) -> Pillar {
    let offset = date.days_since_anchor();
    Pillar::new(
        HeavenlyStem::cyclic(offset + 1),
        EarthlyBranch::cyclic(offset + 11),
    )
}

/// Time pillar from the day stem and the birth double-hour branch.
///
/// Returns `None` when the double-hour was not supplied — an unknown time
/// is explicit, never defaulted to the first branch.
pub fn time_pillar(day_stem: HeavenlyStem, branch: Option<EarthlyBranch>) -> Option<Pillar> {
    let branch = branch?;
    let start = TIME_STEM_STARTS[(day_stem.index() % 5) as usize] as i64;
    Some(Pillar::new(
        HeavenlyStem::cyclic(start + branch.index() as i64),
        branch,
    ))
}

/// All four pillars for a birth date and optional double-hour.
pub fn four_pillars(date: &CivilDate, time_branch: Option<EarthlyBranch>) -> FourPillars {
    let year = year_pillar(date);
    let month = month_pillar(date, year.stem);
    let day = day_pillar(date);
    let time = time_pillar(day.stem, time_branch);
    FourPillars {
        year,
        month,
        day,
        time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CivilDate {
        CivilDate::new(y, m, d).unwrap()
    }

    #[test]
    fn year_1984_is_gap_ja() {
        let p = year_pillar(&date(1984, 6, 1));
        assert_eq!(p.stem, HeavenlyStem::Gap);
        assert_eq!(p.branch, EarthlyBranch::Ja);
    }

    #[test]
    fn year_1990_is_gyeong_o() {
        let p = year_pillar(&date(1990, 3, 15));
        assert_eq!(p.stem.index(), 6);
        assert_eq!(p.branch.index(), 6);
    }

    #[test]
    fn year_rolls_back_before_spring() {
        // Feb 3 1990 still belongs to the 1989 sexagenary year (Gi-Sa).
        let before = year_pillar(&date(1990, 2, 3));
        assert_eq!(before.stem, HeavenlyStem::Gi);
        assert_eq!(before.branch, EarthlyBranch::Sa);

        let after = year_pillar(&date(1990, 2, 4));
        assert_eq!(after.stem, HeavenlyStem::Gyeong);
        assert_eq!(after.branch, EarthlyBranch::O);
    }

    #[test]
    fn month_stem_follows_year_group() {
        // Gyeong year (group 1) starts its months at Mu; March 15 falls in
        // sexagenary month 2, giving Gi-Myo.
        let d = date(1990, 3, 15);
        let y = year_pillar(&d);
        let m = month_pillar(&d, y.stem);
        assert_eq!(m.stem, HeavenlyStem::Gi);
        assert_eq!(m.branch, EarthlyBranch::Myo);
    }

    #[test]
    fn month_branch_one_is_tiger() {
        let d = date(1984, 2, 10);
        let m = month_pillar(&d, year_pillar(&d).stem);
        assert_eq!(m.branch, EarthlyBranch::In);
    }

    #[test]
    fn day_anchor_is_eul_hae() {
        let p = day_pillar(&crate::date::DAY_ANCHOR);
        assert_eq!(p.stem.index(), 1);
        assert_eq!(p.branch.index(), 11);
    }

    #[test]
    fn day_after_anchor_advances_both() {
        let p = day_pillar(&date(1900, 1, 2));
        assert_eq!(p.stem, HeavenlyStem::Byeong);
        assert_eq!(p.branch, EarthlyBranch::Ja);
    }

    #[test]
    fn day_2000_01_01() {
        // 36524 days past the anchor.
        let p = day_pillar(&date(2000, 1, 1));
        assert_eq!(p.stem.index(), 5);
        assert_eq!(p.branch.index(), 7);
    }

    #[test]
    fn day_before_anchor_normalizes() {
        let p = day_pillar(&date(1899, 12, 31));
        assert_eq!(p.stem, HeavenlyStem::Gap);
        assert_eq!(p.branch, EarthlyBranch::Sul);
    }

    #[test]
    fn time_pillar_gap_day_noon() {
        // Gap day, O double-hour: the classic Gyeong-O hour.
        let p = time_pillar(HeavenlyStem::Gap, Some(EarthlyBranch::O)).unwrap();
        assert_eq!(p.stem, HeavenlyStem::Gyeong);
        assert_eq!(p.branch, EarthlyBranch::O);
    }

    #[test]
    fn time_pillar_gi_day_midnight() {
        // Gi day (group 0) restarts at Gap for the Ja hour.
        let p = time_pillar(HeavenlyStem::Gi, Some(EarthlyBranch::Ja)).unwrap();
        assert_eq!(p.stem, HeavenlyStem::Gap);
        assert_eq!(p.branch, EarthlyBranch::Ja);
    }

    #[test]
    fn time_pillar_unknown_is_none() {
        assert_eq!(time_pillar(HeavenlyStem::Gap, None), None);
    }

    #[test]
    fn four_pillars_wiring() {
        let d = date(1990, 3, 15);
        let fp = four_pillars(&d, Some(EarthlyBranch::O));
        assert_eq!(fp.year, year_pillar(&d));
        assert_eq!(fp.month, month_pillar(&d, fp.year.stem));
        assert_eq!(fp.day, day_pillar(&d));
        assert_eq!(fp.time, time_pillar(fp.day.stem, Some(EarthlyBranch::O)));
        assert_eq!(fp.known_slots(), 8);
    }

    #[test]
    fn four_pillars_without_time() {
        let fp = four_pillars(&date(1990, 3, 15), None);
        assert_eq!(fp.time, None);
        assert_eq!(fp.known_slots(), 6);
    }
}
