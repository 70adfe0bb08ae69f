//! Heavenly Stem and Earthly Branch enumerations.
//!
//! The 10 stems and 12 branches cycle continuously and pair up into the
//! sexagenary calendar. All index arithmetic is modulo 10 (stems) or
//! modulo 12 (branches); negative intermediates are normalized with
//! `rem_euclid`, never truncated.

use serde::{Deserialize, Serialize};

use crate::ohaeng::FiveElement;

/// The 10 Heavenly Stems in cycle order (Gap = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeavenlyStem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in order (index 0 = Gap).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Gap,
    HeavenlyStem::Eul,
    HeavenlyStem::Byeong,
    HeavenlyStem::Jeong,
    HeavenlyStem::Mu,
    HeavenlyStem::Gi,
    HeavenlyStem::Gyeong,
    HeavenlyStem::Sin,
    HeavenlyStem::Im,
    HeavenlyStem::Gye,
];

impl HeavenlyStem {
    /// 0-based index (Gap=0 .. Gye=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Create from raw u8 value.
    pub fn from_index(v: u8) -> Option<Self> {
        if (v as usize) < ALL_STEMS.len() {
            Some(ALL_STEMS[v as usize])
        } else {
            None
        }
    }

    /// The stem at an arbitrary (possibly negative) cyclic position.
    pub fn cyclic(idx: i64) -> Self {
        ALL_STEMS[idx.rem_euclid(10) as usize]
    }

    /// Romanized name of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gap => "Gap",
            Self::Eul => "Eul",
            Self::Byeong => "Byeong",
            Self::Jeong => "Jeong",
            Self::Mu => "Mu",
            Self::Gi => "Gi",
            Self::Gyeong => "Gyeong",
            Self::Sin => "Sin",
            Self::Im => "Im",
            Self::Gye => "Gye",
        }
    }

    /// Traditional character for the stem.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Gap => "甲",
            Self::Eul => "乙",
            Self::Byeong => "丙",
            Self::Jeong => "丁",
            Self::Mu => "戊",
            Self::Gi => "己",
            Self::Gyeong => "庚",
            Self::Sin => "辛",
            Self::Im => "壬",
            Self::Gye => "癸",
        }
    }

    /// Lookup by case-insensitive romanized name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_STEMS
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// The element of the stem (two consecutive stems per element).
    pub const fn element(self) -> FiveElement {
        match self {
            Self::Gap | Self::Eul => FiveElement::Wood,
            Self::Byeong | Self::Jeong => FiveElement::Fire,
            Self::Mu | Self::Gi => FiveElement::Earth,
            Self::Gyeong | Self::Sin => FiveElement::Metal,
            Self::Im | Self::Gye => FiveElement::Water,
        }
    }
}

/// The 12 Earthly Branches in cycle order (Ja = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EarthlyBranch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in order (index 0 = Ja).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Ja,
    EarthlyBranch::Chuk,
    EarthlyBranch::In,
    EarthlyBranch::Myo,
    EarthlyBranch::Jin,
    EarthlyBranch::Sa,
    EarthlyBranch::O,
    EarthlyBranch::Mi,
    EarthlyBranch::Sin,
    EarthlyBranch::Yu,
    EarthlyBranch::Sul,
    EarthlyBranch::Hae,
];

impl EarthlyBranch {
    /// 0-based index (Ja=0 .. Hae=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Create from raw u8 value.
    pub fn from_index(v: u8) -> Option<Self> {
        if (v as usize) < ALL_BRANCHES.len() {
            Some(ALL_BRANCHES[v as usize])
        } else {
            None
        }
    }

    /// The branch at an arbitrary (possibly negative) cyclic position.
    pub fn cyclic(idx: i64) -> Self {
        ALL_BRANCHES[idx.rem_euclid(12) as usize]
    }

    /// Romanized name of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ja => "Ja",
            Self::Chuk => "Chuk",
            Self::In => "In",
            Self::Myo => "Myo",
            Self::Jin => "Jin",
            Self::Sa => "Sa",
            Self::O => "O",
            Self::Mi => "Mi",
            Self::Sin => "Sin",
            Self::Yu => "Yu",
            Self::Sul => "Sul",
            Self::Hae => "Hae",
        }
    }

    /// Traditional character for the branch.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ja => "子",
            Self::Chuk => "丑",
            Self::In => "寅",
            Self::Myo => "卯",
            Self::Jin => "辰",
            Self::Sa => "巳",
            Self::O => "午",
            Self::Mi => "未",
            Self::Sin => "申",
            Self::Yu => "酉",
            Self::Sul => "戌",
            Self::Hae => "亥",
        }
    }

    /// Lookup by case-insensitive romanized name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_BRANCHES
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(name))
    }

    /// The element of the branch.
    pub const fn element(self) -> FiveElement {
        match self {
            Self::Ja | Self::Hae => FiveElement::Water,
            Self::In | Self::Myo => FiveElement::Wood,
            Self::Sa | Self::O => FiveElement::Fire,
            Self::Sin | Self::Yu => FiveElement::Metal,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => FiveElement::Earth,
        }
    }

    /// The branch whose two-hour window contains a wall-clock time.
    ///
    /// Windows are shifted 30 minutes past the odd hours: Ja covers
    /// 23:30-01:29, Chuk 01:30-03:29, and so on around the day.
    pub fn from_clock(hour: u32, minute: u32) -> Self {
        let since_midnight = (hour % 24) * 60 + minute % 60;
        let shifted = (since_midnight + 30) % 1440;
        ALL_BRANCHES[(shifted / 120) as usize]
    }

    /// The wall-clock window of the branch's double-hour.
    pub const fn clock_window(self) -> &'static str {
        match self {
            Self::Ja => "23:30-01:29",
            Self::Chuk => "01:30-03:29",
            Self::In => "03:30-05:29",
            Self::Myo => "05:30-07:29",
            Self::Jin => "07:30-09:29",
            Self::Sa => "09:30-11:29",
            Self::O => "11:30-13:29",
            Self::Mi => "13:30-15:29",
            Self::Sin => "15:30-17:29",
            Self::Yu => "17:30-19:29",
            Self::Sul => "19:30-21:29",
            Self::Hae => "21:30-23:29",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_stems_count() {
        assert_eq!(ALL_STEMS.len(), 10);
    }

    #[test]
    fn all_branches_count() {
        assert_eq!(ALL_BRANCHES.len(), 12);
    }

    #[test]
    fn stem_indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn branch_indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn stem_from_index_bounds() {
        assert_eq!(HeavenlyStem::from_index(0), Some(HeavenlyStem::Gap));
        assert_eq!(HeavenlyStem::from_index(9), Some(HeavenlyStem::Gye));
        assert_eq!(HeavenlyStem::from_index(10), None);
    }

    #[test]
    fn branch_from_index_bounds() {
        assert_eq!(EarthlyBranch::from_index(0), Some(EarthlyBranch::Ja));
        assert_eq!(EarthlyBranch::from_index(11), Some(EarthlyBranch::Hae));
        assert_eq!(EarthlyBranch::from_index(12), None);
    }

    #[test]
    fn cyclic_wraps_positive() {
        assert_eq!(HeavenlyStem::cyclic(10), HeavenlyStem::Gap);
        assert_eq!(HeavenlyStem::cyclic(23), HeavenlyStem::Jeong);
        assert_eq!(EarthlyBranch::cyclic(12), EarthlyBranch::Ja);
        assert_eq!(EarthlyBranch::cyclic(25), EarthlyBranch::Chuk);
    }

    #[test]
    fn cyclic_normalizes_negative() {
        assert_eq!(HeavenlyStem::cyclic(-1), HeavenlyStem::Gye);
        assert_eq!(HeavenlyStem::cyclic(-10), HeavenlyStem::Gap);
        assert_eq!(EarthlyBranch::cyclic(-1), EarthlyBranch::Hae);
        assert_eq!(EarthlyBranch::cyclic(-13), EarthlyBranch::Hae);
    }

    #[test]
    fn names_nonempty() {
        for s in ALL_STEMS {
            assert!(!s.name().is_empty());
            assert!(!s.hanja().is_empty());
        }
        for b in ALL_BRANCHES {
            assert!(!b.name().is_empty());
            assert!(!b.hanja().is_empty());
        }
    }

    #[test]
    fn from_name_round_trip() {
        for s in ALL_STEMS {
            assert_eq!(HeavenlyStem::from_name(s.name()), Some(s));
        }
        for b in ALL_BRANCHES {
            assert_eq!(EarthlyBranch::from_name(b.name()), Some(b));
        }
        assert_eq!(HeavenlyStem::from_name("nope"), None);
    }

    #[test]
    fn stem_elements_pair_up() {
        // Stems map to elements in consecutive pairs.
        for pair in ALL_STEMS.chunks(2) {
            assert_eq!(pair[0].element(), pair[1].element());
        }
    }

    #[test]
    fn branch_element_spot_checks() {
        assert_eq!(EarthlyBranch::Ja.element(), FiveElement::Water);
        assert_eq!(EarthlyBranch::In.element(), FiveElement::Wood);
        assert_eq!(EarthlyBranch::O.element(), FiveElement::Fire);
        assert_eq!(EarthlyBranch::Yu.element(), FiveElement::Metal);
        assert_eq!(EarthlyBranch::Sul.element(), FiveElement::Earth);
    }

    #[test]
    fn four_earth_branches() {
        let n = ALL_BRANCHES
            .iter()
            .filter(|b| b.element() == FiveElement::Earth)
            .count();
        assert_eq!(n, 4);
    }

    #[test]
    fn from_clock_window_starts() {
        assert_eq!(EarthlyBranch::from_clock(23, 30), EarthlyBranch::Ja);
        assert_eq!(EarthlyBranch::from_clock(0, 0), EarthlyBranch::Ja);
        assert_eq!(EarthlyBranch::from_clock(1, 29), EarthlyBranch::Ja);
        assert_eq!(EarthlyBranch::from_clock(1, 30), EarthlyBranch::Chuk);
        assert_eq!(EarthlyBranch::from_clock(12, 0), EarthlyBranch::O);
        assert_eq!(EarthlyBranch::from_clock(21, 30), EarthlyBranch::Hae);
        assert_eq!(EarthlyBranch::from_clock(23, 29), EarthlyBranch::Hae);
    }
}
