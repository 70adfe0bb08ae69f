//! Pillar types: a stem-branch pair for one of the four chart positions.

use serde::{Deserialize, Serialize};

use crate::ganji::{EarthlyBranch, HeavenlyStem};
use crate::ohaeng::FiveElement;

/// A sexagenary pair labelling one time unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl Pillar {
    pub const fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        Self { stem, branch }
    }

    /// Element of the stem slot.
    pub const fn stem_element(&self) -> FiveElement {
        self.stem.element()
    }

    /// Element of the branch slot.
    pub const fn branch_element(&self) -> FiveElement {
        self.branch.element()
    }

    /// Traditional two-character form, e.g. `甲子`.
    pub fn hanja(&self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.stem.name(), self.branch.name())
    }
}

/// The four pillars derived from one birth moment.
///
/// The time pillar is `None` when the birth double-hour was not supplied;
/// downstream aggregation must skip it, never substitute a default pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub time: Option<Pillar>,
}

impl FourPillars {
    /// Number of stem/branch slots known to the chart: 8 with a time
    /// pillar, 6 without.
    pub const fn known_slots(&self) -> u8 {
        if self.time.is_some() { 8 } else { 6 }
    }
}

/// Birth gender, selecting the Decade Luck traversal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Lookup by case-insensitive English name.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("male") {
            Some(Self::Male)
        } else if name.eq_ignore_ascii_case("female") {
            Some(Self::Female)
        } else {
            None
        }
    }
}
