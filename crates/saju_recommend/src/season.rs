//! Season classification and ruling elements.

use serde::{Deserialize, Serialize};

use saju_core::FiveElement;

/// The five traditional seasons.
///
/// `LateSummer` (the Earth-ruled transitional season) exists in the
/// classification but is never produced by [`season_for_month`], which
/// buckets the twelve months into the four principal seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    LateSummer,
    Autumn,
    Winter,
}

impl Season {
    /// English name of the season.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::LateSummer => "late summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
        }
    }

    /// The element the season strengthens.
    pub const fn ruling_element(self) -> FiveElement {
        match self {
            Self::Spring => FiveElement::Wood,
            Self::Summer => FiveElement::Fire,
            Self::LateSummer => FiveElement::Earth,
            Self::Autumn => FiveElement::Metal,
            Self::Winter => FiveElement::Water,
        }
    }
}

/// Season for a calendar month: 2-4 spring, 5-7 summer, 8-10 autumn,
/// everything else winter.
pub fn season_for_month(month: u32) -> Season {
    match month {
        2..=4 => Season::Spring,
        5..=7 => Season::Summer,
        8..=10 => Season::Autumn,
        _ => Season::Winter,
    }
}
