//! Weighted scoring over candidate elements.
//!
//! Score = deficiency + season bonus + luck-cycle bonus + generating
//! bonus. Deficiency grows linearly below the shared weak threshold;
//! the generating bonus applies to every candidate. Ranking is stable:
//! candidates with equal totals keep their input order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use saju_core::{ElementShare, FiveElement, WEAK_THRESHOLD_PCT};

use crate::season::Season;

/// Points per percentage point of deficiency below the threshold.
pub const DEFICIENCY_WEIGHT: f64 = 2.5;
/// Bonus when the season's ruling element matches the candidate.
pub const SEASON_BONUS: f64 = 15.0;
/// Bonus when the active Decade Luck element matches the candidate.
pub const LUCK_CYCLE_BONUS: f64 = 20.0;
/// Flat bonus modelling support through the generating cycle.
pub const GENERATING_BONUS: f64 = 5.0;

/// A candidate element with its chart percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateElement {
    pub element: FiveElement,
    pub percentage: f64,
}

impl From<ElementShare> for CandidateElement {
    fn from(share: ElementShare) -> Self {
        Self {
            element: share.element,
            percentage: share.percentage as f64,
        }
    }
}

/// Per-factor decomposition of a candidate's total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub deficiency: f64,
    pub season_bonus: f64,
    pub luck_cycle_bonus: f64,
    pub generating_bonus: f64,
}

/// A scored candidate, ready for ranking consumers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementScore {
    pub element: FiveElement,
    pub percentage: f64,
    /// Sum of the breakdown, rounded to one decimal.
    pub total: f64,
    pub breakdown: ScoreBreakdown,
    /// The element producing this one in the generating cycle; exposed
    /// for explanatory text, not used in the total.
    pub generating_element: FiveElement,
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Score and rank candidate elements, highest total first.
///
/// `luck_element` is the element of the currently active Decade Luck
/// segment, when the caller has one. An empty candidate list yields an
/// empty ranking.
pub fn score_candidates(
    candidates: &[CandidateElement],
    season: Season,
    luck_element: Option<FiveElement>,
) -> Vec<ElementScore> {
    let mut scored: Vec<ElementScore> = candidates
        .iter()
        .map(|c| {
            let deficiency =
                (f64::from(WEAK_THRESHOLD_PCT) - c.percentage).max(0.0) * DEFICIENCY_WEIGHT;
            let season_bonus = if season.ruling_element() == c.element {
                SEASON_BONUS
            } else {
                0.0
            };
            let luck_cycle_bonus = if luck_element == Some(c.element) {
                LUCK_CYCLE_BONUS
            } else {
                0.0
            };
            let total = deficiency + season_bonus + luck_cycle_bonus + GENERATING_BONUS;

            ElementScore {
                element: c.element,
                percentage: c.percentage,
                total: round1(total),
                breakdown: ScoreBreakdown {
                    deficiency: round1(deficiency),
                    season_bonus,
                    luck_cycle_bonus,
                    generating_bonus: GENERATING_BONUS,
                },
                generating_element: c.element.generated_by(),
            }
        })
        .collect();

    // Stable sort keeps input order among equal totals.
    scored.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
    scored
}
