//! Elemental distribution analysis over the four pillars.
//!
//! Each known pillar contributes two slots (stem and branch); an unknown
//! time pillar contributes none, so percentages are taken over 8 or 6
//! known slots. The weak/strong derivations live here as free functions —
//! they are a caller-side reading of the tally, not part of the analyzer.

use serde::{Deserialize, Serialize};

use crate::ohaeng::{ALL_ELEMENTS, FiveElement};
use crate::pillar::FourPillars;

/// An element counted below this percentage is considered weak. Shared
/// with the recommendation engine's deficiency baseline.
pub const WEAK_THRESHOLD_PCT: u8 = 15;

/// Count and integer percentage for one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementShare {
    pub element: FiveElement,
    /// Slots occupied by this element, 0-8.
    pub count: u8,
    /// `round(count / known_slots * 100)`.
    pub percentage: u8,
}

/// Distribution of the chart's known slots over the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementTally {
    /// One share per element, in element enumeration order.
    pub shares: [ElementShare; 5],
    /// Slots that contributed: 8, or 6 when the time pillar is unknown.
    pub known_slots: u8,
}

impl ElementTally {
    /// Share for a single element.
    pub fn share(&self, element: FiveElement) -> ElementShare {
        self.shares[element.index() as usize]
    }
}

/// Count stem and branch elements across the known pillars.
pub fn analyze_elements(pillars: &FourPillars) -> ElementTally {
    let mut counts = [0u8; 5];
    for p in [&pillars.year, &pillars.month, &pillars.day] {
        counts[p.stem.element().index() as usize] += 1;
        counts[p.branch.element().index() as usize] += 1;
    }
    if let Some(t) = &pillars.time {
        counts[t.stem.element().index() as usize] += 1;
        counts[t.branch.element().index() as usize] += 1;
    }

    let known_slots = pillars.known_slots();
    let shares = core::array::from_fn(|i| {
        let count = counts[i];
        let percentage = if known_slots > 0 {
            (count as f64 / known_slots as f64 * 100.0).round() as u8
        } else {
            0
        };
        ElementShare {
            element: ALL_ELEMENTS[i],
            count,
            percentage,
        }
    });

    ElementTally {
        shares,
        known_slots,
    }
}

/// Elements with no presence or below the weak threshold, strongest first.
///
/// Ordering matches the strong-element ranking: descending count, ties in
/// element enumeration order.
pub fn weak_elements(tally: &ElementTally) -> Vec<ElementShare> {
    let mut ranked = tally.shares.to_vec();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
        .into_iter()
        .filter(|s| s.count == 0 || s.percentage < WEAK_THRESHOLD_PCT)
        .collect()
}

/// The element occupying the most slots; ties resolve to the earlier
/// element in enumeration order.
pub fn strong_element(tally: &ElementTally) -> ElementShare {
    let mut best = tally.shares[0];
    for s in &tally.shares[1..] {
        if s.count > best.count {
            best = *s;
        }
    }
    best
}
