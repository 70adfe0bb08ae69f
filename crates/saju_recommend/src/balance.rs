//! Balance-change preview simulation.
//!
//! Simulates adding a fixed number of percentage points to one element of
//! a full five-element distribution, shrinking the others proportionally
//! so the grand total returns to 100. Pure simulation — the caller's
//! actual distribution is never touched.

use serde::{Deserialize, Serialize};

use saju_core::{ElementTally, FiveElement};

/// Default increment applied by a preview, in percentage points.
pub const DEFAULT_INCREMENT_PCT: f64 = 5.0;

/// Percentage per element, in element enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementDistribution {
    values: [f64; 5],
}

impl ElementDistribution {
    /// Build from per-element percentages in enumeration order
    /// (Wood, Fire, Earth, Metal, Water).
    pub const fn new(values: [f64; 5]) -> Self {
        Self { values }
    }

    /// Percentages of a chart tally as a distribution.
    pub fn from_tally(tally: &ElementTally) -> Self {
        Self {
            values: tally.shares.map(|s| s.percentage as f64),
        }
    }

    /// Percentage for one element.
    pub fn get(&self, element: FiveElement) -> f64 {
        self.values[element.index() as usize]
    }

    /// Sum over all five elements.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// The raw values in enumeration order.
    pub const fn values(&self) -> &[f64; 5] {
        &self.values
    }
}

/// Preview raising one element by `amount` percentage points.
///
/// The chosen element is capped at 100. When the new total exceeds 100,
/// every other element shrinks proportionally to its share of the
/// non-chosen total (floored at 0). All values round to one decimal.
pub fn preview_balance_change(
    current: &ElementDistribution,
    element: FiveElement,
    amount: f64,
) -> ElementDistribution {
    let chosen = element.index() as usize;
    let mut values = current.values;

    values[chosen] = (values[chosen] + amount).min(100.0);

    let total: f64 = values.iter().sum();
    if total > 100.0 {
        let excess = total - 100.0;
        let other_total: f64 = values
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != chosen)
            .map(|(_, v)| v)
            .sum();
        if other_total > 0.0 {
            for (i, v) in values.iter_mut().enumerate() {
                if i != chosen {
                    let ratio = *v / other_total;
                    *v = (*v - excess * ratio).max(0.0);
                }
            }
        }
    }

    for v in &mut values {
        *v = (*v * 10.0).round() / 10.0;
    }

    ElementDistribution { values }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist() -> ElementDistribution {
        ElementDistribution::new([30.0, 25.0, 20.0, 15.0, 10.0])
    }

    #[test]
    fn total_conserved_within_tolerance() {
        let next = preview_balance_change(&dist(), FiveElement::Water, DEFAULT_INCREMENT_PCT);
        assert!((next.total() - 100.0).abs() < 0.5, "total {}", next.total());
    }

    #[test]
    fn chosen_element_increases() {
        let next = preview_balance_change(&dist(), FiveElement::Water, 5.0);
        assert!(next.get(FiveElement::Water) > dist().get(FiveElement::Water));
        assert_eq!(next.get(FiveElement::Water), 15.0);
    }

    #[test]
    fn others_shrink_proportionally() {
        let next = preview_balance_change(&dist(), FiveElement::Water, 5.0);
        // Excess 5 spread over a non-chosen total of 90.
        assert_eq!(next.get(FiveElement::Wood), 28.3);
        assert_eq!(next.get(FiveElement::Fire), 23.6);
        assert_eq!(next.get(FiveElement::Earth), 18.9);
        assert_eq!(next.get(FiveElement::Metal), 14.2);
    }

    #[test]
    fn chosen_caps_at_100() {
        let all_water = ElementDistribution::new([0.0, 0.0, 0.0, 0.0, 100.0]);
        let next = preview_balance_change(&all_water, FiveElement::Water, 5.0);
        assert_eq!(next.get(FiveElement::Water), 100.0);
        assert!((next.total() - 100.0).abs() < 0.5);
    }

    #[test]
    fn under_100_totals_are_not_inflated() {
        // A sparse distribution stays below 100; nothing is rescaled up.
        let sparse = ElementDistribution::new([10.0, 10.0, 10.0, 10.0, 10.0]);
        let next = preview_balance_change(&sparse, FiveElement::Fire, 5.0);
        assert_eq!(next.get(FiveElement::Fire), 15.0);
        assert_eq!(next.get(FiveElement::Wood), 10.0);
        assert_eq!(next.total(), 55.0);
    }

    #[test]
    fn caller_distribution_untouched() {
        let original = dist();
        let _ = preview_balance_change(&original, FiveElement::Wood, 5.0);
        assert_eq!(original, dist());
    }

    #[test]
    fn values_rounded_to_one_decimal() {
        let next = preview_balance_change(&dist(), FiveElement::Water, 5.0);
        for v in next.values() {
            assert_eq!((v * 10.0).round() / 10.0, *v);
        }
    }
}
