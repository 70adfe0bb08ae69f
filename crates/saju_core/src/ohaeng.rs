//! The Five Elements (Ohaeng) and their production/suppression cycles.
//!
//! Every stem and branch maps onto one of the five elements. The generating
//! (Sangsaeng) cycle runs Wood → Fire → Earth → Metal → Water → Wood; the
//! overcoming (Sanggeuk) cycle runs Wood → Earth → Water → Fire → Metal →
//! Wood.

use serde::{Deserialize, Serialize};

/// The five elements in conventional enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FiveElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in order (index 0 = Wood).
pub const ALL_ELEMENTS: [FiveElement; 5] = [
    FiveElement::Wood,
    FiveElement::Fire,
    FiveElement::Earth,
    FiveElement::Metal,
    FiveElement::Water,
];

impl FiveElement {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Create from raw u8 value.
    pub fn from_index(v: u8) -> Option<Self> {
        if (v as usize) < ALL_ELEMENTS.len() {
            Some(ALL_ELEMENTS[v as usize])
        } else {
            None
        }
    }

    /// English name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Traditional character for the element.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// Lookup by case-insensitive English name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_ELEMENTS
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(name))
    }

    /// Short keyword description of the element's qualities, exposed as
    /// structured data for explanatory collaborators.
    pub const fn qualities(self) -> &'static str {
        match self {
            Self::Wood => "growth, patience, creativity",
            Self::Fire => "passion, vitality, expressiveness",
            Self::Earth => "stability, trust, mediation",
            Self::Metal => "decisiveness, justice, execution",
            Self::Water => "wisdom, flexibility, communication",
        }
    }

    /// The element this one produces in the generating (Sangsaeng) cycle.
    pub const fn generates(self) -> FiveElement {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element that produces this one in the generating cycle.
    pub const fn generated_by(self) -> FiveElement {
        match self {
            Self::Fire => Self::Wood,
            Self::Earth => Self::Fire,
            Self::Metal => Self::Earth,
            Self::Water => Self::Metal,
            Self::Wood => Self::Water,
        }
    }

    /// The element this one suppresses in the overcoming (Sanggeuk) cycle.
    pub const fn overcomes(self) -> FiveElement {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_elements_count() {
        assert_eq!(ALL_ELEMENTS.len(), 5);
    }

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn from_index_round_trip() {
        for e in ALL_ELEMENTS {
            assert_eq!(FiveElement::from_index(e.index()), Some(e));
        }
        assert_eq!(FiveElement::from_index(5), None);
    }

    #[test]
    fn names_nonempty() {
        for e in ALL_ELEMENTS {
            assert!(!e.name().is_empty());
            assert!(!e.hanja().is_empty());
            assert!(!e.qualities().is_empty());
        }
    }

    #[test]
    fn from_name_case_insensitive() {
        assert_eq!(FiveElement::from_name("wood"), Some(FiveElement::Wood));
        assert_eq!(FiveElement::from_name("WATER"), Some(FiveElement::Water));
        assert_eq!(FiveElement::from_name("aether"), None);
    }

    #[test]
    fn generating_cycle_closes() {
        // Five applications of generates() return to the start.
        for e in ALL_ELEMENTS {
            let mut cur = e;
            for _ in 0..5 {
                cur = cur.generates();
            }
            assert_eq!(cur, e);
        }
    }

    #[test]
    fn generated_by_inverts_generates() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.generates().generated_by(), e);
        }
    }

    #[test]
    fn overcoming_cycle_closes() {
        for e in ALL_ELEMENTS {
            let mut cur = e;
            for _ in 0..5 {
                cur = cur.overcomes();
            }
            assert_eq!(cur, e);
        }
    }

    #[test]
    fn overcomes_skips_generated_neighbor() {
        // The overcome element is never the directly generated one.
        for e in ALL_ELEMENTS {
            assert_ne!(e.overcomes(), e.generates());
        }
    }
}
