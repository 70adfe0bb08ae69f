//! Element recommendation scoring.
//!
//! This crate provides:
//! - Season classification by calendar month, with each season's ruling
//!   element
//! - The weighted deficiency/season/luck scoring engine that ranks
//!   candidate elements for downstream recommendation consumers
//! - The balance-change preview simulation
//!
//! Everything here is a pure function; ranking output is deterministic
//! and stable for equal scores.

pub mod balance;
pub mod score;
pub mod season;

pub use balance::{DEFAULT_INCREMENT_PCT, ElementDistribution, preview_balance_change};
pub use score::{
    CandidateElement, DEFICIENCY_WEIGHT, ElementScore, GENERATING_BONUS, LUCK_CYCLE_BONUS,
    SEASON_BONUS, ScoreBreakdown, score_candidates,
};
pub use season::{Season, season_for_month};
