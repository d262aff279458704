//! Generational influence tiers.
//!
//! Every birth into a non-empty lineage rolls a tier. The tier's multiplier is
//! the weight given to the most recent ancestor; older ancestors get half of
//! the previous weight each.
//!
//! Escalation is a chain of conditional checks: a birth only gets the chance
//! to reach the next tier after passing the check for the current one.
//!
//! ```text
//! Normal ──20%──▶ Awakened ──10%──▶ Empowered ──5%──▶ Unleashed
//!  0.25            0.5               1                 2
//! ```

use crate::env::{DrawKind, RngOracle, RngStream};

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Tier {
    /// Ordinary birth, ~80%.
    #[default]
    Normal,
    /// Special birth, ~20%.
    Awakened,
    /// Prodigy, ~2%.
    Empowered,
    /// Near omnipotent, ~0.1%.
    Unleashed,
}

impl Tier {
    pub const ALL: [Tier; 4] = [
        Self::Normal,
        Self::Awakened,
        Self::Empowered,
        Self::Unleashed,
    ];

    /// Weight applied to the most recent ancestor's stats.
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Normal => 0.25,
            Self::Awakened => 0.5,
            Self::Empowered => 1.0,
            Self::Unleashed => 2.0,
        }
    }

    /// The tier reached by escalating from this one, if any.
    pub const fn next(self) -> Option<Tier> {
        match self {
            Self::Normal => Some(Self::Awakened),
            Self::Awakened => Some(Self::Empowered),
            Self::Empowered => Some(Self::Unleashed),
            Self::Unleashed => None,
        }
    }

    /// Percent chance (out of 100) of escalating past this tier.
    pub const fn escalation_chance(self) -> u32 {
        match self {
            Self::Normal => 20,
            Self::Awakened => 10,
            Self::Empowered => 5,
            Self::Unleashed => 0,
        }
    }

    /// Roll a tier: start at [`Tier::Normal`] and keep escalating while each
    /// successive percentile draw falls under the current tier's chance.
    ///
    /// Consumes one draw per check made, so between one and three draws.
    pub fn roll<R: RngOracle>(rng: &mut RngStream<R>) -> Tier {
        let mut tier = Tier::Normal;
        while let Some(next) = tier.next() {
            if rng.roll_percent(DrawKind::Tier) >= tier.escalation_chance() {
                break;
            }
            tier = next;
        }
        tier
    }
}
