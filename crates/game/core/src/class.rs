//! Character classes.
//!
//! A class only selects data: a fixed bonus triple added to the universal
//! base stats. There is no per-class behavior.

use crate::error::LineageError;
use crate::stats::{CoreStats, StatBonus};

/// The three playable classes.
///
/// Names are matched case-sensitively (`"warrior"`, not `"Warrior"`).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClassKind {
    /// Strong front-liner: +3 STR, +1 AGL
    Warrior,
    /// Scholar of the arcane: +1 AGL, +3 INT
    Mage,
    /// Nimble all-rounder: +1 STR, +2 AGL, +1 INT
    Rogue,
}

impl ClassKind {
    /// Classes in the order used when picking one uniformly at random.
    pub const ALL: [ClassKind; 3] = [Self::Warrior, Self::Rogue, Self::Mage];

    /// Flat bonus this class adds to the base stats.
    pub const fn bonuses(self) -> StatBonus {
        match self {
            Self::Warrior => StatBonus::new(3, 1, 0),
            Self::Mage => StatBonus::new(0, 1, 3),
            Self::Rogue => StatBonus::new(1, 2, 1),
        }
    }

    /// Base stats for a fresh character of this class.
    pub const fn base_stats(self) -> CoreStats {
        CoreStats::from_base(self.bonuses())
    }

    /// Parse a class name, rejecting anything but the exact lowercase names.
    pub fn parse(input: &str) -> Result<Self, LineageError> {
        input
            .parse::<Self>()
            .map_err(|_| LineageError::invalid_class(input))
    }

    /// Parse a class name, falling back to [`ClassKind::Mage`] for anything
    /// unrecognised. This is the interactive prompt's policy.
    pub fn parse_or_mage(input: &str) -> Self {
        Self::parse(input).unwrap_or(Self::Mage)
    }
}
