//! Core stats - the three attributes every character is built from.
//!
//! Stats = Base (3) + Class bonus + Attribute pick (+1) + Inherited bonus

use core::fmt;
use core::str::FromStr;

use crate::error::LineageError;

/// The three core attributes.
///
/// - **Strength**: physical power
/// - **Agility**: speed and evasion
/// - **Intellect**: learning and spellcraft
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Attribute {
    Strength,
    Agility,
    Intellect,
}

impl Attribute {
    /// All attributes in stat-record order.
    pub const ALL: [Attribute; 3] = [Self::Strength, Self::Agility, Self::Intellect];
}

impl FromStr for Attribute {
    type Err = LineageError;

    /// Accepts the full names and the `str`/`agl`/`int` abbreviations,
    /// ignoring ASCII case and surrounding whitespace.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "strength" | "str" => Ok(Self::Strength),
            "agility" | "agl" => Ok(Self::Agility),
            "intellect" | "int" => Ok(Self::Intellect),
            _ => Err(LineageError::invalid_attribute(input)),
        }
    }
}

/// A character's stat record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoreStats {
    pub strength: i32,
    pub agility: i32,
    pub intellect: i32,
}

impl CoreStats {
    /// Universal starting value for every stat before class bonuses.
    pub const BASE: i32 = 3;

    pub const fn new(strength: i32, agility: i32, intellect: i32) -> Self {
        Self {
            strength,
            agility,
            intellect,
        }
    }

    /// Base stats with a flat bonus triple on top.
    pub const fn from_base(bonus: StatBonus) -> Self {
        Self::new(
            Self::BASE + bonus.strength,
            Self::BASE + bonus.agility,
            Self::BASE + bonus.intellect,
        )
    }

    pub const fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Agility => self.agility,
            Attribute::Intellect => self.intellect,
        }
    }

    fn get_mut(&mut self, attribute: Attribute) -> &mut i32 {
        match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Agility => &mut self.agility,
            Attribute::Intellect => &mut self.intellect,
        }
    }

    /// Returns a copy with `amount` added to one attribute, saturating at the
    /// `i32` bounds.
    #[must_use]
    pub fn raised(mut self, attribute: Attribute, amount: i32) -> Self {
        let stat = self.get_mut(attribute);
        *stat = stat.saturating_add(amount);
        self
    }

    /// Returns a copy with a bonus triple added element-wise, saturating at the
    /// `i32` bounds.
    #[must_use]
    pub const fn with_bonus(self, bonus: StatBonus) -> Self {
        Self::new(
            self.strength.saturating_add(bonus.strength),
            self.agility.saturating_add(bonus.agility),
            self.intellect.saturating_add(bonus.intellect),
        )
    }
}

impl Default for CoreStats {
    fn default() -> Self {
        Self::new(Self::BASE, Self::BASE, Self::BASE)
    }
}

impl fmt::Display for CoreStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{strength: {}, agility: {}, intellect: {}}}",
            self.strength, self.agility, self.intellect
        )
    }
}

/// A flat (strength, agility, intellect) triple added on top of stats.
///
/// Used both for class bonuses and for bonuses inherited from a lineage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBonus {
    pub strength: i32,
    pub agility: i32,
    pub intellect: i32,
}

impl StatBonus {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(strength: i32, agility: i32, intellect: i32) -> Self {
        Self {
            strength,
            agility,
            intellect,
        }
    }

    pub const fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Agility => self.agility,
            Attribute::Intellect => self.intellect,
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.strength == 0 && self.agility == 0 && self.intellect == 0
    }
}

impl From<[i32; 3]> for StatBonus {
    fn from([strength, agility, intellect]: [i32; 3]) -> Self {
        Self::new(strength, agility, intellect)
    }
}

impl fmt::Display for StatBonus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.strength, self.agility, self.intellect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_parses_names_and_abbreviations() {
        assert_eq!("strength".parse::<Attribute>(), Ok(Attribute::Strength));
        assert_eq!("AGL".parse::<Attribute>(), Ok(Attribute::Agility));
        assert_eq!(" int ".parse::<Attribute>(), Ok(Attribute::Intellect));
        assert_eq!(
            "wisdom".parse::<Attribute>(),
            Err(LineageError::invalid_attribute("wisdom"))
        );
        assert!("".parse::<Attribute>().is_err());
    }

    #[test]
    fn attribute_displays_snake_case() {
        assert_eq!(Attribute::Intellect.to_string(), "intellect");
        assert_eq!(Attribute::Strength.as_ref(), "strength");
    }

    #[test]
    fn raised_touches_only_one_stat() {
        let stats = CoreStats::default().raised(Attribute::Agility, 1);
        assert_eq!(stats, CoreStats::new(3, 4, 3));
    }

    #[test]
    fn bonus_applies_element_wise() {
        let stats = CoreStats::from_base(StatBonus::new(3, 1, 0)).with_bonus([2, 1, 1].into());
        assert_eq!(stats, CoreStats::new(8, 5, 4));
    }

    #[test]
    fn additions_saturate_instead_of_overflowing() {
        let stats = CoreStats::new(i32::MAX - 1, 4, 3);
        assert_eq!(stats.raised(Attribute::Strength, 5).strength, i32::MAX);
        assert_eq!(
            stats.with_bonus(StatBonus::new(10, 1, 0)),
            CoreStats::new(i32::MAX, 5, 3)
        );
    }

    #[test]
    fn display_formats() {
        assert_eq!(
            CoreStats::new(7, 4, 3).to_string(),
            "{strength: 7, agility: 4, intellect: 3}"
        );
        assert_eq!(StatBonus::new(2, 1, 1).to_string(), "[2, 1, 1]");
        assert!(StatBonus::ZERO.is_zero());
    }
}
