//! Characters and the factory that births them into a lineage.

use crate::class::ClassKind;
use crate::env::{RngOracle, RngStream};
use crate::lineage::{Inheritance, Lineage};
use crate::stats::{Attribute, CoreStats};

/// Everything a player chooses about a new character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSpec {
    pub name: String,
    pub class: ClassKind,
    /// Free-form weapon specialty (axes, swords, tomes, ...).
    pub weapon_skill: String,
    /// Attribute receiving the personal +1.
    pub attribute: Attribute,
    /// Free-form signature ability.
    pub ability: String,
}

impl CharacterSpec {
    pub fn new(
        name: impl Into<String>,
        class: ClassKind,
        weapon_skill: impl Into<String>,
        attribute: Attribute,
        ability: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            class,
            weapon_skill: weapon_skill.into(),
            attribute,
            ability: ability.into(),
        }
    }
}

/// A fully initialised character. Immutable once created.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    spec: CharacterSpec,
    stats: CoreStats,
    inheritance: Inheritance,
}

impl Character {
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn class(&self) -> ClassKind {
        self.spec.class
    }

    pub fn weapon_skill(&self) -> &str {
        &self.spec.weapon_skill
    }

    pub fn attribute(&self) -> Attribute {
        self.spec.attribute
    }

    pub fn ability(&self) -> &str {
        &self.spec.ability
    }

    /// Final stats: class base, attribute pick and inherited bonus.
    pub fn stats(&self) -> CoreStats {
        self.stats
    }

    /// What this character received from its ancestors at birth.
    pub fn inheritance(&self) -> &Inheritance {
        &self.inheritance
    }

    /// Value this character passes down for one attribute: its stat, plus one
    /// more if that attribute was its personal pick.
    pub fn heritable(&self, attribute: Attribute) -> i32 {
        let bonus = if self.spec.attribute == attribute { 1 } else { 0 };
        self.stats.get(attribute).saturating_add(bonus)
    }
}

/// Builds characters from a [`CharacterSpec`] and a lineage.
pub struct CharacterFactory;

impl CharacterFactory {
    /// Stats before any inheritance: class base plus the personal +1.
    pub fn innate_stats(class: ClassKind, attribute: Attribute) -> CoreStats {
        class.base_stats().raised(attribute, 1)
    }

    /// Create a character, drawing its inherited bonus from `lineage`.
    ///
    /// The lineage is only consulted (and its tier counters bumped); the
    /// caller registers the returned character with [`Lineage::register`].
    pub fn create<R: RngOracle>(
        lineage: &mut Lineage,
        rng: &mut RngStream<R>,
        spec: CharacterSpec,
    ) -> Character {
        let innate = Self::innate_stats(spec.class, spec.attribute);
        let inheritance = lineage.inherit(rng);

        Character {
            stats: innate.with_bonus(inheritance.bonus),
            spec,
            inheritance,
        }
    }

    /// Create a character and register it in one step.
    pub fn create_registered<'a, R: RngOracle>(
        lineage: &'a mut Lineage,
        rng: &mut RngStream<R>,
        spec: CharacterSpec,
    ) -> &'a Character {
        let character = Self::create(lineage, rng, spec);
        lineage.register(character)
    }
}
