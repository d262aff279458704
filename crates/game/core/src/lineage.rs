//! Lineage accumulator.
//!
//! A [`Lineage`] is the append-only family history that new characters
//! inherit from. Inheritance walks ancestors newest-first with a weight that
//! starts at the rolled [`Tier`] multiplier and halves per generation:
//!
//! ```text
//! bonus[stat] = Σ heritable(ancestor_k, stat) × multiplier / 2^k
//! ```
//!
//! where `k = 0` is the most recent ancestor. The total weight never exceeds
//! `2 × multiplier`, so inherited bonuses stay bounded however long the
//! lineage grows.

use crate::character::Character;
use crate::class::ClassKind;
use crate::env::{RngOracle, RngStream};
use crate::stats::{Attribute, StatBonus};
use crate::tier::Tier;

/// Result of consulting a lineage for a new birth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inheritance {
    /// Rolled tier, `None` when the lineage had no ancestors.
    pub tier: Option<Tier>,
    pub bonus: StatBonus,
}

/// Number of registered characters per class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassCounts {
    pub warriors: u32,
    pub rogues: u32,
    pub mages: u32,
}

impl ClassCounts {
    pub fn get(&self, class: ClassKind) -> u32 {
        match class {
            ClassKind::Warrior => self.warriors,
            ClassKind::Rogue => self.rogues,
            ClassKind::Mage => self.mages,
        }
    }

    pub fn total(&self) -> u32 {
        self.warriors + self.rogues + self.mages
    }

    fn record(&mut self, class: ClassKind) {
        match class {
            ClassKind::Warrior => self.warriors += 1,
            ClassKind::Rogue => self.rogues += 1,
            ClassKind::Mage => self.mages += 1,
        }
    }
}

/// Number of tier rolls per outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierCounts {
    pub normal: u32,
    pub awakened: u32,
    pub empowered: u32,
    pub unleashed: u32,
}

impl TierCounts {
    pub fn get(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Normal => self.normal,
            Tier::Awakened => self.awakened,
            Tier::Empowered => self.empowered,
            Tier::Unleashed => self.unleashed,
        }
    }

    pub fn total(&self) -> u32 {
        self.normal + self.awakened + self.empowered + self.unleashed
    }

    fn record(&mut self, tier: Tier) {
        match tier {
            Tier::Normal => self.normal += 1,
            Tier::Awakened => self.awakened += 1,
            Tier::Empowered => self.empowered += 1,
            Tier::Unleashed => self.unleashed += 1,
        }
    }
}

/// Ordered family history, oldest first.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lineage {
    members: Vec<Character>,
    classes: ClassCounts,
    tiers: TierCounts,
}

impl Lineage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in generational order, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Character> + ExactSizeIterator {
        self.members.iter()
    }

    /// Most recently registered member.
    pub fn latest(&self) -> Option<&Character> {
        self.members.last()
    }

    /// Append a character as the newest generation.
    pub fn register(&mut self, character: Character) -> &Character {
        self.classes.record(character.class());
        self.members.push(character);
        &self.members[self.members.len() - 1]
    }

    /// Roll a tier and compute the bonus a new birth inherits.
    ///
    /// An empty lineage yields no tier and a zero bonus without consuming
    /// randomness or touching the tier counters.
    pub fn inherit<R: RngOracle>(&mut self, rng: &mut RngStream<R>) -> Inheritance {
        if self.members.is_empty() {
            return Inheritance::default();
        }

        let tier = Tier::roll(rng);
        self.tiers.record(tier);

        Inheritance {
            tier: Some(tier),
            bonus: accumulate(self.members.iter().rev(), tier.multiplier()),
        }
    }

    /// Inherited bonus for a new birth. See [`Lineage::inherit`].
    pub fn inherited_bonus<R: RngOracle>(&mut self, rng: &mut RngStream<R>) -> StatBonus {
        self.inherit(rng).bonus
    }

    pub fn class_counts(&self) -> ClassCounts {
        self.classes
    }

    pub fn tier_counts(&self) -> TierCounts {
        self.tiers
    }
}

/// Weights for `generations` ancestors, newest first: `multiplier`,
/// `multiplier / 2`, `multiplier / 4`, ...
pub fn ancestral_weights(multiplier: f64, generations: usize) -> impl Iterator<Item = f64> {
    core::iter::successors(Some(multiplier), |weight| Some(weight / 2.0)).take(generations)
}

/// Weighted, rounded sum of heritable stats over `ancestors` (newest first).
pub fn accumulate<'a>(
    ancestors: impl IntoIterator<Item = &'a Character>,
    multiplier: f64,
) -> StatBonus {
    let mut sums = [0.0f64; 3];

    for (ancestor, weight) in ancestors
        .into_iter()
        .zip(ancestral_weights(multiplier, usize::MAX))
    {
        for (sum, attribute) in sums.iter_mut().zip(Attribute::ALL) {
            *sum += f64::from(ancestor.heritable(attribute)) * weight;
        }
    }

    StatBonus::from(sums.map(round_half_up))
}

/// Round to the nearest integer with ties going up: a fractional part of at
/// least one half rounds up, anything less truncates toward zero.
///
/// Values beyond the `i32` range clamp to its bounds.
pub fn round_half_up(value: f64) -> i32 {
    let whole = value.trunc();
    if value - whole >= 0.5 {
        (whole as i32).saturating_add(1)
    } else {
        whole as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{CharacterFactory, CharacterSpec};
    use crate::env::ScriptedRng;

    fn spec(class: ClassKind, attribute: Attribute) -> CharacterSpec {
        CharacterSpec::new("Test", class, "daggers", attribute, "stealth")
    }

    fn scripted(script: &[u32]) -> RngStream<ScriptedRng> {
        RngStream::new(ScriptedRng::new(script.to_vec()), 0)
    }

    #[test]
    fn empty_lineage_inherits_nothing() {
        let mut lineage = Lineage::new();
        let mut rng = scripted(&[0]);
        assert_eq!(lineage.inherited_bonus(&mut rng), StatBonus::ZERO);
        assert_eq!(lineage.tier_counts().total(), 0);
        assert_eq!(rng.oracle().consumed(), 0);
    }

    #[test]
    fn rounding_ties_go_up() {
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(1.5), 2);
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(1.75), 2);
        assert_eq!(round_half_up(0.49), 0);
        assert_eq!(round_half_up(3.0), 3);
        assert_eq!(round_half_up(-1.5), -1);
    }

    #[test]
    fn rounding_clamps_to_i32_range() {
        assert_eq!(round_half_up(f64::from(i32::MAX) + 0.5), i32::MAX);
        assert_eq!(round_half_up(1e12), i32::MAX);
        assert_eq!(round_half_up(-1e12), i32::MIN);
    }

    #[test]
    fn weights_halve_each_generation() {
        let weights: Vec<f64> = ancestral_weights(0.25, 4).collect();
        assert_eq!(weights, vec![0.25, 0.125, 0.0625, 0.03125]);
    }

    #[test]
    fn total_weight_is_bounded() {
        for tier in Tier::ALL {
            let count = tier.multiplier();
            for generations in 1..=40usize {
                let total: f64 = ancestral_weights(count, generations).sum();
                let expected = count * (2.0 - 2f64.powi(1 - generations as i32));
                assert!((total - expected).abs() < 1e-12);
                assert!(total < 2.0 * count);
            }
        }
    }

    #[test]
    fn accumulate_applies_the_halving_weights() {
        let mut lineage = Lineage::new();
        let mut rng = scripted(&[50]);
        for _ in 0..12 {
            let character =
                CharacterFactory::create(&mut lineage, &mut rng, spec(ClassKind::Warrior, Attribute::Strength));
            lineage.register(character);
        }

        for tier in Tier::ALL {
            let multiplier = tier.multiplier();
            let expected: [i32; 3] = Attribute::ALL.map(|attribute| {
                let sum: f64 = lineage
                    .iter()
                    .rev()
                    .zip(ancestral_weights(multiplier, lineage.len()))
                    .map(|(ancestor, weight)| f64::from(ancestor.heritable(attribute)) * weight)
                    .sum();
                round_half_up(sum)
            });
            assert_eq!(
                accumulate(lineage.iter().rev(), multiplier),
                StatBonus::from(expected),
                "{tier}"
            );
        }
    }

    #[test]
    fn most_recent_ancestor_weighs_most() {
        let mut lineage = Lineage::new();
        let mut rng = scripted(&[50]);
        // oldest: warrior (7, 4, 3), newest: mage (3, 4, 7)
        for (class, attribute) in [
            (ClassKind::Warrior, Attribute::Strength),
            (ClassKind::Mage, Attribute::Intellect),
        ] {
            let character = CharacterFactory::create(&mut lineage, &mut rng, spec(class, attribute));
            lineage.register(character);
        }

        // Mage (3, 4, 7) was born with bonus (2, 1, 1) -> (5, 5, 8), heritable (5, 5, 9).
        // Warrior heritable (8, 4, 3).
        // strength: 5×0.25 + 8×0.125 = 2.25 -> 2
        // agility:  5×0.25 + 4×0.125 = 1.75 -> 2
        // intellect: 9×0.25 + 3×0.125 = 2.625 -> 3
        assert_eq!(lineage.inherited_bonus(&mut rng), StatBonus::new(2, 2, 3));
    }

    #[test]
    fn every_roll_counts_exactly_one_tier() {
        let mut lineage = Lineage::new();
        let mut rng = RngStream::seeded(11);
        for _ in 0..50 {
            let character =
                CharacterFactory::create(&mut lineage, &mut rng, spec(ClassKind::Rogue, Attribute::Agility));
            lineage.register(character);
        }

        let before = lineage.tier_counts();
        let inheritance = lineage.inherit(&mut rng);
        let after = lineage.tier_counts();
        let tier = inheritance.tier.expect("non-empty lineage rolls a tier");

        assert_eq!(after.total(), before.total() + 1);
        assert_eq!(after.get(tier), before.get(tier) + 1);
        // first birth rolled nothing
        assert_eq!(after.total(), 50);
    }

    #[test]
    fn class_counts_follow_registrations() {
        let mut lineage = Lineage::new();
        let mut rng = scripted(&[50]);
        for class in [ClassKind::Mage, ClassKind::Warrior, ClassKind::Mage, ClassKind::Rogue] {
            let character = CharacterFactory::create(&mut lineage, &mut rng, spec(class, Attribute::Strength));
            lineage.register(character);
        }

        let counts = lineage.class_counts();
        assert_eq!(counts, ClassCounts { warriors: 1, rogues: 1, mages: 2 });
        assert_eq!(counts.total() as usize, lineage.len());
        assert_eq!(lineage.latest().map(Character::class), Some(ClassKind::Rogue));
    }

    #[test]
    fn stats_settle_for_long_normal_lineages() {
        let mut lineage = Lineage::new();
        let mut rng = scripted(&[50]);
        for _ in 0..60 {
            let character =
                CharacterFactory::create(&mut lineage, &mut rng, spec(ClassKind::Warrior, Attribute::Strength));
            lineage.register(character);
        }

        // total weight stays under 0.5, so strength settles near 7 + 0.5 × (s + 1)
        let recent: Vec<i32> = lineage.iter().rev().take(5).map(|c| c.stats().strength).collect();
        assert!(recent.windows(2).all(|pair| pair[0] == pair[1]), "{recent:?}");
        assert!(recent[0] <= 16, "{recent:?}");
        assert_eq!(lineage.tier_counts().normal, 59);
    }
}
