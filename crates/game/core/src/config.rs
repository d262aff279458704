use crate::character::CharacterSpec;
use crate::class::ClassKind;
use crate::stats::Attribute;

/// Session configuration and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Number of ancestors generated before the interactive session starts.
    pub bootstrap_generations: usize,
    pub bootstrap_name: String,
    pub bootstrap_weapon: String,
    pub bootstrap_attribute: Attribute,
    pub bootstrap_ability: String,
    /// Session seed. `None` lets the caller pick one (usually from the clock).
    pub seed: Option<u64>,
}

impl GameConfig {
    pub const DEFAULT_BOOTSTRAP_GENERATIONS: usize = 21;

    pub fn new() -> Self {
        Self {
            bootstrap_generations: Self::DEFAULT_BOOTSTRAP_GENERATIONS,
            bootstrap_name: "Test".to_owned(),
            bootstrap_weapon: "daggers".to_owned(),
            bootstrap_attribute: Attribute::Strength,
            bootstrap_ability: "stealth".to_owned(),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_bootstrap_generations(mut self, generations: usize) -> Self {
        self.bootstrap_generations = generations;
        self
    }

    /// Spec for an auto-generated ancestor of the given class.
    pub fn bootstrap_spec(&self, class: ClassKind) -> CharacterSpec {
        CharacterSpec::new(
            self.bootstrap_name.clone(),
            class,
            self.bootstrap_weapon.clone(),
            self.bootstrap_attribute,
            self.bootstrap_ability.clone(),
        )
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
