//! A play session: one lineage, one random stream, one configuration.

use crate::character::{Character, CharacterFactory, CharacterSpec};
use crate::class::ClassKind;
use crate::config::GameConfig;
use crate::env::{DrawKind, PcgRng, RngOracle, RngStream};
use crate::lineage::Lineage;

/// Owns the lineage and random stream so callers only deal in specs.
#[derive(Debug)]
pub struct Session<R = PcgRng> {
    config: GameConfig,
    lineage: Lineage,
    rng: RngStream<R>,
}

impl Session<PcgRng> {
    /// Session backed by [`PcgRng`], seeded with `seed`.
    pub fn seeded(config: GameConfig, seed: u64) -> Self {
        Self::new(config, RngStream::seeded(seed))
    }
}

impl<R: RngOracle> Session<R> {
    pub fn new(config: GameConfig, rng: RngStream<R>) -> Self {
        Self {
            config,
            lineage: Lineage::new(),
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn lineage(&self) -> &Lineage {
        &self.lineage
    }

    /// Create a character from `spec` and register it as the newest
    /// generation.
    pub fn birth(&mut self, spec: CharacterSpec) -> &Character {
        CharacterFactory::create_registered(&mut self.lineage, &mut self.rng, spec)
    }

    /// Pick a class uniformly at random.
    pub fn random_class(&mut self) -> ClassKind {
        let index = self.rng.pick_index(DrawKind::Class, ClassKind::ALL.len());
        ClassKind::ALL[index]
    }

    /// Generate the configured number of ancestors, each with a random class
    /// and the configured name, weapon, attribute and ability.
    ///
    /// `on_birth` sees every ancestor right after it is registered.
    pub fn bootstrap(&mut self, mut on_birth: impl FnMut(&Character)) {
        for _ in 0..self.config.bootstrap_generations {
            let class = self.random_class();
            let spec = self.config.bootstrap_spec(class);
            on_birth(self.birth(spec));
        }
    }
}
