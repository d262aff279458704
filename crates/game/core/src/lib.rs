//! Deterministic character and lineage rules.
//!
//! `lineage-core` defines the canonical rules for creating characters
//! (classes, stats, attribute picks) and for inheriting stat bonuses from a
//! family history. Everything here is pure: randomness arrives through an
//! explicit [`RngStream`] and text is returned, never printed.
//!
//! The usual flow is: build a [`CharacterSpec`], hand it to
//! [`CharacterFactory::create`] together with the [`Lineage`], then register
//! the result with [`Lineage::register`]. [`Session`] bundles those steps.
pub mod character;
pub mod class;
pub mod config;
pub mod env;
pub mod error;
pub mod lineage;
pub mod narrative;
pub mod session;
pub mod stats;
pub mod tier;

pub use character::{Character, CharacterFactory, CharacterSpec};
pub use class::ClassKind;
pub use config::GameConfig;
pub use env::{DrawKind, PcgRng, RngOracle, RngStream, ScriptedRng};
pub use error::{ErrorSeverity, GameError, LineageError};
pub use lineage::{ClassCounts, Inheritance, Lineage, TierCounts};
pub use session::Session;
pub use stats::{Attribute, CoreStats, StatBonus};
pub use tier::Tier;
