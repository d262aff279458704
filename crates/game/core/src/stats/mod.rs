//! Stat system.
//!
//! Characters carry a single [`CoreStats`] record fixed at creation. Class
//! bonuses and inherited bonuses are both expressed as [`StatBonus`] triples.

pub mod core;

pub use self::core::{Attribute, CoreStats, StatBonus};
