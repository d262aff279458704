//! Environment collaborators the rules depend on.
//!
//! The only external resource the lineage rules touch is randomness, exposed
//! through the [`RngOracle`] trait and consumed via an explicit [`RngStream`].
pub mod rng;

pub use rng::{DrawKind, PcgRng, RngOracle, RngStream, ScriptedRng, compute_seed};
