//! RNG oracle for deterministic random number generation.
//!
//! Tier rolls and bootstrap class picks draw from an [`RngStream`], which
//! derives a fresh seed for every draw from a session seed and a nonce. Given
//! the same session seed the whole lineage is reproduced exactly.

use core::sync::atomic::{AtomicUsize, Ordering};

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a percentile in `[0, 100)`.
    fn roll_percent(&self, seed: u64) -> u32 {
        self.next_u32(seed) % 100
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Oracle that replays a fixed script of raw values, ignoring the seed.
///
/// The script wraps around when exhausted. Mostly useful to force specific
/// tiers: a script of `[50]` never escalates, `[0, 0, 0]` always reaches
/// [`Tier::Unleashed`](crate::Tier::Unleashed).
#[derive(Debug)]
pub struct ScriptedRng {
    script: Vec<u32>,
    cursor: AtomicUsize,
}

impl ScriptedRng {
    /// Creates an oracle replaying `script`. An empty script yields zeros.
    pub fn new(script: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Number of values handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        if self.script.is_empty() {
            return 0;
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.script[index % self.script.len()]
    }
}

/// Purpose of a draw, mixed into the per-draw seed so that unrelated rolls
/// made at the same nonce never share a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawKind {
    /// Generational influence escalation check.
    Tier = 1,
    /// Class pick for auto-generated ancestors.
    Class = 2,
}

/// Compute deterministic seed from session components.
///
/// * `game_seed` - Base seed set at session start
/// * `nonce` - Draw sequence number (increments every draw)
/// * `context` - Purpose of the draw, see [`DrawKind`]
pub fn compute_seed(game_seed: u64, nonce: u64, context: u32) -> u64 {
    // SplitMix64 / FxHash multipliers
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Sequential draw source over an [`RngOracle`].
///
/// This is the random source passed explicitly into every lineage operation.
#[derive(Debug)]
pub struct RngStream<R = PcgRng> {
    oracle: R,
    game_seed: u64,
    nonce: u64,
}

impl RngStream<PcgRng> {
    /// Stream backed by [`PcgRng`].
    pub fn seeded(game_seed: u64) -> Self {
        Self::new(PcgRng, game_seed)
    }
}

impl<R: RngOracle> RngStream<R> {
    pub fn new(oracle: R, game_seed: u64) -> Self {
        Self {
            oracle,
            game_seed,
            nonce: 0,
        }
    }

    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }

    /// Number of draws made so far.
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn oracle(&self) -> &R {
        &self.oracle
    }

    fn next_seed(&mut self, kind: DrawKind) -> u64 {
        let seed = compute_seed(self.game_seed, self.nonce, kind as u32);
        self.nonce += 1;
        seed
    }

    /// Draw a uniform percentile in `[0, 100)`.
    pub fn roll_percent(&mut self, kind: DrawKind) -> u32 {
        let seed = self.next_seed(kind);
        self.oracle.roll_percent(seed)
    }

    /// Draw a uniform index in `[0, len)`. Returns 0 for `len == 0`.
    pub fn pick_index(&mut self, kind: DrawKind, len: usize) -> usize {
        let seed = self.next_seed(kind);
        if len == 0 {
            return 0;
        }
        self.oracle.range(seed, 0, (len - 1) as u32) as usize
    }
}
