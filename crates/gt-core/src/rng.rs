//! Deterministic per-ghost and engine-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each ghost gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive ghost IDs uniformly across the seed space.
//! Ghosts never share RNG state, so the frightened coin flips and ambush
//! tie-breaks of one ghost do not depend on the evaluation order of the
//! others.  This is what lets the `parallel` engine feature reproduce the
//! sequential results exactly.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-ghost deterministic RNG.
///
/// The engine owns one per ghost and hands out `&mut` access to exactly one
/// strategy call at a time.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and a ghost ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

// ── EngineRng ─────────────────────────────────────────────────────────────────

/// Engine-level RNG for global operations (initial phase timers).
///
/// Used only from the single-threaded setup path.
pub struct EngineRng(SmallRng);

impl EngineRng {
    pub fn new(seed: u64) -> Self {
        EngineRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
