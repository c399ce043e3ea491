//! Deterministic per-agent and simulation-level RNG wrappers.
//!
//! Each agent gets its own `SmallRng` seeded by
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! so agents never share RNG state and adding agents at the end of the list
//! leaves the streams of existing agents untouched.  Random action sources
//! draw from these, which keeps a match reproducible whether or not the
//! action phase runs in parallel.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AgentId, Vec3};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
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
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Match-level RNG for arena setup (target scatter, spawn headings).
///
/// Single-threaded use only.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// A point on the ground plane (`y = 0`) inside the square
    /// `[-half_extent, half_extent]²`.
    pub fn ground_point(&mut self, half_extent: f32) -> Vec3 {
        if half_extent <= 0.0 {
            return Vec3::ZERO;
        }
        Vec3::new(
            self.0.gen_range(-half_extent..=half_extent),
            0.0,
            self.0.gen_range(-half_extent..=half_extent),
        )
    }

    /// A random unit heading on the ground plane.
    pub fn ground_heading(&mut self) -> Vec3 {
        let angle: f32 = self.0.gen_range(0.0..std::f32::consts::TAU);
        Vec3::new(angle.sin(), 0.0, angle.cos())
    }
}
