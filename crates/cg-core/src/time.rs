//! Match time model.
//!
//! Time is a monotonically increasing `Tick` counter advanced once per fixed
//! simulation step.  `MatchClock` maps ticks to elapsed and remaining match
//! seconds:
//!
//!   elapsed = tick * fixed_dt_secs
//!
//! Keeping the integer tick canonical means reward records and output rows
//! are keyed exactly, without floating-point drift.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── MatchClock ────────────────────────────────────────────────────────────────

/// Fixed-step match clock.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchClock {
    /// Seconds advanced by one tick.
    pub fixed_dt_secs: f32,
    /// Ticks in a full match.
    pub total_ticks:   u64,
    /// The current tick, advanced by `MatchClock::advance()` each step.
    pub current_tick:  Tick,
}

impl MatchClock {
    pub fn new(fixed_dt_secs: f32, total_ticks: u64) -> Self {
        Self { fixed_dt_secs, total_ticks, current_tick: Tick::ZERO }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Rewind to tick 0 for a new episode.
    #[inline]
    pub fn reset(&mut self) {
        self.current_tick = Tick::ZERO;
    }

    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.current_tick.0 as f32 * self.fixed_dt_secs
    }

    /// Seconds left in the match, never negative.
    #[inline]
    pub fn time_remaining_secs(&self) -> f32 {
        let remaining = self.total_ticks.saturating_sub(self.current_tick.0);
        remaining as f32 * self.fixed_dt_secs
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.current_tick.0 >= self.total_ticks
    }
}

impl fmt::Display for MatchClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.2}s elapsed, {:.2}s left)",
            self.current_tick,
            self.elapsed_secs(),
            self.time_remaining_secs()
        )
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Seconds per fixed step.  Default: 0.02 (50 Hz physics).
    pub fixed_dt_secs: f32,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Snapshot every N ticks.  `0` disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            fixed_dt_secs:         0.02,
            total_ticks:           3_000,
            seed:                  0,
            num_threads:           None,
            output_interval_ticks: 50,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    pub fn make_clock(&self) -> MatchClock {
        MatchClock::new(self.fixed_dt_secs, self.total_ticks)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if !(self.fixed_dt_secs.is_finite() && self.fixed_dt_secs > 0.0) {
            return Err(CoreError::Config(format!(
                "fixed_dt_secs must be positive, got {}",
                self.fixed_dt_secs
            )));
        }
        if self.num_threads == Some(0) {
            return Err(CoreError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}
