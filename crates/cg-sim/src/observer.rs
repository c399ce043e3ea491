//! Simulation observer trait for progress reporting and data collection.

use cg_agent::AgentStore;
use cg_core::Tick;

use crate::{Arena, RewardRecord};

/// Per-tick totals passed to [`SimObserver::on_tick_end`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickSummary {
    pub tick:          Tick,
    pub elapsed_secs:  f32,
    pub reward_events: usize,
    pub total_reward:  f32,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: score printer
///
/// ```rust,ignore
/// struct ScorePrinter;
///
/// impl SimObserver for ScorePrinter {
///     fn on_reward(&mut self, record: &RewardRecord) {
///         println!("{} {}: {} {:+.2}", record.tick, record.agent, record.event, record.reward);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per reward record, in the order they were produced.
    fn on_reward(&mut self, _record: &RewardRecord) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) with read-only access to agents and arena.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore, _arena: &Arena) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
