//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use cg_agent::AgentStore;
use cg_core::Tick;
use cg_sim::{Arena, RewardRecord, SimObserver, TickSummary};

use crate::row::{AgentSnapshotRow, RewardEventRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes reward events, tick summaries and agent
/// snapshots to any [`OutputWriter`] backend.
///
/// Reward events are buffered for the current tick and written as one batch
/// at tick end.  Errors from the writer are stored internally because
/// `SimObserver` methods have no return value.  After `sim.run()` returns,
/// check for errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<RewardEventRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, pending: Vec::new(), last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the match).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_reward(&mut self, record: &RewardRecord) {
        self.pending.push(RewardEventRow::from(record));
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        if !self.pending.is_empty() {
            let result = self.writer.write_reward_events(&self.pending);
            self.pending.clear();
            self.store_err(result);
        }
        let row = TickSummaryRow {
            tick:          summary.tick.0,
            elapsed_secs:  summary.elapsed_secs,
            reward_events: summary.reward_events as u64,
            total_reward:  summary.total_reward,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore, _arena: &Arena) {
        let rows: Vec<AgentSnapshotRow> = agents
            .agent_ids()
            .map(|agent| {
                let i = agent.index();
                let position = agents.pose[i].position;
                AgentSnapshotRow {
                    agent_id: agent.0,
                    tick:     tick.0,
                    team:     agents.team[i].0,
                    x:        position.x,
                    z:        position.z,
                    carried:  agents.carried[i],
                    frozen:   agents.frozen[i],
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
