//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `reward_events.csv`
//! - `tick_summaries.csv`
//! - `agent_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, OutputResult, RewardEventRow, TickSummaryRow};

/// Writes match output to three CSV files.
pub struct CsvWriter {
    rewards:   Writer<File>,
    summaries: Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the CSV files and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut rewards = Writer::from_path(dir.join("reward_events.csv"))?;
        rewards.write_record(["tick", "agent_id", "team", "event", "reward", "nav", "carried"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "elapsed_secs", "reward_events", "total_reward"])?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record(["agent_id", "tick", "team", "x", "z", "carried", "frozen"])?;

        Ok(Self { rewards, summaries, snapshots, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_reward_events(&mut self, rows: &[RewardEventRow]) -> OutputResult<()> {
        for row in rows {
            self.rewards.write_record(&[
                row.tick.to_string(),
                row.agent_id.to_string(),
                row.team.to_string(),
                row.event.to_owned(),
                row.reward.to_string(),
                row.nav.to_owned(),
                row.carried.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.elapsed_secs.to_string(),
            row.reward_events.to_string(),
            row.total_reward.to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.team.to_string(),
                row.x.to_string(),
                row.z.to_string(),
                row.carried.to_string(),
                (row.frozen as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rewards.flush()?;
        self.summaries.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
