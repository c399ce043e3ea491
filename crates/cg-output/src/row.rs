//! Plain data row types written by output backends.

use cg_sim::RewardRecord;

/// One reward delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardEventRow {
    pub tick:     u64,
    pub agent_id: u32,
    pub team:     u8,
    /// `deposit`, `pickup`, `wall` or a basic reward name.
    pub event:    &'static str,
    pub reward:   f32,
    /// Navigation goal applied after the contact; empty for basic rewards.
    pub nav:      &'static str,
    /// Carried count when the event fired.
    pub carried:  u32,
}

impl From<&RewardRecord> for RewardEventRow {
    fn from(r: &RewardRecord) -> Self {
        Self {
            tick:     r.tick.0,
            agent_id: r.agent.0,
            team:     r.team.0,
            event:    r.event.as_str(),
            reward:   r.reward,
            nav:      r.nav.map_or("", |n| n.as_str()),
            carried:  r.carried,
        }
    }
}

/// Summary statistics for one match tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:          u64,
    pub elapsed_secs:  f32,
    pub reward_events: u64,
    pub total_reward:  f32,
}

/// Position and load of one agent at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub team:     u8,
    pub x:        f32,
    pub z:        f32,
    pub carried:  u32,
    pub frozen:   bool,
}
