//! Per-agent snapshot handed to the decision/reward core.

use cg_core::{BaseId, Pose, TeamId};

/// The slice of agent state the policy reads.
///
/// Assembled from [`AgentStore`][crate::AgentStore] by
/// [`AgentStore::state`][crate::AgentStore::state].  `carried` is owned by
/// the host's pickup/deposit logic; the policy only ever reads it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    pub team:      TeamId,
    pub home_base: BaseId,
    pub pose:      Pose,
    pub carried:   u32,
    pub frozen:    bool,
}

impl AgentState {
    /// Fresh episode state: nothing carried, not frozen.
    pub fn new(team: TeamId, home_base: BaseId, pose: Pose) -> Self {
        Self { team, home_base, pose, carried: 0, frozen: false }
    }
}
