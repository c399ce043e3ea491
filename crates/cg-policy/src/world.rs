//! Read-only views of the externally owned arena entities.

use cg_agent::AgentStore;
use cg_core::{AgentId, BaseId, TargetId, TeamId, Tick, Vec3};

/// A collectible item.  Owned and mutated by the host; the policy only
/// reads it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    pub id:       TargetId,
    pub position: Vec3,
    /// `0` when free, nonzero while some agent holds it.
    pub carried:  u32,
    /// Agent currently holding the target, if any.
    pub carrier:  Option<AgentId>,
    /// Team whose base the target is banked in, if any.
    pub in_base:  Option<TeamId>,
}

impl Target {
    /// A free, unbanked target at `position`.
    pub fn new(id: TargetId, position: Vec3) -> Self {
        Self { id, position, carried: 0, carrier: None, in_base: None }
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.carried == 0
    }

    /// Free and not already banked by `team`.
    #[inline]
    pub fn is_eligible_for(&self, team: TeamId) -> bool {
        self.is_free() && self.in_base != Some(team)
    }
}

/// A team's home base.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Base {
    pub id:       BaseId,
    pub team:     TeamId,
    pub position: Vec3,
}

/// Borrowed target and base registries, re-read on every call.
#[derive(Copy, Clone, Debug)]
pub struct WorldView<'a> {
    pub targets: &'a [Target],
    /// Indexed by `BaseId`.
    pub bases:   &'a [Base],
}

impl<'a> WorldView<'a> {
    #[inline]
    pub fn new(targets: &'a [Target], bases: &'a [Base]) -> Self {
        Self { targets, bases }
    }

    #[inline]
    pub fn base(&self, id: BaseId) -> Option<&'a Base> {
        self.bases.get(id.index())
    }

    #[inline]
    pub fn target(&self, id: TargetId) -> Option<&'a Target> {
        self.targets.get(id.index())
    }
}

/// Read-only snapshot passed to every [`ActionSource`][crate::ActionSource]
/// call during the action phase.
pub struct PolicyContext<'a> {
    pub tick:                Tick,
    pub time_remaining_secs: f32,
    pub agents:              &'a AgentStore,
    pub world:               WorldView<'a>,
}

impl<'a> PolicyContext<'a> {
    #[inline]
    pub fn new(
        tick:                Tick,
        time_remaining_secs: f32,
        agents:              &'a AgentStore,
        world:               WorldView<'a>,
    ) -> Self {
        Self { tick, time_remaining_secs, agents, world }
    }
}
