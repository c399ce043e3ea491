//! Reward records emitted by the tick loop.

use std::fmt;

use cg_core::{AgentId, BasicRewardKind, TeamId, Tick};
use cg_policy::{ColliderKind, NavGoal, RewardTerm};

/// What earned a reward.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RewardEvent {
    Deposit,
    Pickup,
    Wall,
    Basic(BasicRewardKind),
}

impl RewardEvent {
    /// `None` for colliders that never carry a reward.
    pub fn from_collider(kind: ColliderKind) -> Option<Self> {
        match kind {
            ColliderKind::Base { .. }   => Some(RewardEvent::Deposit),
            ColliderKind::Target { .. } => Some(RewardEvent::Pickup),
            ColliderKind::Wall          => Some(RewardEvent::Wall),
            ColliderKind::Other         => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RewardEvent::Deposit     => "deposit",
            RewardEvent::Pickup      => "pickup",
            RewardEvent::Wall        => "wall",
            RewardEvent::Basic(kind) => kind.as_str(),
        }
    }
}

impl fmt::Display for RewardEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reward delta handed to the episode accumulator and the observer.
#[derive(Clone, Debug, PartialEq)]
pub struct RewardRecord {
    pub tick:    Tick,
    pub agent:   AgentId,
    pub team:    TeamId,
    pub event:   RewardEvent,
    pub reward:  f32,
    /// Navigation applied after a contact; `None` for basic rewards.
    pub nav:     Option<NavGoal>,
    /// Carried count when the event fired, before pickup/deposit.
    pub carried: u32,
    pub terms:   Vec<RewardTerm>,
}
