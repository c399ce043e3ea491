//! Collider classification, resolved once at the host boundary.

use cg_core::{BaseId, TargetId, TeamId, Tick};

/// What the agent touched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColliderKind {
    /// Trigger entry into a base.
    Base { base: BaseId, team: TeamId },
    /// Body collision with a collectible.
    Target { target: TargetId },
    Wall,
    /// Anything else; never rewarded.
    Other,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ContactEvent {
    pub kind: ColliderKind,
    pub tick: Tick,
}

impl ContactEvent {
    #[inline]
    pub fn new(kind: ColliderKind, tick: Tick) -> Self {
        Self { kind, tick }
    }
}
