//! Typed configuration for the decision/reward core and the arena host.
//!
//! Every reward value the agent can emit is a named field here; nothing is
//! looked up by string at runtime.  The defaults reproduce the shaping the
//! collection agent was trained with.

use crate::{CoreError, CoreResult};

// ── PolicyConfig ──────────────────────────────────────────────────────────────

/// Constants driving target selection, steering and carry branching.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PolicyConfig {
    /// Carried count at which the agent heads home.  Default: 3.
    pub carry_threshold: u32,

    /// Initial best distance for the nearest-target scan.  Targets at or
    /// beyond this distance are never selected.  Default: 200.
    pub search_radius: f32,

    /// Half-width of the straight-ahead window, in degrees.  Default: 5.
    pub deadband_deg: f32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self { carry_threshold: 3, search_radius: 200.0, deadband_deg: 5.0 }
    }
}

impl PolicyConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.carry_threshold == 0 {
            return Err(CoreError::Config("carry_threshold must be at least 1".into()));
        }
        if !(self.search_radius.is_finite() && self.search_radius > 0.0) {
            return Err(CoreError::Config(format!(
                "search_radius must be positive, got {}",
                self.search_radius
            )));
        }
        if !(self.deadband_deg.is_finite() && self.deadband_deg >= 0.0) {
            return Err(CoreError::Config(format!(
                "deadband_deg must be non-negative, got {}",
                self.deadband_deg
            )));
        }
        Ok(())
    }
}

// ── BasicRewards ──────────────────────────────────────────────────────────────

/// Reward events raised by the host rather than by the contact policy.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BasicRewardKind {
    Frozen,
    ShootingLaser,
    HitEnemy,
    DroppedOneTarget,
    DroppedTargets,
}

impl BasicRewardKind {
    pub const ALL: [BasicRewardKind; 5] = [
        BasicRewardKind::Frozen,
        BasicRewardKind::ShootingLaser,
        BasicRewardKind::HitEnemy,
        BasicRewardKind::DroppedOneTarget,
        BasicRewardKind::DroppedTargets,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BasicRewardKind::Frozen           => "frozen",
            BasicRewardKind::ShootingLaser    => "shooting-laser",
            BasicRewardKind::HitEnemy         => "hit-enemy",
            BasicRewardKind::DroppedOneTarget => "dropped-one-target",
            BasicRewardKind::DroppedTargets   => "dropped-targets",
        }
    }
}

impl std::fmt::Display for BasicRewardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Enum-keyed table of host-raised rewards.  All zero by default.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BasicRewards {
    pub frozen:             f32,
    pub shooting_laser:     f32,
    pub hit_enemy:          f32,
    pub dropped_one_target: f32,
    pub dropped_targets:    f32,
}

impl BasicRewards {
    pub fn get(&self, kind: BasicRewardKind) -> f32 {
        match kind {
            BasicRewardKind::Frozen           => self.frozen,
            BasicRewardKind::ShootingLaser    => self.shooting_laser,
            BasicRewardKind::HitEnemy         => self.hit_enemy,
            BasicRewardKind::DroppedOneTarget => self.dropped_one_target,
            BasicRewardKind::DroppedTargets   => self.dropped_targets,
        }
    }

    pub fn set(&mut self, kind: BasicRewardKind, value: f32) {
        let slot = match kind {
            BasicRewardKind::Frozen           => &mut self.frozen,
            BasicRewardKind::ShootingLaser    => &mut self.shooting_laser,
            BasicRewardKind::HitEnemy         => &mut self.hit_enemy,
            BasicRewardKind::DroppedOneTarget => &mut self.dropped_one_target,
            BasicRewardKind::DroppedTargets   => &mut self.dropped_targets,
        };
        *slot = value;
    }
}

// ── RewardConfig ──────────────────────────────────────────────────────────────

/// Reward values for the contact-event policy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RewardConfig {
    /// Own-base entry while carrying exactly the threshold.
    pub deposit_full:         f32,
    /// Own-base entry below the threshold, multiplied by the carried count.
    pub deposit_per_item:     f32,
    /// Own-base entry above the threshold.
    pub deposit_overloaded:   f32,

    /// Item contact when the count is neither one short of nor at the
    /// threshold.  Stacks with the rows below.
    pub pickup_off_threshold: f32,
    /// Item contact while more than one short of the threshold.
    pub pickup_collecting:    f32,
    /// Item contact while exactly one short of the threshold.
    pub pickup_last_slot:     f32,
    /// Item contact at or above the threshold.
    pub pickup_over_capacity: f32,

    /// Any wall contact.
    pub wall_contact:         f32,

    pub basic:                BasicRewards,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            deposit_full:         1.0,
            deposit_per_item:     0.3,
            deposit_overloaded:   0.5,
            pickup_off_threshold: -0.3,
            pickup_collecting:    0.6,
            pickup_last_slot:     1.0,
            pickup_over_capacity: -0.2,
            wall_contact:         -1.0,
            basic:                BasicRewards::default(),
        }
    }
}

// ── ArenaConfig ───────────────────────────────────────────────────────────────

/// Geometry and kinematics of the host arena.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    /// Walls sit at `±half_extent` on X and Z.
    pub half_extent:   f32,
    /// Units per second along `move_dir`.
    pub agent_speed:   f32,
    /// Degrees per second about `rotate_dir`.
    pub turn_rate_deg: f32,
    /// Agent-to-target distance that counts as a body collision.
    pub pickup_radius: f32,
    /// Agent-to-base distance that counts as entering the base trigger.
    pub base_radius:   f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            half_extent:   40.0,
            agent_speed:   10.0,
            turn_rate_deg: 180.0,
            pickup_radius: 1.5,
            base_radius:   4.0,
        }
    }
}

impl ArenaConfig {
    pub fn validate(&self) -> CoreResult<()> {
        let fields = [
            ("half_extent", self.half_extent),
            ("agent_speed", self.agent_speed),
            ("turn_rate_deg", self.turn_rate_deg),
            ("pickup_radius", self.pickup_radius),
            ("base_radius", self.base_radius),
        ];
        for (name, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(CoreError::Config(format!("{name} must be positive, got {value}")));
            }
        }
        Ok(())
    }
}
