//! Autonomous navigation: steer toward the nearest target or the home base.

use cg_agent::AgentState;
use cg_core::{PolicyConfig, Vec3};
use log::{trace, warn};

use crate::{MovementCommand, NavGoal, SteeringIntent, TargetLocator, WorldView, resolve_steering};

/// Locator + steering pipeline shared by the decoder, the carry override
/// and the reward policy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Navigator {
    pub locator:      TargetLocator,
    pub deadband_deg: f32,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::from_config(&PolicyConfig::default())
    }
}

impl Navigator {
    pub fn from_config(config: &PolicyConfig) -> Self {
        Self {
            locator:      TargetLocator::from_config(config),
            deadband_deg: config.deadband_deg,
        }
    }

    /// Steering intent toward `point` from the agent's current pose.
    #[inline]
    pub fn steer_toward(&self, agent: &AgentState, point: Vec3) -> SteeringIntent {
        resolve_steering(agent.pose.bearing_deg(point), self.deadband_deg)
    }

    /// Steer toward the nearest eligible target.
    ///
    /// Returns `false` and leaves `command` untouched when no target is
    /// eligible.
    pub fn go_to_nearest_target(
        &self,
        agent:   &AgentState,
        world:   WorldView<'_>,
        command: &mut MovementCommand,
    ) -> bool {
        let Some(target) = self.locator.nearest(world.targets, agent.pose.position, agent.team) else {
            trace!("no eligible target for team {}", agent.team);
            return false;
        };
        let intent = self.steer_toward(agent, target.position);
        trace!("seek {} → {:?}", target.id, intent);
        intent.apply(&agent.pose, command);
        true
    }

    /// Steer toward the agent's home base.
    ///
    /// Returns `false` and leaves `command` untouched if the base id is not
    /// in the registry.
    pub fn go_to_base(
        &self,
        agent:   &AgentState,
        world:   WorldView<'_>,
        command: &mut MovementCommand,
    ) -> bool {
        let Some(base) = world.base(agent.home_base) else {
            warn!("home base {} missing from registry", agent.home_base);
            return false;
        };
        let intent = self.steer_toward(agent, base.position);
        trace!("seek {} → {:?}", base.id, intent);
        intent.apply(&agent.pose, command);
        true
    }

    pub fn navigate(
        &self,
        goal:    NavGoal,
        agent:   &AgentState,
        world:   WorldView<'_>,
        command: &mut MovementCommand,
    ) -> bool {
        match goal {
            NavGoal::SeekTarget => self.go_to_nearest_target(agent, world, command),
            NavGoal::SeekBase   => self.go_to_base(agent, world, command),
        }
    }
}
