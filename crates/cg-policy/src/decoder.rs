//! Action vector → movement command.

use cg_agent::AgentState;
use cg_core::PolicyConfig;
use log::trace;

use crate::{
    ActionVector, ForwardAxis, MovementCommand, Navigator, RotateAxis, WorldView, apply_carry_policy,
};

/// Decodes the five action slots in order, then applies the carry override.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ActionDecoder {
    pub navigator:       Navigator,
    pub carry_threshold: u32,
}

impl Default for ActionDecoder {
    fn default() -> Self {
        Self::from_config(&PolicyConfig::default())
    }
}

impl ActionDecoder {
    pub fn from_config(config: &PolicyConfig) -> Self {
        Self {
            navigator:       Navigator::from_config(config),
            carry_threshold: config.carry_threshold,
        }
    }

    /// Full decode: slots 0–4 followed by the carry override.
    pub fn decode(
        &self,
        actions: &ActionVector,
        agent:   &AgentState,
        world:   WorldView<'_>,
    ) -> MovementCommand {
        let mut command = self.decode_slots(actions, agent, world);
        let goal = apply_carry_policy(&self.navigator, self.carry_threshold, agent, world, &mut command);
        trace!("carried {} → {goal}: {command:?}", agent.carried);
        command
    }

    /// Slots only, without the carry override.
    ///
    /// Each slot is read independently; later slots overwrite earlier ones.
    pub fn decode_slots(
        &self,
        actions: &ActionVector,
        agent:   &AgentState,
        world:   WorldView<'_>,
    ) -> MovementCommand {
        let pose = &agent.pose;
        let mut command = MovementCommand::idle();

        match ForwardAxis::from_code(actions.forward()) {
            Some(ForwardAxis::Forward)  => command.move_dir = pose.forward,
            Some(ForwardAxis::Backward) => command.move_dir = pose.backward(),
            Some(ForwardAxis::Idle) | None => {}
        }

        match RotateAxis::from_code(actions.rotate()) {
            Some(RotateAxis::Right) => command.rotate_dir = -pose.up,
            Some(RotateAxis::Left)  => command.rotate_dir = pose.up,
            Some(RotateAxis::Idle) | None => {}
        }

        command.laser_on = actions.shoot() == 1;

        if actions.seek_target() == 1 {
            self.navigator.go_to_nearest_target(agent, world, &mut command);
        }
        if actions.seek_base() == 1 {
            self.navigator.go_to_base(agent, world, &mut command);
        }

        command
    }
}
