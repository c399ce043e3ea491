//! Carried-count tagging and the unconditional carry override.

use cg_agent::AgentState;

use crate::{MovementCommand, NavGoal, Navigator, WorldView};

/// Where the carried count sits relative to the carry threshold.
///
/// Computed once per decision pass or contact event so that every reward
/// row reads the same classification.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CarryState {
    /// Below the threshold.  `last_slot` is set when one more pickup
    /// reaches it.
    Collecting { carried: u32, last_slot: bool },
    /// Exactly at the threshold.
    Full,
    /// Above the threshold.
    Overloaded { carried: u32 },
}

impl CarryState {
    pub fn classify(carried: u32, threshold: u32) -> Self {
        use std::cmp::Ordering;
        match carried.cmp(&threshold) {
            Ordering::Less => CarryState::Collecting {
                carried,
                last_slot: carried + 1 == threshold,
            },
            Ordering::Equal   => CarryState::Full,
            Ordering::Greater => CarryState::Overloaded { carried },
        }
    }

    /// Go home at or above the threshold, otherwise keep collecting.
    #[inline]
    pub fn nav_goal(self) -> NavGoal {
        match self {
            CarryState::Collecting { .. } => NavGoal::SeekTarget,
            CarryState::Full | CarryState::Overloaded { .. } => NavGoal::SeekBase,
        }
    }
}

/// Replace the navigation part of `command` according to the carried count.
///
/// Runs after slot decoding and wins over whatever the slots chose, except
/// when no eligible target exists, in which case the command is left as is.
pub fn apply_carry_policy(
    navigator: &Navigator,
    threshold: u32,
    agent:     &AgentState,
    world:     WorldView<'_>,
    command:   &mut MovementCommand,
) -> NavGoal {
    let goal = CarryState::classify(agent.carried, threshold).nav_goal();
    navigator.navigate(goal, agent, world, command);
    goal
}
