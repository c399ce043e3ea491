//! `CollectorPolicy`: the single entry point a host drives per agent.

use cg_agent::AgentState;
use cg_core::{PolicyConfig, RewardConfig};

use crate::{
    ActionDecoder, ActionVector, ContactEvent, MovementCommand, PolicyResult, RewardOutcome,
    RewardPolicy, WorldView,
};

/// Decision and reward core for one collection strategy.
///
/// Holds no per-agent state, so one instance serves every agent of a team
/// (or of the whole match).  All mutable agent state is passed in.
///
/// # Example
///
/// ```rust
/// use cg_agent::AgentState;
/// use cg_core::{BaseId, Pose, TeamId, Vec3};
/// use cg_policy::{ActionVector, Base, CollectorPolicy, WorldView};
///
/// let policy = CollectorPolicy::default();
/// let bases = [Base { id: BaseId(0), team: TeamId(0), position: Vec3::new(0.0, 0.0, 30.0) }];
/// let mut agent = AgentState::new(TeamId(0), BaseId(0), Pose::default());
/// agent.carried = 3;
///
/// let command = policy.decide(&ActionVector::IDLE, &agent, WorldView::new(&[], &bases));
/// assert_eq!(command.move_dir, Vec3::Z); // base dead ahead: drive home
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CollectorPolicy {
    pub decoder: ActionDecoder,
    pub rewards: RewardPolicy,
}

impl CollectorPolicy {
    /// Build from validated configuration.
    pub fn new(policy: PolicyConfig, rewards: RewardConfig) -> PolicyResult<Self> {
        policy.validate()?;
        Ok(Self {
            decoder: ActionDecoder::from_config(&policy),
            rewards: RewardPolicy::new(rewards, &policy),
        })
    }

    /// Per-tick decision: decode `actions`, then apply the carry override.
    #[inline]
    pub fn decide(
        &self,
        actions: &ActionVector,
        agent:   &AgentState,
        world:   WorldView<'_>,
    ) -> MovementCommand {
        self.decoder.decode(actions, agent, world)
    }

    /// Contact handler: compute the reward and apply the outcome's
    /// navigation to `command` in place.
    ///
    /// `agent.carried` must still hold the pre-contact count; pickup and
    /// deposit bookkeeping happens after this returns.
    pub fn on_contact(
        &self,
        agent:   &AgentState,
        event:   &ContactEvent,
        world:   WorldView<'_>,
        command: &mut MovementCommand,
    ) -> Option<RewardOutcome> {
        let outcome = self.rewards.on_contact(agent, event, world)?;
        self.decoder.navigator.navigate(outcome.nav, agent, world, command);
        Some(outcome)
    }
}
