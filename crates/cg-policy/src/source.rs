//! The `ActionSource` trait: where per-tick actions come from.

use std::sync::RwLock;

use cg_core::{AgentId, AgentRng};

use crate::action::BRANCH_SIZES;
use crate::{ActionVector, ManualInput, PolicyContext};

/// Pluggable supplier of discrete actions: a trained policy, a script, a
/// human, or noise.
///
/// The host may call `act` for many agents in parallel, so implementations
/// must be `Send + Sync`.  Per-agent randomness comes from `rng` so results
/// do not depend on thread scheduling.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysShoot;
///
/// impl ActionSource for AlwaysShoot {
///     fn act(&self, _agent: AgentId, _ctx: &PolicyContext<'_>, _rng: &mut AgentRng) -> ActionVector {
///         ActionVector::new(0, 0, 1, 0, 0)
///     }
/// }
/// ```
pub trait ActionSource: Send + Sync + 'static {
    fn act(&self, agent: AgentId, ctx: &PolicyContext<'_>, rng: &mut AgentRng) -> ActionVector;
}

impl<S: ActionSource + ?Sized> ActionSource for Box<S> {
    fn act(&self, agent: AgentId, ctx: &PolicyContext<'_>, rng: &mut AgentRng) -> ActionVector {
        (**self).act(agent, ctx, rng)
    }
}

/// All slots zero every tick.  The carry override still steers the agent.
pub struct IdleSource;

impl ActionSource for IdleSource {
    fn act(&self, _agent: AgentId, _ctx: &PolicyContext<'_>, _rng: &mut AgentRng) -> ActionVector {
        ActionVector::IDLE
    }
}

/// Uniform sample over each slot's documented range.
pub struct RandomSource;

impl ActionSource for RandomSource {
    fn act(&self, _agent: AgentId, _ctx: &PolicyContext<'_>, rng: &mut AgentRng) -> ActionVector {
        let mut slots = [0; 5];
        for (slot, &size) in slots.iter_mut().zip(BRANCH_SIZES.iter()) {
            *slot = rng.gen_range(0..size) as i32;
        }
        ActionVector(slots)
    }
}

/// Replays a fixed per-agent sequence indexed by tick, idle once exhausted
/// and for agents without a script.
pub struct ScriptedSource {
    scripts: Vec<Vec<ActionVector>>,
}

impl ScriptedSource {
    /// `scripts[i]` drives `AgentId(i)`.
    pub fn new(scripts: Vec<Vec<ActionVector>>) -> Self {
        Self { scripts }
    }
}

impl ActionSource for ScriptedSource {
    fn act(&self, agent: AgentId, ctx: &PolicyContext<'_>, _rng: &mut AgentRng) -> ActionVector {
        self.scripts
            .get(agent.index())
            .and_then(|script| script.get(ctx.tick.0 as usize))
            .copied()
            .unwrap_or(ActionVector::IDLE)
    }
}

/// Keyboard control of a single agent; every other agent idles.
///
/// The input layer writes the latest key state with [`set_input`](Self::set_input)
/// between ticks.
pub struct ManualSource {
    controlled: AgentId,
    input:      RwLock<ManualInput>,
}

impl ManualSource {
    pub fn new(controlled: AgentId) -> Self {
        Self { controlled, input: RwLock::new(ManualInput::default()) }
    }

    pub fn set_input(&self, input: ManualInput) {
        match self.input.write() {
            Ok(mut guard) => *guard = input,
            Err(poisoned) => *poisoned.into_inner() = input,
        }
    }

    fn current(&self) -> ManualInput {
        match self.input.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl ActionSource for ManualSource {
    fn act(&self, agent: AgentId, _ctx: &PolicyContext<'_>, _rng: &mut AgentRng) -> ActionVector {
        if agent == self.controlled {
            self.current().to_actions()
        } else {
            ActionVector::IDLE
        }
    }
}
