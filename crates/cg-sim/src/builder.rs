//! Fluent builder for constructing a [`Sim`].

use cg_agent::{AgentRngs, AgentStore};
use cg_core::{PolicyConfig, RewardConfig, SimConfig};
use cg_policy::{ActionSource, CollectorPolicy};

use crate::{Arena, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<S>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: step size, total ticks, seed, …
/// - [`AgentStore`] + [`AgentRngs`]: from [`cg_agent::AgentStoreBuilder`]
/// - [`Arena`]: walls, targets and one base per team
/// - `S: ActionSource`: where actions come from
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                         |
/// |------------------------|-------------------------------------------------|
/// | `.policy(p)`           | `CollectorPolicy::default()`                    |
/// | `.policy_config(p, r)` | `PolicyConfig::default()`, `RewardConfig::default()` |
///
/// # Example
///
/// ```rust,ignore
/// let (store, rngs) = AgentStoreBuilder::new(seed).spawn(team, base, pose).build();
/// let mut sim = SimBuilder::new(config, store, rngs, arena, RandomSource)
///     .policy_config(policy_config, reward_config)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: ActionSource> {
    config:  SimConfig,
    agents:  AgentStore,
    rngs:    AgentRngs,
    arena:   Arena,
    source:  S,
    policy:  Option<CollectorPolicy>,
    configs: Option<(PolicyConfig, RewardConfig)>,
}

impl<S: ActionSource> SimBuilder<S> {
    /// Create a builder with all required inputs.
    pub fn new(
        config: SimConfig,
        agents: AgentStore,
        rngs:   AgentRngs,
        arena:  Arena,
        source: S,
    ) -> Self {
        Self { config, agents, rngs, arena, source, policy: None, configs: None }
    }

    /// Use a ready-made policy.  Takes precedence over
    /// [`policy_config`](Self::policy_config).
    pub fn policy(mut self, policy: CollectorPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Build the policy from configuration; validated in [`build`](Self::build).
    pub fn policy_config(mut self, policy: PolicyConfig, rewards: RewardConfig) -> Self {
        self.configs = Some((policy, rewards));
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<S>> {
        self.config.validate()?;
        self.arena.config.validate()?;

        let agent_count = self.agents.count;
        if self.rngs.len() != agent_count {
            return Err(SimError::AgentCountMismatch {
                expected: agent_count,
                got:      self.rngs.len(),
                what:     "agent RNGs",
            });
        }

        // ── Every agent must be homed at a base of its own team ───────────
        for agent in self.agents.agent_ids() {
            let team = self.agents.team[agent.index()];
            if self.arena.base_for_team(team).is_none() {
                return Err(SimError::UnknownTeam(team));
            }
            let base = self.agents.home_base[agent.index()];
            match self.arena.base(base) {
                Some(b) if b.team == team => {}
                _ => return Err(SimError::HomeBaseMismatch { agent, base }),
            }
        }

        let policy = match (self.policy, self.configs) {
            (Some(p), _)                    => p,
            (None, Some((policy, rewards))) => CollectorPolicy::new(policy, rewards)?,
            (None, None)                    => CollectorPolicy::default(),
        };

        #[cfg(feature = "parallel")]
        if let Some(n) = self.config.num_threads {
            // Only the first global pool wins; later sims share it.
            if let Err(e) = rayon::ThreadPoolBuilder::new().num_threads(n).build_global() {
                log::warn!("rayon pool already initialised, ignoring num_threads = {n}: {e}");
            }
        }

        Ok(Sim::new(self.config, self.agents, self.rngs, self.arena, policy, self.source))
    }
}
