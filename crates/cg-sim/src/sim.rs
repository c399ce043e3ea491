//! The `Sim` struct and its tick loop.

use cg_agent::{AgentRngs, AgentStore};
use cg_core::{AgentId, BaseId, BasicRewardKind, MatchClock, SimConfig, TeamId, Tick, Vec3};
use cg_policy::{
    ActionSource, ColliderKind, CollectorPolicy, ContactEvent, MovementCommand, PolicyContext,
};
use log::debug;

use crate::{Arena, RewardEvent, RewardRecord, SimObserver, SimResult, TickSummary, motion};

#[cfg(feature = "fx-hash")]
type OccupancySet = rustc_hash::FxHashSet<(AgentId, BaseId)>;
#[cfg(not(feature = "fx-hash"))]
type OccupancySet = std::collections::HashSet<(AgentId, BaseId)>;

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The match runner.
///
/// `Sim<S>` holds all match state and drives the per-tick pipeline:
///
/// 1. **Action phase** (optionally parallel with the `parallel` feature):
///    call [`ActionSource::act`] and [`CollectorPolicy::decide`] for every
///    agent against a read-only [`PolicyContext`].
/// 2. **Command phase**: write each command into the [`AgentStore`].
/// 3. **Motion phase**: integrate poses, clamp at the walls, drag held
///    targets along.
/// 4. **Contact phase** (sequential, ascending `AgentId` for determinism):
///    wall entry, item touches and base-trigger entry, each rewarded by the
///    policy before pickup/deposit mutates the carried count.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: ActionSource> {
    /// Global configuration (step size, total ticks, seed, …).
    pub config: SimConfig,

    /// Match clock: current tick, elapsed and remaining seconds.
    pub clock: MatchClock,

    /// Agent state (SoA arrays).  Action sources read it through
    /// `PolicyContext`.
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// Walls, targets and bases.
    pub arena: Arena,

    /// Decision and reward core shared by every agent.
    pub policy: CollectorPolicy,

    /// Where actions come from.  Called once per agent per tick.
    pub source: S,

    /// Episode reward per agent, indexed by `AgentId`.
    pub cumulative_reward: Vec<f32>,

    /// Whether each agent was pressed against a wall last tick.
    pub(crate) touching_wall: Vec<bool>,

    /// `(agent, base)` pairs whose trigger the agent is currently inside.
    pub(crate) inside_base: OccupancySet,
}

impl<S: ActionSource> Sim<S> {
    pub(crate) fn new(
        config: SimConfig,
        agents: AgentStore,
        rngs:   AgentRngs,
        arena:  Arena,
        policy: CollectorPolicy,
        source: S,
    ) -> Self {
        let count = agents.count;
        Self {
            clock: config.make_clock(),
            config,
            agents,
            rngs,
            arena,
            policy,
            source,
            cumulative_reward: vec![0.0; count],
            touching_wall:     vec![false; count],
            inside_base:       OccupancySet::default(),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run the match from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Episode reward accumulated by `agent` so far.
    #[inline]
    pub fn cumulative_reward(&self, agent: AgentId) -> f32 {
        self.cumulative_reward[agent.index()]
    }

    /// Sum of the episode rewards of every agent on `team`.
    pub fn team_reward(&self, team: TeamId) -> f32 {
        self.agents.members(team).map(|a| self.cumulative_reward(a)).sum()
    }

    /// The command `agent` is currently executing.
    #[inline]
    pub fn command(&self, agent: AgentId) -> MovementCommand {
        let i = agent.index();
        MovementCommand {
            move_dir:   self.agents.move_dir[i],
            rotate_dir: self.agents.rotate_dir[i],
            laser_on:   self.agents.laser_active[i],
        }
    }

    /// Set the externally owned frozen flag.  Frozen agents do not move and
    /// cannot pick targets up.
    pub fn set_frozen(&mut self, agent: AgentId, frozen: bool) {
        self.agents.frozen[agent.index()] = frozen;
    }

    /// Credit a host-raised basic reward to `agent` at the current tick.
    ///
    /// Returns `None` (and records nothing) when the configured value is zero.
    pub fn raise_basic(&mut self, agent: AgentId, kind: BasicRewardKind) -> Option<RewardRecord> {
        let now = self.clock.current_tick;
        self.basic_reward(agent, kind, now)
    }

    /// Restore agents, targets, clock and rewards to their episode-start state.
    pub fn reset_episode(&mut self) {
        self.agents.reset_episode();
        self.arena.reset();
        self.clock.reset();
        self.cumulative_reward.fill(0.0);
        self.touching_wall.fill(false);
        self.inside_base.clear();
        debug!("episode reset");
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let records = self.process_tick(now)?;
        let mut total_reward = 0.0;
        for record in &records {
            total_reward += record.reward;
            observer.on_reward(record);
        }
        observer.on_tick_end(&TickSummary {
            tick:          now,
            elapsed_secs:  self.clock.elapsed_secs(),
            reward_events: records.len(),
            total_reward,
        });

        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0 % interval == 0 {
            observer.on_snapshot(now, &self.agents, &self.arena);
        }
        self.clock.advance();
        Ok(())
    }

    fn process_tick(&mut self, now: Tick) -> SimResult<Vec<RewardRecord>> {
        let mut records = Vec::new();

        // ── Phase 1: actions and decode (produce) ─────────────────────────
        let commands = self.compute_commands(now);

        // ── Phase 2: commit commands ──────────────────────────────────────
        for (i, command) in commands.into_iter().enumerate() {
            let agent = AgentId(i as u32);
            self.set_command(agent, command);
            if command.laser_on {
                records.extend(self.basic_reward(agent, BasicRewardKind::ShootingLaser, now));
            }
        }

        // ── Phase 3: motion ───────────────────────────────────────────────
        let dt = self.config.fixed_dt_secs;
        let mut wall_hits = vec![false; self.agents.count];
        for (i, hit) in wall_hits.iter_mut().enumerate() {
            if self.agents.frozen[i] {
                continue;
            }
            let command = self.command(AgentId(i as u32));
            let pose = &mut self.agents.pose[i];
            motion::integrate(pose, &command, &self.arena.config, dt);
            *hit = self.arena.clamp_to_walls(&mut pose.position);
        }
        self.arena.follow_carriers(&self.agents.pose);

        // ── Phase 4: contacts (consume) ───────────────────────────────────
        //
        // Ascending AgentId order: when two agents touch the same free target
        // on the same tick, the lower id gets it.
        for (i, hit) in wall_hits.into_iter().enumerate() {
            let agent = AgentId(i as u32);

            let wall_entry = hit && !self.touching_wall[i];
            self.touching_wall[i] = hit;
            if wall_entry {
                self.resolve_contact(agent, ColliderKind::Wall, now, &mut records);
            }

            let position = self.agents.pose[i].position;
            for target in self.arena.targets_touching(position) {
                self.resolve_contact(agent, ColliderKind::Target { target }, now, &mut records);
            }
            for (base, team) in self.base_entries(agent, position) {
                self.resolve_contact(agent, ColliderKind::Base { base, team }, now, &mut records);
            }
        }

        Ok(records)
    }

    /// Gather actions and decode them for every agent.
    ///
    /// With the `parallel` Cargo feature this runs on Rayon's thread pool;
    /// each agent draws only from its own RNG, so the result is identical.
    pub(crate) fn compute_commands(&mut self, now: Tick) -> Vec<MovementCommand> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let agents = &self.agents;
        let world  = self.arena.view();
        let policy = &self.policy;
        let source = &self.source;
        let rngs   = &mut self.rngs;

        let ctx = PolicyContext::new(now, self.clock.time_remaining_secs(), agents, world);

        #[cfg(not(feature = "parallel"))]
        {
            rngs.inner
                .iter_mut()
                .enumerate()
                .map(|(i, rng)| {
                    let agent = AgentId(i as u32);
                    let actions = source.act(agent, &ctx, rng);
                    policy.decide(&actions, &agents.state(agent), world)
                })
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            rngs.inner
                .par_iter_mut()
                .enumerate()
                .map(|(i, rng)| {
                    let agent = AgentId(i as u32);
                    let actions = source.act(agent, &ctx, rng);
                    policy.decide(&actions, &agents.state(agent), world)
                })
                .collect()
        }
    }

    fn set_command(&mut self, agent: AgentId, command: MovementCommand) {
        let i = agent.index();
        self.agents.move_dir[i] = command.move_dir;
        self.agents.rotate_dir[i] = command.rotate_dir;
        self.agents.laser_active[i] = command.laser_on;
    }

    /// Bases whose trigger `agent` entered this tick.  Leaving a trigger
    /// re-arms it.
    fn base_entries(&mut self, agent: AgentId, position: Vec3) -> Vec<(BaseId, TeamId)> {
        let radius = self.arena.config.base_radius;
        let mut entered = Vec::new();
        for base in &self.arena.bases {
            let key = (agent, base.id);
            if base.position.distance(position) <= radius {
                if self.inside_base.insert(key) {
                    entered.push((base.id, base.team));
                }
            } else {
                self.inside_base.remove(&key);
            }
        }
        entered
    }

    /// Reward one contact, steer, then run pickup/deposit.
    fn resolve_contact(
        &mut self,
        agent:   AgentId,
        kind:    ColliderKind,
        now:     Tick,
        records: &mut Vec<RewardRecord>,
    ) {
        let Some(event) = RewardEvent::from_collider(kind) else {
            return;
        };
        let i = agent.index();
        let state = self.agents.state(agent);
        let mut command = self.command(agent);

        let Some(outcome) = self.policy.on_contact(
            &state,
            &ContactEvent::new(kind, now),
            self.arena.view(),
            &mut command,
        ) else {
            return;
        };
        self.set_command(agent, command);

        self.cumulative_reward[i] += outcome.reward;
        records.push(RewardRecord {
            tick:    now,
            agent,
            team:    state.team,
            event,
            reward:  outcome.reward,
            nav:     Some(outcome.nav),
            carried: state.carried,
            terms:   outcome.terms,
        });

        // The carried count changes only after the reward has been read.
        match kind {
            ColliderKind::Target { target } => {
                self.arena.pick_up(target, agent);
                self.agents.carried[i] += 1;
                debug!("{now} {agent} picked up {target} ({} held)", self.agents.carried[i]);
            }
            ColliderKind::Base { team, .. } => {
                let dropped = self.arena.deposit(agent, team);
                self.agents.carried[i] = 0;
                if dropped > 0 {
                    debug!("{now} {agent} banked {dropped} for team {team}");
                    records.extend(self.basic_reward(agent, BasicRewardKind::DroppedTargets, now));
                }
            }
            ColliderKind::Wall | ColliderKind::Other => {}
        }
    }

    fn basic_reward(&mut self, agent: AgentId, kind: BasicRewardKind, now: Tick) -> Option<RewardRecord> {
        let term = self.policy.rewards.basic(kind);
        if term.value == 0.0 {
            return None;
        }
        let i = agent.index();
        self.cumulative_reward[i] += term.value;
        Some(RewardRecord {
            tick:    now,
            agent,
            team:    self.agents.team[i],
            event:   RewardEvent::Basic(kind),
            reward:  term.value,
            nav:     None,
            carried: self.agents.carried[i],
            terms:   vec![term],
        })
    }
}
