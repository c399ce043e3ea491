//! Core agent storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! RNGs live outside the store so the action phase can hold `&AgentStore`
//! and `&mut AgentRngs` at the same time:
//!
//! ```ignore
//! let store: &AgentStore = &sim.agents;
//! let actions = sim.rngs.inner
//!     .par_iter_mut()
//!     .enumerate()
//!     .map(|(i, rng)| source.act(AgentId(i as u32), &ctx, rng))
//!     .collect::<Vec<_>>();
//! ```

use cg_core::{AgentId, AgentRng, BaseId, Pose, TeamId, Vec3};

use crate::AgentState;

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`].
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements and is indexed by
/// `AgentId::index()`.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    // ── Identity ──────────────────────────────────────────────────────────
    pub team:      Vec<TeamId>,
    pub home_base: Vec<BaseId>,

    // ── Kinematics (written by the host's motion step) ────────────────────
    pub pose:       Vec<Pose>,
    /// Pose restored by [`reset_episode`](Self::reset_episode).
    pub spawn_pose: Vec<Pose>,

    // ── Resolved command (written by the decision core each tick) ─────────
    /// Translation direction for this tick; zero or unit.
    pub move_dir:     Vec<Vec3>,
    /// Yaw axis for this tick; zero or `±up`.
    pub rotate_dir:   Vec<Vec3>,
    pub laser_active: Vec<bool>,

    // ── Externally owned flags ────────────────────────────────────────────
    /// Items currently held.  Mutated only by pickup/deposit.
    pub carried: Vec<u32>,
    pub frozen:  Vec<bool>,
}

impl AgentStore {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Snapshot of one agent for the decision/reward core.
    #[inline]
    pub fn state(&self, agent: AgentId) -> AgentState {
        let i = agent.index();
        AgentState {
            team:      self.team[i],
            home_base: self.home_base[i],
            pose:      self.pose[i],
            carried:   self.carried[i],
            frozen:    self.frozen[i],
        }
    }

    /// Agents belonging to `team`, ascending.
    pub fn members(&self, team: TeamId) -> impl Iterator<Item = AgentId> + '_ {
        self.agent_ids().filter(move |a| self.team[a.index()] == team)
    }

    /// Restore every agent to its episode-start state.
    pub fn reset_episode(&mut self) {
        self.pose.copy_from_slice(&self.spawn_pose);
        self.move_dir.fill(Vec3::ZERO);
        self.rotate_dir.fill(Vec3::ZERO);
        self.laser_active.fill(false);
        self.carried.fill(0);
        self.frozen.fill(false);
    }

    pub(crate) fn from_spawns(spawns: Vec<(TeamId, BaseId, Pose)>) -> Self {
        let count = spawns.len();
        let mut team = Vec::with_capacity(count);
        let mut home_base = Vec::with_capacity(count);
        let mut pose = Vec::with_capacity(count);
        for (t, b, p) in spawns {
            team.push(t);
            home_base.push(b);
            pose.push(p);
        }
        Self {
            count,
            team,
            home_base,
            spawn_pose: pose.clone(),
            pose,
            move_dir: vec![Vec3::ZERO; count],
            rotate_dir: vec![Vec3::ZERO; count],
            laser_active: vec![false; count],
            carried: vec![0; count],
            frozen: vec![false; count],
        }
    }
}
