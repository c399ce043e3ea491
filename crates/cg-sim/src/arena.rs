//! The host arena: square walls, the target registry and the base registry.
//!
//! The arena owns every [`Target`] and [`Base`]; the policy only ever sees
//! them through [`Arena::view`].  Pickup and deposit bookkeeping lives here
//! so the tick loop can run it strictly after the reward for a contact has
//! been computed.

use cg_core::{AgentId, ArenaConfig, BaseId, Pose, SimRng, TargetId, TeamId, Vec3};
use cg_policy::{Base, Target, WorldView};

/// Walls at `±half_extent` on X and Z, plus targets and one base per team.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arena {
    pub config:  ArenaConfig,
    /// Indexed by `TargetId`.
    pub targets: Vec<Target>,
    /// Indexed by `BaseId`.
    pub bases:   Vec<Base>,
    /// Where each target starts an episode.
    spawn_targets: Vec<Vec3>,
}

impl Arena {
    pub fn new(config: ArenaConfig) -> Self {
        Self { config, targets: Vec::new(), bases: Vec::new(), spawn_targets: Vec::new() }
    }

    pub fn add_base(&mut self, team: TeamId, position: Vec3) -> BaseId {
        let id = BaseId(self.bases.len() as u32);
        self.bases.push(Base { id, team, position });
        id
    }

    pub fn add_target(&mut self, position: Vec3) -> TargetId {
        let id = TargetId(self.targets.len() as u32);
        self.targets.push(Target::new(id, position));
        self.spawn_targets.push(position);
        id
    }

    /// Scatter `n` free targets uniformly over the floor, keeping them out
    /// of every base trigger.
    pub fn scatter_targets(&mut self, n: usize, rng: &mut SimRng) {
        let extent = (self.config.half_extent - self.config.pickup_radius).max(0.0);
        for _ in 0..n {
            let mut position = rng.ground_point(extent);
            // A handful of retries is plenty for any sane base/arena ratio.
            for _ in 0..8 {
                if self.base_at(position).is_none() {
                    break;
                }
                position = rng.ground_point(extent);
            }
            self.add_target(position);
        }
    }

    #[inline]
    pub fn view(&self) -> WorldView<'_> {
        WorldView::new(&self.targets, &self.bases)
    }

    #[inline]
    pub fn base(&self, id: BaseId) -> Option<&Base> {
        self.bases.get(id.index())
    }

    /// First base registered for `team`.
    pub fn base_for_team(&self, team: TeamId) -> Option<&Base> {
        self.bases.iter().find(|b| b.team == team)
    }

    /// Base whose trigger contains `position`, if any.
    pub fn base_at(&self, position: Vec3) -> Option<&Base> {
        self.bases
            .iter()
            .find(|b| b.position.distance(position) <= self.config.base_radius)
    }

    /// Free targets within pickup range of `position`, in registry order.
    pub fn targets_touching(&self, position: Vec3) -> Vec<TargetId> {
        self.targets
            .iter()
            .filter(|t| t.is_free() && t.position.distance(position) <= self.config.pickup_radius)
            .map(|t| t.id)
            .collect()
    }

    /// Pull `position` back inside the walls.  Returns `true` if it was out.
    pub fn clamp_to_walls(&self, position: &mut Vec3) -> bool {
        let h = self.config.half_extent;
        let clamped = Vec3::new(position.x.clamp(-h, h), position.y, position.z.clamp(-h, h));
        let hit = clamped != *position;
        *position = clamped;
        hit
    }

    /// Mark `target` as held by `agent`.  Picking up a target banked in any
    /// base takes it out of that base.
    pub fn pick_up(&mut self, target: TargetId, agent: AgentId) {
        if let Some(t) = self.targets.get_mut(target.index()) {
            t.carried = 1;
            t.carrier = Some(agent);
            t.in_base = None;
        }
    }

    /// Bank every target held by `agent` in `team`'s base.  Returns how many
    /// were dropped.
    pub fn deposit(&mut self, agent: AgentId, team: TeamId) -> u32 {
        let mut dropped = 0;
        for t in self.targets.iter_mut().filter(|t| t.carrier == Some(agent)) {
            t.carried = 0;
            t.carrier = None;
            t.in_base = Some(team);
            dropped += 1;
        }
        dropped
    }

    /// Move every held target onto its carrier.
    pub fn follow_carriers(&mut self, poses: &[Pose]) {
        for t in &mut self.targets {
            if let Some(pose) = t.carrier.and_then(|a| poses.get(a.index())) {
                t.position = pose.position;
            }
        }
    }

    /// Targets currently banked by `team`.
    pub fn banked(&self, team: TeamId) -> usize {
        self.targets.iter().filter(|t| t.in_base == Some(team)).count()
    }

    /// Put every target back at its spawn point, free and unbanked.
    pub fn reset(&mut self) {
        for (t, &spawn) in self.targets.iter_mut().zip(&self.spawn_targets) {
            *t = Target::new(t.id, spawn);
        }
    }
}
