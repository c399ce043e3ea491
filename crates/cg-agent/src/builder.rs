//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use cg_agent::AgentStoreBuilder;
//! use cg_core::{BaseId, Pose, TeamId};
//!
//! let (store, rngs) = AgentStoreBuilder::new(/*seed=*/ 42)
//!     .spawn(TeamId(0), BaseId(0), Pose::default())
//!     .spawn(TeamId(1), BaseId(1), Pose::default())
//!     .build();
//!
//! assert_eq!(store.count, 2);
//! assert_eq!(rngs.len(), 2);
//! ```

use cg_core::{BaseId, Pose, TeamId};

use crate::{AgentRngs, AgentStore};

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
///
/// Agents receive ids in `spawn` order.
pub struct AgentStoreBuilder {
    seed:   u64,
    spawns: Vec<(TeamId, BaseId, Pose)>,
}

impl AgentStoreBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed, spawns: Vec::new() }
    }

    /// Add one agent on `team`, homed at `home_base`, starting at `pose`.
    pub fn spawn(mut self, team: TeamId, home_base: BaseId, pose: Pose) -> Self {
        self.spawns.push((team, home_base, pose));
        self
    }

    /// Add `n` agents sharing a team, base and spawn pose.
    pub fn spawn_many(mut self, n: usize, team: TeamId, home_base: BaseId, pose: Pose) -> Self {
        self.spawns.extend(std::iter::repeat_n((team, home_base, pose), n));
        self
    }

    pub fn build(self) -> (AgentStore, AgentRngs) {
        let rngs = AgentRngs::new(self.spawns.len(), self.seed);
        let store = AgentStore::from_spawns(self.spawns);
        (store, rngs)
    }
}
