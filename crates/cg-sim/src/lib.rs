//! `cg-sim`: arena host and tick loop for the cogs collection agent.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Actions  : ActionSource::act for every agent
//!                 (parallel with the `parallel` feature).
//!   ② Decode   : CollectorPolicy::decide: slots, then the carry override.
//!   ③ Command  : write move/rotate/laser into the AgentStore; a laser-on
//!                 agent earns the ShootingLaser basic reward.
//!   ④ Motion   : integrate non-frozen agents; clamp at the walls.
//!   ⑤ Carry    : held targets follow their carrier.
//!   ⑥ Contacts : in ascending AgentId order: wall, items, bases.  Each
//!                 contact is rewarded before the pickup/deposit mutator runs.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs phases ①–② on Rayon's thread pool.                |
//! | `fx-hash`  | FxHash for the base-occupancy set.                     |
//! | `serde`    | `Serialize`/`Deserialize` on `Arena`.                  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cg_agent::AgentStoreBuilder;
//! use cg_core::{ArenaConfig, Pose, SimConfig, TeamId, Vec3};
//! use cg_policy::RandomSource;
//! use cg_sim::{Arena, NoopObserver, SimBuilder};
//!
//! let mut arena = Arena::new(ArenaConfig::default());
//! let home = arena.add_base(TeamId(0), Vec3::new(-30.0, 0.0, 0.0));
//! arena.add_target(Vec3::new(0.0, 0.0, 5.0));
//! let (store, rngs) = AgentStoreBuilder::new(42)
//!     .spawn(TeamId(0), home, Pose::default())
//!     .build();
//! let mut sim = SimBuilder::new(SimConfig::default(), store, rngs, arena, RandomSource)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod arena;
pub mod builder;
pub mod error;
pub mod motion;
pub mod observer;
pub mod record;
pub mod sim;

#[cfg(test)]
mod tests;

pub use arena::Arena;
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickSummary};
pub use record::{RewardEvent, RewardRecord};
pub use sim::Sim;
