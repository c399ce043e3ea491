//! `cg-core`: foundational types for the `cogs` collection-agent workspace.
//!
//! This crate is a dependency of every other `cg-*` crate.  It has no `cg-*`
//! dependencies and few external ones (`glam`, `rand`, `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`ids`]       | `AgentId`, `TargetId`, `BaseId`, `TeamId`                  |
//! | [`geo`]       | `Vec3` re-export, `Pose`, signed-angle bearing             |
//! | [`time`]      | `Tick`, `MatchClock`, `SimConfig`                          |
//! | [`rng`]       | `AgentRng` (per-agent), `SimRng` (global)                  |
//! | [`config`]    | `PolicyConfig`, `RewardConfig`, `BasicRewards`, `ArenaConfig` |
//! | [`error`]     | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ArenaConfig, BasicRewardKind, BasicRewards, PolicyConfig, RewardConfig};
pub use error::{CoreError, CoreResult};
pub use geo::{Pose, Vec3, signed_angle_deg};
pub use ids::{AgentId, BaseId, TargetId, TeamId};
pub use rng::{AgentRng, SimRng};
pub use time::{MatchClock, SimConfig, Tick};
