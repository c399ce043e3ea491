//! `cg-policy`: the per-agent decision and reward core.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                       |
//! |-----------------|----------------------------------------------------------------|
//! | [`world`]       | `Target`, `Base`, `WorldView`, `PolicyContext`                 |
//! | [`locator`]     | `TargetLocator`: nearest eligible target scan                 |
//! | [`steering`]    | `SteeringIntent`, `resolve_steering`: deadband bang-bang      |
//! | [`command`]     | `MovementCommand`, `NavGoal`                                   |
//! | [`navigation`]  | `Navigator`: go-to-target / go-to-base                        |
//! | [`action`]      | `ActionVector` and per-slot axis enums                         |
//! | [`decoder`]     | `ActionDecoder`: slots → command, then carry override         |
//! | [`carry`]       | `CarryState` tagging and `apply_carry_policy`                  |
//! | [`contact`]     | `ColliderKind`, `ContactEvent`                                 |
//! | [`reward`]      | `RewardPolicy`, `RewardOutcome`, `RewardTerm`                  |
//! | [`collector`]   | `CollectorPolicy`: the façade the host calls                  |
//! | [`source`]      | `ActionSource` trait and built-in sources                      |
//! | [`heuristic`]   | `ManualInput` → `ActionVector`                                 |
//! | [`error`]       | `PolicyError`, `PolicyResult<T>`                               |
//!
//! # Per-tick flow
//!
//! 1. An [`ActionSource`] produces a five-slot [`ActionVector`].
//! 2. [`ActionDecoder`] turns the slots into a [`MovementCommand`], running
//!    the seek-target / seek-base navigation the slots ask for.
//! 3. The carry override replaces the navigation part of the command with
//!    go-to-base (at or above the carry threshold) or go-to-nearest-target.
//!
//! Contact events are handled independently by [`RewardPolicy`], which
//! reads the carried count at the moment of contact, emits a reward and a
//! [`NavGoal`] that is applied to the agent's current command.
//!
//! Nothing here blocks, allocates per tick beyond the reward breakdown, or
//! returns an error on the hot path: missing targets and unknown codes are
//! no-ops.

pub mod action;
pub mod carry;
pub mod collector;
pub mod command;
pub mod contact;
pub mod decoder;
pub mod error;
pub mod heuristic;
pub mod locator;
pub mod navigation;
pub mod reward;
pub mod source;
pub mod steering;
pub mod world;


pub use action::{ActionVector, ForwardAxis, RotateAxis};
pub use carry::{CarryState, apply_carry_policy};
pub use collector::CollectorPolicy;
pub use command::{MovementCommand, NavGoal};
pub use contact::{ColliderKind, ContactEvent};
pub use decoder::ActionDecoder;
pub use error::{PolicyError, PolicyResult};
pub use heuristic::ManualInput;
pub use locator::{TargetLocator, find_nearest_target};
pub use navigation::Navigator;
pub use reward::{RewardOutcome, RewardPolicy, RewardTerm, RewardTermKind};
pub use source::{ActionSource, IdleSource, ManualSource, RandomSource, ScriptedSource};
pub use steering::{SteeringIntent, resolve_steering};
pub use world::{Base, PolicyContext, Target, WorldView};
