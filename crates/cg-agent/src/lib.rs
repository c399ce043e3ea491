//! `cg-agent`: Structure-of-Arrays agent storage.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`state`]     | `AgentState`: read-only per-agent snapshot for the policy |
//! | [`store`]     | `AgentStore` (SoA arrays), `AgentRngs` (per-agent RNG)    |
//! | [`builder`]   | `AgentStoreBuilder` (fluent construction)                 |

pub mod builder;
pub mod state;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use state::AgentState;
pub use store::{AgentRngs, AgentStore};
