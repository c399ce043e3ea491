use cg_core::{AgentId, BaseId, CoreError, TeamId};
use cg_policy::PolicyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("policy error: {0}")]
    Policy(#[from] PolicyError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("team {0} has no base in the arena")]
    UnknownTeam(TeamId),

    #[error("agent {agent} is homed at {base}, which is missing or belongs to another team")]
    HomeBaseMismatch { agent: AgentId, base: BaseId },
}

pub type SimResult<T> = Result<T, SimError>;
