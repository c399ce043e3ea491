use cg_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("policy configuration error: {0}")]
    Config(#[from] CoreError),
}

pub type PolicyResult<T> = Result<T, PolicyError>;
