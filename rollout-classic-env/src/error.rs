//! Errors of classic-control environments.
use thiserror::Error;

/// Errors of classic-control environments.
#[derive(Error, Debug)]
pub enum ClassicEnvError {
    /// The environment name is not in the registry.
    #[error("unknown environment: {0}")]
    UnknownEnv(String),

    /// The action is outside the action space.
    #[error("invalid action {act} for an action space of size {n_acts}")]
    InvalidAction {
        /// The offending action index.
        act: u8,

        /// The number of legal actions.
        n_acts: u8,
    },
}
