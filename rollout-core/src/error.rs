//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug)]
pub enum RolloutError {
    /// The episode driver was given an empty step budget.
    #[error("step budget must be at least 1")]
    EmptyStepBudget,
}
