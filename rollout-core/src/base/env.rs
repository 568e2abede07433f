//! Environment.
use super::{Act, Info, Obs, Step};
use anyhow::Result;

/// Represents an environment, typically an MDP.
///
/// An environment is a stateful simulator owned by the episode driver for
/// the duration of one episode. Its lifetime is bounded by [`Env::reset`]
/// and [`Env::close`]: `reset` must precede the first `step`, and `close`
/// must follow the last `step`/`render` on every exit path.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Information in the [`Step`] object.
    type Info: Info;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: i64) -> Result<Self>
    where
        Self: Sized;

    /// Resets the environment, starting a new episode.
    fn reset(&mut self) -> Result<Self::Obs>;

    /// Performs an environment step.
    fn step(&mut self, a: &Self::Act) -> Result<Step<Self>>
    where
        Self: Sized;

    /// Samples an action uniformly from the action space of the environment.
    fn sample_action(&mut self) -> Self::Act;

    /// Renders the current state of the environment.
    ///
    /// Rendering semantics belong entirely to the implementation; the driver
    /// only triggers the side effect and ignores any output.
    fn render(&mut self) -> Result<()>;

    /// Releases the resources held by the environment.
    fn close(&mut self);
}
