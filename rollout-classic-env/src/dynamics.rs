//! Dynamics of the registered classic-control systems.
mod cart_pole;
mod mountain_car;

use crate::error::ClassicEnvError;

pub(crate) use cart_pole::CartPole;
pub(crate) use mountain_car::MountainCar;

/// State update rule of one classic-control system.
///
/// Implementations integrate their state in `f64` and expose it as the
/// `f32` observation vector.
pub(crate) trait Dynamics {
    /// Draws an initial state and returns the observation.
    fn reset(&mut self, rng: &mut fastrand::Rng) -> Vec<f32>;

    /// Advances the state by one step.
    fn step(&mut self, act: u8) -> Transition;

    /// The number of legal actions.
    fn n_acts(&self) -> u8;

    /// One frame of the current state for the ANSI renderer.
    fn frame(&self) -> String;
}

/// Outcome of one dynamics step, before the episode step limit is applied.
pub(crate) struct Transition {
    pub obs: Vec<f32>,
    pub reward: f32,
    pub is_terminated: bool,
}

/// Builds the dynamics registered under `name`, together with the default
/// episode step limit of that registry entry.
pub(crate) fn build(name: &str) -> Result<(Box<dyn Dynamics>, usize), ClassicEnvError> {
    match name {
        "CartPole-v0" => Ok((Box::new(CartPole::new()), 200)),
        "CartPole-v1" => Ok((Box::new(CartPole::new()), 500)),
        "MountainCar-v0" => Ok((Box::new(MountainCar::new()), 200)),
        _ => Err(ClassicEnvError::UnknownEnv(name.to_string())),
    }
}
