//! An episodic random-rollout harness for simulation environments.
//!
//! The workspace consists of the following crates:
//!
//! * `rollout-core` provides the environment capability contract
//!   (reset/step/sample/render/close) and the episode driver, which runs a
//!   fixed budget of uniformly random steps and reports the last transition.
//! * `rollout-classic-env` provides native classic-control environments
//!   (cart-pole, mountain-car) behind a name registry, with seeded action
//!   sampling and ANSI terminal rendering.
//! * `rollout` is this crate: demo programs built on the two above. The
//!   `random_cartpole` binary runs one 10000-step episode of `CartPole-v1`
//!   with rendering and prints the final observation, reward and done flag.
