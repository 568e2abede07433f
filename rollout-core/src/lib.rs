#![warn(missing_docs)]
//! Core abstractions of the rollout harness.
//!
//! This crate defines the capability contract between an episodic simulation
//! environment ([`Env`]) and the [`EpisodeDriver`] that drives it: reset the
//! environment once, step it a fixed number of times with uniformly random
//! actions, render every step, and report the transition of the last step.
//!
//! Concrete environments live in separate crates; see `rollout-classic-env`
//! for native classic-control environments.
pub mod error;

mod base;
pub use base::{Act, Env, Info, Obs, Step};

mod driver;
pub use driver::{EpisodeDriver, EpisodeDriverConfig};
