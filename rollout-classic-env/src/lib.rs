#![warn(missing_docs)]
//! Native classic-control environments for the rollout harness.
//!
//! The environments are selected by a registered name (`"CartPole-v1"`,
//! `"CartPole-v0"`, `"MountainCar-v0"`), seeded at construction, and can
//! redraw an ANSI frame on the terminal at every step. They implement the
//! [`Env`](rollout_core::Env) capability contract of `rollout-core`.
//!
//! Here is an example of running a cart-pole episode with random actions.
//!
//! ```no_run
//! use anyhow::Result;
//! use rollout_classic_env::{ClassicEnv, ClassicEnvConfig, RenderMode};
//! use rollout_core::{Env as _, EpisodeDriver, EpisodeDriverConfig};
//!
//! fn main() -> Result<()> {
//!     let env_config = ClassicEnvConfig::default()
//!         .name("CartPole-v1".to_string())
//!         .render_mode(Some(RenderMode::Ansi));
//!     let env = ClassicEnv::build(&env_config, 42)?;
//!
//!     let mut driver = EpisodeDriver::new(EpisodeDriverConfig::default().max_steps(100));
//!     let step = driver.run(env)?;
//!     println!("{}", step.obs);
//!
//!     Ok(())
//! }
//! ```
mod act;
mod dynamics;
mod env;
mod error;
mod obs;
mod render;

pub use act::ClassicAct;
pub use env::{ClassicEnv, ClassicEnvConfig, ClassicInfo, RenderMode};
pub use error::ClassicEnvError;
pub use obs::ClassicObs;
