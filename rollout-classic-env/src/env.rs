//! Classic-control environment.
mod config;

use crate::{
    dynamics::{self, Dynamics},
    error::ClassicEnvError,
    render::AnsiRenderer,
    ClassicAct, ClassicObs,
};
use anyhow::Result;
use log::{info, trace};
use rollout_core::{Env, Info, Step};

pub use config::{ClassicEnvConfig, RenderMode};

/// Information given at every step of the interaction with the environment.
///
/// Currently, it is empty and used to match the type signature.
#[derive(Debug)]
pub struct ClassicInfo {}

impl Info for ClassicInfo {}

/// A native classic-control environment, selected by a registered name.
///
/// The environment owns its dynamics, a seeded random number generator for
/// action sampling, an episode step limit (after which steps report
/// truncation), and an optional ANSI renderer.
pub struct ClassicEnv {
    name: String,

    dynamics: Box<dyn Dynamics>,

    /// Drives action sampling only; the dynamics draw their reset state
    /// from it so that one seed fixes the whole episode.
    rng: fastrand::Rng,

    renderer: Option<AnsiRenderer>,

    count_steps: usize,

    max_episode_steps: usize,
}

impl std::fmt::Debug for ClassicEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassicEnv")
            .field("name", &self.name)
            .field("count_steps", &self.count_steps)
            .field("max_episode_steps", &self.max_episode_steps)
            .finish_non_exhaustive()
    }
}

impl Env for ClassicEnv {
    type Config = ClassicEnvConfig;
    type Obs = ClassicObs;
    type Act = ClassicAct;
    type Info = ClassicInfo;

    /// Constructs the environment registered under `config.name`.
    ///
    /// Fails with [`ClassicEnvError::UnknownEnv`] for a name that is not in
    /// the registry.
    fn build(config: &Self::Config, seed: i64) -> Result<Self> {
        let (dynamics, default_limit) = dynamics::build(&config.name)?;
        let max_episode_steps = config.max_episode_steps.unwrap_or(default_limit);
        let renderer = config.render_mode.map(|mode| match mode {
            RenderMode::Ansi => AnsiRenderer::new(config.wait),
        });
        info!(
            "built {}, episode step limit = {}",
            config.name, max_episode_steps
        );

        Ok(Self {
            name: config.name.clone(),
            dynamics,
            rng: fastrand::Rng::with_seed(seed as u64),
            renderer,
            count_steps: 0,
            max_episode_steps,
        })
    }

    fn reset(&mut self) -> Result<ClassicObs> {
        trace!("{}: reset", self.name);
        self.count_steps = 0;
        Ok(self.dynamics.reset(&mut self.rng).into())
    }

    fn step(&mut self, a: &ClassicAct) -> Result<Step<Self>> {
        trace!("{}: step {:?}", self.name, a);
        let n_acts = self.dynamics.n_acts();
        if a.act >= n_acts {
            return Err(ClassicEnvError::InvalidAction { act: a.act, n_acts }.into());
        }

        let transition = self.dynamics.step(a.act);
        self.count_steps += 1;
        let is_truncated = self.count_steps >= self.max_episode_steps;

        Ok(Step::new(
            transition.obs.into(),
            a.clone(),
            transition.reward,
            transition.is_terminated,
            is_truncated,
            ClassicInfo {},
        ))
    }

    fn sample_action(&mut self) -> ClassicAct {
        self.rng.u8(..self.dynamics.n_acts()).into()
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = self.renderer.as_mut() {
            let frame = self.dynamics.frame();
            renderer.draw(&frame)?;
        }
        Ok(())
    }

    fn close(&mut self) {
        info!("{}: closed after {} steps", self.name, self.count_steps);
        self.renderer = None;
    }
}
