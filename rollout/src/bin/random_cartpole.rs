//! Runs one fixed-budget cart-pole episode with uniformly random actions
//! and ANSI rendering, then prints the final transition to stdout.
use anyhow::Result;
use rollout_classic_env::{ClassicEnv, ClassicEnvConfig, RenderMode};
use rollout_core::{Env as _, EpisodeDriver, EpisodeDriverConfig};

const ENV_NAME: &str = "CartPole-v1";
const SEED: i64 = 42;
const MAX_STEPS: usize = 10_000;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let env_config = ClassicEnvConfig::default()
        .name(ENV_NAME.to_string())
        .render_mode(Some(RenderMode::Ansi));
    let env = ClassicEnv::build(&env_config, SEED)?;

    let mut driver = EpisodeDriver::new(EpisodeDriverConfig::default().max_steps(MAX_STEPS));
    let step = driver.run(env)?;

    println!("{}", step.obs);
    println!("{}", step.reward);
    println!("{}", step.is_done());

    Ok(())
}
