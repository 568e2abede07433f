//! Configuration of classic-control environments.
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Rendering mode of [`ClassicEnv`](super::ClassicEnv).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    /// Redraw an ANSI frame on the terminal at every step.
    Ansi,
}

/// Configuration of [`ClassicEnv`](super::ClassicEnv).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassicEnvConfig {
    /// Name of the environment in the registry, e.g. `"CartPole-v1"`.
    pub name: String,

    /// Rendering mode. `None` makes `render` a no-op.
    pub render_mode: Option<RenderMode>,

    /// Wait time inserted after every rendered frame.
    pub wait: Duration,

    /// Overrides the episode step limit of the registry entry.
    pub max_episode_steps: Option<usize>,
}

impl Default for ClassicEnvConfig {
    fn default() -> Self {
        Self {
            name: "".to_string(),
            render_mode: None,
            wait: Duration::from_millis(0),
            max_episode_steps: None,
        }
    }
}

impl ClassicEnvConfig {
    /// Sets the name of the environment.
    pub fn name(mut self, name: String) -> Self {
        self.name = name;
        self
    }

    /// Sets the rendering mode.
    pub fn render_mode(mut self, render_mode: Option<RenderMode>) -> Self {
        self.render_mode = render_mode;
        self
    }

    /// Sets the wait time inserted after every rendered frame.
    pub fn wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    /// Overrides the episode step limit of the registry entry.
    pub fn max_episode_steps(mut self, v: Option<usize>) -> Self {
        self.max_episode_steps = v;
        self
    }
}
