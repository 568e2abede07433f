//! Configuration of [`EpisodeDriver`](super::EpisodeDriver).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`EpisodeDriver`](super::EpisodeDriver).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct EpisodeDriverConfig {
    /// The number of environment steps in one episode.
    pub max_steps: usize,
}

impl Default for EpisodeDriverConfig {
    fn default() -> Self {
        Self { max_steps: 10_000 }
    }
}

impl EpisodeDriverConfig {
    /// Sets the number of environment steps in one episode.
    pub fn max_steps(mut self, v: usize) -> Self {
        self.max_steps = v;
        self
    }

    /// Constructs [`EpisodeDriverConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let config = serde_yaml::from_reader(rdr)?;
        Ok(config)
    }

    /// Saves [`EpisodeDriverConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::EpisodeDriverConfig;
    use anyhow::Result;
    use tempdir::TempDir;

    #[test]
    fn test_serde_episode_driver_config() -> Result<()> {
        let config = EpisodeDriverConfig::default().max_steps(100);

        let dir = TempDir::new("episode_driver_config")?;
        let path = dir.path().join("episode_driver_config.yaml");

        config.save(&path)?;
        let config_ = EpisodeDriverConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }
}
