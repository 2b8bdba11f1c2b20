/// CLI configuration
use crate::error::{CliError, Result};
use cast_playback::PlayerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "cast.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default = "default_player")]
    pub player: PlayerConfig,

    #[serde(default = "default_simulator")]
    pub simulator: SimulatorSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SimulatorSettings {
    /// Interval between simulated engine ticks
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Playback speed multiplier
    #[serde(default = "default_speed")]
    pub speed: f64,
}

impl SimulatorSettings {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl CliConfig {
    /// Load configuration from `path`, or `cast.toml` if present, and environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
        let file = match path {
            Some(path) => Some(path.to_path_buf()),
            None if default_path.exists() => Some(default_path),
            None => None,
        };

        Self::load_from(file.as_deref())
    }

    /// Load configuration from an optional file, overridden by environment
    ///
    /// Environment variables are prefixed with `CAST_` and use `__` between
    /// sections, e.g. `CAST_SIMULATOR__SPEED=4`.
    pub fn load_from(file: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(file) = file {
            tracing::debug!("Reading configuration from {}", file.display());
            settings = settings.add_source(config::File::from(file));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("CAST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.simulator.tick_ms == 0 {
            return Err(CliError::Config(
                "simulator.tick_ms must be greater than zero".to_string(),
            ));
        }

        if !self.simulator.speed.is_finite() || self.simulator.speed <= 0.0 {
            return Err(CliError::Config(format!(
                "simulator.speed must be a positive number, got {}",
                self.simulator.speed
            )));
        }

        Ok(())
    }
}

// Default values
fn default_player() -> PlayerConfig {
    PlayerConfig::default()
}

fn default_simulator() -> SimulatorSettings {
    SimulatorSettings {
        tick_ms: default_tick_ms(),
        speed: default_speed(),
    }
}

fn default_tick_ms() -> u64 {
    250
}

fn default_speed() -> f64 {
    1.0
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            player: default_player(),
            simulator: default_simulator(),
        }
    }
}
