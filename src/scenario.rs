use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::arena::Arena;
use crate::config::{
    PopulationParams, SimulationConfig, DEFAULT_CONTACT_RADIUS, DEFAULT_RECOVERY_PERIOD,
};
use crate::error::ScenarioError;
use crate::telemetry::LoggingConfig;

fn default_name() -> String {
    "default".to_string()
}

fn default_seed() -> u64 {
    7
}

fn default_max_ticks() -> u64 {
    2_000
}

fn default_contact_radius() -> f64 {
    DEFAULT_CONTACT_RADIUS
}

fn default_recovery_period() -> u32 {
    DEFAULT_RECOVERY_PERIOD
}

/// A runnable setup: world rules, starting population and run settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_max_ticks")]
    pub max_ticks: u64,
    #[serde(default)]
    pub arena: Arena,
    #[serde(default = "default_contact_radius")]
    pub contact_radius: f64,
    #[serde(default = "default_recovery_period")]
    pub recovery_period: u32,
    #[serde(default)]
    pub population: PopulationParams,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            name: default_name(),
            description: None,
            seed: default_seed(),
            max_ticks: default_max_ticks(),
            arena: Arena::default(),
            contact_radius: default_contact_radius(),
            recovery_period: default_recovery_period(),
            population: PopulationParams::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Scenario {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let scenario: Scenario =
            serde_yaml::from_str(text).context("Failed to parse scenario YAML")?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Rejects geometry the engine cannot run. Head counts are checked when
    /// the population is built.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let Arena {
            half_width,
            half_height,
        } = self.arena;
        if !is_positive(half_width) || !is_positive(half_height) {
            return Err(ScenarioError::Invalid(format!(
                "arena extents must be positive, got {} x {}",
                half_width, half_height
            )));
        }
        if !is_positive(self.contact_radius) {
            return Err(ScenarioError::Invalid(format!(
                "contact radius must be positive, got {}",
                self.contact_radius
            )));
        }
        let speed = self.population.speed;
        if !speed.is_finite() || speed < 0.0 {
            return Err(ScenarioError::Invalid(format!(
                "speed must be a non-negative number, got {speed}"
            )));
        }
        Ok(())
    }

    pub fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            arena: self.arena,
            contact_radius: self.contact_radius,
            recovery_period: self.recovery_period,
        }
    }

    pub fn ticks(&self, override_ticks: Option<u64>) -> u64 {
        override_ticks.unwrap_or(self.max_ticks)
    }

    /// Applies command-line overrides; `None` keeps the scenario's value.
    pub fn with_overrides(
        mut self,
        seed: Option<u64>,
        max_ticks: Option<u64>,
        log_level: Option<String>,
    ) -> Self {
        if let Some(seed) = seed {
            self.seed = seed;
        }
        self.max_ticks = self.ticks(max_ticks);
        if let Some(level) = log_level {
            self.logging.level = level;
        }
        self
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        Scenario::from_yaml_str(&data)
            .with_context(|| format!("Failed to load {}", path.display()))
    }
}
