//! Simulation settings and the registration-code input file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::distr::weighted::Error as WeightError;
use thiserror::Error;

use crate::clients::DEFAULT_BASE_URL;
use crate::contender_actor::{ActionSampler, ContenderAction, Pacing};
use crate::model::RegistrationCode;

/// Errors raised before any contender is started.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Pacing multiplier must be a positive number, got {0}")]
    InvalidPacing(f64),

    #[error("Time unit must be longer than zero")]
    ZeroTimeUnit,

    #[error("Invalid action weights: {0}")]
    Weights(#[from] WeightError),

    #[error("Failed to read {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Settings shared by every contender of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatorConfig {
    /// Root of the scoring API.
    pub base_url: String,
    /// Average pause between actions is half of this many time units.
    pub pacing: f64,
    /// Length of one pacing step; the stop signal is checked at least this often.
    pub time_unit: Duration,
    /// Makes every contender's random choices reproducible when set.
    pub seed: Option<u64>,
    pub action_weights: Vec<(ContenderAction, u32)>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            pacing: 100.0,
            time_unit: Duration::from_secs(1),
            seed: None,
            action_weights: ContenderAction::DEFAULT_WEIGHTS.to_vec(),
        }
    }
}

impl SimulatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.pacing.is_finite() || self.pacing <= 0.0 {
            return Err(ConfigError::InvalidPacing(self.pacing));
        }
        if self.time_unit.is_zero() {
            return Err(ConfigError::ZeroTimeUnit);
        }
        self.sampler()?;
        Ok(())
    }

    pub fn pacing(&self) -> Pacing {
        Pacing::new(self.pacing, self.time_unit)
    }

    pub fn sampler(&self) -> Result<ActionSampler, ConfigError> {
        Ok(ActionSampler::new(&self.action_weights)?)
    }

    /// Seed for the contender at `index`, distinct per contender.
    pub fn seed_for(&self, index: usize) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(index as u64))
    }
}

/// Reads one registration code per line, trimmed, skipping blank lines.
pub fn load_registration_codes(path: &Path) -> Result<Vec<RegistrationCode>, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_registration_codes(&text))
}

pub fn parse_registration_codes(text: &str) -> Vec<RegistrationCode> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
