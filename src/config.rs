//! Raw run configuration.
//!
//! A [`Config`] holds unvalidated parameters as they arrive from a JSON file or
//! the command line. It becomes usable once turned into a
//! [`Program`](crate::models::Program), which validates every field.
//!
//! Defaults describe the classic rat breeding experiment: grow rats averaging
//! 300 g into rats averaging 50 kg.

use crate::models::Individual;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::instrument;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target mean weight in grams.
    pub target_goal: f64,
    /// Individuals retained per generation. Odd values are rounded up.
    pub population_size: usize,
    pub initial_min: Individual,
    pub initial_max: Individual,
    pub initial_mode: Individual,
    /// Chance that a single offspring mutates.
    pub mutation_probability: f64,
    pub mutation_min_scale: f64,
    pub mutation_max_scale: f64,
    /// Offspring per breeding pair.
    pub litter_size: usize,
    pub litters_per_year: u32,
    pub generation_limit: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_goal: 50000.0,
            population_size: 20,
            initial_min: 200,
            initial_max: 600,
            initial_mode: 300,
            mutation_probability: 0.01,
            mutation_min_scale: 0.5,
            mutation_max_scale: 1.2,
            litter_size: 8,
            litters_per_year: 10,
            generation_limit: 500,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ReadError: could not read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("ParseError: invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Config {
    /// Reads a configuration from a JSON file. Missing fields keep their defaults.
    #[instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}
