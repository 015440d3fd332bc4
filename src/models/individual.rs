use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Weight of a single organism in grams.
pub type Individual = i64;

#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[error("population is empty")]
pub struct EmptyPopulation;

/// Arithmetic mean of a population.
pub(crate) fn mean(population: &[Individual]) -> Result<f64, EmptyPopulation> {
    if population.is_empty() {
        return Err(EmptyPopulation);
    }

    let total: f64 = population.iter().map(|&weight| weight as f64).sum();
    Ok(total / population.len() as f64)
}

#[derive(Debug, thiserror::Error)]
#[error("population size must be at least 1 and fit an even count, got {0}")]
pub struct PopulationSizeError(usize);

/// Number of individuals retained each generation.
///
/// Breeding pairs one individual from each half of the population, so the
/// size is always even: an odd request is rounded up by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationSize(usize);

impl PopulationSize {
    #[instrument(level = "debug")]
    pub fn new(size: usize) -> Result<Self, PopulationSizeError> {
        if size == 0 {
            return Err(PopulationSizeError(size));
        }

        if size % 2 != 0 {
            tracing::debug!(requested = size, "rounding odd population size up");
            return size
                .checked_add(1)
                .map(Self)
                .ok_or(PopulationSizeError(size));
        }

        Ok(Self(size))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}
