use crate::models::{EmptyPopulation, Individual, mean};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Target mean weight of the population, and the termination criterion of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessGoal {
    target: f64,
}

#[derive(Debug, thiserror::Error)]
#[error("fitness goal target must be a positive, finite number, got {0}")]
pub struct TargetOutOfRange(f64);

impl FitnessGoal {
    /// Creates a goal that is reached once the population mean meets `target`.
    pub fn new(target: f64) -> Result<Self, TargetOutOfRange> {
        if !target.is_finite() || target <= 0.0 {
            return Err(TargetOutOfRange(target));
        }

        Ok(Self { target })
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Ratio of the population mean to the target. 1.0 or more means the goal is met.
    #[instrument(level = "debug", skip(self, population), fields(target = self.target, size = population.len()))]
    pub fn fitness(&self, population: &[Individual]) -> Result<f64, EmptyPopulation> {
        Ok(mean(population)? / self.target)
    }

    /// Checks if the given fitness value has reached the goal.
    pub(crate) fn is_reached(&self, fitness: f64) -> bool {
        fitness >= 1.0
    }
}
