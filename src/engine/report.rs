use crate::models::Individual;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

/// The reason why a breeding run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Conclusion {
    /// The population mean reached the goal.
    Completed,
    /// The generation limit was hit first.
    Exhausted,
    /// The run was stopped from outside before either of the above.
    Terminated,
}

/// Outcome of a breeding run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub program_id: Uuid,
    pub requested_at: DateTime<Utc>,
    pub started_at: DateTime<Utc>,
    pub conclusion: Conclusion,
    pub initial_fitness: f64,
    pub fitness: f64,
    pub generations: u32,
    /// `generations / litters_per_year`
    pub years: f64,
    /// Mean weight after each generation, oldest first.
    pub history: Vec<f64>,
    pub population: Vec<Individual>,
    pub runtime: Duration,
}

impl Report {
    /// Whether two reports describe the same evolution, ignoring identity and timing.
    pub fn same_outcome(&self, other: &Report) -> bool {
        self.conclusion == other.conclusion
            && self.initial_fitness == other.initial_fitness
            && self.fitness == other.fitness
            && self.generations == other.generations
            && self.history == other.history
            && self.population == other.population
    }
}
