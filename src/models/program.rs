use super::{
    Breeder, BreederError, DistributionError, FitnessGoal, Mutagen, MutagenError,
    PopulationSize, PopulationSizeError, Schedule, ScheduleError, Selector, SelectorError,
    TargetOutOfRange, Triangular,
};
use crate::config::Config;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

/// A validated breeding program: every parameter a run needs, fixed before it starts.
#[derive(Debug, Clone, Serialize)]
pub struct Program {
    pub(crate) id: Uuid,
    pub(crate) requested_at: DateTime<Utc>,
    pub(crate) goal: FitnessGoal,
    pub(crate) population_size: PopulationSize,
    pub(crate) distribution: Triangular,
    pub(crate) selector: Selector,
    pub(crate) breeder: Breeder,
    pub(crate) mutagen: Mutagen,
    pub(crate) schedule: Schedule,
}

/// Rejections raised while turning a [`Config`] into a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    #[error("Goal error: {0}")]
    Goal(#[from] TargetOutOfRange),
    #[error("Population size error: {0}")]
    PopulationSize(#[from] PopulationSizeError),
    #[error("Distribution error: {0}")]
    Distribution(#[from] DistributionError),
    #[error("Selector error: {0}")]
    Selector(#[from] SelectorError),
    #[error("Breeder error: {0}")]
    Breeder(#[from] BreederError),
    #[error("Mutagen error: {0}")]
    Mutagen(#[from] MutagenError),
    #[error("Schedule error: {0}")]
    Schedule(#[from] ScheduleError),
}

impl Program {
    #[instrument(level = "debug", skip(config), fields(population_size = config.population_size, target_goal = config.target_goal))]
    pub fn new(config: &Config) -> Result<Self, ProgramError> {
        let population_size = PopulationSize::new(config.population_size)?;

        Ok(Self {
            id: Uuid::now_v7(),
            requested_at: Utc::now(),
            goal: FitnessGoal::new(config.target_goal)?,
            population_size,
            distribution: Triangular::new(
                config.initial_min,
                config.initial_max,
                config.initial_mode,
            )?,
            selector: Selector::new(population_size.get())?,
            breeder: Breeder::new(config.litter_size)?,
            mutagen: Mutagen::constant(
                config.mutation_probability,
                config.mutation_min_scale,
                config.mutation_max_scale,
            )?,
            schedule: Schedule::new(config.generation_limit, config.litters_per_year)?,
        })
    }

}
