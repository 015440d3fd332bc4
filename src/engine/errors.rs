use crate::models::{BreedingError, EmptyPopulation, SelectionError};

/// Errors that can abort a breeding run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("SelectionError: {0}")]
    SelectionError(#[from] SelectionError),
    #[error("BreedingError: {0}")]
    BreedingError(#[from] BreedingError),
    /// A generation ended up without individuals. A validated program never gets here.
    #[error("InvariantViolation: {0}")]
    EmptyPopulation(#[from] EmptyPopulation),
}
