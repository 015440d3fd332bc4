mod breeder;
mod distribution;
mod goal;
mod individual;
mod mutagen;
mod program;
mod schedule;
mod selector;

pub use breeder::{Breeder, BreederError, BreedingError};
pub use distribution::{DistributionError, Triangular};
pub use goal::{FitnessGoal, TargetOutOfRange};
pub use individual::{EmptyPopulation, Individual, PopulationSize, PopulationSizeError};
pub use mutagen::{Mutagen, MutagenError, MutationRate, MutationRateOutOfRange, Scale, ScaleError};
pub use program::{Program, ProgramError};
pub use schedule::{Schedule, ScheduleError};
pub use selector::{Selection, SelectionError, Selector, SelectorError};

pub(crate) use individual::mean;
pub(crate) use schedule::ScheduleDecision;
