use crate::models::FitnessGoal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Controls how long a breeding program runs and how generations map to time.
///
/// # Examples
///
/// ```rust
/// use fx_breeding_ga::models::Schedule;
///
/// // Give up after 500 generations, 10 litters per year
/// let schedule = Schedule::new(500, 10)?;
/// assert_eq!(schedule.years(378), 37.8);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Hard cap on the number of generations bred.
    generation_limit: u32,
    /// Litters a breeding pair produces per year. Only used to report elapsed time.
    litters_per_year: u32,
}

#[derive(Debug, thiserror::Error)]
#[error("litters_per_year must be at least 1, got {0}")]
pub struct ScheduleError(u32);

/// Decision about what to do after a generation has been evaluated.
#[derive(Debug, PartialEq, Eq)]
pub enum ScheduleDecision {
    /// Fitness is below the goal and the limit has not been reached.
    Breed,
    /// The population mean has reached the goal.
    Complete,
    /// The generation limit is exhausted without reaching the goal.
    Exhaust,
}

impl Schedule {
    pub fn new(generation_limit: u32, litters_per_year: u32) -> Result<Self, ScheduleError> {
        if litters_per_year == 0 {
            return Err(ScheduleError(litters_per_year));
        }

        Ok(Self {
            generation_limit,
            litters_per_year,
        })
    }

    pub fn generation_limit(&self) -> u32 {
        self.generation_limit
    }

    pub fn litters_per_year(&self) -> u32 {
        self.litters_per_year
    }

    /// Determines whether another generation should be bred.
    ///
    /// Reaching the goal wins over exhausting the limit.
    #[instrument(level = "debug", skip(self, goal), fields(generation_limit = self.generation_limit))]
    pub(crate) fn decide(
        &self,
        generation: u32,
        fitness: f64,
        goal: &FitnessGoal,
    ) -> ScheduleDecision {
        if goal.is_reached(fitness) {
            return ScheduleDecision::Complete;
        }

        if generation >= self.generation_limit {
            return ScheduleDecision::Exhaust;
        }

        ScheduleDecision::Breed
    }

    /// Years elapsed after `generations` generations.
    pub fn years(&self, generations: u32) -> f64 {
        generations as f64 / self.litters_per_year as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal() -> FitnessGoal {
        FitnessGoal::new(1000.0).unwrap()
    }

    #[test]
    fn it_rejects_zero_litters_per_year() {
        assert!(Schedule::new(500, 0).is_err());
    }

    #[test]
    fn it_breeds_while_below_goal_and_limit() {
        let schedule = Schedule::new(500, 10).unwrap();

        assert_eq!(schedule.decide(0, 0.5, &goal()), ScheduleDecision::Breed);
        assert_eq!(schedule.decide(499, 0.99, &goal()), ScheduleDecision::Breed);
    }

    #[test]
    fn it_completes_when_goal_is_reached() {
        let schedule = Schedule::new(500, 10).unwrap();

        assert_eq!(schedule.decide(3, 1.0, &goal()), ScheduleDecision::Complete);
        assert_eq!(schedule.decide(3, 1.7, &goal()), ScheduleDecision::Complete);
    }

    #[test]
    fn it_exhausts_at_the_limit() {
        let schedule = Schedule::new(500, 10).unwrap();

        assert_eq!(schedule.decide(500, 0.9, &goal()), ScheduleDecision::Exhaust);
    }

    #[test]
    fn it_prefers_completion_over_exhaustion() {
        let schedule = Schedule::new(500, 10).unwrap();

        assert_eq!(schedule.decide(500, 1.0, &goal()), ScheduleDecision::Complete);
    }

    #[test]
    fn it_exhausts_immediately_with_a_zero_limit() {
        let schedule = Schedule::new(0, 10).unwrap();

        assert_eq!(schedule.decide(0, 0.2, &goal()), ScheduleDecision::Exhaust);
    }

    #[test]
    fn it_converts_generations_to_years() {
        let schedule = Schedule::new(500, 10).unwrap();

        assert_eq!(schedule.years(0), 0.0);
        assert_eq!(schedule.years(25), 2.5);
        assert_eq!(schedule.years(500), 50.0);
    }
}
