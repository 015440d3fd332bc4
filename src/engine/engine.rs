use super::models::Terminated;
use super::{Conclusion, Error, Report};
use crate::models::{Individual, Program, ScheduleDecision, mean};
use chrono::Utc;
use rand::Rng;
use std::time::Instant;
use tracing::instrument;

/// Runs a breeding program generation by generation.
pub struct Engine<'a> {
    program: &'a Program,
}

impl<'a> Engine<'a> {
    pub fn new(program: &'a Program) -> Self {
        Self { program }
    }

    /// Draws the generation-0 population from the program's initial distribution.
    pub fn populate<R: Rng>(&self, rng: &mut R) -> Vec<Individual> {
        self.program
            .distribution
            .populate(rng, self.program.population_size)
    }

    /// Breeds one generation from `parents`.
    ///
    /// The next generation holds the selected males, then the selected females,
    /// then their mutated offspring, so it outgrows the retained count by one
    /// litter per pair.
    #[instrument(level = "debug", skip(self, rng, parents), fields(program_id = %self.program.id, parents = parents.len()))]
    pub fn step<R: Rng>(
        &self,
        rng: &mut R,
        parents: &[Individual],
    ) -> Result<Vec<Individual>, Error> {
        let selection = self.program.selector.select(parents)?;
        let children = self.program.breeder.breed(rng, &selection)?;
        let children = self.program.mutagen.mutate(rng, &children);

        let mut next =
            Vec::with_capacity(selection.males.len() + selection.females.len() + children.len());
        next.extend(selection.males);
        next.extend(selection.females);
        next.extend(children);

        Ok(next)
    }

    /// Evolves a fresh population until the goal is reached, the generation
    /// limit is hit, or `terminated` fires.
    #[instrument(level = "info", skip(self, rng, terminated), fields(program_id = %self.program.id, goal = self.program.goal.target()))]
    pub fn run<R: Rng>(&self, rng: &mut R, terminated: &dyn Terminated) -> Result<Report, Error> {
        let started_at = Utc::now();
        let clock = Instant::now();
        let goal = &self.program.goal;
        let schedule = &self.program.schedule;

        let mut parents = self.populate(rng);
        let initial_fitness = goal.fitness(&parents)?;
        tracing::info!(
            population = ?parents,
            fitness = initial_fitness,
            retain = self.program.selector.retain(),
            "initial population"
        );

        let mut fitness = initial_fitness;
        let mut generation = 0;
        let mut history = Vec::new();

        let conclusion = loop {
            match schedule.decide(generation, fitness, goal) {
                ScheduleDecision::Complete => break Conclusion::Completed,
                ScheduleDecision::Exhaust => break Conclusion::Exhausted,
                ScheduleDecision::Breed => {}
            }

            if terminated.is_terminated() {
                tracing::warn!(generation, "run terminated before reaching goal");
                break Conclusion::Terminated;
            }

            parents = self.step(rng, &parents)?;
            let mean_weight = mean(&parents)?;
            fitness = goal.fitness(&parents)?;
            history.push(mean_weight);

            tracing::info!(
                generation,
                fitness,
                mean_weight,
                size = parents.len(),
                "generation bred"
            );
            generation += 1;
        };

        let report = Report {
            program_id: self.program.id,
            requested_at: self.program.requested_at,
            started_at,
            conclusion,
            initial_fitness,
            fitness,
            generations: generation,
            years: schedule.years(generation),
            history,
            population: parents,
            runtime: clock.elapsed(),
        };

        tracing::info!(
            conclusion = ?report.conclusion,
            generations = report.generations,
            years = report.years,
            runtime = ?report.runtime,
            "breeding program concluded"
        );

        Ok(report)
    }
}
