use crate::models::{Individual, PopulationSize};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

#[derive(Debug, thiserror::Error)]
pub enum DistributionError {
    #[error("InvalidBounds: min must not exceed max. min={min}, max={max}")]
    InvalidBounds { min: Individual, max: Individual },
    #[error("ModeOutOfBounds: mode must lie within [min, max]. min={min}, max={max}, mode={mode}")]
    ModeOutOfBounds {
        min: Individual,
        max: Individual,
        mode: Individual,
    },
}

/// Triangular distribution used to seed the initial population.
///
/// Samples fall in `[min, max]` with the density peaking at `mode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Triangular {
    min: Individual,
    max: Individual,
    mode: Individual,
}

impl Triangular {
    #[instrument(level = "debug")]
    pub fn new(
        min: Individual,
        max: Individual,
        mode: Individual,
    ) -> Result<Self, DistributionError> {
        if min > max {
            return Err(DistributionError::InvalidBounds { min, max });
        }

        if !(min..=max).contains(&mode) {
            return Err(DistributionError::ModeOutOfBounds { min, max, mode });
        }

        Ok(Self { min, max, mode })
    }

    /// Draws one continuous sample by inverting the triangular CDF.
    fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        let (min, max, mode) = (self.min as f64, self.max as f64, self.mode as f64);
        let span = max - min;
        if span == 0.0 {
            return min;
        }

        let u: f64 = rng.random();
        let split = (mode - min) / span;

        if u < split {
            min + (span * (mode - min) * u).sqrt()
        } else {
            max - (span * (max - mode) * (1.0 - u)).sqrt()
        }
    }

    /// Produces the generation-0 population, truncating each sample to whole grams.
    #[instrument(level = "debug", skip(self, rng), fields(min = self.min, max = self.max, mode = self.mode, size = size.get()))]
    pub(crate) fn populate<R: Rng>(&self, rng: &mut R, size: PopulationSize) -> Vec<Individual> {
        (0..size.get())
            .map(|_| (self.sample(rng).trunc() as Individual).clamp(self.min, self.max))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn it_rejects_inverted_bounds() {
        assert!(matches!(
            Triangular::new(600, 200, 300),
            Err(DistributionError::InvalidBounds { min: 600, max: 200 })
        ));
    }

    #[test]
    fn it_rejects_mode_outside_bounds() {
        assert!(Triangular::new(200, 600, 100).is_err());
        assert!(Triangular::new(200, 600, 601).is_err());
        assert!(Triangular::new(200, 600, 200).is_ok());
        assert!(Triangular::new(200, 600, 600).is_ok());
    }

    #[test]
    fn it_keeps_samples_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let bounds = [(200, 600, 300), (400, 600, 500), (0, 10, 0), (0, 10, 10)];

        for (min, max, mode) in bounds {
            let distribution = Triangular::new(min, max, mode).unwrap();
            let population = distribution.populate(&mut rng, PopulationSize::new(1000).unwrap());

            assert_eq!(population.len(), 1000);
            assert!(population.iter().all(|w| (min..=max).contains(w)));
        }
    }

    #[test]
    fn it_produces_a_constant_population_for_a_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let distribution = Triangular::new(500, 500, 500).unwrap();
        let population = distribution.populate(&mut rng, PopulationSize::new(6).unwrap());

        assert_eq!(population, vec![500; 6]);
    }

    #[test]
    fn it_concentrates_mass_near_the_mode() {
        let mut rng = StdRng::seed_from_u64(1);
        let distribution = Triangular::new(0, 900, 100).unwrap();
        let population = distribution.populate(&mut rng, PopulationSize::new(10_000).unwrap());

        // Mean of a triangular distribution is (min + max + mode) / 3 = 333.3
        let mean = population.iter().sum::<i64>() as f64 / population.len() as f64;
        assert!((mean - 333.3).abs() < 10.0, "mean was {mean}");

        let near_mode = population.iter().filter(|w| (0..300).contains(*w)).count();
        let far_from_mode = population.iter().filter(|w| (600..900).contains(*w)).count();
        assert!(near_mode > far_from_mode * 3);
    }
}
