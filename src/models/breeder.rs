use crate::models::{Individual, Selection};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Draws a single offspring weight uniformly between both parents, inclusive.
///
/// The parents may arrive in either order.
fn crossover<R: Rng>(rng: &mut R, female: Individual, male: Individual) -> Individual {
    rng.random_range(female.min(male)..=female.max(male))
}

/// Produces litters from the survivors of a selection round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breeder {
    litter_size: usize,
}

#[derive(Debug, thiserror::Error)]
#[error("litter size must be at least 1, got {0}")]
pub struct BreederError(usize);

/// Errors that can occur while breeding.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum BreedingError {
    /// Pairing is positional, so every male needs exactly one female.
    #[error("cannot pair {males} males with {females} females")]
    LengthMismatch { males: usize, females: usize },
}

impl Breeder {
    pub fn new(litter_size: usize) -> Result<Self, BreederError> {
        if litter_size == 0 {
            return Err(BreederError(litter_size));
        }

        Ok(Self { litter_size })
    }

    pub fn litter_size(&self) -> usize {
        self.litter_size
    }

    /// Shuffles both halves independently, pairs them by position and
    /// produces `litter_size` offspring per pair.
    #[instrument(level = "debug", skip(self, rng, selection), fields(litter_size = self.litter_size, males = selection.males.len(), females = selection.females.len()))]
    pub fn breed<R: Rng>(
        &self,
        rng: &mut R,
        selection: &Selection,
    ) -> Result<Vec<Individual>, BreedingError> {
        if selection.males.len() != selection.females.len() {
            tracing::error!(
                males = selection.males.len(),
                females = selection.females.len(),
                "refusing to breed unequal halves"
            );
            return Err(BreedingError::LengthMismatch {
                males: selection.males.len(),
                females: selection.females.len(),
            });
        }

        let mut males = selection.males.clone();
        let mut females = selection.females.clone();
        males.shuffle(rng);
        females.shuffle(rng);

        let mut children = Vec::with_capacity(males.len() * self.litter_size);
        for (&male, &female) in males.iter().zip(females.iter()) {
            for _ in 0..self.litter_size {
                children.push(crossover(rng, female, male));
            }
        }

        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn selection(males: Vec<Individual>, females: Vec<Individual>) -> Selection {
        Selection { males, females }
    }

    #[test]
    fn it_rejects_empty_litters() {
        assert!(Breeder::new(0).is_err());
        assert!(Breeder::new(1).is_ok());
    }

    #[test]
    fn it_breeds_a_litter_between_parents() {
        let breeder = Breeder::new(3).unwrap();

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let children = breeder.breed(&mut rng, &selection(vec![20], vec![10])).unwrap();

            assert_eq!(children.len(), 3);
            assert!(children.iter().all(|c| (10..=20).contains(c)));
        }
    }

    #[test]
    fn it_tolerates_a_female_heavier_than_the_male() {
        let breeder = Breeder::new(4).unwrap();

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let children = breeder.breed(&mut rng, &selection(vec![10], vec![20])).unwrap();

            assert_eq!(children.len(), 4);
            assert!(children.iter().all(|c| (10..=20).contains(c)));
        }
    }

    #[test]
    fn it_clones_equal_parents() {
        let mut rng = StdRng::seed_from_u64(42);
        let breeder = Breeder::new(5).unwrap();
        let children = breeder.breed(&mut rng, &selection(vec![300], vec![300])).unwrap();

        assert_eq!(children, vec![300; 5]);
    }

    #[test]
    fn it_produces_a_litter_per_pair() {
        let mut rng = StdRng::seed_from_u64(42);
        let breeder = Breeder::new(8).unwrap();
        let children = breeder
            .breed(&mut rng, &selection(vec![500, 600, 700], vec![100, 200, 300]))
            .unwrap();

        assert_eq!(children.len(), 24);
        assert!(children.iter().all(|c| (100..=700).contains(c)));
    }

    #[test]
    fn it_is_deterministic_for_a_seed() {
        let breeder = Breeder::new(4).unwrap();
        let parents = selection(vec![500, 600], vec![100, 200]);

        let first = breeder
            .breed(&mut StdRng::seed_from_u64(9), &parents)
            .unwrap();
        let second = breeder
            .breed(&mut StdRng::seed_from_u64(9), &parents)
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn it_rejects_unequal_halves() {
        let mut rng = StdRng::seed_from_u64(42);
        let breeder = Breeder::new(2).unwrap();
        let result = breeder.breed(&mut rng, &selection(vec![30, 40], vec![10]));

        assert_eq!(
            result,
            Err(BreedingError::LengthMismatch {
                males: 2,
                females: 1
            })
        );
    }
}
