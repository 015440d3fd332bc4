use crate::models::Individual;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ============================================================
// MutationRate
// ============================================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MutationRate(f64);

#[derive(Debug, thiserror::Error)]
#[error("mutation_rate must be between 0.0 and 1.0, got: {0}")]
pub struct MutationRateOutOfRange(f64);

impl MutationRate {
    pub fn new(value: f64) -> Result<Self, MutationRateOutOfRange> {
        if !(0.0..=1.0).contains(&value) {
            return Err(MutationRateOutOfRange(value));
        }

        Ok(Self(value))
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

// ============================================================
// Scale
// ============================================================

/// Range of the multiplier applied to a weight when a mutation occurs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    min: f64,
    max: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum ScaleError {
    #[error("scale bounds must be finite and non-negative, got min={min}, max={max}")]
    OutOfRange { min: f64, max: f64 },
    #[error("scale min must not exceed max, got min={min}, max={max}")]
    Inverted { min: f64, max: f64 },
}

impl Scale {
    pub fn new(min: f64, max: f64) -> Result<Self, ScaleError> {
        let valid = |bound: f64| bound.is_finite() && bound >= 0.0;
        if !valid(min) || !valid(max) {
            return Err(ScaleError::OutOfRange { min, max });
        }

        if min > max {
            return Err(ScaleError::Inverted { min, max });
        }

        Ok(Self { min, max })
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        self.min + (self.max - self.min) * rng.random::<f64>()
    }
}

// ============================================================
// Mutagen
// ============================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutagen {
    mutation_rate: MutationRate,
    scale: Scale,
}

#[derive(Debug, thiserror::Error)]
pub enum MutagenError {
    #[error("Mutation rate error: {0}")]
    MutationRate(#[from] MutationRateOutOfRange),
    #[error("Scale error: {0}")]
    Scale(#[from] ScaleError),
}

impl Mutagen {
    pub fn constant(
        mutation_rate_value: f64,
        min_scale: f64,
        max_scale: f64,
    ) -> Result<Self, MutagenError> {
        let mutation_rate = MutationRate::new(mutation_rate_value)?;
        let scale = Scale::new(min_scale, max_scale)?;

        Ok(Self {
            mutation_rate,
            scale,
        })
    }

    /// Returns a new litter where each weight has been rescaled with probability
    /// `mutation_rate`.
    ///
    /// The rescaled weight is rounded half to even, so 2.5 becomes 2 and 3.5 becomes 4.
    #[instrument(level = "debug", skip(self, rng, children), fields(mutation_rate = self.mutation_rate.get(), size = children.len()))]
    pub fn mutate<R: Rng>(&self, rng: &mut R, children: &[Individual]) -> Vec<Individual> {
        children
            .iter()
            .map(|&weight| {
                if rng.random_bool(self.mutation_rate.get()) {
                    (weight as f64 * self.scale.sample(rng)).round_ties_even() as Individual
                } else {
                    weight
                }
            })
            .collect()
    }
}
