//! Truncation selection for the breeding program.
//!
//! The sorted population is split by position into two halves. The lower half
//! is labelled "female" and the upper half "male". The label is only a pairing
//! convention: breeding later pairs one individual from each half.
//!
//! From each half the heaviest `retain / 2` individuals survive. With a
//! population of `[10, 20, 30, 40]` and `retain = 2`:
//!
//! ```rust
//! use fx_breeding_ga::models::Selector;
//!
//! let selector = Selector::new(2)?;
//! let selection = selector.select(&[40, 10, 30, 20])?;
//!
//! assert_eq!(selection.females, vec![20]);
//! assert_eq!(selection.males, vec![40]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! When the population length is odd the upper half holds the extra
//! individual.

use crate::models::Individual;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Survivors of one selection round, split by positional half.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub males: Vec<Individual>,
    pub females: Vec<Individual>,
}

/// Configuration for truncation selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    retain: usize,
}

/// Errors raised while configuring the selector.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum SelectorError {
    /// Each half contributes `retain / 2` survivors, so `retain` must be even and positive.
    #[error("retain count must be a positive even number, got {0}")]
    InvalidRetainCount(usize),
}

/// Errors that can occur during selection.
#[derive(Debug, thiserror::Error)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub enum SelectionError {
    /// A half of the population is smaller than the number of survivors requested from it.
    ///
    /// This occurs when the population holds fewer than `retain` individuals.
    /// Returning fewer survivors would skew breeding silently, so selection fails instead.
    #[error(
        "each half must hold at least {required} candidates, got females={females}, males={males}"
    )]
    InsufficientCandidates {
        required: usize,
        females: usize,
        males: usize,
    },
}

impl Selector {
    /// Creates a selector keeping `retain` individuals per generation.
    pub fn new(retain: usize) -> Result<Self, SelectorError> {
        if retain == 0 || retain % 2 != 0 {
            return Err(SelectorError::InvalidRetainCount(retain));
        }

        Ok(Self { retain })
    }

    pub fn retain(&self) -> usize {
        self.retain
    }

    /// Keeps the heaviest `retain / 2` individuals of each positional half.
    #[instrument(level = "debug", skip(self, population), fields(retain = self.retain, size = population.len()))]
    pub fn select(&self, population: &[Individual]) -> Result<Selection, SelectionError> {
        let mut sorted = population.to_vec();
        sorted.sort_unstable();

        let per_half = self.retain / 2;
        let (females, males) = sorted.split_at(sorted.len() / 2);

        if females.len() < per_half || males.len() < per_half {
            return Err(SelectionError::InsufficientCandidates {
                required: per_half,
                females: females.len(),
                males: males.len(),
            });
        }

        Ok(Selection {
            males: males[males.len() - per_half..].to_vec(),
            females: females[females.len() - per_half..].to_vec(),
        })
    }
}
