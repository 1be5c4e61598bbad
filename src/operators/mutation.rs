//! Mutation operators
//!
//! This module provides bit-flip mutation for chromosomes.

use rand::Rng;
use rand_distr::{Bernoulli, Distribution};
use tracing::instrument;

use crate::error::OperatorError;
use crate::genome::chromosome::Chromosome;
use crate::operators::traits::MutationOperator;

/// Bit-flip mutation
///
/// Every gene is flipped independently with probability `pm`. This is not a
/// single flip per chromosome: the expected number of flips is `pm · L`.
#[derive(Clone, Debug)]
pub struct BitFlipMutation {
    probability: f64,
    trial: Bernoulli,
}

impl BitFlipMutation {
    /// Create a bit-flip mutation with per-bit probability `pm`
    pub fn new(pm: f64) -> Result<Self, OperatorError> {
        let trial = Bernoulli::new(pm).map_err(|_| {
            OperatorError::InvalidConfiguration(format!(
                "mutation probability must be in [0, 1], got {}",
                pm
            ))
        })?;
        Ok(Self {
            probability: pm,
            trial,
        })
    }
}

impl MutationOperator for BitFlipMutation {
    #[instrument(
        level = "debug",
        skip(self, chromosome, rng),
        fields(length = chromosome.len(), probability = self.probability, flips = tracing::field::Empty)
    )]
    fn mutate<R: Rng>(&self, chromosome: &Chromosome, rng: &mut R) -> Chromosome {
        let mut flips = 0usize;
        let bits: Vec<bool> = chromosome
            .bits()
            .iter()
            .map(|&bit| {
                if self.trial.sample(rng) {
                    flips += 1;
                    !bit
                } else {
                    bit
                }
            })
            .collect();
        tracing::Span::current().record("flips", flips);
        Chromosome::new(bits)
    }

    fn mutation_probability(&self) -> f64 {
        self.probability
    }
}
