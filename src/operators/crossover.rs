//! Crossover operators
//!
//! This module provides single-point crossover for chromosomes.

use rand::Rng;
use rand_distr::{Bernoulli, Distribution};
use tracing::instrument;

use crate::error::{OperatorError, OperatorResult};
use crate::genome::chromosome::Chromosome;
use crate::operators::traits::{CrossoverOperator, Offspring};

/// Single-point crossover
///
/// With probability `pc` a cut point is drawn uniformly from `[1, L - 1]`
/// and the parents' tails are swapped; otherwise both children are copies
/// of their parents. The cut is never `0` or `L`.
#[derive(Clone, Debug)]
pub struct SinglePointCrossover {
    probability: f64,
    trial: Bernoulli,
}

impl SinglePointCrossover {
    /// Create a single-point crossover applied with probability `pc`
    pub fn new(pc: f64) -> Result<Self, OperatorError> {
        let trial = Bernoulli::new(pc).map_err(|_| {
            OperatorError::InvalidConfiguration(format!(
                "crossover probability must be in [0, 1], got {}",
                pc
            ))
        })?;
        Ok(Self {
            probability: pc,
            trial,
        })
    }
}

impl CrossoverOperator for SinglePointCrossover {
    #[instrument(
        level = "debug",
        skip(self, parent1, parent2, rng),
        fields(length = parent1.len(), probability = self.probability, cut_point = tracing::field::Empty)
    )]
    fn crossover<R: Rng>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> OperatorResult<Offspring> {
        if parent1.len() != parent2.len() {
            return OperatorResult::Failed(OperatorError::CrossoverFailed(format!(
                "Parent lengths do not match: {} vs {}",
                parent1.len(),
                parent2.len()
            )));
        }

        let n = parent1.len();
        if !self.trial.sample(rng) || n < 2 {
            return OperatorResult::Success(Offspring::copies(parent1, parent2));
        }

        let point = rng.gen_range(1..n);
        tracing::Span::current().record("cut_point", point);

        let children = parent1
            .splice(parent2, point)
            .and_then(|first| parent2.splice(parent1, point).map(|second| (first, second)));

        match children {
            Ok((first, second)) => OperatorResult::Success(Offspring {
                first,
                second,
                cut_point: Some(point),
            }),
            Err(e) => OperatorResult::Failed(OperatorError::CrossoverFailed(e.to_string())),
        }
    }

    fn crossover_probability(&self) -> f64 {
        self.probability
    }
}
