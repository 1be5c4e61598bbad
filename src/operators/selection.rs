//! Selection operators
//!
//! This module provides roulette-wheel selection adapted for minimisation.

use rand::Rng;

use crate::error::OperatorError;
use crate::operators::traits::SelectionOperator;

/// Default guard added to fitness before taking its reciprocal
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Roulette wheel selection for minimisation
///
/// Each individual is weighted by `1 / (fitness + epsilon)`, so lower
/// fitness earns a larger slice of the wheel and invalid (infinite) fitness
/// earns none. A pick is drawn uniformly from `[0, W)` where `W` is the
/// total weight, and the first individual whose cumulative weight reaches
/// the pick wins. If rounding leaves the walk short of the pick, the last
/// individual is returned.
#[derive(Clone, Debug)]
pub struct RouletteSelection {
    /// Guard against division by zero
    pub epsilon: f64,
}

impl RouletteSelection {
    /// Create a new roulette selection with the default epsilon
    pub fn new() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }

    /// Create with a custom epsilon
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Selection weight of a single fitness value
    pub fn weight(&self, fitness: f64) -> f64 {
        1.0 / (fitness + self.epsilon)
    }

    /// Sum of all selection weights
    pub fn total_weight(&self, fitnesses: &[f64]) -> f64 {
        fitnesses.iter().map(|&f| self.weight(f)).sum()
    }
}

impl Default for RouletteSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionOperator for RouletteSelection {
    fn select<R: Rng>(&self, fitnesses: &[f64], rng: &mut R) -> Result<usize, OperatorError> {
        if fitnesses.is_empty() {
            return Err(OperatorError::SelectionFailed(
                "Population cannot be empty".to_string(),
            ));
        }

        let total = self.total_weight(fitnesses);
        let pick = total * rng.gen::<f64>();

        let mut cumulative = 0.0;
        for (idx, &fitness) in fitnesses.iter().enumerate() {
            cumulative += self.weight(fitness);
            if cumulative >= pick {
                return Ok(idx);
            }
        }

        Ok(fitnesses.len() - 1)
    }
}
