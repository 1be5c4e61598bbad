//! Individual wrapper type
//!
//! This module provides the Individual type that pairs a chromosome with its
//! decoded coordinates and fitness.

use serde::{Deserialize, Serialize};

use crate::fitness::traits::{Objective, INVALID_FITNESS};
use crate::genome::bounds::Bounds;
use crate::genome::chromosome::Chromosome;

/// An individual in the population
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    /// The chromosome of this individual
    pub chromosome: Chromosome,
    /// Decoded `(x1, x2)` (None if not yet evaluated)
    pub decoded: Option<(f64, f64)>,
    /// The fitness value (None if not yet evaluated)
    pub fitness: Option<f64>,
    /// Generation when this individual was created
    pub birth_generation: usize,
}

impl Individual {
    /// Create a new individual with an unevaluated chromosome
    pub fn new(chromosome: Chromosome) -> Self {
        Self::with_generation(chromosome, 0)
    }

    /// Create a new individual with birth generation
    pub fn with_generation(chromosome: Chromosome, generation: usize) -> Self {
        Self {
            chromosome,
            decoded: None,
            fitness: None,
            birth_generation: generation,
        }
    }

    /// Check if this individual has been evaluated
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Decode and score this individual
    pub fn evaluate<O: Objective + ?Sized>(&mut self, objective: &O, bounds: &Bounds) -> f64 {
        let (x1, x2, fitness) = objective.evaluate(&self.chromosome, bounds);
        self.decoded = Some((x1, x2));
        self.fitness = Some(fitness);
        fitness
    }

    /// Fitness, treating an unevaluated individual as invalid
    pub fn fitness_value(&self) -> f64 {
        self.fitness.unwrap_or(INVALID_FITNESS)
    }

    /// Check if this individual is strictly better (lower fitness) than another
    pub fn is_better_than(&self, other: &Self) -> bool {
        match (self.fitness, other.fitness) {
            (Some(f1), Some(f2)) => f1 < f2,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }
}
