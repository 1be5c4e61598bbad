//! Population type
//!
//! This module provides the Population container type.

use rand::Rng;

use crate::fitness::traits::{is_valid, Objective};
use crate::genome::bounds::Bounds;
use crate::genome::chromosome::Chromosome;
use crate::population::individual::Individual;

/// A population of individuals
///
/// Order carries no ranking; it only keeps each chromosome paired with its
/// fitness within a generation.
#[derive(Clone, Debug, Default)]
pub struct Population {
    individuals: Vec<Individual>,
    generation: usize,
}

impl Population {
    /// Create an empty population
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a population with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
            generation: 0,
        }
    }

    /// Create a population from chromosomes
    pub fn from_chromosomes(chromosomes: Vec<Chromosome>) -> Self {
        Self {
            individuals: chromosomes.into_iter().map(Individual::new).collect(),
            generation: 0,
        }
    }

    /// Create a random population of `size` chromosomes of `length` bits
    pub fn random<R: Rng>(size: usize, length: usize, rng: &mut R) -> Self {
        let individuals = (0..size)
            .map(|_| Individual::new(Chromosome::random(length, rng)))
            .collect();
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Get the current generation
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Set the generation number
    pub fn set_generation(&mut self, generation: usize) {
        self.generation = generation;
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get an individual by index
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Add an individual to the population
    pub fn push(&mut self, individual: Individual) {
        self.individuals.push(individual);
    }

    /// Get an iterator over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Decode and score every unevaluated individual, returning how many
    /// evaluations were performed
    pub fn evaluate<O: Objective + ?Sized>(&mut self, objective: &O, bounds: &Bounds) -> usize {
        let mut count = 0;
        for individual in self.individuals.iter_mut().filter(|i| !i.is_evaluated()) {
            individual.evaluate(objective, bounds);
            count += 1;
        }
        count
    }

    /// Chromosomes and fitness values in population order, as consumed by
    /// selection
    pub fn as_selection_pool(&self) -> (Vec<Chromosome>, Vec<f64>) {
        self.individuals
            .iter()
            .map(|i| (i.chromosome.clone(), i.fitness_value()))
            .unzip()
    }

    /// Get the best (lowest fitness) individual, the earliest on ties
    pub fn best(&self) -> Option<&Individual> {
        self.individuals
            .iter()
            .filter(|i| i.is_evaluated())
            .fold(None, |best: Option<&Individual>, candidate| match best {
                Some(b) if !candidate.is_better_than(b) => Some(b),
                _ => Some(candidate),
            })
    }

    /// Get the worst individual with a valid fitness
    pub fn worst(&self) -> Option<&Individual> {
        self.individuals
            .iter()
            .filter(|i| i.is_evaluated() && is_valid(i.fitness_value()))
            .max_by(|a, b| {
                a.fitness_value()
                    .partial_cmp(&b.fitness_value())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// Number of evaluated individuals holding the invalid sentinel
    pub fn invalid_count(&self) -> usize {
        self.individuals
            .iter()
            .filter(|i| i.is_evaluated() && !is_valid(i.fitness_value()))
            .count()
    }

    /// Mean pairwise Hamming distance, normalised by chromosome length
    pub fn diversity(&self) -> f64 {
        let n = self.individuals.len();
        if n < 2 {
            return 0.0;
        }
        let length = self.individuals[0].chromosome.len().max(1) as f64;
        let mut total = 0.0;
        let mut pairs = 0usize;
        for i in 0..n {
            for j in (i + 1)..n {
                total += self.individuals[i]
                    .chromosome
                    .hamming_distance(&self.individuals[j].chromosome)
                    as f64;
                pairs += 1;
            }
        }
        total / (pairs as f64 * length)
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl IntoIterator for Population {
    type Item = Individual;
    type IntoIter = std::vec::IntoIter<Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.into_iter()
    }
}
