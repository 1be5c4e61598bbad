//! Operator traits
//!
//! This module defines the core operator traits for the genetic algorithm.

use rand::Rng;

use crate::error::{OperatorError, OperatorResult};
use crate::genome::chromosome::Chromosome;

/// Selection operator trait
///
/// Picks parents from a population, given the fitness of each member.
pub trait SelectionOperator: Send + Sync {
    /// Select a single individual, returning its index
    fn select<R: Rng>(&self, fitnesses: &[f64], rng: &mut R) -> Result<usize, OperatorError>;

    /// Select a single individual, returning its index and chromosome
    fn select_from<'a, R: Rng>(
        &self,
        population: &'a [Chromosome],
        fitnesses: &[f64],
        rng: &mut R,
    ) -> Result<(usize, &'a Chromosome), OperatorError> {
        if population.len() != fitnesses.len() {
            return Err(OperatorError::SelectionFailed(format!(
                "{} chromosomes but {} fitness values",
                population.len(),
                fitnesses.len()
            )));
        }
        let index = self.select(fitnesses, rng)?;
        Ok((index, &population[index]))
    }

    /// Select multiple individuals with independent draws
    fn select_many<R: Rng>(
        &self,
        fitnesses: &[f64],
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>, OperatorError> {
        (0..count).map(|_| self.select(fitnesses, rng)).collect()
    }
}

/// Offspring of one crossover application
#[derive(Clone, Debug, PartialEq)]
pub struct Offspring {
    /// First child (prefix from the first parent)
    pub first: Chromosome,
    /// Second child (prefix from the second parent)
    pub second: Chromosome,
    /// Cut point used, or `None` when the parents were copied
    pub cut_point: Option<usize>,
}

impl Offspring {
    /// Offspring that are plain copies of the parents
    pub fn copies(parent1: &Chromosome, parent2: &Chromosome) -> Self {
        Self {
            first: parent1.clone(),
            second: parent2.clone(),
            cut_point: None,
        }
    }

    /// Whether recombination took place
    pub fn recombined(&self) -> bool {
        self.cut_point.is_some()
    }
}

/// Crossover operator trait
///
/// Combines genetic material from two parents to create two offspring.
pub trait CrossoverOperator: Send + Sync {
    /// Apply crossover to two parents
    fn crossover<R: Rng>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> OperatorResult<Offspring>;

    /// Get the probability of crossover being applied
    fn crossover_probability(&self) -> f64 {
        1.0
    }
}

/// Mutation operator trait
///
/// Produces a perturbed copy of a chromosome.
pub trait MutationOperator: Send + Sync {
    /// Return a mutated copy of `chromosome`
    fn mutate<R: Rng>(&self, chromosome: &Chromosome, rng: &mut R) -> Chromosome;

    /// Get the mutation probability per gene
    fn mutation_probability(&self) -> f64 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Uniform selection for exercising the provided methods
    struct MockSelection;

    impl SelectionOperator for MockSelection {
        fn select<R: Rng>(&self, fitnesses: &[f64], rng: &mut R) -> Result<usize, OperatorError> {
            Ok(rng.gen_range(0..fitnesses.len()))
        }
    }

    #[test]
    fn test_select_from_returns_matching_chromosome() {
        let mut rng = StdRng::seed_from_u64(1);
        let population = vec![Chromosome::zeros(4), Chromosome::ones(4)];
        let fitnesses = vec![1.0, 2.0];
        for _ in 0..20 {
            let (idx, chrom) = MockSelection
                .select_from(&population, &fitnesses, &mut rng)
                .unwrap();
            assert_eq!(chrom, &population[idx]);
        }
    }

    #[test]
    fn test_select_from_rejects_mismatched_lengths() {
        let mut rng = StdRng::seed_from_u64(1);
        let population = vec![Chromosome::zeros(4)];
        let result = MockSelection.select_from(&population, &[1.0, 2.0], &mut rng);
        assert!(matches!(result, Err(OperatorError::SelectionFailed(_))));
    }

    #[test]
    fn test_select_many() {
        let mut rng = StdRng::seed_from_u64(1);
        let indices = MockSelection
            .select_many(&[1.0, 2.0, 3.0], 5, &mut rng)
            .unwrap();
        assert_eq!(indices.len(), 5);
        assert!(indices.iter().all(|&i| i < 3));
    }

    #[test]
    fn test_offspring_copies() {
        let p1 = Chromosome::zeros(4);
        let p2 = Chromosome::ones(4);
        let offspring = Offspring::copies(&p1, &p2);
        assert!(!offspring.recombined());
        assert_eq!(offspring.first, p1);
        assert_eq!(offspring.second, p2);
    }
}
