//! Diagnostics, trace and results
//!
//! This module provides the per-generation trace consumed by reporting
//! shells, statistics collection, and the terminal result of a run.
//!
//! Non-finite fitness values (the invalid sentinel) serialize as JSON `null`.

use std::time::Duration;

use serde::Serialize;

use crate::error::EvoResult;
use crate::fitness::traits::is_valid;
use crate::genome::chromosome::Chromosome;
use crate::population::individual::Individual;
use crate::population::population::Population;

/// One population member as reported in the trace
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IndividualRecord {
    /// Position in the population
    pub index: usize,
    /// The chromosome
    pub chromosome: Chromosome,
    /// Decoded first coordinate
    pub x1: f64,
    /// Decoded second coordinate
    pub x2: f64,
    /// Fitness (lower is better)
    pub fitness: f64,
}

impl IndividualRecord {
    /// Build a record from an evaluated individual
    pub fn from_individual(index: usize, individual: &Individual) -> Self {
        let (x1, x2) = individual.decoded.unwrap_or((f64::NAN, f64::NAN));
        Self {
            index,
            chromosome: individual.chromosome.clone(),
            x1,
            x2,
            fitness: individual.fitness_value(),
        }
    }

    /// Records for every member of a population, in order
    pub fn from_population(population: &Population) -> Vec<Self> {
        population
            .iter()
            .enumerate()
            .map(|(i, ind)| Self::from_individual(i, ind))
            .collect()
    }
}

/// One breeding step: two parents in, up to two children out
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BreedingRecord {
    /// Population indices of the two parents
    pub parent_indices: (usize, usize),
    /// The two parents
    pub parents: (Chromosome, Chromosome),
    /// Crossover cut point, `None` when the parents were copied
    pub cut_point: Option<usize>,
    /// Children after crossover
    pub after_crossover: (Chromosome, Chromosome),
    /// Children after mutation
    pub after_mutation: (Chromosome, Chromosome),
    /// False when the second child was dropped to keep the population size
    pub second_child_kept: bool,
}

/// Everything observable about one generation
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerationTrace {
    /// Generation number (0 = initial population)
    pub generation: usize,
    /// Every member with decoded coordinates and fitness
    pub population: Vec<IndividualRecord>,
    /// Breeding steps that produced the next generation (empty for the last)
    pub breeding: Vec<BreedingRecord>,
}

impl GenerationTrace {
    /// Start a trace entry for an evaluated population
    pub fn new(population: &Population) -> Self {
        Self {
            generation: population.generation(),
            population: IndividualRecord::from_population(population),
            breeding: Vec::new(),
        }
    }
}

/// Statistics for a single generation
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerationStats {
    /// Generation number
    pub generation: usize,
    /// Total fitness evaluations so far
    pub evaluations: usize,
    /// Lowest fitness in this generation
    pub best_fitness: f64,
    /// Highest finite fitness in this generation
    pub worst_fitness: f64,
    /// Mean over finite fitness values
    pub mean_fitness: f64,
    /// Members with the invalid sentinel
    pub invalid_count: usize,
    /// Best-so-far fitness after this generation was evaluated
    pub best_so_far: f64,
    /// Population diversity
    pub diversity: f64,
}

impl GenerationStats {
    /// Compute statistics from an evaluated population
    pub fn from_population(population: &Population, evaluations: usize, best_so_far: f64) -> Self {
        let finite: Vec<f64> = population
            .iter()
            .filter_map(|i| i.fitness)
            .filter(|f| is_valid(*f))
            .collect();

        let best = population
            .best()
            .map_or(f64::INFINITY, |i| i.fitness_value());
        let worst = population
            .worst()
            .map_or(f64::INFINITY, |i| i.fitness_value());
        let mean = if finite.is_empty() {
            f64::INFINITY
        } else {
            finite.iter().sum::<f64>() / finite.len() as f64
        };

        Self {
            generation: population.generation(),
            evaluations,
            best_fitness: best,
            worst_fitness: worst,
            mean_fitness: mean,
            invalid_count: population.invalid_count(),
            best_so_far,
            diversity: population.diversity(),
        }
    }
}

/// Statistics collector for an entire evolution run
#[derive(Clone, Debug, Default, Serialize)]
pub struct EvolutionStats {
    /// Statistics per generation
    pub generations: Vec<GenerationStats>,
    /// Total runtime in milliseconds
    pub total_runtime_ms: f64,
}

impl EvolutionStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's statistics
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Get the number of generations recorded
    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    /// History of per-generation best fitness
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.best_fitness).collect()
    }

    /// History of best-so-far fitness; never increases
    pub fn best_so_far_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.best_so_far).collect()
    }

    /// History of mean fitness
    pub fn mean_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.mean_fitness).collect()
    }

    /// Set the total runtime
    pub fn set_runtime(&mut self, duration: Duration) {
        self.total_runtime_ms = duration.as_secs_f64() * 1000.0;
    }
}

/// The best chromosome found and its decoded values
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BestSolution {
    /// Best chromosome
    pub chromosome: Chromosome,
    /// Decoded first coordinate
    pub x1: f64,
    /// Decoded second coordinate
    pub x2: f64,
    /// Its fitness
    pub fitness: f64,
    /// Generation in which it was first evaluated
    pub generation: usize,
}

/// Result of an evolution run
#[derive(Clone, Debug, Serialize)]
pub struct EvolutionResult {
    /// Best solution seen in any generation
    pub best: BestSolution,
    /// The last (evaluated) population
    pub final_population: Vec<IndividualRecord>,
    /// Index of the last generation
    pub generations: usize,
    /// Total fitness evaluations
    pub evaluations: usize,
    /// Per-generation trace (empty when tracing was disabled)
    pub trace: Vec<GenerationTrace>,
    /// Statistics for the run
    pub stats: EvolutionStats,
}

impl EvolutionResult {
    /// Serialize the whole result as JSON
    pub fn to_json(&self) -> EvoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Short human-readable report of the terminal result
    pub fn summary(&self) -> String {
        format!(
            "Best chromosome : {}\n\
             x1              : {:.6}\n\
             x2              : {:.6}\n\
             Best fitness    : {:.6}\n\
             Generations     : {}\n\
             Evaluations     : {}\n\
             Runtime         : {:.2}ms",
            self.best.chromosome,
            self.best.x1,
            self.best.x2,
            self.best.fitness,
            self.generations,
            self.evaluations,
            self.stats.total_runtime_ms
        )
    }
}

pub mod prelude {
    pub use super::{
        BestSolution, BreedingRecord, EvolutionResult, EvolutionStats, GenerationStats,
        GenerationTrace, IndividualRecord,
    };
}
