//! Simple Genetic Algorithm
//!
//! This module implements the generational binary GA: roulette selection,
//! single-point crossover and bit-flip mutation over a fixed number of
//! generations, with a best-so-far record kept outside the population.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::diagnostics::{
    BestSolution, BreedingRecord, EvolutionResult, EvolutionStats, GenerationStats,
    GenerationTrace, IndividualRecord,
};
use crate::error::{EvoResult, EvolutionError};
use crate::fitness::benchmarks::TrigLandscape;
use crate::fitness::traits::Objective;
use crate::genome::bounds::Bounds;
use crate::genome::chromosome::Chromosome;
use crate::genome::encoding::MAX_DECODE_BITS;
use crate::operators::crossover::SinglePointCrossover;
use crate::operators::mutation::BitFlipMutation;
use crate::operators::selection::RouletteSelection;
use crate::operators::traits::{CrossoverOperator, MutationOperator, SelectionOperator};
use crate::population::individual::Individual;
use crate::population::population::Population;

/// Re-draws allowed when looking for a second, distinct parent
pub const MAX_DISTINCT_REDRAWS: usize = 1_000;

/// Configuration for the Simple GA
///
/// Defaults reproduce the reference setup: 6 individuals of 32 bits over
/// `[-10, 10]`, 5 generations, `pc = 0.8`, `pm = 0.01`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleGAConfig {
    /// Population size
    pub population_size: usize,
    /// Bits per chromosome (two equal halves)
    pub chromosome_length: usize,
    /// Number of breeding rounds after the initial population
    pub max_generations: usize,
    /// Crossover probability
    pub crossover_probability: f64,
    /// Per-bit mutation probability
    pub mutation_probability: f64,
    /// Lower bound of both coordinates
    pub domain_min: f64,
    /// Upper bound of both coordinates
    pub domain_max: f64,
    /// Re-draw the second parent until it differs from the first
    pub require_distinct_parents: bool,
    /// Keep the full per-generation trace in the result
    pub record_trace: bool,
    /// Seed for [`SimpleGA::run_with_configured_seed`]
    pub seed: Option<u64>,
}

impl Default for SimpleGAConfig {
    fn default() -> Self {
        Self {
            population_size: 6,
            chromosome_length: 32,
            max_generations: 5,
            crossover_probability: 0.8,
            mutation_probability: 0.01,
            domain_min: -10.0,
            domain_max: 10.0,
            require_distinct_parents: true,
            record_trace: true,
            seed: None,
        }
    }
}

impl SimpleGAConfig {
    /// Load a configuration from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> EvoResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every parameter against its valid range
    pub fn validate(&self) -> EvoResult<()> {
        if self.population_size < 2 {
            return Err(EvolutionError::Configuration(format!(
                "population size must be at least 2, got {}",
                self.population_size
            )));
        }
        if self.chromosome_length < 2 || self.chromosome_length % 2 != 0 {
            return Err(EvolutionError::Configuration(format!(
                "chromosome length must be even and at least 2, got {}",
                self.chromosome_length
            )));
        }
        if self.chromosome_length > 2 * MAX_DECODE_BITS {
            return Err(EvolutionError::Configuration(format!(
                "chromosome length must be at most {}, got {}",
                2 * MAX_DECODE_BITS,
                self.chromosome_length
            )));
        }
        for (name, p) in [
            ("crossover", self.crossover_probability),
            ("mutation", self.mutation_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(EvolutionError::Configuration(format!(
                    "{} probability must be in [0, 1], got {}",
                    name, p
                )));
            }
        }
        if !(self.domain_max - self.domain_min).is_finite() {
            return Err(EvolutionError::Configuration(
                "domain bounds and their range must be finite".to_string(),
            ));
        }
        if self.domain_min >= self.domain_max {
            return Err(EvolutionError::Configuration(format!(
                "domain_min ({}) must be less than domain_max ({})",
                self.domain_min, self.domain_max
            )));
        }
        Ok(())
    }

    /// The coordinate bounds
    ///
    /// # Panics
    /// Panics if `domain_min > domain_max`; [`validate`](Self::validate)
    /// rejects such a configuration first.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.domain_min, self.domain_max)
    }
}

/// Builder for SimpleGA
pub struct SimpleGABuilder<O> {
    config: SimpleGAConfig,
    objective: O,
}

impl SimpleGABuilder<TrigLandscape> {
    /// Create a new builder with the default configuration and objective
    pub fn new() -> Self {
        Self {
            config: SimpleGAConfig::default(),
            objective: TrigLandscape::new(),
        }
    }
}

impl Default for SimpleGABuilder<TrigLandscape> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Objective> SimpleGABuilder<O> {
    /// Replace the whole configuration
    pub fn config(mut self, config: SimpleGAConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the population size
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set the chromosome length
    pub fn chromosome_length(mut self, length: usize) -> Self {
        self.config.chromosome_length = length;
        self
    }

    /// Set the number of generations
    pub fn max_generations(mut self, generations: usize) -> Self {
        self.config.max_generations = generations;
        self
    }

    /// Set the crossover probability
    pub fn crossover_probability(mut self, probability: f64) -> Self {
        self.config.crossover_probability = probability;
        self
    }

    /// Set the per-bit mutation probability
    pub fn mutation_probability(mut self, probability: f64) -> Self {
        self.config.mutation_probability = probability;
        self
    }

    /// Set the coordinate domain
    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.config.domain_min = min;
        self.config.domain_max = max;
        self
    }

    /// Require the two parents of a pair to be different individuals
    pub fn require_distinct_parents(mut self, enabled: bool) -> Self {
        self.config.require_distinct_parents = enabled;
        self
    }

    /// Enable or disable the per-generation trace
    pub fn record_trace(mut self, enabled: bool) -> Self {
        self.config.record_trace = enabled;
        self
    }

    /// Set the seed used by [`SimpleGA::run_with_configured_seed`]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the objective to minimise
    pub fn objective<NewO: Objective>(self, objective: NewO) -> SimpleGABuilder<NewO> {
        SimpleGABuilder {
            config: self.config,
            objective,
        }
    }

    /// Build the SimpleGA instance
    pub fn build(self) -> EvoResult<SimpleGA<O>> {
        SimpleGA::new(self.config, self.objective)
    }
}

/// Simple Genetic Algorithm
///
/// A generational GA without elitism: the best chromosome is remembered
/// but never re-injected into the breeding population.
pub struct SimpleGA<O> {
    config: SimpleGAConfig,
    bounds: Bounds,
    selection: RouletteSelection,
    crossover: SinglePointCrossover,
    mutation: BitFlipMutation,
    objective: O,
}

impl SimpleGA<TrigLandscape> {
    /// Create a builder for SimpleGA
    pub fn builder() -> SimpleGABuilder<TrigLandscape> {
        SimpleGABuilder::new()
    }
}

impl<O: Objective> SimpleGA<O> {
    /// Validate the configuration and assemble the operators
    pub fn new(config: SimpleGAConfig, objective: O) -> EvoResult<Self> {
        config.validate()?;
        Ok(Self {
            bounds: config.bounds(),
            selection: RouletteSelection::new(),
            crossover: SinglePointCrossover::new(config.crossover_probability)?,
            mutation: BitFlipMutation::new(config.mutation_probability)?,
            objective,
            config,
        })
    }

    /// The validated configuration
    pub fn config(&self) -> &SimpleGAConfig {
        &self.config
    }

    /// Run with a fresh `StdRng` seeded from `seed`
    pub fn run_seeded(&self, seed: u64) -> EvoResult<EvolutionResult> {
        self.run(&mut StdRng::seed_from_u64(seed))
    }

    /// Run with `config.seed`, or OS entropy when no seed is configured
    pub fn run_with_configured_seed(&self) -> EvoResult<EvolutionResult> {
        match self.config.seed {
            Some(seed) => self.run_seeded(seed),
            None => self.run(&mut StdRng::from_entropy()),
        }
    }

    /// Run the genetic algorithm
    pub fn run<R: Rng>(&self, rng: &mut R) -> EvoResult<EvolutionResult> {
        let start_time = Instant::now();
        info!(
            objective = self.objective.name(),
            population_size = self.config.population_size,
            chromosome_length = self.config.chromosome_length,
            max_generations = self.config.max_generations,
            crossover_probability = self.config.crossover_probability,
            mutation_probability = self.config.mutation_probability,
            "Starting genetic algorithm"
        );

        let mut population =
            Population::random(self.config.population_size, self.config.chromosome_length, rng);
        let mut evaluations = population.evaluate(&self.objective, &self.bounds);
        let mut best: Option<BestSolution> = None;
        let mut stats = EvolutionStats::new();
        let mut generation_traces = Vec::new();

        loop {
            update_best(&mut best, &population);
            let best_so_far = best
                .as_ref()
                .map(|b| b.fitness)
                .ok_or(EvolutionError::EmptyPopulation)?;

            let gen_stats = GenerationStats::from_population(&population, evaluations, best_so_far);
            debug!(
                generation = gen_stats.generation,
                best_fitness = gen_stats.best_fitness,
                mean_fitness = gen_stats.mean_fitness,
                invalid = gen_stats.invalid_count,
                best_so_far,
                "Generation evaluated"
            );
            stats.record(gen_stats);

            let mut generation_trace = self
                .config
                .record_trace
                .then(|| GenerationTrace::new(&population));

            if population.generation() >= self.config.max_generations {
                generation_traces.extend(generation_trace);
                break;
            }

            let breeding = generation_trace.as_mut().map(|t| &mut t.breeding);
            let mut next = self.breed(&population, rng, breeding)?;
            generation_traces.extend(generation_trace);

            next.set_generation(population.generation() + 1);
            evaluations += next.evaluate(&self.objective, &self.bounds);
            population = next;
        }

        stats.set_runtime(start_time.elapsed());
        let best = best.ok_or(EvolutionError::EmptyPopulation)?;
        info!(
            best_fitness = best.fitness,
            x1 = best.x1,
            x2 = best.x2,
            chromosome = %best.chromosome,
            evaluations,
            "Genetic algorithm finished"
        );

        Ok(EvolutionResult {
            best,
            final_population: IndividualRecord::from_population(&population),
            generations: population.generation(),
            evaluations,
            trace: generation_traces,
            stats,
        })
    }

    /// Breed a full next generation from an evaluated population
    fn breed<R: Rng>(
        &self,
        population: &Population,
        rng: &mut R,
        mut records: Option<&mut Vec<BreedingRecord>>,
    ) -> EvoResult<Population> {
        let size = self.config.population_size;
        let (chromosomes, fitnesses) = population.as_selection_pool();
        let birth = population.generation() + 1;
        let mut next = Population::with_capacity(size);

        while next.len() < size {
            let (idx1, idx2) = self.draw_parents(&chromosomes, &fitnesses, rng)?;
            let parent1 = &chromosomes[idx1];
            let parent2 = &chromosomes[idx2];

            let offspring = self.crossover.crossover(parent1, parent2, rng).into_result()?;
            let child1 = self.mutation.mutate(&offspring.first, rng);
            let child2 = self.mutation.mutate(&offspring.second, rng);
            trace!(
                parent1 = idx1,
                parent2 = idx2,
                cut_point = ?offspring.cut_point,
                child1 = %child1,
                child2 = %child2,
                "Bred pair"
            );

            let second_child_kept = next.len() + 1 < size;
            if let Some(records) = records.as_deref_mut() {
                records.push(BreedingRecord {
                    parent_indices: (idx1, idx2),
                    parents: (parent1.clone(), parent2.clone()),
                    cut_point: offspring.cut_point,
                    after_crossover: (offspring.first.clone(), offspring.second.clone()),
                    after_mutation: (child1.clone(), child2.clone()),
                    second_child_kept,
                });
            }

            next.push(Individual::with_generation(child1, birth));
            if second_child_kept {
                next.push(Individual::with_generation(child2, birth));
            }
        }

        Ok(next)
    }

    /// Draw two parent indices, honouring `require_distinct_parents`
    fn draw_parents<R: Rng>(
        &self,
        chromosomes: &[Chromosome],
        fitnesses: &[f64],
        rng: &mut R,
    ) -> EvoResult<(usize, usize)> {
        let (first, _) = self.selection.select_from(chromosomes, fitnesses, rng)?;
        let mut second = self.selection.select(fitnesses, rng)?;

        if self.config.require_distinct_parents {
            let mut redraws = 0;
            while second == first {
                if redraws == MAX_DISTINCT_REDRAWS {
                    let offset = rng.gen_range(1..fitnesses.len());
                    second = (first + offset) % fitnesses.len();
                    warn!(
                        first,
                        second,
                        redraws,
                        "Roulette kept drawing the same parent; picked the second uniformly"
                    );
                    break;
                }
                second = self.selection.select(fitnesses, rng)?;
                redraws += 1;
            }
        }

        Ok((first, second))
    }
}

/// Fold an evaluated population into the best-so-far record
///
/// Only a strictly lower fitness replaces the record, so the earliest of
/// equal candidates is kept. An empty record takes the first member even if
/// its fitness is invalid.
fn update_best(best: &mut Option<BestSolution>, population: &Population) {
    for individual in population.iter().filter(|i| i.is_evaluated()) {
        let fitness = individual.fitness_value();
        let replace = match best {
            Some(current) => fitness < current.fitness,
            None => true,
        };
        if replace {
            let (x1, x2) = individual.decoded.unwrap_or((f64::NAN, f64::NAN));
            *best = Some(BestSolution {
                chromosome: individual.chromosome.clone(),
                x1,
                x2,
                fitness,
                generation: population.generation(),
            });
        }
    }
}
