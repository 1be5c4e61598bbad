//! Property-based tests for binga
//!
//! Uses proptest to verify invariants and properties of the library.

use binga::genome::encoding::{decode_segment, u64_to_segment};
use binga::prelude::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn chromosome_strategy(max_half: usize) -> impl Strategy<Value = Chromosome> {
    (1usize..=max_half)
        .prop_flat_map(|half| prop::collection::vec(any::<bool>(), half * 2))
        .prop_map(Chromosome::new)
}

fn is_binary_string(s: &str) -> bool {
    s.chars().all(|c| c == '0' || c == '1')
}

proptest! {
    // ==================== Decoding Properties ====================

    #[test]
    fn decode_is_deterministic(chromosome in chromosome_strategy(32)) {
        let bounds = Bounds::default();
        prop_assert_eq!(chromosome.decode(&bounds), chromosome.decode(&bounds));
    }

    #[test]
    fn decoded_values_within_bounds(
        chromosome in chromosome_strategy(32),
        min in -100.0f64..0.0,
        width in 0.1f64..200.0
    ) {
        let bounds = Bounds::new(min, min + width);
        let (x1, x2) = chromosome.decode(&bounds);
        let tolerance = 1e-9 * width.max(1.0);
        for x in [x1, x2] {
            prop_assert!(
                x >= bounds.min && x <= bounds.max + tolerance,
                "{} outside {:?}", x, bounds
            );
        }
    }

    #[test]
    fn decode_segment_is_monotonic(a in any::<u16>(), b in any::<u16>()) {
        let bounds = Bounds::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let x_lo = decode_segment(&u64_to_segment(lo as u64, 16), &bounds);
        let x_hi = decode_segment(&u64_to_segment(hi as u64, 16), &bounds);
        prop_assert!(x_lo <= x_hi);
    }

    #[test]
    fn decode_endpoints_hit_bounds(half in 1usize..=64) {
        let bounds = Bounds::new(-10.0, 10.0);
        prop_assert_eq!(Chromosome::zeros(half * 2).decode(&bounds), (-10.0, -10.0));
        prop_assert_eq!(Chromosome::ones(half * 2).decode(&bounds), (10.0, 10.0));
    }

    #[test]
    fn encode_lands_on_nearest_grid_point(x1 in -10.0f64..10.0, x2 in -10.0f64..10.0) {
        let bounds = Bounds::default();
        let chromosome = encode(x1, x2, &bounds, 32).unwrap();
        let (y1, y2) = chromosome.decode(&bounds);
        // grid spacing for 16 bits over a width of 20
        let step = 20.0 / 65535.0;
        prop_assert!((x1 - y1).abs() <= step / 2.0 + 1e-9);
        prop_assert!((x2 - y2).abs() <= step / 2.0 + 1e-9);
    }

    // ==================== Fitness Properties ====================

    #[test]
    fn fitness_is_total(x1 in prop::num::f64::ANY, x2 in prop::num::f64::ANY) {
        let f = TrigLandscape.fitness(x1, x2);
        prop_assert!(!f.is_nan());
        prop_assert!(is_valid(f) || f == INVALID_FITNESS);
    }

    #[test]
    fn fitness_of_any_chromosome_is_defined(chromosome in chromosome_strategy(32)) {
        let (_, _, f) = TrigLandscape.evaluate(&chromosome, &Bounds::default());
        prop_assert!(!f.is_nan());
    }

    // ==================== Selection Properties ====================

    #[test]
    fn roulette_index_in_range(
        fitnesses in prop::collection::vec(-5.0f64..50.0, 1..20),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let index = RouletteSelection::new().select(&fitnesses, &mut rng).unwrap();
        prop_assert!(index < fitnesses.len());
    }

    #[test]
    fn roulette_never_picks_zero_weight_when_others_exist(
        good in 0.0f64..10.0,
        position in 0usize..5,
        seed in any::<u64>()
    ) {
        let mut fitnesses = vec![INVALID_FITNESS; 5];
        fitnesses[position] = good;
        let mut rng = StdRng::seed_from_u64(seed);
        let index = RouletteSelection::new().select(&fitnesses, &mut rng).unwrap();
        prop_assert_eq!(index, position);
    }

    // ==================== Crossover Properties ====================

    #[test]
    fn crossover_never_recombines_at_zero_probability(
        pair in (1usize..=16).prop_flat_map(|half| (
            prop::collection::vec(any::<bool>(), half * 2),
            prop::collection::vec(any::<bool>(), half * 2),
        )),
        seed in any::<u64>()
    ) {
        let p1 = Chromosome::new(pair.0);
        let p2 = Chromosome::new(pair.1);
        let mut rng = StdRng::seed_from_u64(seed);
        let offspring = SinglePointCrossover::new(0.0)
            .unwrap()
            .crossover(&p1, &p2, &mut rng)
            .into_result()
            .unwrap();
        prop_assert_eq!(offspring.cut_point, None);
        prop_assert_eq!(offspring.first, p1);
        prop_assert_eq!(offspring.second, p2);
    }

    #[test]
    fn crossover_always_recombines_at_full_probability(
        pair in (1usize..=16).prop_flat_map(|half| (
            prop::collection::vec(any::<bool>(), half * 2),
            prop::collection::vec(any::<bool>(), half * 2),
        )),
        seed in any::<u64>()
    ) {
        let p1 = Chromosome::new(pair.0);
        let p2 = Chromosome::new(pair.1);
        let n = p1.len();
        let mut rng = StdRng::seed_from_u64(seed);
        let offspring = SinglePointCrossover::new(1.0)
            .unwrap()
            .crossover(&p1, &p2, &mut rng)
            .into_result()
            .unwrap();

        let k = offspring.cut_point.unwrap();
        prop_assert!(k >= 1 && k < n);
        prop_assert_eq!(&offspring.first.bits()[..k], &p1.bits()[..k]);
        prop_assert_eq!(&offspring.first.bits()[k..], &p2.bits()[k..]);
        prop_assert_eq!(&offspring.second.bits()[..k], &p2.bits()[..k]);
        prop_assert_eq!(&offspring.second.bits()[k..], &p1.bits()[k..]);
    }

    #[test]
    fn crossover_preserves_bits_per_position(
        pair in (1usize..=16).prop_flat_map(|half| (
            prop::collection::vec(any::<bool>(), half * 2),
            prop::collection::vec(any::<bool>(), half * 2),
        )),
        pc in 0.0f64..=1.0,
        seed in any::<u64>()
    ) {
        let p1 = Chromosome::new(pair.0);
        let p2 = Chromosome::new(pair.1);
        let mut rng = StdRng::seed_from_u64(seed);
        let offspring = SinglePointCrossover::new(pc)
            .unwrap()
            .crossover(&p1, &p2, &mut rng)
            .into_result()
            .unwrap();
        prop_assert_eq!(offspring.first.len(), p1.len());
        prop_assert_eq!(offspring.second.len(), p1.len());
        prop_assert_eq!(
            offspring.first.count_ones() + offspring.second.count_ones(),
            p1.count_ones() + p2.count_ones()
        );
    }

    // ==================== Mutation Properties ====================

    #[test]
    fn mutation_at_zero_is_identity(chromosome in chromosome_strategy(32), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mutated = BitFlipMutation::new(0.0).unwrap().mutate(&chromosome, &mut rng);
        prop_assert_eq!(mutated, chromosome);
    }

    #[test]
    fn mutation_at_one_is_complement(chromosome in chromosome_strategy(32), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mutated = BitFlipMutation::new(1.0).unwrap().mutate(&chromosome, &mut rng);
        prop_assert_eq!(mutated, chromosome.complement());
    }

    #[test]
    fn mutation_preserves_length_and_alphabet(
        chromosome in chromosome_strategy(32),
        pm in 0.0f64..=1.0,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mutated = BitFlipMutation::new(pm).unwrap().mutate(&chromosome, &mut rng);
        prop_assert_eq!(mutated.len(), chromosome.len());
        prop_assert!(is_binary_string(&mutated.to_string()));
    }

    // ==================== Chromosome Properties ====================

    #[test]
    fn chromosome_string_form(chromosome in chromosome_strategy(32)) {
        let text = chromosome.to_string();
        prop_assert_eq!(text.len(), chromosome.len());
        prop_assert!(is_binary_string(&text));
        prop_assert_eq!(text.parse::<Chromosome>().unwrap(), chromosome);
    }

    #[test]
    fn hamming_distance_to_complement_is_length(chromosome in chromosome_strategy(32)) {
        prop_assert_eq!(chromosome.hamming_distance(&chromosome.complement()), chromosome.len());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    // ==================== Algorithm Properties ====================

    #[test]
    fn run_preserves_population_shape(
        population_size in 2usize..12,
        half in 1usize..=16,
        max_generations in 0usize..8,
        pc in 0.0f64..=1.0,
        pm in 0.0f64..=0.2,
        seed in any::<u64>()
    ) {
        let ga = SimpleGA::builder()
            .population_size(population_size)
            .chromosome_length(half * 2)
            .max_generations(max_generations)
            .crossover_probability(pc)
            .mutation_probability(pm)
            .build()
            .unwrap();
        let result = ga.run_seeded(seed).unwrap();

        prop_assert_eq!(result.generations, max_generations);
        prop_assert_eq!(result.trace.len(), max_generations + 1);
        prop_assert_eq!(result.evaluations, population_size * (max_generations + 1));
        for generation in &result.trace {
            prop_assert_eq!(generation.population.len(), population_size);
            for record in &generation.population {
                prop_assert_eq!(record.chromosome.len(), half * 2);
                prop_assert!(is_binary_string(&record.chromosome.to_string()));
            }
        }
    }

    #[test]
    fn run_best_is_global_minimum(seed in any::<u64>()) {
        let ga = SimpleGA::builder().build().unwrap();
        let result = ga.run_seeded(seed).unwrap();

        let minimum = result
            .trace
            .iter()
            .flat_map(|g| g.population.iter().map(|r| r.fitness))
            .fold(INVALID_FITNESS, f64::min);
        prop_assert_eq!(result.best.fitness, minimum);

        let history = result.stats.best_so_far_history();
        for pair in history.windows(2) {
            prop_assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn run_is_reproducible(seed in any::<u64>()) {
        let ga = SimpleGA::builder().build().unwrap();
        let a = ga.run_seeded(seed).unwrap();
        let b = ga.run_seeded(seed).unwrap();
        prop_assert_eq!(a.best, b.best);
        prop_assert_eq!(a.final_population, b.final_population);
    }
}
