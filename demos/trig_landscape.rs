//! Trigonometric Landscape Minimisation
//!
//! This demo runs the reference configuration of the binary GA on
//! `f(x1, x2) = -(sin x1 cos x2 tan(x1 + x2) + 0.75 exp(1 - |x1|))`
//! over `[-10, 10]²` and prints every generation of the trace.
//!
//! Pass a seed as the first argument to reproduce a run.

use binga::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    println!("=== Trigonometric Landscape Minimisation ===\n");

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u64>()?,
        None => 42,
    };

    let ga = SimpleGA::builder()
        .population_size(6)
        .chromosome_length(32)
        .max_generations(5)
        .crossover_probability(0.8)
        .mutation_probability(0.01)
        .domain(-10.0, 10.0)
        .build()?;

    let result = ga.run_seeded(seed)?;

    for generation in &result.trace {
        println!("Generation {}", generation.generation);
        for record in &generation.population {
            println!(
                "  [{}] {}  x1 = {:>10.6}  x2 = {:>10.6}  f = {:.6}",
                record.index, record.chromosome, record.x1, record.x2, record.fitness
            );
        }
        for step in &generation.breeding {
            let cut = step
                .cut_point
                .map_or_else(|| "none".to_string(), |k| k.to_string());
            println!(
                "  parents ({}, {})  cut = {}{}",
                step.parent_indices.0,
                step.parent_indices.1,
                cut,
                if step.second_child_kept { "" } else { "  (second child dropped)" }
            );
        }
        println!();
    }

    println!("Optimization complete!");
    println!("{}", result.summary());

    println!("\nBest-so-far per generation:");
    for (i, best) in result.stats.best_so_far_history().iter().enumerate() {
        println!("  Gen {:3}: {:.6}", i, best);
    }

    Ok(())
}
