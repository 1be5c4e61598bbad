//! Fitness traits
//!
//! This module defines the objective abstraction and the invalid-score
//! policy shared by every objective.

use crate::genome::bounds::Bounds;
use crate::genome::chromosome::Chromosome;

/// Score assigned to coordinate pairs where the objective is undefined
pub const INVALID_FITNESS: f64 = f64::INFINITY;

/// Two-variable objective to be minimised
pub trait Objective: Send + Sync {
    /// Name of the objective
    fn name(&self) -> &'static str;

    /// Raw objective value, which may be non-finite
    fn evaluate_raw(&self, x1: f64, x2: f64) -> f64;

    /// Fitness of `(x1, x2)`: the raw value, or [`INVALID_FITNESS`] when the
    /// raw value is NaN or infinite
    fn fitness(&self, x1: f64, x2: f64) -> f64 {
        sanitize(self.evaluate_raw(x1, x2))
    }

    /// Decode a chromosome and score it, returning `(x1, x2, fitness)`
    fn evaluate(&self, chromosome: &Chromosome, bounds: &Bounds) -> (f64, f64, f64) {
        let (x1, x2) = chromosome.decode(bounds);
        (x1, x2, self.fitness(x1, x2))
    }
}

/// Map any non-finite value onto [`INVALID_FITNESS`]
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        INVALID_FITNESS
    }
}

/// Whether a fitness value is a real score rather than the invalid sentinel
pub fn is_valid(fitness: f64) -> bool {
    fitness.is_finite()
}

impl<O: Objective + ?Sized> Objective for Box<O> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn evaluate_raw(&self, x1: f64, x2: f64) -> f64 {
        (**self).evaluate_raw(x1, x2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pole;

    impl Objective for Pole {
        fn name(&self) -> &'static str {
            "pole"
        }

        fn evaluate_raw(&self, x1: f64, _x2: f64) -> f64 {
            1.0 / x1
        }
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize(1.5), 1.5);
        assert_eq!(sanitize(f64::NAN), INVALID_FITNESS);
        assert_eq!(sanitize(f64::NEG_INFINITY), INVALID_FITNESS);
        assert_eq!(sanitize(f64::INFINITY), INVALID_FITNESS);
    }

    #[test]
    fn test_fitness_replaces_non_finite() {
        assert_eq!(Pole.fitness(0.0, 0.0), INVALID_FITNESS);
        assert_eq!(Pole.fitness(2.0, 0.0), 0.5);
    }

    #[test]
    fn test_evaluate_decodes_first() {
        let bounds = Bounds::new(1.0, 2.0);
        let (x1, x2, f) = Pole.evaluate(&Chromosome::ones(8), &bounds);
        assert_eq!((x1, x2), (2.0, 2.0));
        assert_eq!(f, 0.5);
    }

    #[test]
    fn test_boxed_objective() {
        let boxed: Box<dyn Objective> = Box::new(Pole);
        assert_eq!(boxed.name(), "pole");
        assert!(!is_valid(boxed.fitness(0.0, 1.0)));
    }
}
