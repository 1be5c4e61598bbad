//! Benchmark objectives
//!
//! This module provides the trigonometric landscape the GA is built around,
//! plus a convex bowl used to check convergence.

use crate::fitness::traits::Objective;

/// Trigonometric landscape:
/// `f(x1, x2) = -(sin(x1)·cos(x2)·tan(x1 + x2) + 0.75·exp(1 - |x1|))`
///
/// Non-convex with poles wherever `x1 + x2 = π/2 + kπ`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrigLandscape;

impl TrigLandscape {
    /// Create the landscape
    pub fn new() -> Self {
        Self
    }
}

impl Objective for TrigLandscape {
    fn name(&self) -> &'static str {
        "TrigLandscape"
    }

    fn evaluate_raw(&self, x1: f64, x2: f64) -> f64 {
        // sqrt(x1²) is |x1|; abs avoids overflowing the square for huge x1
        -(x1.sin() * x2.cos() * (x1 + x2).tan() + 0.75 * (1.0 - x1.abs()).exp())
    }
}

/// Sphere function in two variables: `f(x1, x2) = x1² + x2²`
///
/// Unimodal, convex. Optimum at the origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sphere2;

impl Sphere2 {
    /// Create the sphere
    pub fn new() -> Self {
        Self
    }
}

impl Objective for Sphere2 {
    fn name(&self) -> &'static str {
        "Sphere2"
    }

    fn evaluate_raw(&self, x1: f64, x2: f64) -> f64 {
        x1 * x1 + x2 * x2
    }
}
