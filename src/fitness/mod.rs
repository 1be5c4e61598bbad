//! Fitness evaluation and benchmarks
//!
//! This module provides the objective abstraction and benchmark landscapes.

pub mod benchmarks;
pub mod traits;

pub mod prelude {
    pub use super::benchmarks::*;
    pub use super::traits::*;
}
