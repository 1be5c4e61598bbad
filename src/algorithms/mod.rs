//! Evolutionary algorithms
//!
//! This module provides the generational binary GA.

pub mod simple_ga;

pub mod prelude {
    pub use super::simple_ga::*;
}
