//! # binga
//!
//! A binary-encoded genetic algorithm for minimising two-variable objectives.
//!
//! Each candidate is a fixed-length bit string whose two halves encode `x1`
//! and `x2` over a shared interval. A generational loop of roulette-wheel
//! selection, single-point crossover and bit-flip mutation evolves the
//! population while the best chromosome ever evaluated is kept aside.
//!
//! ## Core Concepts
//!
//! - **Lower is better**: fitness is the objective value itself
//! - **Total fitness**: a non-finite objective value becomes the invalid sentinel
//!   (`+inf`), which roulette selection weights at zero
//! - **Observable runs**: every generation can be traced with decoded
//!   coordinates, parents, cut points and children
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use binga::prelude::*;
//!
//! let ga = SimpleGA::builder()
//!     .population_size(6)
//!     .chromosome_length(32)
//!     .max_generations(5)
//!     .build()?;
//!
//! let result = ga.run_seeded(42)?;
//! println!("{}", result.summary());
//! # Ok::<(), binga::error::EvolutionError>(())
//! ```

pub mod algorithms;
pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod operators;
pub mod population;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
}
