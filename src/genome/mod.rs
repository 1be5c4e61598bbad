//! Chromosome representation and encoding
//!
//! This module provides the binary `Chromosome`, the coordinate `Bounds` and
//! the mapping between them.

pub mod bounds;
pub mod chromosome;
pub mod encoding;

pub mod prelude {
    pub use super::bounds::*;
    pub use super::chromosome::*;
    pub use super::encoding::{decode, encode};
}
