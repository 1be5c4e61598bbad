//! Chromosome genome
//!
//! This module provides the fixed-length binary chromosome that encodes a
//! candidate `(x1, x2)` pair. Bits are stored most-significant first within
//! each half, so the textual form reads like the binary numbers it encodes.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenomeError;

/// Fixed-length binary chromosome
///
/// The first half of the bits encodes `x1`, the second half encodes `x2`.
/// A chromosome is never edited in place by the genetic operators; they
/// build new chromosomes instead.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Chromosome {
    bits: Vec<bool>,
}

impl Chromosome {
    /// Create a new chromosome with the given bits
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Create an all-zeros chromosome of the given length
    pub fn zeros(length: usize) -> Self {
        Self {
            bits: vec![false; length],
        }
    }

    /// Create an all-ones chromosome of the given length
    pub fn ones(length: usize) -> Self {
        Self {
            bits: vec![true; length],
        }
    }

    /// Create a chromosome whose bits are drawn independently and uniformly
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        let bits = (0..length).map(|_| rng.gen()).collect();
        Self { bits }
    }

    /// Get the length of the chromosome
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if the chromosome is empty
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Get a specific bit
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// The bits as a slice
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Split into the `x1` segment and the `x2` segment
    pub fn halves(&self) -> (&[bool], &[bool]) {
        self.bits.split_at(self.bits.len() / 2)
    }

    /// Get the complement (all bits flipped)
    pub fn complement(&self) -> Self {
        Self {
            bits: self.bits.iter().map(|b| !b).collect(),
        }
    }

    /// Join `self[..point]` with `other[point..]`
    pub fn splice(&self, other: &Self, point: usize) -> Result<Self, GenomeError> {
        if self.len() != other.len() {
            return Err(GenomeError::DimensionMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        let point = point.min(self.len());
        let mut bits = Vec::with_capacity(self.len());
        bits.extend_from_slice(&self.bits[..point]);
        bits.extend_from_slice(&other.bits[point..]);
        Ok(Self { bits })
    }

    /// Hamming distance to another chromosome
    pub fn hamming_distance(&self, other: &Self) -> usize {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Count the number of set bits
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

impl std::ops::Index<usize> for Chromosome {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        &self.bits[index]
    }
}

impl From<Vec<bool>> for Chromosome {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl From<Chromosome> for Vec<bool> {
    fn from(chromosome: Chromosome) -> Self {
        chromosome.bits
    }
}

impl<const N: usize> From<[bool; N]> for Chromosome {
    fn from(arr: [bool; N]) -> Self {
        Self { bits: arr.to_vec() }
    }
}

impl<'a> IntoIterator for &'a Chromosome {
    type Item = &'a bool;
    type IntoIter = std::slice::Iter<'a, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter()
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", if *bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl FromStr for Chromosome {
    type Err = GenomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = s
            .chars()
            .enumerate()
            .map(|(position, character)| match character {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(GenomeError::InvalidBit {
                    character,
                    position,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bits })
    }
}

impl From<Chromosome> for String {
    fn from(chromosome: Chromosome) -> Self {
        chromosome.to_string()
    }
}

impl TryFrom<String> for Chromosome {
    type Error = GenomeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
