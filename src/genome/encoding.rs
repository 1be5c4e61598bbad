//! Chromosome ⇄ coordinate mapping
//!
//! Each half of a chromosome is read as an unsigned binary integer `n` of
//! `h` bits and mapped affinely onto the shared bounds:
//!
//! ```text
//! value = min + (max - min) * n / (2^h - 1)
//! ```

use crate::error::GenomeError;
use crate::genome::bounds::Bounds;
use crate::genome::chromosome::Chromosome;

/// Largest half length [`encode`] can represent exactly
pub const MAX_SEGMENT_BITS: usize = 64;

/// Largest half length [`decode`] accepts; keeps `2^h` and `range * n` finite
pub const MAX_DECODE_BITS: usize = (f64::MAX_EXP / 2) as usize;

/// Decode a chromosome into its `(x1, x2)` pair
pub fn decode(chromosome: &Chromosome, bounds: &Bounds) -> (f64, f64) {
    let (x1_bits, x2_bits) = chromosome.halves();
    (decode_segment(x1_bits, bounds), decode_segment(x2_bits, bounds))
}

/// Decode a single gene segment into a coordinate
pub fn decode_segment(bits: &[bool], bounds: &Bounds) -> f64 {
    if bits.is_empty() {
        return bounds.min;
    }
    let value = bits
        .iter()
        .fold(0.0_f64, |acc, &bit| acc * 2.0 + if bit { 1.0 } else { 0.0 });
    let max_value = 2.0_f64.powi(bits.len() as i32) - 1.0;
    if value >= max_value {
        return bounds.max;
    }
    bounds.min + bounds.range() * value / max_value
}

/// Write `value` as a big-endian segment of `length` bits
pub fn u64_to_segment(value: u64, length: usize) -> Vec<bool> {
    (0..length)
        .rev()
        .map(|shift| shift < 64 && (value >> shift) & 1 == 1)
        .collect()
}

fn max_segment_value(length: usize) -> u64 {
    if length == 0 {
        0
    } else {
        u64::MAX >> (64 - length)
    }
}

/// Encode `(x1, x2)` onto the nearest grid point of a `length`-bit chromosome
///
/// Coordinates outside the bounds are clamped first.
pub fn encode(x1: f64, x2: f64, bounds: &Bounds, length: usize) -> Result<Chromosome, GenomeError> {
    if length == 0 || length % 2 != 0 {
        return Err(GenomeError::InvalidStructure(format!(
            "chromosome length must be even and positive, got {}",
            length
        )));
    }
    let half = length / 2;
    if half > MAX_SEGMENT_BITS {
        return Err(GenomeError::InvalidStructure(format!(
            "segments longer than {} bits cannot be encoded",
            MAX_SEGMENT_BITS
        )));
    }

    let max_value = max_segment_value(half);
    let to_segment = |x: f64| {
        let t = bounds.normalize(bounds.clamp(x));
        let n = (t * max_value as f64).round();
        let n = if n >= max_value as f64 {
            max_value
        } else {
            n.max(0.0) as u64
        };
        u64_to_segment(n, half)
    };

    let mut bits = to_segment(x1);
    bits.extend(to_segment(x2));
    Ok(Chromosome::new(bits))
}

impl Chromosome {
    /// Decode into `(x1, x2)` using the given bounds
    pub fn decode(&self, bounds: &Bounds) -> (f64, f64) {
        decode(self, bounds)
    }
}
