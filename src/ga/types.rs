//! Chromosome and population types.
//!
//! A [`Chromosome`] is a fixed-length bit string; a [`Population`] is an
//! ordered collection of chromosomes that all share the same length.
//! Fitness is the OneMax score: the number of set bits.

use super::error::GaError;
use rand::Rng;
use std::fmt;
use std::ops::Index;

/// A candidate solution: a fixed-length sequence of bits.
///
/// Bits are stored one per byte and are always `0` or `1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    bits: Vec<u8>,
}

impl Chromosome {
    /// Creates a chromosome from raw bits. Any non-zero value is a set bit.
    pub fn new(bits: Vec<u8>) -> Self {
        Self {
            bits: bits.into_iter().map(|b| u8::from(b != 0)).collect(),
        }
    }

    /// Creates a chromosome of `length` bits, each drawn uniformly from `{0, 1}`.
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        Self {
            bits: (0..length).map(|_| rng.random_range(0..2u8)).collect(),
        }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the chromosome has no bits.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bits of this chromosome.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// OneMax fitness: the number of set bits, in `[0, len]`.
    pub fn fitness(&self) -> usize {
        self.bits.iter().map(|&b| b as usize).sum()
    }

    /// Exchanges the suffixes `[point, len)` of `self` and `other` in place.
    ///
    /// # Panics
    /// Panics if the chromosomes differ in length or `point > len`.
    pub fn swap_suffix(&mut self, other: &mut Chromosome, point: usize) {
        assert_eq!(self.len(), other.len(), "chromosomes must have equal length");
        self.bits[point..].swap_with_slice(&mut other.bits[point..]);
    }

    /// XORs `mask` into the chromosome, flipping every bit where the mask is set.
    ///
    /// Returns the number of flipped bits.
    ///
    /// # Panics
    /// Panics if `mask` differs in length.
    pub fn flip(&mut self, mask: &[u8]) -> usize {
        assert_eq!(self.len(), mask.len(), "mask must match chromosome length");
        let mut flipped = 0;
        for (bit, &m) in self.bits.iter_mut().zip(mask) {
            let m = u8::from(m != 0);
            *bit ^= m;
            flipped += m as usize;
        }
        flipped
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.bits {
            write!(f, "{b}")?;
        }
        Ok(())
    }
}

/// An ordered collection of equal-length chromosomes.
///
/// Each generation produces a fresh `Population`; nothing is shared by
/// reference across generations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    chromosomes: Vec<Chromosome>,
}

impl Population {
    /// Builds a population, checking that every chromosome has the same length.
    pub fn from_chromosomes(chromosomes: Vec<Chromosome>) -> Result<Self, GaError> {
        if let Some(first) = chromosomes.first() {
            let expected = first.len();
            if let Some(bad) = chromosomes.iter().find(|c| c.len() != expected) {
                return Err(GaError::RaggedPopulation {
                    expected,
                    found: bad.len(),
                });
            }
        }
        Ok(Self { chromosomes })
    }

    /// Wraps chromosomes already known to share one length.
    pub(crate) fn from_vec_unchecked(chromosomes: Vec<Chromosome>) -> Self {
        Self { chromosomes }
    }

    /// Creates `size` random chromosomes of `length` bits each.
    ///
    /// Every bit is drawn independently and uniformly from `{0, 1}`.
    pub fn random<R: Rng>(size: usize, length: usize, rng: &mut R) -> Self {
        Self {
            chromosomes: (0..size).map(|_| Chromosome::random(length, rng)).collect(),
        }
    }

    /// Number of chromosomes.
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// Returns `true` if the population holds no chromosomes.
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// Length shared by every chromosome, or 0 for an empty population.
    pub fn chromosome_length(&self) -> usize {
        self.chromosomes.first().map_or(0, Chromosome::len)
    }

    /// Iterates over the chromosomes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Chromosome> {
        self.chromosomes.iter()
    }

    /// The chromosomes as a slice.
    pub fn as_slice(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Chromosome] {
        &mut self.chromosomes
    }

    /// Consumes the population, returning its chromosomes.
    pub fn into_chromosomes(self) -> Vec<Chromosome> {
        self.chromosomes
    }

    /// Fitness of every chromosome, in order.
    pub fn fitnesses(&self) -> Vec<usize> {
        self.chromosomes.iter().map(Chromosome::fitness).collect()
    }

    /// The fittest chromosome. The first one wins ties.
    pub fn best(&self) -> Option<&Chromosome> {
        self.chromosomes
            .iter()
            .rev()
            .max_by_key(|c| c.fitness())
    }
}

impl Index<usize> for Population {
    type Output = Chromosome;

    fn index(&self, index: usize) -> &Chromosome {
        &self.chromosomes[index]
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Chromosome;
    type IntoIter = std::slice::Iter<'a, Chromosome>;

    fn into_iter(self) -> Self::IntoIter {
        self.chromosomes.iter()
    }
}
