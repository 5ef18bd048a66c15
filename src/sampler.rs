use std::sync::Arc;

use rand::Rng;

use crate::{IndexSampler, alias::AliasTable, cumulative::CumulativeSampler, error::DistributionError};

/// An [`AliasTable`] paired with its own source of uniform randomness.
///
/// The table sits behind an [`Arc`] so that samplers on different threads
/// can share it; the generator is owned and is not shared.
#[derive(Debug, Clone)]
pub struct Sampler<R> {
    table: Arc<AliasTable>,
    rng: R,
}

impl<R: Rng> Sampler<R> {
    pub fn new(table: Arc<AliasTable>, rng: R) -> Self {
        Self { table, rng }
    }

    /// Build a fresh table from `weights` and attach `rng` to it.
    ///
    /// # Errors
    /// See [`AliasTable::new`].
    pub fn from_weights(weights: &[f64], rng: R) -> Result<Self, DistributionError> {
        Ok(Self::new(Arc::new(AliasTable::new(weights)?), rng))
    }

    /// Draw one outcome index in `0..N`.
    ///
    /// # Errors
    /// [`DistributionError::EmptyDistribution`] if the table has no outcomes.
    #[inline]
    pub fn sample(&mut self) -> Result<usize, DistributionError> {
        self.table.sample_index(&mut self.rng)
    }

    /// Handle to the shared table, e.g. to build another sampler over it.
    pub fn table(&self) -> &Arc<AliasTable> {
        &self.table
    }

    pub fn probabilities(&self) -> &[f64] {
        self.table.probabilities()
    }

    /// Give back the generator.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

/// Endless stream of samples; empty tables yield nothing.
impl<R: Rng> Iterator for Sampler<R> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        self.sample().ok()
    }
}

impl IndexSampler for AliasTable {
    #[inline]
    fn len(&self) -> usize {
        // call the inherent method explicitly to avoid trait-recursion
        AliasTable::len(self)
    }
    #[inline]
    fn sample_index<G: Rng + ?Sized>(&self, rng: &mut G) -> Result<usize, DistributionError> {
        AliasTable::sample_index(self, rng)
    }
}

impl IndexSampler for CumulativeSampler {
    #[inline]
    fn len(&self) -> usize {
        CumulativeSampler::len(self)
    }
    #[inline]
    fn sample_index<G: Rng + ?Sized>(&self, rng: &mut G) -> Result<usize, DistributionError> {
        CumulativeSampler::sample_index(self, rng)
    }
}
