//! Alias table for O(1) sampling from a fixed discrete distribution.

use std::io;

use rand::Rng;

use crate::bucket::Bucket;
use crate::builder;
use crate::error::DistributionError;

/// Immutable alias table: the normalized probabilities plus one [`Bucket`]
/// per outcome, in the order construction emitted them.
///
/// A table is `Send + Sync` and never changes after [`new`](Self::new), so
/// any number of samplers may read it concurrently.
#[derive(Debug, Clone)]
pub struct AliasTable {
    probabilities: Vec<f64>,
    buckets: Vec<Bucket>,
}

impl AliasTable {
    /// Construct an alias table from non-negative weights. O(n).
    ///
    /// An empty slice yields an empty table; sampling from it reports
    /// [`DistributionError::EmptyDistribution`].
    ///
    /// # Errors
    /// * [`DistributionError::InvalidInput`] if a weight is negative, NaN or infinite.
    /// * [`DistributionError::DegenerateDistribution`] if the weights sum to zero
    ///   (or overflow) while at least one is present.
    pub fn new(weights: &[f64]) -> Result<Self, DistributionError> {
        let built = builder::build(weights)?;
        Ok(Self {
            probabilities: built.probabilities,
            buckets: built.buckets,
        })
    }

    /// Like [`new`](Self::new) for any iterator of weights.
    pub fn from_weights<I>(weights: I) -> Result<Self, DistributionError>
    where
        I: IntoIterator<Item = f64>,
    {
        let weights: Vec<f64> = weights.into_iter().collect();
        Self::new(&weights)
    }

    /// Map a uniform draw `u ∈ [0, 1)` to an outcome.
    ///
    /// `u` is scaled by `N`; the integer part picks the bucket (clamped to
    /// `N - 1`) and the fractional part, in units of bucket width, is
    /// compared against the bucket's threshold scaled the same way.
    #[inline]
    pub fn index_for(&self, u: f64) -> Result<usize, DistributionError> {
        let n = self.buckets.len();
        if n == 0 {
            return Err(DistributionError::EmptyDistribution);
        }
        let scale = n as f64;
        let x = u * scale;
        let index = (x as usize).min(n - 1);
        let local = x - index as f64;
        Ok(self.buckets[index].pick(local, scale))
    }

    /// Draw a single sample in O(1).
    #[inline]
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, DistributionError> {
        if self.buckets.is_empty() {
            return Err(DistributionError::EmptyDistribution);
        }
        let u: f64 = rng.random();
        self.index_for(u)
    }

    /// Draw `draws` samples, returning counts per index.
    pub fn sample_counts<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        draws: usize,
    ) -> Result<Vec<usize>, DistributionError> {
        let mut counts = vec![0usize; self.len()];
        for _ in 0..draws {
            counts[self.sample_index(rng)?] += 1;
        }
        Ok(counts)
    }

    /// Normalized weights, `p[i] = w[i] / sum(w)`.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Buckets in emission order: mixed buckets first, then pure ones.
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Smallest outcome index the table can produce.
    pub const fn min_outcome(&self) -> usize {
        0
    }

    /// Largest outcome index the table can produce (`0` when empty).
    pub fn max_outcome(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// Write `buckets.len() = N` followed by `outcome_a outcome_b boundary`
    /// for every bucket.
    pub fn write_buckets<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        let n = self.len();
        writeln!(out, "buckets.len() = {n}")?;
        for (i, b) in self.buckets.iter().enumerate() {
            let boundary = if b.is_pure() { 0.0 } else { b.boundary(i, n) };
            writeln!(out, "{}  {}  {}", b.outcome_a, b.outcome_b, boundary)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
