//! # fastdiscrete
//!
//! Constant-time sampling from a fixed discrete distribution.
//!
//! Given `N` non-negative (possibly unnormalized) weights, this crate builds
//! an alias table with
//! [Vose's alias method](https://en.wikipedia.org/wiki/Alias_method):
//! the unit interval is cut into `N` equal-width [`Bucket`]s, each shared by
//! at most two outcomes. A draw then costs one uniform random number, one
//! array lookup and one comparison.
//!
//! ## Quick start
//!
//! ```rust
//! use fastdiscrete::Sampler;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! # fn main() -> Result<(), fastdiscrete::DistributionError> {
//! let mut sampler = Sampler::from_weights(&[20.0, 10.0, 30.0], StdRng::seed_from_u64(7))?;
//! let outcome = sampler.sample()?; // 0, 1 or 2
//! assert!(outcome < 3);
//! assert_eq!(sampler.probabilities().len(), 3);
//! # Ok(()) }
//! ```
//!
//! ## Labeled outcomes
//!
//! ```rust
//! use fastdiscrete::LabeledDistribution;
//!
//! # fn main() -> Result<(), fastdiscrete::DistributionError> {
//! let dist = LabeledDistribution::from_pairs([
//!     ("heads", 1.0),
//!     ("tails", 1.0),
//!     ("edge", 0.0),
//! ])?;
//! let mut rng = rand::rng();
//! let side = dist.sample(&mut rng)?; // &&str, never "edge"
//! assert_ne!(*side, "edge");
//! # Ok(()) }
//! ```
//!
//! ## Performance
//! * **Build**: O(n) time and space.
//! * **Sample**: O(1) per draw (1 random number, 1 branch).
//! * **Space**: `n` probabilities plus `n` buckets of two indices and an `f64`.
//!
//! ## Gotchas
//! * Weights must be finite and non-negative, and not all zero.
//! * An empty weight list is accepted; every draw from it reports
//!   [`DistributionError::EmptyDistribution`].
//! * Tables are immutable. To change weights, build a new one.
//!
//! ---
//!
//! `rand` integration uses the modern `Rng::random()` API.

mod alias;
mod bucket;
mod builder;
mod cumulative;
mod error;
mod sampler;

/// A minimal interface for "index samplers".
/// Implemented by `AliasTable` (O(1)) and `CumulativeSampler` (O(log n)).
#[allow(clippy::len_without_is_empty)]
pub trait IndexSampler {
    fn len(&self) -> usize;
    fn sample_index<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, DistributionError>;
}

pub use alias::AliasTable;
pub use bucket::Bucket;
pub use cumulative::CumulativeSampler;
pub use error::DistributionError;
pub use sampler::Sampler;

use rand::Rng;

/// Associates labels with weights and samples labels using an internal
/// [`AliasTable`].
///
/// Build it from any iterator of `(label, weight)` where `weight >= 0`.
#[derive(Debug, Clone)]
pub struct LabeledDistribution<T> {
    table: AliasTable,
    labels: Vec<T>,
}

impl<T> LabeledDistribution<T> {
    /// Build from any `(label, weight)` iterator.
    ///
    /// # Errors
    /// * [`DistributionError::InvalidInput`] if any weight is negative or not finite.
    /// * [`DistributionError::DegenerateDistribution`] if the weights sum to zero.
    ///
    /// # Complexity
    /// O(n) time / O(n) space.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, DistributionError>
    where
        I: IntoIterator<Item = (T, f64)>,
    {
        let (labels, weights): (Vec<T>, Vec<f64>) = pairs.into_iter().unzip();
        let table = AliasTable::new(&weights)?;
        Ok(Self { table, labels })
    }

    /// Sample a label **by reference** (no `Clone` bound).
    pub fn sample<'a, R: Rng + ?Sized>(&'a self, rng: &mut R) -> Result<&'a T, DistributionError> {
        let idx = self.table.sample_index(rng)?;
        Ok(&self.labels[idx])
    }

    /// Sample a label **by value** (clones the chosen element).
    ///
    /// Prefer [`sample`](Self::sample) if you don't need ownership.
    pub fn sample_owned<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<T, DistributionError>
    where
        T: Clone,
    {
        self.sample(rng).cloned()
    }

    /// Normalized probability of the label at `index`, if any.
    pub fn probability_of(&self, index: usize) -> Option<f64> {
        self.table.probabilities().get(index).copied()
    }

    pub fn labels(&self) -> &[T] {
        &self.labels
    }

    pub fn table(&self) -> &AliasTable {
        &self.table
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
