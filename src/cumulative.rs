use rand::Rng;

use crate::builder::normalize;
use crate::error::DistributionError;

/// Baseline sampler: prefix sums plus a binary search, O(log n) per draw.
///
/// Accepts and rejects exactly the same weights as
/// [`AliasTable`](crate::AliasTable).
#[derive(Debug, Clone)]
pub struct CumulativeSampler {
    probabilities: Vec<f64>,
    cumulative: Vec<f64>,
}

impl CumulativeSampler {
    pub fn new(weights: &[f64]) -> Result<Self, DistributionError> {
        let probabilities = normalize(weights)?;
        let cumulative = probabilities
            .iter()
            .scan(0.0f64, |acc, &p| {
                *acc += p;
                Some(*acc)
            })
            .collect();
        Ok(Self {
            probabilities,
            cumulative,
        })
    }

    /// Outcome whose cumulative interval holds `u ∈ [0, 1)`.
    pub fn index_for(&self, u: f64) -> Result<usize, DistributionError> {
        let n = self.cumulative.len();
        if n == 0 {
            return Err(DistributionError::EmptyDistribution);
        }
        // First prefix strictly above u; zero-mass outcomes share their
        // predecessor's prefix and are skipped. Rounding may leave the last
        // prefix below 1, hence the clamp.
        let i = self.cumulative.partition_point(|&c| c <= u);
        Ok(i.min(self.last_positive()))
    }

    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize, DistributionError> {
        if self.cumulative.is_empty() {
            return Err(DistributionError::EmptyDistribution);
        }
        self.index_for(rng.random())
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    fn last_positive(&self) -> usize {
        self.probabilities
            .iter()
            .rposition(|&p| p > 0.0)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_validation_as_alias() {
        assert!(matches!(
            CumulativeSampler::new(&[0.0]),
            Err(DistributionError::DegenerateDistribution)
        ));
        assert!(matches!(
            CumulativeSampler::new(&[1.0, -2.0]),
            Err(DistributionError::InvalidInput { index: 1, .. })
        ));
        let empty = CumulativeSampler::new(&[]).unwrap();
        assert_eq!(empty.index_for(0.3), Err(DistributionError::EmptyDistribution));
    }

    #[test]
    fn binary_search_picks_interval() {
        let s = CumulativeSampler::new(&[1.0, 0.0, 3.0, 0.0]).unwrap();
        assert_eq!(s.index_for(0.0), Ok(0));
        assert_eq!(s.index_for(0.2499), Ok(0));
        assert_eq!(s.index_for(0.25), Ok(2));
        assert_eq!(s.index_for(0.9999999), Ok(2));
    }
}
