//! The fixed-width unit an [`AliasTable`](crate::AliasTable) samples from.

/// One of the `N` equal-width slots of an alias table.
///
/// The bucket stored at position `i` covers `[i/N, (i+1)/N)` of the unit
/// interval. Its first `threshold` of width belongs to `outcome_a`, the
/// rest to `outcome_b`, so `threshold` always lies in `[0, 1/N]`.
///
/// A *pure* bucket has `outcome_a == outcome_b` and `threshold == 0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    pub outcome_a: usize,
    pub outcome_b: usize,
    pub threshold: f64,
}

impl Bucket {
    pub(crate) const fn mixed(outcome_a: usize, outcome_b: usize, threshold: f64) -> Self {
        Self {
            outcome_a,
            outcome_b,
            threshold,
        }
    }

    pub(crate) const fn pure(outcome: usize) -> Self {
        Self {
            outcome_a: outcome,
            outcome_b: outcome,
            threshold: 0.0,
        }
    }

    #[inline]
    pub fn is_pure(&self) -> bool {
        self.outcome_a == self.outcome_b
    }

    /// Absolute split point in `[0, 1)` for a bucket stored at `position`
    /// in a table of `n` buckets: `position/n + threshold`.
    #[inline]
    pub fn boundary(&self, position: usize, n: usize) -> f64 {
        self.threshold + position as f64 / n as f64
    }

    /// Outcome owning the bucket-local position `local ∈ [0, 1)`, measured
    /// in units of bucket width.
    #[inline]
    pub(crate) fn pick(&self, local: f64, n: f64) -> usize {
        if local < self.threshold * n {
            self.outcome_a
        } else {
            self.outcome_b
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}  {}  {}", self.outcome_a, self.outcome_b, self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_bucket_ignores_position() {
        let b = Bucket::pure(4);
        assert!(b.is_pure());
        assert_eq!(b.pick(0.0, 8.0), 4);
        assert_eq!(b.pick(0.999, 8.0), 4);
    }

    #[test]
    fn mixed_bucket_splits_at_threshold() {
        // Quarter of a bucket width in a 4-bucket table.
        let b = Bucket::mixed(1, 2, 0.0625);
        assert!(!b.is_pure());
        assert_eq!(b.pick(0.2, 4.0), 1);
        assert_eq!(b.pick(0.25, 4.0), 2);
        assert_eq!(b.pick(0.9, 4.0), 2);
        assert_eq!(b.boundary(3, 4), 0.8125);
        assert_eq!(b.to_string(), "1  2  0.0625");
    }

    #[test]
    fn zero_threshold_never_selects_low_outcome() {
        let b = Bucket::mixed(0, 1, 0.0);
        assert_eq!(b.pick(0.0, 3.0), 1);
    }
}
