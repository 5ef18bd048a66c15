//! Vose's alias method: partition probability mass into `N` buckets. O(n).

use tracing::{debug, trace};

use crate::bucket::Bucket;
use crate::error::DistributionError;

/// Output of [`build`]: the normalized weights and the buckets in emission order.
#[derive(Debug, Clone)]
pub(crate) struct Built {
    pub probabilities: Vec<f64>,
    pub buckets: Vec<Bucket>,
}

/// A not-yet-placed slice of one outcome's probability mass.
#[derive(Debug, Clone, Copy)]
struct Segment {
    mass: f64,
    index: usize,
}

/// Validate weights and divide each by their sum.
///
/// An empty slice normalizes to an empty vector.
pub(crate) fn normalize(weights: &[f64]) -> Result<Vec<f64>, DistributionError> {
    let mut sum = 0.0f64;
    for (index, &w) in weights.iter().enumerate() {
        // Rejects NaN as well; -0.0 passes.
        if !(w >= 0.0) || w.is_infinite() {
            return Err(DistributionError::InvalidInput { index, value: w });
        }
        sum += w;
    }
    if weights.is_empty() {
        return Ok(Vec::new());
    }
    if !sum.is_finite() || sum == 0.0 {
        return Err(DistributionError::DegenerateDistribution);
    }

    Ok(weights.iter().map(|&w| w / sum).collect())
}

/// Normalize `weights` and emit exactly `weights.len()` buckets.
///
/// Mixed buckets come first, in pairing order, followed by pure buckets
/// drained from the large worklist and then the small one.
pub(crate) fn build(weights: &[f64]) -> Result<Built, DistributionError> {
    let probabilities = normalize(weights)?;
    let buckets = create_buckets(&probabilities);
    Ok(Built {
        probabilities,
        buckets,
    })
}

fn create_buckets(probabilities: &[f64]) -> Vec<Bucket> {
    let n = probabilities.len();
    if n == 0 {
        return Vec::new();
    }
    let unit = 1.0 / n as f64;

    let mut small = Vec::with_capacity(n);
    let mut large = Vec::with_capacity(n);
    for (index, &mass) in probabilities.iter().enumerate() {
        let seg = Segment { mass, index };
        if mass < unit {
            small.push(seg);
        } else {
            large.push(seg);
        }
    }

    let mut buckets = Vec::with_capacity(n);

    while let (Some(s), Some(l)) = (small.last().copied(), large.last().copied()) {
        small.pop();
        large.pop();

        // Occupies [i/n, i/n + s.mass) of the unit interval; l gets the rest.
        buckets.push(Bucket::mixed(s.index, l.index, s.mass));

        let left_over = Segment {
            mass: s.mass + l.mass - unit,
            index: l.index,
        };
        if left_over.mass < unit {
            small.push(left_over);
        } else {
            large.push(left_over);
        }
    }
    let mixed = buckets.len();

    buckets.extend(large.iter().rev().map(|seg| Bucket::pure(seg.index)));

    // Only reachable through rounding error in the left-over arithmetic.
    if !small.is_empty() {
        debug!(
            residual = small.len(),
            "small worklist not exhausted, emitting pure buckets"
        );
    }
    buckets.extend(small.iter().rev().map(|seg| Bucket::pure(seg.index)));

    debug_assert_eq!(buckets.len(), n, "alias table must hold one bucket per outcome");
    trace!(n, mixed, pure = n - mixed, "built alias buckets");

    buckets
}
