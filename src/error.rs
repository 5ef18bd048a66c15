#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistributionError {
    /// A weight was negative, NaN or infinite.
    InvalidInput { index: usize, value: f64 },
    /// Weights sum to zero (or overflow) while at least one outcome exists.
    DegenerateDistribution,
    /// Sampling was attempted on a distribution with no outcomes.
    EmptyDistribution,
}

impl std::fmt::Display for DistributionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistributionError::InvalidInput { index, value } => {
                write!(
                    f,
                    "weights contain an invalid value at index {index}: {value}"
                )
            }
            DistributionError::DegenerateDistribution => {
                write!(f, "sum of weights is zero or not finite")
            }
            DistributionError::EmptyDistribution => {
                write!(f, "cannot sample from a distribution with no outcomes")
            }
        }
    }
}

impl std::error::Error for DistributionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = DistributionError::InvalidInput {
            index: 3,
            value: -1.5,
        };
        assert_eq!(
            err.to_string(),
            "weights contain an invalid value at index 3: -1.5"
        );
        assert!(
            DistributionError::EmptyDistribution
                .to_string()
                .contains("no outcomes")
        );
    }
}
