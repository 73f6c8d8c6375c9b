//! Error types for the climdex-threshold crate.

/// Error type for threshold resolution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThresholdError {
    /// Returned when the percentile population is empty after excluding
    /// missing values.
    #[error("percentile population is empty after excluding missing values")]
    EmptyPopulation,

    /// Returned when a percentile is non-finite or outside 0..=100.
    #[error("invalid percentile: {percentile} (must be within 0..=100)")]
    InvalidPercentile {
        /// The rejected percentile.
        percentile: f64,
    },

    /// Returned when a percentile population holds an infinite value.
    #[error("percentile population holds {value} at index {index}")]
    NonFinitePopulation {
        /// Position of the value in the population.
        index: usize,
        /// The rejected value.
        value: f64,
    },

    /// Returned when an explicit threshold is NaN or infinite.
    #[error("explicit threshold must be finite, got {value}")]
    NonFiniteThreshold {
        /// The rejected threshold.
        value: f64,
    },
}
