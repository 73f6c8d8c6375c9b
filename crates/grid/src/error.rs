//! Error types for the climdex-grid crate.

/// Error type for annual grid construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Returned when the series length is zero or not a multiple of 365.
    #[error("series length {len} is not a positive multiple of 365")]
    Shape {
        /// Length of the rejected series.
        len: usize,
    },

    /// Returned when the series holds an infinite value. `NaN` is the
    /// only accepted non-finite value (the missing marker).
    #[error("infinite value at day {index}")]
    Infinite {
        /// Flat index of the offending day.
        index: usize,
    },
}
