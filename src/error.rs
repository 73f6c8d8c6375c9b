//! Error types for the climdex crate.

use climdex_grid::GridError;
use climdex_spell::SpellError;
use climdex_threshold::ThresholdError;

/// Error type for every index function.
///
/// Wraps the component errors and adds the per-year reduction failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClimdexError {
    /// Series shape error.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Threshold resolution error.
    #[error(transparent)]
    Threshold(#[from] ThresholdError),

    /// Spell index error.
    #[error(transparent)]
    Spell(#[from] SpellError),

    /// Returned when a year has no value to reduce and the empty-year
    /// policy is [`EmptyYearPolicy::Fail`](crate::EmptyYearPolicy::Fail).
    #[error("{index}: year {year} has no valid data")]
    EmptyYear {
        /// Index being computed.
        index: &'static str,
        /// 0-based year index.
        year: usize,
    },

    /// Returned when the index configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
