//! Error types for the climdex-spell crate.

/// Error type for spell indices.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpellError {
    /// Returned when a growing season starts but no qualifying end span is
    /// found in the same year.
    #[error("growing season in year {year} has no end")]
    UnterminatedSeason {
        /// 0-based year index.
        year: usize,
    },

    /// Returned when the season end precedes its start.
    #[error("growing season in year {year} ends on day {end} before it starts on day {start}")]
    NegativeSeason {
        /// 0-based year index.
        year: usize,
        /// Day index of the season start.
        start: usize,
        /// Day index of the season end.
        end: usize,
    },

    /// Returned when the configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
