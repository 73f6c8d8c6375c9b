//! Growing season length.

use climdex_threshold::Comparison;
use tracing::trace;

use crate::config::SeasonConfig;
use crate::error::SpellError;
use crate::run::{scan, scan_from};

/// A validated growing-season rule, applied to one year at a time.
///
/// The season starts on the first day of the first span of at least
/// `num_days` days with `value >= threshold`. It ends on the first day of
/// the first span of at least `num_days` days with `value < threshold`
/// that starts no earlier than the hemisphere's search day (July 1 north,
/// January 1 south) and no earlier than the season start. The length is
/// `end - start`. A year with no season start has length 0.
///
/// Missing days satisfy neither predicate, so they break both spans.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonRule {
    threshold: f64,
    num_days: usize,
    search_day: usize,
}

impl SeasonRule {
    /// Builds a rule from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SpellError::InvalidConfig`] if the configuration is invalid.
    pub fn new(config: &SeasonConfig) -> Result<Self, SpellError> {
        config.validate()?;
        Ok(Self {
            threshold: config.threshold(),
            num_days: config.num_days(),
            search_day: config.hemisphere().season_end_search_day().index(),
        })
    }

    /// Growing season length of one year, in days.
    ///
    /// # Errors
    ///
    /// Returns [`SpellError::UnterminatedSeason`] if the season starts but
    /// never ends within the row.
    pub fn length(&self, row: &[f64], year: usize) -> Result<usize, SpellError> {
        let num_days = self.num_days;
        let threshold = self.threshold;

        let Some(start) =
            scan(row, Comparison::Ge.against(threshold)).find(|r| r.length >= num_days)
        else {
            trace!(year, "no growing season start");
            return Ok(0);
        };

        let search_from = self.search_day.max(start.start_day);
        let end = scan_from(row, search_from, Comparison::Lt.against(threshold))
            .find(|r| r.length >= num_days)
            .ok_or(SpellError::UnterminatedSeason { year })?;

        let length = end
            .start_day
            .checked_sub(start.start_day)
            .ok_or(SpellError::NegativeSeason {
                year,
                start: start.start_day,
                end: end.start_day,
            })?;
        trace!(year, start = start.start_day, end = end.start_day, length, "growing season");
        Ok(length)
    }
}

/// Growing season length of one year under `config`.
///
/// Validates `config` on every call; build a [`SeasonRule`] once to scan
/// many years.
///
/// # Errors
///
/// Returns [`SpellError::InvalidConfig`] if the configuration is invalid,
/// and [`SpellError::UnterminatedSeason`] if the season starts but never
/// ends within the row.
pub fn growing_season_length(
    row: &[f64],
    year: usize,
    config: &SeasonConfig,
) -> Result<usize, SpellError> {
    SeasonRule::new(config)?.length(row, year)
}
