//! Indices on daily maximum temperature.
//!
//! Every function takes the daily series starting on January 1 with no
//! leap days, a length that is a whole number of years, and returns one
//! value per year.

use climdex_threshold::Comparison;

use crate::config::IndexConfig;
use crate::error::ClimdexError;
use crate::reduction::{Reduction, percentile_count, reduce};
use crate::result::IndexResult;
use crate::spells::{duration_index, season_index};

/// Annual mean of daily maximum temperature.
#[tracing::instrument(skip_all, fields(n_days = tmax.len()))]
pub fn tx_mean(tmax: &[f64], config: &IndexConfig) -> Result<IndexResult, ClimdexError> {
    reduce("tx_mean", tmax, Reduction::Mean, config)
}

/// TXx: annual maximum of daily maximum temperature.
#[tracing::instrument(skip_all, fields(n_days = tmax.len()))]
pub fn txx(tmax: &[f64], config: &IndexConfig) -> Result<IndexResult, ClimdexError> {
    reduce("txx", tmax, Reduction::Max, config)
}

/// TXn: annual minimum of daily maximum temperature.
#[tracing::instrument(skip_all, fields(n_days = tmax.len()))]
pub fn txn(tmax: &[f64], config: &IndexConfig) -> Result<IndexResult, ClimdexError> {
    reduce("txn", tmax, Reduction::Min, config)
}

/// SU: summer days, `TX >= 25` (threshold overridable).
#[tracing::instrument(skip_all, fields(n_days = tmax.len()))]
pub fn su(tmax: &[f64], config: &IndexConfig) -> Result<IndexResult, ClimdexError> {
    let threshold = config.threshold().unwrap_or(25.0);
    reduce("su", tmax, Reduction::Count(Comparison::Ge, threshold), config)
}

/// ID: icing days, `TX <= 0` (threshold overridable).
#[tracing::instrument(skip_all, fields(n_days = tmax.len()))]
pub fn id(tmax: &[f64], config: &IndexConfig) -> Result<IndexResult, ClimdexError> {
    let threshold = config.threshold().unwrap_or(0.0);
    reduce("id", tmax, Reduction::Count(Comparison::Le, threshold), config)
}

/// GSL: growing season length, threshold 5 unless overridden.
///
/// The season starts with the first span of `num_days` days at or above
/// the threshold and ends with the first span of `num_days` days below it
/// on or after July 1 (north) or January 1 (south).
///
/// # Errors
///
/// Returns [`ClimdexError::Spell`] wrapping
/// [`SpellError::UnterminatedSeason`](climdex_spell::SpellError::UnterminatedSeason)
/// when a season starts but does not end within its year.
#[tracing::instrument(skip_all, fields(n_days = tmax.len(), hemisphere = ?config.hemisphere()))]
pub fn gsl(tmax: &[f64], config: &IndexConfig) -> Result<IndexResult, ClimdexError> {
    season_index("gsl", tmax, 5.0, config)
}

/// TX90p: days with `TX >=` the 90th percentile of `reference` (or of
/// `tmax` itself when no reference is given).
#[tracing::instrument(skip_all, fields(n_days = tmax.len()))]
pub fn tx90p(
    tmax: &[f64],
    reference: Option<&[f64]>,
    config: &IndexConfig,
) -> Result<IndexResult, ClimdexError> {
    percentile_count("tx90p", tmax, reference, 90.0, Comparison::Ge, config)
}

/// TX10p: days with `TX <=` the 10th percentile.
#[tracing::instrument(skip_all, fields(n_days = tmax.len()))]
pub fn tx10p(
    tmax: &[f64],
    reference: Option<&[f64]>,
    config: &IndexConfig,
) -> Result<IndexResult, ClimdexError> {
    percentile_count("tx10p", tmax, reference, 10.0, Comparison::Le, config)
}

/// WSDI: warm spell duration index. Days in runs of `TX >= p90` longer
/// than `spell_duration` (default 6) days.
#[tracing::instrument(skip_all, fields(n_days = tmax.len(), spell_duration = config.spell_duration()))]
pub fn wsdi(
    tmax: &[f64],
    reference: Option<&[f64]>,
    config: &IndexConfig,
) -> Result<IndexResult, ClimdexError> {
    duration_index("wsdi", tmax, reference, 90.0, Comparison::Ge, config)
}
