//! Spell-based indices: the annual grid driven through `climdex_spell`.

use climdex_grid::AnnualGrid;
use climdex_spell::SeasonRule;
use climdex_threshold::{Comparison, resolve};

use crate::config::IndexConfig;
use crate::error::ClimdexError;
use crate::reduction::map_years;
use crate::result::IndexResult;

/// Days per year in spells longer than `config.spell_duration()` where
/// `value ⋄ pXX` holds, `pXX` resolved once for the whole series.
pub(crate) fn duration_index(
    index: &'static str,
    series: &[f64],
    reference: Option<&[f64]>,
    percentile: f64,
    cmp: Comparison,
    config: &IndexConfig,
) -> Result<IndexResult, ClimdexError> {
    config.validate()?;
    let grid = AnnualGrid::new(series)?;
    let threshold = resolve(config.threshold(), reference, percentile, series)?;
    let spell_duration = config.spell_duration();
    let predicate = cmp.against(threshold);
    let values = map_years(&grid, config, |_, row| {
        Ok(climdex_spell::spell_duration_days(row, predicate, spell_duration) as f64)
    })?;
    Ok(IndexResult::new(index, values))
}

/// Longest run per year where `value ⋄ threshold` holds; the threshold is
/// `default_threshold` unless overridden.
pub(crate) fn longest_run_index(
    index: &'static str,
    series: &[f64],
    default_threshold: f64,
    cmp: Comparison,
    config: &IndexConfig,
) -> Result<IndexResult, ClimdexError> {
    config.validate()?;
    let grid = AnnualGrid::new(series)?;
    let predicate = cmp.against(config.threshold().unwrap_or(default_threshold));
    let values = map_years(&grid, config, |_, row| {
        Ok(climdex_spell::longest_run(row, predicate) as f64)
    })?;
    Ok(IndexResult::new(index, values))
}

/// Growing season length per year. Unterminated seasons are always an
/// error, whatever the empty-year policy.
pub(crate) fn season_index(
    index: &'static str,
    series: &[f64],
    default_threshold: f64,
    config: &IndexConfig,
) -> Result<IndexResult, ClimdexError> {
    config.validate()?;
    let grid = AnnualGrid::new(series)?;
    let rule = SeasonRule::new(&config.season_config(default_threshold))?;
    let values = map_years(&grid, config, |year, row| Ok(rule.length(row, year)? as f64))?;
    Ok(IndexResult::new(index, values))
}
