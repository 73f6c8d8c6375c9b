//! Per-year reductions over the annual grid.

use climdex_grid::AnnualGrid;
use climdex_threshold::{Comparison, resolve};
use tracing::debug;

use crate::config::{EmptyYearPolicy, IndexConfig};
use crate::error::ClimdexError;
use crate::result::IndexResult;

/// A reduction of one year's row to a single value.
///
/// Missing days are excluded from every reduction and never satisfy a
/// comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reduction {
    /// Mean of the valid days.
    Mean,
    /// Maximum of the valid days.
    Max,
    /// Minimum of the valid days.
    Min,
    /// Sum of the valid days (0 for an all-missing year).
    Sum,
    /// Number of days satisfying the comparison.
    Count(Comparison, f64),
    /// Mean of the days satisfying the comparison.
    MeanWhere(Comparison, f64),
    /// Sum of the days satisfying the comparison.
    SumWhere(Comparison, f64),
}

impl Reduction {
    /// Reduces one row. Returns `None` when the reduction has no value to
    /// report (no valid day for `Mean`/`Max`/`Min`, no selected day for
    /// `MeanWhere`). `Count`, `Sum` and `SumWhere` always have a value.
    pub fn apply(&self, row: &[f64]) -> Option<f64> {
        match *self {
            Self::Mean => climdex_stats::nan_mean(row),
            Self::Max => climdex_stats::nan_max(row),
            Self::Min => climdex_stats::nan_min(row),
            Self::Sum => Some(climdex_stats::nan_sum(row)),
            Self::Count(cmp, threshold) => {
                Some(row.iter().filter(|&&v| cmp.holds(v, threshold)).count() as f64)
            }
            Self::MeanWhere(cmp, threshold) => {
                let selected: Vec<f64> = select(row, cmp, threshold).collect();
                climdex_stats::nan_mean(&selected)
            }
            Self::SumWhere(cmp, threshold) => Some(select(row, cmp, threshold).sum()),
        }
    }
}

fn select(row: &[f64], cmp: Comparison, threshold: f64) -> impl Iterator<Item = f64> + '_ {
    row.iter().copied().filter(move |&v| cmp.holds(v, threshold))
}

/// Applies `f(year, row)` to every year of `grid`, sequentially or on the
/// rayon pool depending on [`IndexConfig::parallel`].
pub(crate) fn map_years<F>(
    grid: &AnnualGrid<'_>,
    config: &IndexConfig,
    f: F,
) -> Result<Vec<f64>, ClimdexError>
where
    F: Fn(usize, &[f64]) -> Result<f64, ClimdexError> + Sync + Send,
{
    if config.parallel() {
        grid.par_try_map_years(f)
    } else {
        grid.try_map_years(f)
    }
}

/// Resolves a reduction outcome against the empty-year policy.
pub(crate) fn settle(
    index: &'static str,
    year: usize,
    value: Option<f64>,
    policy: EmptyYearPolicy,
) -> Result<f64, ClimdexError> {
    match (value, policy) {
        (Some(v), _) => Ok(v),
        (None, EmptyYearPolicy::Fail) => Err(ClimdexError::EmptyYear { index, year }),
        (None, EmptyYearPolicy::Missing) => {
            debug!(index, year, "empty year emitted as missing");
            Ok(f64::NAN)
        }
    }
}

/// Computes `reduction` for every year of `series`.
///
/// # Errors
///
/// Returns [`ClimdexError::Grid`] for a malformed series,
/// [`ClimdexError::InvalidConfig`] for an invalid configuration, and
/// [`ClimdexError::EmptyYear`] for a year with no value under
/// [`EmptyYearPolicy::Fail`].
pub fn reduce(
    index: &'static str,
    series: &[f64],
    reduction: Reduction,
    config: &IndexConfig,
) -> Result<IndexResult, ClimdexError> {
    config.validate()?;
    let grid = AnnualGrid::new(series)?;
    let policy = config.empty_years();
    let values = map_years(&grid, config, |year, row| {
        settle(index, year, reduction.apply(row), policy)
    })?;
    Ok(IndexResult::new(index, values))
}

/// Number of days per year where `value ⋄ pXX` holds, `pXX` resolved once
/// from the threshold override, the reference series, or `series` itself.
pub(crate) fn percentile_count(
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
    let reduction = Reduction::Count(cmp, threshold);
    let values = map_years(&grid, config, |_, row| {
        Ok(reduction.apply(row).unwrap_or(0.0))
    })?;
    Ok(IndexResult::new(index, values))
}
