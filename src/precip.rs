//! Indices on daily precipitation (mm/day).

use climdex_grid::AnnualGrid;
use climdex_threshold::{Comparison, resolve};

use crate::config::IndexConfig;
use crate::error::ClimdexError;
use crate::reduction::{Reduction, map_years, reduce, settle};
use crate::result::IndexResult;
use crate::spells::longest_run_index;

/// Minimum precipitation of a wet day for PRCPTOT and R95pTOT/R99pTOT.
pub const WET_DAY: f64 = 1.0;

/// Annual mean daily precipitation.
#[tracing::instrument(skip_all, fields(n_days = prcp.len()))]
pub fn prcp_mean(prcp: &[f64], config: &IndexConfig) -> Result<IndexResult, ClimdexError> {
    reduce("prcp_mean", prcp, Reduction::Mean, config)
}

/// PRCPTOT: annual total precipitation on wet days (`>= 1 mm`, overridable).
#[tracing::instrument(skip_all, fields(n_days = prcp.len()))]
pub fn prcptot(prcp: &[f64], config: &IndexConfig) -> Result<IndexResult, ClimdexError> {
    let threshold = config.threshold().unwrap_or(WET_DAY);
    reduce("prcptot", prcp, Reduction::SumWhere(Comparison::Ge, threshold), config)
}

/// Rx1day: annual maximum 1-day precipitation.
#[tracing::instrument(skip_all, fields(n_days = prcp.len()))]
pub fn rx1day(prcp: &[f64], config: &IndexConfig) -> Result<IndexResult, ClimdexError> {
    reduce("rx1day", prcp, Reduction::Max, config)
}

/// Rx5day: annual maximum of consecutive 5-day totals.
///
/// Windows stay inside one year and a window holding a missing day is
/// skipped. A year with no complete window is an empty year.
#[tracing::instrument(skip_all, fields(n_days = prcp.len()))]
pub fn rx5day(prcp: &[f64], config: &IndexConfig) -> Result<IndexResult, ClimdexError> {
    config.validate()?;
    let grid = AnnualGrid::new(prcp)?;
    let policy = config.empty_years();
    let values = map_years(&grid, config, |year, row| {
        let best = row
            .windows(5)
            .filter(|w| w.iter().all(|v| !v.is_nan()))
            .map(|w| w.iter().sum::<f64>())
            .reduce(f64::max);
        settle("rx5day", year, best, policy)
    })?;
    Ok(IndexResult::new("rx5day", values))
}

/// SDII: simple daily intensity, mean precipitation on days `> 0.01 mm`
/// (overridable). A year without such a day is an empty year.
#[tracing::instrument(skip_all, fields(n_days = prcp.len()))]
pub fn sdii(prcp: &[f64], config: &IndexConfig) -> Result<IndexResult, ClimdexError> {
    let threshold = config.threshold().unwrap_or(0.01);
    reduce("sdii", prcp, Reduction::MeanWhere(Comparison::Gt, threshold), config)
}

/// Rnnmm: days with precipitation `>= nn` mm. A threshold override in
/// `config` wins over `nn`.
#[tracing::instrument(skip_all, fields(n_days = prcp.len(), nn = nn))]
pub fn rnnmm(prcp: &[f64], nn: f64, config: &IndexConfig) -> Result<IndexResult, ClimdexError> {
    let threshold = config.threshold().unwrap_or(nn);
    reduce("rnnmm", prcp, Reduction::Count(Comparison::Ge, threshold), config)
}

/// R10mm: days with precipitation `>= 10 mm`.
pub fn r10mm(prcp: &[f64], config: &IndexConfig) -> Result<IndexResult, ClimdexError> {
    let threshold = config.threshold().unwrap_or(10.0);
    reduce("r10mm", prcp, Reduction::Count(Comparison::Ge, threshold), config)
}

/// R20mm: days with precipitation `>= 20 mm`.
pub fn r20mm(prcp: &[f64], config: &IndexConfig) -> Result<IndexResult, ClimdexError> {
    let threshold = config.threshold().unwrap_or(20.0);
    reduce("r20mm", prcp, Reduction::Count(Comparison::Ge, threshold), config)
}

/// CDD: longest run of days with precipitation `< 0.1 mm` (overridable).
#[tracing::instrument(skip_all, fields(n_days = prcp.len()))]
pub fn cdd(prcp: &[f64], config: &IndexConfig) -> Result<IndexResult, ClimdexError> {
    longest_run_index("cdd", prcp, 0.1, Comparison::Lt, config)
}

/// CWD: longest run of days with precipitation `> 0.1 mm` (overridable).
#[tracing::instrument(skip_all, fields(n_days = prcp.len()))]
pub fn cwd(prcp: &[f64], config: &IndexConfig) -> Result<IndexResult, ClimdexError> {
    longest_run_index("cwd", prcp, 0.1, Comparison::Gt, config)
}

/// R95pTOT: annual total on days above the 95th percentile of wet days in
/// `reference` (or `prcp` itself).
#[tracing::instrument(skip_all, fields(n_days = prcp.len()))]
pub fn r95ptot(
    prcp: &[f64],
    reference: Option<&[f64]>,
    config: &IndexConfig,
) -> Result<IndexResult, ClimdexError> {
    wet_percentile_total("r95ptot", prcp, reference, 95.0, config)
}

/// R99pTOT: annual total on days above the 99th percentile of wet days.
#[tracing::instrument(skip_all, fields(n_days = prcp.len()))]
pub fn r99ptot(
    prcp: &[f64],
    reference: Option<&[f64]>,
    config: &IndexConfig,
) -> Result<IndexResult, ClimdexError> {
    wet_percentile_total("r99ptot", prcp, reference, 99.0, config)
}

fn wet_percentile_total(
    index: &'static str,
    prcp: &[f64],
    reference: Option<&[f64]>,
    percentile: f64,
    config: &IndexConfig,
) -> Result<IndexResult, ClimdexError> {
    config.validate()?;
    let wet: Vec<f64> = reference
        .unwrap_or(prcp)
        .iter()
        .copied()
        .filter(|&v| v >= WET_DAY)
        .collect();
    let threshold = resolve(config.threshold(), Some(wet.as_slice()), percentile, prcp)?;
    reduce(index, prcp, Reduction::SumWhere(Comparison::Gt, threshold), config)
}
