//! Indices on daily minimum temperature.

use climdex_threshold::Comparison;

use crate::config::IndexConfig;
use crate::error::ClimdexError;
use crate::reduction::{Reduction, percentile_count, reduce};
use crate::result::IndexResult;
use crate::spells::duration_index;

/// Annual mean of daily minimum temperature.
#[tracing::instrument(skip_all, fields(n_days = tmin.len()))]
pub fn tn_mean(tmin: &[f64], config: &IndexConfig) -> Result<IndexResult, ClimdexError> {
    reduce("tn_mean", tmin, Reduction::Mean, config)
}

/// TNx: annual maximum of daily minimum temperature.
#[tracing::instrument(skip_all, fields(n_days = tmin.len()))]
pub fn tnx(tmin: &[f64], config: &IndexConfig) -> Result<IndexResult, ClimdexError> {
    reduce("tnx", tmin, Reduction::Max, config)
}

/// TNn: annual minimum of daily minimum temperature.
#[tracing::instrument(skip_all, fields(n_days = tmin.len()))]
pub fn tnn(tmin: &[f64], config: &IndexConfig) -> Result<IndexResult, ClimdexError> {
    reduce("tnn", tmin, Reduction::Min, config)
}

/// TR: tropical nights, `TN > 20` (threshold overridable).
#[tracing::instrument(skip_all, fields(n_days = tmin.len()))]
pub fn tr(tmin: &[f64], config: &IndexConfig) -> Result<IndexResult, ClimdexError> {
    let threshold = config.threshold().unwrap_or(20.0);
    reduce("tr", tmin, Reduction::Count(Comparison::Gt, threshold), config)
}

/// FD: frost days, `TN < 0` (threshold overridable).
#[tracing::instrument(skip_all, fields(n_days = tmin.len()))]
pub fn fd(tmin: &[f64], config: &IndexConfig) -> Result<IndexResult, ClimdexError> {
    let threshold = config.threshold().unwrap_or(0.0);
    reduce("fd", tmin, Reduction::Count(Comparison::Lt, threshold), config)
}

/// TN90p: days with `TN >=` the 90th percentile.
#[tracing::instrument(skip_all, fields(n_days = tmin.len()))]
pub fn tn90p(
    tmin: &[f64],
    reference: Option<&[f64]>,
    config: &IndexConfig,
) -> Result<IndexResult, ClimdexError> {
    percentile_count("tn90p", tmin, reference, 90.0, Comparison::Ge, config)
}

/// TN10p: days with `TN <=` the 10th percentile.
#[tracing::instrument(skip_all, fields(n_days = tmin.len()))]
pub fn tn10p(
    tmin: &[f64],
    reference: Option<&[f64]>,
    config: &IndexConfig,
) -> Result<IndexResult, ClimdexError> {
    percentile_count("tn10p", tmin, reference, 10.0, Comparison::Le, config)
}

/// CSDI: cold spell duration index. Days in runs of `TN <= p10` longer
/// than `spell_duration` days.
#[tracing::instrument(skip_all, fields(n_days = tmin.len(), spell_duration = config.spell_duration()))]
pub fn csdi(
    tmin: &[f64],
    reference: Option<&[f64]>,
    config: &IndexConfig,
) -> Result<IndexResult, ClimdexError> {
    duration_index("csdi", tmin, reference, 10.0, Comparison::Le, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tr_strictly_above() {
        let mut tmin = vec![15.0; 365];
        tmin[150..160].fill(20.0);
        tmin[160..172].fill(22.5);
        assert_eq!(tr(&tmin, &IndexConfig::new()).unwrap().values(), &[12.0]);
    }

    #[test]
    fn test_fd() {
        let mut tmin = vec![4.0; 365];
        tmin[..20].fill(-1.0);
        tmin[20] = 0.0;
        assert_eq!(fd(&tmin, &IndexConfig::new()).unwrap().values(), &[20.0]);
    }

    #[test]
    fn test_csdi_open_at_year_end() {
        let reference: Vec<f64> = (1..=100).map(f64::from).collect();
        // p10 of 1..=100 is 10.9
        let mut tmin = vec![50.0; 2 * 365];
        tmin[355..365].fill(5.0);
        tmin[365..369].fill(5.0);
        let result = csdi(&tmin, Some(&reference[..]), &IndexConfig::new()).unwrap();
        assert_eq!(result.values(), &[10.0, 0.0]);
    }

    #[test]
    fn test_tn10p_threshold_override() {
        let mut tmin = vec![5.0; 365];
        tmin[..3].fill(-10.0);
        let config = IndexConfig::new().with_threshold(-5.0);
        assert_eq!(tn10p(&tmin, None, &config).unwrap().values(), &[3.0]);
    }

    #[test]
    fn test_tnx_tnn() {
        let mut tmin = vec![1.0; 365];
        tmin[100] = 18.0;
        tmin[300] = -22.0;
        assert_eq!(tnx(&tmin, &IndexConfig::new()).unwrap().values(), &[18.0]);
        assert_eq!(tnn(&tmin, &IndexConfig::new()).unwrap().values(), &[-22.0]);
        assert!(tn_mean(&tmin, &IndexConfig::new()).is_ok());
    }
}
