//! Threshold source selection and resolution.

use tracing::debug;

use crate::error::ThresholdError;

/// Where an index threshold comes from.
///
/// The three variants are mutually exclusive; [`ThresholdSource::select`]
/// encodes the precedence explicit > reference > self-derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdSource<'a> {
    /// A caller-supplied value, used unchanged.
    Explicit(f64),
    /// A percentile of a separate reference series.
    Reference {
        /// Population for the percentile.
        series: &'a [f64],
        /// Percentile in 0..=100.
        percentile: f64,
    },
    /// A percentile of the series the index is computed on.
    SelfDerived {
        /// Percentile in 0..=100.
        percentile: f64,
    },
}

impl<'a> ThresholdSource<'a> {
    /// Picks the resolution path. An explicit threshold wins and the
    /// reference and percentile are ignored; otherwise a reference series
    /// wins over the primary series.
    pub fn select(explicit: Option<f64>, reference: Option<&'a [f64]>, percentile: f64) -> Self {
        match (explicit, reference) {
            (Some(value), _) => Self::Explicit(value),
            (None, Some(series)) => Self::Reference { series, percentile },
            (None, None) => Self::SelfDerived { percentile },
        }
    }

    /// Short name of the path, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Explicit(_) => "explicit",
            Self::Reference { .. } => "reference",
            Self::SelfDerived { .. } => "self",
        }
    }

    /// Resolves the scalar threshold. `primary` is only read on the
    /// self-derived path.
    ///
    /// # Errors
    ///
    /// Returns [`ThresholdError::NonFiniteThreshold`] for a NaN or infinite
    /// explicit value, [`ThresholdError::InvalidPercentile`] for a percentile
    /// outside 0..=100, [`ThresholdError::NonFinitePopulation`] when the
    /// population holds ±∞, and [`ThresholdError::EmptyPopulation`] when the
    /// population has no non-missing value.
    pub fn resolve(&self, primary: &[f64]) -> Result<f64, ThresholdError> {
        let threshold = match *self {
            Self::Explicit(value) => {
                if !value.is_finite() {
                    return Err(ThresholdError::NonFiniteThreshold { value });
                }
                value
            }
            Self::Reference { series, percentile } => derive(series, percentile)?,
            Self::SelfDerived { percentile } => derive(primary, percentile)?,
        };
        debug!(source = self.kind(), threshold, "resolved threshold");
        Ok(threshold)
    }
}

fn derive(population: &[f64], percentile: f64) -> Result<f64, ThresholdError> {
    if !percentile.is_finite() || !(0.0..=100.0).contains(&percentile) {
        return Err(ThresholdError::InvalidPercentile { percentile });
    }
    if let Some(index) = population.iter().position(|v| v.is_infinite()) {
        return Err(ThresholdError::NonFinitePopulation {
            index,
            value: population[index],
        });
    }
    climdex_stats::percentile(population, percentile).ok_or(ThresholdError::EmptyPopulation)
}

/// Resolves a threshold from the optional explicit value, the optional
/// reference series, and the percentile, falling back to `primary`.
///
/// See [`ThresholdSource::select`] for the precedence rule.
///
/// # Errors
///
/// See [`ThresholdSource::resolve`].
pub fn resolve(
    explicit: Option<f64>,
    reference: Option<&[f64]>,
    percentile: f64,
    primary: &[f64],
) -> Result<f64, ThresholdError> {
    ThresholdSource::select(explicit, reference, percentile).resolve(primary)
}
