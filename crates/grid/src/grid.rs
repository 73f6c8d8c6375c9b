//! Year-major view over a daily series.

use rayon::prelude::*;
use tracing::debug;

use crate::DAYS_PER_YEAR;
use crate::error::GridError;

/// A daily series viewed as `n_years` rows of 365 days.
///
/// Row `i` is year `i` in input order; column `j` is day index `j`
/// (0 = January 1). Missing days are `NaN` and pass through untouched.
#[derive(Debug, Clone, Copy)]
pub struct AnnualGrid<'a> {
    values: &'a [f64],
    n_years: usize,
}

impl<'a> AnnualGrid<'a> {
    /// Validates `series` and builds the grid view.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Shape`] if the length is zero or not a multiple
    /// of 365 (trailing partial years are never truncated), or
    /// [`GridError::Infinite`] if any day holds `±∞`.
    pub fn new(series: &'a [f64]) -> Result<Self, GridError> {
        let len = series.len();
        if len == 0 || len % DAYS_PER_YEAR != 0 {
            return Err(GridError::Shape { len });
        }
        if let Some(index) = series.iter().position(|v| v.is_infinite()) {
            return Err(GridError::Infinite { index });
        }
        let n_years = len / DAYS_PER_YEAR;
        debug!(
            n_years,
            missing = series.iter().filter(|v| v.is_nan()).count(),
            "built annual grid"
        );
        Ok(Self { values: series, n_years })
    }

    /// Number of years (rows).
    pub fn n_years(&self) -> usize {
        self.n_years
    }

    /// The underlying flat series.
    pub fn values(&self) -> &'a [f64] {
        self.values
    }

    /// Row for year `year`, or `None` past the last year.
    pub fn year(&self, year: usize) -> Option<&'a [f64]> {
        if year >= self.n_years {
            return None;
        }
        let start = year * DAYS_PER_YEAR;
        Some(&self.values[start..start + DAYS_PER_YEAR])
    }

    /// Iterator over rows in chronological order.
    pub fn years(&self) -> impl ExactSizeIterator<Item = &'a [f64]> + use<'a> {
        self.values.chunks_exact(DAYS_PER_YEAR)
    }

    /// Applies `f(year, row)` to each row in order, stopping at the first
    /// error.
    pub fn try_map_years<T, E, F>(&self, f: F) -> Result<Vec<T>, E>
    where
        F: Fn(usize, &[f64]) -> Result<T, E>,
    {
        self.years().enumerate().map(|(i, row)| f(i, row)).collect()
    }

    /// Parallel variant of [`AnnualGrid::try_map_years`] on the rayon pool.
    ///
    /// Output order matches row order. If several years fail, which of
    /// their errors is returned is unspecified.
    pub fn par_try_map_years<T, E, F>(&self, f: F) -> Result<Vec<T>, E>
    where
        T: Send,
        E: Send,
        F: Fn(usize, &[f64]) -> Result<T, E> + Sync + Send,
    {
        self.values
            .par_chunks_exact(DAYS_PER_YEAR)
            .enumerate()
            .map(|(i, row)| f(i, row))
            .collect()
    }
}
