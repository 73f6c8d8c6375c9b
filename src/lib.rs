//! # climdex
//!
//! ETCCDI climate extreme indices computed from a daily series of one
//! variable covering whole 365-day years (no leap days). Every index
//! returns one value per year.
//!
//! ## Architecture
//!
//! ```text
//!  daily series ──▶ AnnualGrid ──┬──▶ Reduction (mean, max, counts, ...)
//!                                │
//!  threshold / reference ──▶ ThresholdSource ──┤
//!                                │
//!                                └──▶ scan ──▶ spells (GSL, WSDI, CDD, ...)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use climdex::{IndexConfig, precip, tmax};
//!
//! let mut tmax_series = vec![20.0; 2 * 365];
//! tmax_series[100..110].fill(30.0);
//!
//! let config = IndexConfig::new();
//! let summer = tmax::su(&tmax_series, &config).unwrap();
//! assert_eq!(summer.values(), &[10.0, 0.0]);
//!
//! let reference: Vec<f64> = (1..=100).map(f64::from).collect();
//! let spells = tmax::wsdi(&tmax_series, Some(&reference[..]), &config).unwrap();
//! assert_eq!(spells.values(), &[0.0, 0.0]);
//!
//! let dry = precip::cdd(&vec![0.0; 365], &config).unwrap();
//! assert_eq!(dry.values(), &[365.0]);
//! ```
//!
//! ## Missing values
//!
//! `NaN` marks a missing day. Reductions skip it, comparisons against it
//! are false, and it breaks any spell it falls in. A year with nothing to
//! reduce is handled by [`EmptyYearPolicy`].
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `tmax` | Daily maximum temperature indices |
//! | `tmin` | Daily minimum temperature indices |
//! | `precip` | Daily precipitation indices |
//! | `logging` | Tracing subscriber setup |

mod config;
mod error;
mod reduction;
mod result;
mod spells;

pub mod logging;
pub mod precip;
pub mod tmax;
pub mod tmin;

pub use config::{EmptyYearPolicy, IndexConfig};
pub use error::ClimdexError;
pub use reduction::{Reduction, reduce};
pub use result::IndexResult;

pub use climdex_calendar::{DAYS_PER_YEAR, Doy, Hemisphere};
pub use climdex_grid::{AnnualGrid, GridError};
pub use climdex_spell::{Run, SeasonConfig, SeasonRule, SpellError, scan};
pub use climdex_threshold::{Comparison, ThresholdError, ThresholdSource, resolve};
