//! Annual grid over a daily climate series.
//!
//! A daily series covering whole 365-day years is viewed as
//! `n_years × 365` rows without copying. Every index in the workspace is
//! computed row by row on top of this view.
//!
//! # Quick start
//!
//! ```rust
//! use climdex_grid::AnnualGrid;
//!
//! let series = vec![1.0; 730];
//! let grid = AnnualGrid::new(&series).unwrap();
//! assert_eq!(grid.n_years(), 2);
//!
//! let sums: Result<Vec<f64>, std::convert::Infallible> =
//!     grid.try_map_years(|_, row| Ok(row.iter().sum()));
//! assert_eq!(sums.unwrap(), vec![365.0, 365.0]);
//! ```

mod error;
mod grid;

pub use climdex_calendar::DAYS_PER_YEAR;
pub use error::GridError;
pub use grid::AnnualGrid;
