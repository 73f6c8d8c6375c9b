//! Spell detection over one year of daily values.
//!
//! Every spell index shares the [`scan`] primitive, which yields the
//! maximal runs of consecutive days satisfying a predicate:
//!
//! ```text
//!  row ──scan(pred)──▶ Run, Run, ... ──┬─ longest_run            (CDD, CWD)
//!                                      ├─ spell_duration_days    (WSDI, CSDI)
//!                                      └─ growing_season_length  (GSL)
//! ```
//!
//! A run still open on the last day of the row is emitted, so a spell
//! ending on December 31 counts. Runs never cross year boundaries.
//!
//! # Quick start
//!
//! ```rust
//! use climdex_spell::{Run, scan};
//!
//! let row = [1.0, 3.0, 4.0, 0.0, 5.0];
//! let runs: Vec<Run> = scan(&row, |v| v > 2.0).collect();
//! assert_eq!(runs, vec![Run::new(1, 2), Run::new(4, 1)]);
//! ```

mod config;
mod duration;
mod error;
mod run;
mod season;

pub use config::SeasonConfig;
pub use duration::{longest_run, spell_duration_days};
pub use error::SpellError;
pub use run::{Run, Runs, scan, scan_from};
pub use season::{SeasonRule, growing_season_length};
