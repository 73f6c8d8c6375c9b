//! # climdex-calendar
//!
//! Day-of-year arithmetic for the fixed 365-day year used by every
//! climate index in the workspace. There is no leap day: February always
//! has 28 days and day index 364 is December 31.
//!
//! ```
//! use climdex_calendar::{Doy, Hemisphere};
//!
//! let july_first = Doy::from_month_day(7, 1).unwrap();
//! assert_eq!(july_first.index(), 181);
//! assert_eq!(Hemisphere::North.season_end_search_day(), july_first);
//! ```
//!
//! | Module | Description |
//! |--------|-------------|
//! | `doy` | 0-based day-of-year newtype and month tables |
//! | `hemisphere` | Hemisphere selector for growing-season rules |
//! | `error` | Error types |

mod doy;
mod error;
mod hemisphere;

pub use doy::{DAYS_PER_YEAR, Doy};
pub use error::CalendarError;
pub use hemisphere::Hemisphere;
