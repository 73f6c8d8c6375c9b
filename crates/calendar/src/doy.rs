//! Day-of-year newtype for the 365-day calendar.

use crate::error::CalendarError;

/// Number of days in every year of the index calendar.
pub const DAYS_PER_YEAR: usize = 365;

/// Number of days in each month (index 0 unused, index 1 = January).
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// 0-based day index on which each month starts (index 0 unused).
const MONTH_START: [u16; 13] = [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A 0-based day-of-year (0 = January 1, 364 = December 31).
///
/// This is the column index into one row of an annual grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Doy(u16);

impl Doy {
    /// January 1.
    pub const FIRST: Doy = Doy(0);

    /// July 1.
    pub(crate) const JULY_FIRST: Doy = Doy(MONTH_START[7]);

    /// Creates a `Doy` from a (month, day) pair.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12,
    /// or [`CalendarError::InvalidDay`] if `day` is not valid for `month`.
    pub fn from_month_day(month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = DAYS_PER_MONTH[month as usize];
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self(MONTH_START[month as usize] + u16::from(day) - 1))
    }

    /// Returns the 0-based index (0..=364), usable as a row offset.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_month_day_known_days() {
        assert_eq!(Doy::from_month_day(1, 1), Ok(Doy::FIRST));
        assert_eq!(Doy::from_month_day(2, 28).unwrap().index(), 58);
        assert_eq!(Doy::from_month_day(3, 1).unwrap().index(), 59);
        assert_eq!(Doy::from_month_day(12, 31).unwrap().index(), 364);
    }

    #[test]
    fn july_first_constant() {
        assert_eq!(Doy::from_month_day(7, 1), Ok(Doy::JULY_FIRST));
        assert_eq!(Doy::JULY_FIRST.index(), 181);
    }

    #[test]
    fn from_month_day_rejects_feb_29() {
        assert_eq!(
            Doy::from_month_day(2, 29).unwrap_err(),
            CalendarError::InvalidDay {
                day: 29,
                month: 2,
                max_day: 28,
            }
        );
    }

    #[test]
    fn from_month_day_rejects_month_zero() {
        assert_eq!(
            Doy::from_month_day(0, 1).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
    }

    #[test]
    fn month_tables_cover_the_year() {
        let total: usize = DAYS_PER_MONTH[1..].iter().map(|&d| usize::from(d)).sum();
        assert_eq!(total, DAYS_PER_YEAR);
        for m in 1..12usize {
            assert_eq!(
                MONTH_START[m] + u16::from(DAYS_PER_MONTH[m]),
                MONTH_START[m + 1],
                "month start mismatch at month {m}"
            );
        }
    }
}
