//! Hemisphere selector for growing-season rules.

use serde::Deserialize;

use crate::doy::Doy;

/// Hemisphere of the station, which fixes where the growing-season end
/// search begins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    /// Season end searched on or after July 1 (day index 181).
    #[default]
    North,
    /// Season end searched from January 1 (day index 0).
    South,
}

impl Hemisphere {
    /// Returns the first day on which a season-ending span may start.
    pub fn season_end_search_day(self) -> Doy {
        match self {
            Self::North => Doy::JULY_FIRST,
            Self::South => Doy::FIRST,
        }
    }
}
