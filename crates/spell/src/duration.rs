//! Run-length aggregates: longest run and spell duration.

use crate::run::scan;

/// Length of the longest run where `predicate` holds, or 0 if none.
pub fn longest_run<P>(row: &[f64], predicate: P) -> usize
where
    P: Fn(f64) -> bool,
{
    scan(row, predicate).map(|r| r.length).max().unwrap_or(0)
}

/// Total days in runs strictly longer than `spell_duration`.
///
/// A run of exactly `spell_duration` days contributes nothing. A run still
/// open on the last day of the row is counted.
pub fn spell_duration_days<P>(row: &[f64], predicate: P, spell_duration: usize) -> usize
where
    P: Fn(f64) -> bool,
{
    scan(row, predicate)
        .filter(|r| r.length > spell_duration)
        .map(|r| r.length)
        .sum()
}
