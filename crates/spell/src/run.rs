//! Maximal runs of days satisfying a predicate.

use std::iter::FusedIterator;

/// A maximal span of consecutive qualifying days within one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    /// Day index of the first day in the run.
    pub start_day: usize,
    /// Number of days in the run (always > 0).
    pub length: usize,
}

impl Run {
    /// Creates a run.
    pub fn new(start_day: usize, length: usize) -> Self {
        Self { start_day, length }
    }

    /// Day index one past the last day of the run.
    pub fn end_day(&self) -> usize {
        self.start_day + self.length
    }
}

/// Lazy iterator over the runs of a row. Created by [`scan`] and
/// [`scan_from`].
///
/// A clone resumes from the same position; holds no state beyond the row.
/// Call [`scan`] again to rescan from the beginning.
#[derive(Debug, Clone)]
pub struct Runs<'a, P> {
    row: &'a [f64],
    pos: usize,
    predicate: P,
}

impl<P> Iterator for Runs<'_, P>
where
    P: Fn(f64) -> bool,
{
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let mut current = 0;
        while let Some(&value) = self.row.get(self.pos) {
            self.pos += 1;
            if (self.predicate)(value) {
                current += 1;
            } else if current > 0 {
                // `pos` already points one past the breaking day.
                return Some(Run::new(self.pos - 1 - current, current));
            }
        }
        // Trailing run open on the last day of the row.
        (current > 0).then(|| Run::new(self.row.len() - current, current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.row.len().saturating_sub(self.pos);
        (0, Some(remaining.div_ceil(2)))
    }
}

impl<P> FusedIterator for Runs<'_, P> where P: Fn(f64) -> bool {}

/// Scans `row` for maximal runs where `predicate` holds.
pub fn scan<P>(row: &[f64], predicate: P) -> Runs<'_, P>
where
    P: Fn(f64) -> bool,
{
    scan_from(row, 0, predicate)
}

/// Scans `row[from..]`, reporting runs with day indices relative to the
/// whole row. A run that began before `from` is seen starting at `from`.
pub fn scan_from<P>(row: &[f64], from: usize, predicate: P) -> Runs<'_, P>
where
    P: Fn(f64) -> bool,
{
    Runs {
        row,
        pos: from.min(row.len()),
        predicate,
    }
}
