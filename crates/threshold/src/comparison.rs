//! Day-classification predicates against a threshold.

use std::fmt;

/// Comparison of a daily value against a resolved threshold.
///
/// A missing value (`NaN`) never satisfies any comparison, so it can
/// neither be counted nor extend a spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `value >= threshold`
    Ge,
    /// `value <= threshold`
    Le,
    /// `value > threshold`
    Gt,
    /// `value < threshold`
    Lt,
}

impl Comparison {
    /// Returns whether `value` satisfies the comparison.
    #[inline]
    pub fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::Ge => value >= threshold,
            Self::Le => value <= threshold,
            Self::Gt => value > threshold,
            Self::Lt => value < threshold,
        }
    }

    /// Returns a predicate closure bound to `threshold`.
    pub fn against(self, threshold: f64) -> impl Fn(f64) -> bool + Copy {
        move |v| self.holds(v, threshold)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Ge => ">=",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Lt => "<",
        };
        f.write_str(symbol)
    }
}
