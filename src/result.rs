//! Output type shared by every index.

use serde::Serialize;

/// One value per year, aligned with the rows of the input series.
///
/// A year emitted under [`EmptyYearPolicy::Missing`](crate::EmptyYearPolicy::Missing)
/// holds `NaN` (serialized as JSON `null`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexResult {
    index: &'static str,
    values: Vec<f64>,
}

impl IndexResult {
    /// Creates a new `IndexResult`.
    pub(crate) fn new(index: &'static str, values: Vec<f64>) -> Self {
        Self { index, values }
    }

    /// Short name of the index (e.g. `"wsdi"`).
    pub fn index(&self) -> &'static str {
        self.index
    }

    /// Per-year values in chronological order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value for year `year`.
    pub fn get(&self, year: usize) -> Option<f64> {
        self.values.get(year).copied()
    }

    /// Number of years.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no years.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consumes the result, returning the per-year values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let result = IndexResult::new("cdd", vec![12.0, 30.0]);
        assert_eq!(result.index(), "cdd");
        assert_eq!(result.values(), &[12.0, 30.0]);
        assert_eq!(result.get(1), Some(30.0));
        assert_eq!(result.get(2), None);
        assert_eq!(result.len(), 2);
        assert!(!result.is_empty());
        assert_eq!(result.into_values(), vec![12.0, 30.0]);
    }

    #[test]
    fn test_serialize_missing_as_null() {
        let result = IndexResult::new("txx", vec![31.5, f64::NAN]);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"index":"txx","values":[31.5,null]}"#);
    }
}
