//! Index configuration.

use climdex_calendar::Hemisphere;
use climdex_spell::SeasonConfig;
use serde::Deserialize;

use crate::error::ClimdexError;

/// What to emit for a year with nothing to reduce (all days missing, or
/// no day selected for a conditional mean).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyYearPolicy {
    /// Abort the whole index with [`ClimdexError::EmptyYear`].
    #[default]
    Fail,
    /// Emit `NaN` for that year and continue.
    Missing,
}

/// Options shared by every index function.
///
/// Each option is read only by the indices it applies to; the rest ignore
/// it. Can be loaded from TOML:
///
/// ```
/// use climdex::{EmptyYearPolicy, IndexConfig};
///
/// let config: IndexConfig = toml::from_str(
///     r#"
///     spell_duration = 5
///     empty_years = "missing"
///     "#,
/// )
/// .unwrap();
/// assert_eq!(config.spell_duration(), 5);
/// assert_eq!(config.empty_years(), EmptyYearPolicy::Missing);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    threshold: Option<f64>,
    spell_duration: usize,
    hemisphere: Hemisphere,
    num_days: usize,
    empty_years: EmptyYearPolicy,
    parallel: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: no threshold override, `spell_duration = 6`,
    /// `hemisphere = North`, `num_days = 6`, `empty_years = Fail`,
    /// sequential execution.
    pub fn new() -> Self {
        Self {
            threshold: None,
            spell_duration: 6,
            hemisphere: Hemisphere::North,
            num_days: 6,
            empty_years: EmptyYearPolicy::Fail,
            parallel: false,
        }
    }

    /// Overrides the index's fixed threshold or derived percentile.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Sets the spell length a warm/cold spell must exceed.
    pub fn with_spell_duration(mut self, spell_duration: usize) -> Self {
        self.spell_duration = spell_duration;
        self
    }

    /// Sets the hemisphere for growing season length.
    pub fn with_hemisphere(mut self, hemisphere: Hemisphere) -> Self {
        self.hemisphere = hemisphere;
        self
    }

    /// Sets the span length that starts or ends a growing season.
    pub fn with_num_days(mut self, num_days: usize) -> Self {
        self.num_days = num_days;
        self
    }

    /// Sets the empty-year policy.
    pub fn with_empty_years(mut self, policy: EmptyYearPolicy) -> Self {
        self.empty_years = policy;
        self
    }

    /// Processes years on the rayon pool when `true`.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    // --- Accessors ---

    /// Returns the threshold override, if any.
    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    /// Returns the spell duration.
    pub fn spell_duration(&self) -> usize {
        self.spell_duration
    }

    /// Returns the hemisphere.
    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    /// Returns the growing-season span length.
    pub fn num_days(&self) -> usize {
        self.num_days
    }

    /// Returns the empty-year policy.
    pub fn empty_years(&self) -> EmptyYearPolicy {
        self.empty_years
    }

    /// Returns whether years are processed in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Growing-season configuration, using `default_threshold` unless a
    /// threshold override is set.
    pub fn season_config(&self, default_threshold: f64) -> SeasonConfig {
        SeasonConfig::new()
            .with_threshold(self.threshold.unwrap_or(default_threshold))
            .with_num_days(self.num_days)
            .with_hemisphere(self.hemisphere)
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClimdexError::InvalidConfig`] if the threshold override is
    /// not finite, or `spell_duration` or `num_days` is zero.
    pub fn validate(&self) -> Result<(), ClimdexError> {
        if let Some(t) = self.threshold {
            if !t.is_finite() {
                return Err(ClimdexError::InvalidConfig {
                    reason: format!("threshold must be finite, got {t}"),
                });
            }
        }
        if self.spell_duration == 0 {
            return Err(ClimdexError::InvalidConfig {
                reason: "spell_duration must be positive".to_string(),
            });
        }
        if self.num_days == 0 {
            return Err(ClimdexError::InvalidConfig {
                reason: "num_days must be positive".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = IndexConfig::default();
        assert_eq!(config.threshold(), None);
        assert_eq!(config.spell_duration(), 6);
        assert_eq!(config.hemisphere(), Hemisphere::North);
        assert_eq!(config.num_days(), 6);
        assert_eq!(config.empty_years(), EmptyYearPolicy::Fail);
        assert!(!config.parallel());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = IndexConfig::new()
            .with_threshold(30.0)
            .with_spell_duration(3)
            .with_hemisphere(Hemisphere::South)
            .with_num_days(4)
            .with_empty_years(EmptyYearPolicy::Missing)
            .with_parallel(true);
        assert_eq!(config.threshold(), Some(30.0));
        assert_eq!(config.spell_duration(), 3);
        assert_eq!(config.hemisphere(), Hemisphere::South);
        assert_eq!(config.num_days(), 4);
        assert_eq!(config.empty_years(), EmptyYearPolicy::Missing);
        assert!(config.parallel());
    }

    #[test]
    fn test_season_config() {
        let season = IndexConfig::new().with_num_days(3).season_config(5.0);
        assert_eq!(season.threshold(), 5.0);
        assert_eq!(season.num_days(), 3);

        let season = IndexConfig::new().with_threshold(8.0).season_config(5.0);
        assert_eq!(season.threshold(), 8.0);
    }

    #[test]
    fn test_validate_rejects() {
        assert!(IndexConfig::new().with_spell_duration(0).validate().is_err());
        assert!(IndexConfig::new().with_num_days(0).validate().is_err());
        assert!(matches!(
            IndexConfig::new().with_threshold(f64::NAN).validate(),
            Err(ClimdexError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_toml_full() {
        let config: IndexConfig = toml::from_str(
            r#"
            threshold = 27.5
            spell_duration = 4
            hemisphere = "south"
            num_days = 5
            empty_years = "fail"
            parallel = true
            "#,
        )
        .unwrap();
        assert_eq!(config.threshold(), Some(27.5));
        assert_eq!(config.spell_duration(), 4);
        assert_eq!(config.hemisphere(), Hemisphere::South);
        assert_eq!(config.num_days(), 5);
        assert!(config.parallel());
    }

    #[test]
    fn test_toml_rejects_unknown_field() {
        assert!(toml::from_str::<IndexConfig>("spell_length = 4").is_err());
    }
}
