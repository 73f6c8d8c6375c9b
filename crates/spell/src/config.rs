//! Growing-season configuration.

use climdex_calendar::Hemisphere;
use serde::Deserialize;

use crate::error::SpellError;

/// Configuration for growing season length.
///
/// # Example
///
/// ```
/// use climdex_calendar::Hemisphere;
/// use climdex_spell::SeasonConfig;
///
/// let config = SeasonConfig::new()
///     .with_hemisphere(Hemisphere::South)
///     .with_num_days(5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeasonConfig {
    threshold: f64,
    num_days: usize,
    hemisphere: Hemisphere,
}

impl Default for SeasonConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SeasonConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `threshold = 5.0`, `num_days = 6`, `hemisphere = North`.
    pub fn new() -> Self {
        Self {
            threshold: 5.0,
            num_days: 6,
            hemisphere: Hemisphere::North,
        }
    }

    /// Sets the temperature separating growing from non-growing days.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the minimum span length that starts or ends a season.
    pub fn with_num_days(mut self, num_days: usize) -> Self {
        self.num_days = num_days;
        self
    }

    /// Sets the hemisphere.
    pub fn with_hemisphere(mut self, hemisphere: Hemisphere) -> Self {
        self.hemisphere = hemisphere;
        self
    }

    /// Returns the growing threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns the minimum span length.
    pub fn num_days(&self) -> usize {
        self.num_days
    }

    /// Returns the hemisphere.
    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SpellError::InvalidConfig`] if the threshold is not finite
    /// or `num_days` is zero.
    pub fn validate(&self) -> Result<(), SpellError> {
        if !self.threshold.is_finite() {
            return Err(SpellError::InvalidConfig {
                reason: format!("threshold must be finite, got {}", self.threshold),
            });
        }
        if self.num_days == 0 {
            return Err(SpellError::InvalidConfig {
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
    fn default_values() {
        let config = SeasonConfig::default();
        assert_eq!(config.threshold(), 5.0);
        assert_eq!(config.num_days(), 6);
        assert_eq!(config.hemisphere(), Hemisphere::North);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let config = SeasonConfig::new()
            .with_threshold(10.0)
            .with_num_days(3)
            .with_hemisphere(Hemisphere::South);
        assert_eq!(config.threshold(), 10.0);
        assert_eq!(config.num_days(), 3);
        assert_eq!(config.hemisphere(), Hemisphere::South);
    }

    #[test]
    fn rejects_zero_days() {
        assert!(matches!(
            SeasonConfig::new().with_num_days(0).validate(),
            Err(SpellError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn rejects_nan_threshold() {
        assert!(SeasonConfig::new().with_threshold(f64::NAN).validate().is_err());
    }

    #[test]
    fn deserializes_partial_toml() {
        let config: SeasonConfig = toml::from_str("hemisphere = \"south\"").unwrap();
        assert_eq!(config.hemisphere(), Hemisphere::South);
        assert_eq!(config.num_days(), 6);
        assert!(toml::from_str::<SeasonConfig>("days = 4").is_err());
    }
}
