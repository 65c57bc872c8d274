//! SA configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for Simulated Annealing with geometric cooling.
///
/// After every iteration the temperature is multiplied by `cooling_rate`;
/// the run ends after `max_iterations` or once the temperature drops below
/// `min_temperature`.
///
/// # Examples
///
/// ```
/// use u_tsp::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(1000.0)
///     .with_cooling_rate(0.995)
///     .with_max_iterations(100)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Maximum number of iterations (one neighbor per iteration).
    pub max_iterations: usize,

    /// Floor temperature; the run stops once T falls below it.
    pub min_temperature: f64,

    /// Random seed for reproducibility. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.995,
            max_iterations: 1000,
            min_temperature: 1e-8,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(ConfigError::InitialTemperature(self.initial_temperature));
        }
        if !(self.min_temperature > 0.0) {
            return Err(ConfigError::MinTemperature(self.min_temperature));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ConfigError::CoolingRate(self.cooling_rate));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert_eq!(config.initial_temperature, 1000.0);
        assert_eq!(config.cooling_rate, 0.995);
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.min_temperature, 1e-8);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SaConfig::default().with_initial_temperature(-1.0);
        assert_eq!(config.validate(), Err(ConfigError::InitialTemperature(-1.0)));
        let config = SaConfig::default().with_initial_temperature(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_min_temperature() {
        let config = SaConfig::default().with_min_temperature(0.0);
        assert_eq!(config.validate(), Err(ConfigError::MinTemperature(0.0)));
    }

    #[test]
    fn test_validate_bad_cooling_rate() {
        for rate in [0.0, 1.0, 1.5, -0.2] {
            let config = SaConfig::default().with_cooling_rate(rate);
            assert_eq!(config.validate(), Err(ConfigError::CoolingRate(rate)));
        }
    }
}
