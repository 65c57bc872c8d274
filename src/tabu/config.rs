//! Tabu Search configuration.

use serde::{Deserialize, Serialize};

/// Configuration parameters for Tabu Search over the 2-opt neighborhood.
///
/// # Examples
///
/// ```
/// use u_tsp::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(10)
///     .with_tabu_tenure(30)
///     .with_no_improvement_limit(5);
/// assert_eq!(config.max_iterations, 10);
/// assert_eq!(config.tabu_tenure, 30);
/// assert!(!config.aspiration);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabuConfig {
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Number of most recent `(i, j)` moves kept forbidden.
    pub tabu_tenure: usize,
    /// Consecutive iterations without a new best before stopping.
    pub no_improvement_limit: usize,
    /// Whether a tabu move may be taken when it would produce a new global
    /// best. Off by default.
    pub aspiration: bool,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tabu_tenure: 20,
            no_improvement_limit: 50,
            aspiration: false,
        }
    }
}

impl TabuConfig {
    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu tenure (capacity of the tabu memory).
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Sets the stagnation limit.
    pub fn with_no_improvement_limit(mut self, n: usize) -> Self {
        self.no_improvement_limit = n;
        self
    }

    /// Enables or disables the aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }
}
