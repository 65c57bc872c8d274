//! Error types.

use thiserror::Error;

/// Invalid optimizer parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Initial temperature must be strictly positive and finite.
    #[error("initial_temperature must be positive, got {0}")]
    InitialTemperature(f64),

    /// Minimum temperature must be strictly positive.
    #[error("min_temperature must be positive, got {0}")]
    MinTemperature(f64),

    /// Geometric cooling factor must lie in the open interval (0, 1).
    #[error("cooling_rate must be in (0, 1), got {0}")]
    CoolingRate(f64),
}

/// Errors raised by the TSP engine.
///
/// Search outcomes such as "no improving move" or an exhausted iteration
/// budget are normal terminations and never surface here.
#[derive(Debug, Error)]
pub enum TspError {
    /// A city id was requested that the distance matrix does not know.
    #[error("unknown city id {0}")]
    UnknownCity(usize),

    /// Optimizer configuration rejected by `validate()`.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Underlying I/O failure while reading coordinates.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
