//! Pluggable tour optimizers.
//!
//! Every improver consumes only the distance matrix and an initial tour,
//! so they are interchangeable behind [`TourOptimizer`]. Each call works on
//! its own copy of the tour (and, for SA, its own generator), so separate
//! optimizers may run on separate threads against one shared matrix.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::distance::DistanceMatrix;
use crate::error::TspError;
use crate::local_search::{two_opt_improve_with_cancel, TwoOptConfig};
use crate::models::Tour;
use crate::sa::{SaConfig, SaRunner};
use crate::tabu::{TabuConfig, TabuRunner};

/// Outcome shared by every optimizer.
#[derive(Debug, Clone)]
pub struct Optimized {
    /// Best tour found.
    pub tour: Tour,
    /// Its length.
    pub length: f64,
    /// Passes (2-opt) or iterations (tabu, SA) executed.
    pub iterations: usize,
    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// A tour improvement strategy.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, Tour};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::TwoOptConfig;
/// use u_tsp::optimizer::TourOptimizer;
/// use u_tsp::sa::SaConfig;
/// use u_tsp::tabu::TabuConfig;
///
/// let dm = DistanceMatrix::from_cities(&[
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 1.0),
///     City::new(2, 1.0, 1.0),
///     City::new(3, 1.0, 0.0),
/// ]);
/// let tour = Tour::closed(&[0, 2, 1, 3]);
///
/// let optimizers: Vec<Box<dyn TourOptimizer>> = vec![
///     Box::new(TwoOptConfig::default()),
///     Box::new(TabuConfig::default()),
///     Box::new(SaConfig::default().with_seed(1)),
/// ];
/// for opt in &optimizers {
///     let out = opt.optimize(&dm, &tour, None).unwrap();
///     assert!(out.tour.is_valid_for(dm.ids()));
/// }
/// ```
pub trait TourOptimizer: Send + Sync {
    /// Display name used in run reports.
    fn name(&self) -> &str;

    /// Improves `tour`, checking `cancel` at every iteration boundary.
    fn optimize(
        &self,
        distances: &DistanceMatrix,
        tour: &Tour,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Optimized, TspError>;
}

impl TourOptimizer for TwoOptConfig {
    fn name(&self) -> &str {
        "2-Opt"
    }

    fn optimize(
        &self,
        distances: &DistanceMatrix,
        tour: &Tour,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Optimized, TspError> {
        let result = two_opt_improve_with_cancel(distances, tour, self, cancel);
        Ok(Optimized {
            tour: result.tour,
            length: result.length,
            iterations: result.passes,
            cancelled: result.cancelled,
        })
    }
}

impl TourOptimizer for TabuConfig {
    fn name(&self) -> &str {
        "Tabu Search"
    }

    fn optimize(
        &self,
        distances: &DistanceMatrix,
        tour: &Tour,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Optimized, TspError> {
        let result = TabuRunner::run_with_cancel(distances, tour, self, cancel);
        Ok(Optimized {
            tour: result.best,
            length: result.best_length,
            iterations: result.iterations,
            cancelled: result.cancelled,
        })
    }
}

impl TourOptimizer for SaConfig {
    fn name(&self) -> &str {
        "Simulated Annealing"
    }

    fn optimize(
        &self,
        distances: &DistanceMatrix,
        tour: &Tour,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Optimized, TspError> {
        let result = SaRunner::run_with_cancel(distances, tour, self, cancel)?;
        Ok(Optimized {
            tour: result.best,
            length: result.best_length,
            iterations: result.iterations,
            cancelled: result.cancelled,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_cities(&[
            City::new(0, 0.0, 0.0),
            City::new(1, 0.0, 1.0),
            City::new(2, 1.0, 1.0),
            City::new(3, 1.0, 0.0),
        ])
    }

    #[test]
    fn test_names() {
        assert_eq!(TwoOptConfig::default().name(), "2-Opt");
        assert_eq!(TabuConfig::default().name(), "Tabu Search");
        assert_eq!(SaConfig::default().name(), "Simulated Annealing");
    }

    #[test]
    fn test_optimizers_share_matrix_across_threads() {
        let dm = square();
        let tour = Tour::closed(&[0, 2, 1, 3]);
        let optimizers: Vec<Box<dyn TourOptimizer>> = vec![
            Box::new(TwoOptConfig::default()),
            Box::new(TabuConfig::default()),
            Box::new(SaConfig::default().with_seed(11)),
        ];
        let (dm, tour) = (&dm, &tour);
        std::thread::scope(|s| {
            let handles: Vec<_> = optimizers
                .iter()
                .map(|opt| s.spawn(move || opt.optimize(dm, tour, None)))
                .collect();
            for handle in handles {
                let out = handle.join().expect("thread").expect("valid config");
                assert!(out.tour.is_valid_for(dm.ids()));
                assert!(out.length <= tour.length(dm));
            }
        });
    }

    #[test]
    fn test_sa_config_error_propagates() {
        let dm = square();
        let bad = SaConfig::default().with_cooling_rate(0.0);
        let tour = Tour::closed(&[0, 1, 2, 3]);
        assert!(matches!(bad.optimize(&dm, &tour, None), Err(TspError::Config(_))));
    }
}
