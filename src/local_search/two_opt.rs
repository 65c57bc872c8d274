//! 2-opt segment-reversal descent.
//!
//! # Algorithm
//!
//! For every pair of interior positions `1 <= i < j <= n-1`, reversing
//! `tour[i..=j]` replaces the edges `(t[i-1], t[i])` and `(t[j], t[j+1])`
//! with `(t[i-1], t[j])` and `(t[i], t[j+1])`:
//!
//! ```text
//! delta = d(t[i-1], t[j]) + d(t[i], t[j+1]) - d(t[i-1], t[i]) - d(t[j], t[j+1])
//! ```
//!
//! Each pass scans all pairs in ascending `i`, then ascending `j`, and
//! adopts every strictly improving reversal (see [`improves`]) the moment
//! it is found; later
//! pairs in the same pass are evaluated against the updated tour. The
//! search stops after a pass with no adopted move or after
//! `max_iterations` passes. There is no randomness.
//!
//! # Complexity
//!
//! O(n²) per pass with O(1) delta evaluation.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::distance::DistanceMatrix;
use crate::evaluation::{improves, reversed_length, tour_length};
use crate::models::Tour;

/// Configuration for 2-opt descent.
///
/// # Examples
///
/// ```
/// use u_tsp::local_search::TwoOptConfig;
///
/// let config = TwoOptConfig::default().with_max_iterations(50);
/// assert_eq!(config.max_iterations, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoOptConfig {
    /// Maximum number of full passes over the neighborhood.
    pub max_iterations: usize,
}

impl Default for TwoOptConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
        }
    }
}

impl TwoOptConfig {
    /// Sets the maximum number of passes.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }
}

/// Result of a 2-opt descent.
#[derive(Debug, Clone)]
pub struct TwoOptResult {
    /// Improved tour.
    pub tour: Tour,
    /// Length of the improved tour.
    pub length: f64,
    /// Passes executed, including the final pass that found nothing.
    pub passes: usize,
    /// Number of adopted reversals.
    pub moves: usize,
    /// `true` if the last pass adopted no move (a 2-opt local optimum).
    pub converged: bool,
    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Applies 2-opt descent to a closed tour.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, Tour};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::{two_opt_improve, TwoOptConfig};
///
/// let dm = DistanceMatrix::from_cities(&[
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 1.0),
///     City::new(2, 1.0, 1.0),
///     City::new(3, 1.0, 0.0),
/// ]);
///
/// // 0 → 2 → 1 → 3 → 0 crosses itself
/// let crossed = Tour::closed(&[0, 2, 1, 3]);
/// let result = two_opt_improve(&dm, &crossed, &TwoOptConfig::default());
/// assert!((result.length - 4.0).abs() < 1e-10);
/// assert_eq!(result.moves, 1);
/// ```
pub fn two_opt_improve(
    distances: &DistanceMatrix,
    tour: &Tour,
    config: &TwoOptConfig,
) -> TwoOptResult {
    two_opt_improve_with_cancel(distances, tour, config, None)
}

/// Applies 2-opt descent with an optional cancellation token, checked
/// before every pass.
pub fn two_opt_improve_with_cancel(
    distances: &DistanceMatrix,
    tour: &Tour,
    config: &TwoOptConfig,
    cancel: Option<Arc<AtomicBool>>,
) -> TwoOptResult {
    let mut stops = tour.stops().to_vec();
    let mut length = tour_length(&stops, distances);
    let mut scratch = Vec::with_capacity(stops.len());

    let mut passes = 0usize;
    let mut moves = 0usize;
    let mut improved = true;
    let mut cancelled = false;

    // Interior positions are 1..=last, where last = n - 1.
    let last = stops.len().saturating_sub(2);

    while improved && passes < config.max_iterations {
        if let Some(ref flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                cancelled = true;
                break;
            }
        }

        improved = false;
        passes += 1;

        for i in 1..last {
            for j in (i + 1)..=last {
                let candidate = reversed_length(&stops, length, distances, i, j, &mut scratch);
                if improves(candidate, length) {
                    stops[i..=j].reverse();
                    length = tour_length(&stops, distances);
                    moves += 1;
                    improved = true;
                }
            }
        }

        debug!(pass = passes, length, moves, "2-opt pass");
    }

    info!(passes, moves, length, "2-opt finished");

    TwoOptResult {
        tour: Tour::from_stops(stops).unwrap_or_else(|| tour.clone()),
        length,
        passes,
        moves,
        converged: !improved && !cancelled,
        cancelled,
    }
}
