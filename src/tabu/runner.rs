//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from the given tour; best = current
//! 2. At each iteration:
//!    a. Scan the full 2-opt neighborhood (ascending `i`, then `j`),
//!       skipping moves whose `(i, j)` is in the tabu memory
//!    b. Take the shortest admissible neighbor, even if it is worse than
//!       the current tour; ties go to the earliest in scan order
//!    c. Record its `(i, j)` in the tabu memory (FIFO, capacity = tenure)
//!    d. Update the global best if strictly improved (see
//!       [`improves`]), otherwise count a non-improving iteration
//! 3. Terminate after `max_iterations` or `no_improvement_limit`
//!    consecutive non-improving iterations
//!
//! When every move is tabu the iteration makes no move and the counter is
//! left untouched. Unless `aspiration` is enabled, a tabu move is never
//! taken, even one that would beat the global best.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use super::config::TabuConfig;
use super::memory::{TabuMemory, TabuMove};
use crate::distance::DistanceMatrix;
use crate::evaluation::{improves, reversed_length, tour_length};
use crate::models::Tour;

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// Best tour found.
    pub best: Tour,
    /// Length of the best tour.
    pub best_length: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration (1-based) at which the best tour was found; 0 if the
    /// initial tour was never beaten.
    pub best_iteration: usize,
    /// Iterations in which every move was tabu.
    pub stalled_iterations: usize,
    /// Best length after each iteration.
    pub cost_history: Vec<f64>,
    /// Move applied in each iteration; `None` when every move was tabu.
    pub move_history: Vec<Option<TabuMove>>,
    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search starting from `tour`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::models::{City, Tour};
    /// use u_tsp::distance::DistanceMatrix;
    /// use u_tsp::tabu::{TabuConfig, TabuRunner};
    ///
    /// let dm = DistanceMatrix::from_cities(&[
    ///     City::new(0, 0.0, 0.0),
    ///     City::new(1, 0.0, 1.0),
    ///     City::new(2, 1.0, 1.0),
    ///     City::new(3, 1.0, 0.0),
    /// ]);
    /// let crossed = Tour::closed(&[0, 2, 1, 3]);
    /// let result = TabuRunner::run(&dm, &crossed, &TabuConfig::default());
    /// assert!((result.best_length - 4.0).abs() < 1e-10);
    /// ```
    pub fn run(distances: &DistanceMatrix, tour: &Tour, config: &TabuConfig) -> TabuResult {
        Self::run_with_cancel(distances, tour, config, None)
    }

    /// Executes Tabu Search with an optional cancellation token, checked
    /// before every iteration.
    pub fn run_with_cancel(
        distances: &DistanceMatrix,
        tour: &Tour,
        config: &TabuConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> TabuResult {
        let mut current = tour.stops().to_vec();
        let mut current_length = tour_length(&current, distances);
        let mut best = current.clone();
        let mut best_length = current_length;
        let mut best_iteration = 0usize;

        let mut memory = TabuMemory::new(config.tabu_tenure);
        let mut scratch = Vec::with_capacity(current.len());
        let mut cost_history = Vec::with_capacity(config.max_iterations);
        let mut move_history = Vec::with_capacity(config.max_iterations);

        let mut iteration = 0usize;
        let mut no_improve_count = 0usize;
        let mut stalled_iterations = 0usize;
        let mut cancelled = false;

        // Interior positions are 1..=last; fewer than two means no 2-opt move exists.
        let last = current.len().saturating_sub(2);
        let max_iterations = if last < 2 { 0 } else { config.max_iterations };

        while iteration < max_iterations && no_improve_count < config.no_improvement_limit {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            iteration += 1;

            // Find the best admissible move
            let mut chosen: Option<(usize, usize, f64)> = None;
            for i in 1..last {
                for j in (i + 1)..=last {
                    let candidate =
                        reversed_length(&current, current_length, distances, i, j, &mut scratch);
                    let tabu = memory.contains((i, j));
                    if tabu && !(config.aspiration && improves(candidate, best_length)) {
                        continue;
                    }
                    if chosen.is_none_or(|(_, _, c)| candidate < c) {
                        chosen = Some((i, j, candidate));
                    }
                }
            }

            match chosen {
                Some((i, j, _)) => {
                    memory.push((i, j));
                    current[i..=j].reverse();
                    current_length = tour_length(&current, distances);

                    if improves(current_length, best_length) {
                        best.clone_from(&current);
                        best_length = current_length;
                        best_iteration = iteration;
                        no_improve_count = 0;
                    } else {
                        no_improve_count += 1;
                    }
                }
                None => stalled_iterations += 1,
            }

            cost_history.push(best_length);
            move_history.push(chosen.map(|(i, j, _)| (i, j)));
            debug!(
                iteration,
                current_length,
                best_length,
                no_improve = no_improve_count,
                "tabu iteration"
            );
        }

        info!(iterations = iteration, best_length, best_iteration, "tabu search finished");

        TabuResult {
            best: Tour::from_stops(best).unwrap_or_else(|| tour.clone()),
            best_length,
            iterations: iteration,
            best_iteration,
            stalled_iterations,
            cost_history,
            move_history,
            cancelled,
        }
    }
}
