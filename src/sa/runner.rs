//! SA execution loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::config::SaConfig;
use crate::distance::DistanceMatrix;
use crate::error::TspError;
use crate::evaluation::tour_length;
use crate::models::Tour;

/// Iterations between progress log lines and cost-history samples.
const HISTORY_INTERVAL: usize = 100;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best tour found.
    pub best: Tour,

    /// Length of the best tour.
    pub best_length: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best length sampled every 100 iterations, plus the final value.
    pub cost_history: Vec<f64>,
}

/// Probability of accepting a move from `current` to `candidate` length.
///
/// `1.0` for a strict improvement, otherwise the Metropolis factor
/// `exp((current - candidate) / temperature)`, which lies in `(0, 1]`
/// for a finite worsening and positive temperature.
pub fn acceptance_probability(current: f64, candidate: f64, temperature: f64) -> f64 {
    if candidate < current {
        1.0
    } else {
        ((current - candidate) / temperature).exp()
    }
}

/// Metropolis acceptance test.
///
/// Improvements are always accepted without drawing from `rng`; otherwise
/// one uniform sample in `[0, 1)` is compared against
/// [`acceptance_probability`].
pub fn metropolis_accept<R: Rng + ?Sized>(
    current: f64,
    candidate: f64,
    temperature: f64,
    rng: &mut R,
) -> bool {
    candidate < current
        || rng.random::<f64>() < acceptance_probability(current, candidate, temperature)
}

/// Executes Simulated Annealing over the city-swap neighborhood.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA starting from `tour`, seeding the generator from the config.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::models::{City, Tour};
    /// use u_tsp::distance::DistanceMatrix;
    /// use u_tsp::sa::{SaConfig, SaRunner};
    ///
    /// let dm = DistanceMatrix::from_cities(&[
    ///     City::new(0, 0.0, 0.0),
    ///     City::new(1, 0.0, 1.0),
    ///     City::new(2, 1.0, 1.0),
    ///     City::new(3, 1.0, 0.0),
    /// ]);
    /// let tour = Tour::closed(&[0, 2, 1, 3]);
    /// let config = SaConfig::default().with_seed(7);
    /// let result = SaRunner::run(&dm, &tour, &config).unwrap();
    /// assert!(result.best_length <= tour.length(&dm));
    /// ```
    pub fn run(
        distances: &DistanceMatrix,
        tour: &Tour,
        config: &SaConfig,
    ) -> Result<SaResult, TspError> {
        Self::run_with_cancel(distances, tour, config, None)
    }

    /// Runs SA with an optional cancellation token, checked before every
    /// iteration.
    pub fn run_with_cancel(
        distances: &DistanceMatrix,
        tour: &Tour,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult, TspError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::run_with_rng(distances, tour, config, &mut rng, cancel)
    }

    /// Runs SA drawing all randomness from the supplied generator.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<R: Rng + ?Sized>(
        distances: &DistanceMatrix,
        tour: &Tour,
        config: &SaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult, TspError> {
        config.validate()?;

        let mut current = tour.stops().to_vec();
        let mut current_length = tour_length(&current, distances);
        let mut best = current.clone();
        let mut best_length = current_length;
        let mut candidate = current.clone();

        let mut temperature = config.initial_temperature;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        let mut cost_history = vec![best_length];

        // Swappable interior positions are 1..=interior.
        let interior = current.len().saturating_sub(2);
        let max_iterations = if interior < 2 { 0 } else { config.max_iterations };

        for iteration in 0..max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let picked = sample(rng, interior, 2);
            let (i, j) = (picked.index(0) + 1, picked.index(1) + 1);
            candidate.clone_from(&current);
            candidate.swap(i, j);
            let candidate_length = tour_length(&candidate, distances);

            if candidate_length < current_length {
                improving_moves += 1;
            }

            if metropolis_accept(current_length, candidate_length, temperature, rng) {
                std::mem::swap(&mut current, &mut candidate);
                current_length = candidate_length;
                accepted_moves += 1;

                if current_length < best_length {
                    best.clone_from(&current);
                    best_length = current_length;
                }
            }

            temperature *= config.cooling_rate;
            total_iterations += 1;

            if iteration % HISTORY_INTERVAL == 0 || iteration + 1 == max_iterations {
                debug!(iteration, best_length, temperature, "annealing progress");
            }
            if total_iterations % HISTORY_INTERVAL == 0 {
                cost_history.push(best_length);
            }

            if temperature < config.min_temperature {
                break;
            }
        }

        // Final history entry
        if cost_history.last().is_none_or(|&last| last != best_length) {
            cost_history.push(best_length);
        }

        info!(
            iterations = total_iterations,
            best_length,
            accepted_moves,
            final_temperature = temperature,
            "simulated annealing finished"
        );

        Ok(SaResult {
            best: Tour::from_stops(best).unwrap_or_else(|| tour.clone()),
            best_length,
            iterations: total_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
            cost_history,
        })
    }
}
