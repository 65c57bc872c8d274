//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Each iteration swaps two random interior cities and
//! accepts a worsening swap with a probability that decreases with the
//! temperature, letting the search escape local optima early on.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{acceptance_probability, metropolis_accept, SaResult, SaRunner};
