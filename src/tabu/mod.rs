//! Tabu Search (TS) over the 2-opt neighborhood.
//!
//! A single-solution trajectory metaheuristic that keeps the most recently
//! applied `(i, j)` reversals in a bounded FIFO memory and forbids them,
//! letting the search walk through non-improving tours without cycling
//! straight back.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod runner;

pub use config::TabuConfig;
pub use memory::{TabuMemory, TabuMove};
pub use runner::{TabuResult, TabuRunner};
