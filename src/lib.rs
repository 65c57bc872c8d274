//! # u-tsp
//!
//! Euclidean traveling salesman heuristics: a nearest-neighbor
//! construction followed by interchangeable improvers that all work over a
//! precomputed pairwise distance matrix.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, Tour)
//! - [`distance`] — Symmetric distance matrix keyed by city id
//! - [`evaluation`] — Tour length and 2-opt deltas with infinity propagation
//! - [`constructive`] — Nearest-neighbor construction
//! - [`local_search`] — 2-opt descent
//! - [`tabu`] — Tabu Search over the 2-opt neighborhood
//! - [`sa`] — Simulated Annealing with geometric cooling
//! - [`optimizer`] — The [`TourOptimizer`](optimizer::TourOptimizer) strategy trait
//! - [`report`] — Timed run records and the comparison table
//! - [`io`] — Coordinate file parsing
//!
//! ## Example
//!
//! ```
//! use u_tsp::constructive::nearest_neighbor;
//! use u_tsp::distance::DistanceMatrix;
//! use u_tsp::io::parse_coordinates;
//! use u_tsp::local_search::TwoOptConfig;
//! use u_tsp::report::RunComparator;
//! use u_tsp::sa::SaConfig;
//! use u_tsp::tabu::TabuConfig;
//!
//! let cities = parse_coordinates("1 0 0\n2 0 1\n3 1 1\n4 1 0\n5 0.5 2\n".as_bytes()).unwrap();
//! let dm = DistanceMatrix::from_cities(&cities);
//! let (initial, _) = nearest_neighbor(&dm, dm.ids(), None).unwrap();
//!
//! let mut comparator = RunComparator::new();
//! comparator.run(&TwoOptConfig::default(), &dm, &initial).unwrap();
//! comparator.run(&TabuConfig::default().with_max_iterations(10), &dm, &initial).unwrap();
//! comparator.run(&SaConfig::default().with_seed(42), &dm, &initial).unwrap();
//! assert_eq!(comparator.records().len(), 3);
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod local_search;
pub mod models;
pub mod optimizer;
pub mod report;
pub mod sa;
pub mod tabu;

pub use error::{ConfigError, TspError};
