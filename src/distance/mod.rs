//! Pairwise distance table.
//!
//! Provides a dense symmetric distance matrix built from city coordinates.

mod matrix;

pub use matrix::DistanceMatrix;
