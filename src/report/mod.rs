//! Run comparison.
//!
//! Times each optimizer run and renders `(method, distance, seconds)`
//! triples as a fixed-width table.

mod comparator;

pub use comparator::{RunComparator, RunRecord};
