//! Local search operators for improving a tour.
//!
//! - [`two_opt_improve`] — 2-opt segment reversal, adopt-on-find descent

mod two_opt;

pub use two_opt::{two_opt_improve, two_opt_improve_with_cancel, TwoOptConfig, TwoOptResult};
