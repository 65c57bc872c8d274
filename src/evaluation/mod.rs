//! Tour length evaluation with infinity propagation.

mod length;

pub use length::{improves, reversal_delta, reversed_length, tour_length, IMPROVEMENT_TOLERANCE};
