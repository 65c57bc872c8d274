//! Tour length evaluation.
//!
//! Lengths are always summed over the full closed stop sequence. A missing
//! distance contributes `f64::INFINITY`, which propagates through the sum
//! instead of failing, so an incomplete matrix still yields a comparable
//! (infinite) length.

use crate::distance::DistanceMatrix;

/// Relative gain below which a shorter length is treated as equal.
///
/// Scaled by the current length, so the threshold does not depend on the
/// coordinate units. Rounding in an O(1) delta stays several orders of
/// magnitude below it.
pub const IMPROVEMENT_TOLERANCE: f64 = 1e-12;

/// Returns `true` if `candidate` is strictly shorter than `current` by more
/// than rounding noise.
///
/// An infinite `current` is improved by any finite candidate.
///
/// # Examples
///
/// ```
/// use u_tsp::evaluation::improves;
///
/// assert!(improves(3.0, 4.0));
/// assert!(improves(4.0e-11, 4.8e-11));
/// assert!(!improves(4.0, 4.0));
/// assert!(improves(10.0, f64::INFINITY));
/// ```
pub fn improves(candidate: f64, current: f64) -> bool {
    if current.is_finite() {
        candidate < current - current.abs() * IMPROVEMENT_TOLERANCE
    } else {
        candidate < current
    }
}

/// Computes the total length of a closed stop sequence:
/// `d(s[0], s[1]) + ... + d(s[n-1], s[n])`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::evaluation::tour_length;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 1.0),
///     City::new(2, 1.0, 1.0),
///     City::new(3, 1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert!((tour_length(&[0, 1, 2, 3, 0], &dm) - 4.0).abs() < 1e-10);
/// ```
pub fn tour_length(stops: &[usize], distances: &DistanceMatrix) -> f64 {
    stops.windows(2).map(|w| distances.get(w[0], w[1])).sum()
}

/// Change in length from reversing `stops[i..=j]`.
///
/// Only the edges `(s[i-1], s[i])` and `(s[j], s[j+1])` change; they are
/// replaced by `(s[i-1], s[j])` and `(s[i], s[j+1])`. Requires
/// `1 <= i < j <= stops.len() - 2`.
pub fn reversal_delta(stops: &[usize], distances: &DistanceMatrix, i: usize, j: usize) -> f64 {
    let (prev, first, last, next) = (stops[i - 1], stops[i], stops[j], stops[j + 1]);
    let old_cost = distances.get(prev, first) + distances.get(last, next);
    let new_cost = distances.get(prev, last) + distances.get(first, next);
    new_cost - old_cost
}

/// Length of the tour obtained by reversing `stops[i..=j]`, given the
/// current length.
///
/// Uses the O(1) edge delta while everything involved is finite and falls
/// back to a full recomputation (into `scratch`) otherwise, so infinite
/// lengths never turn into NaN.
pub fn reversed_length(
    stops: &[usize],
    current_length: f64,
    distances: &DistanceMatrix,
    i: usize,
    j: usize,
    scratch: &mut Vec<usize>,
) -> f64 {
    if current_length.is_finite() {
        let delta = reversal_delta(stops, distances, i, j);
        if delta.is_finite() {
            return current_length + delta;
        }
    }
    scratch.clear();
    scratch.extend_from_slice(stops);
    scratch[i..=j].reverse();
    tour_length(scratch, distances)
}
