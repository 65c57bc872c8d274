//! Closed tour type.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::evaluation::tour_length;

/// A closed tour: `n + 1` city ids where the first and last are equal and
/// the first `n` are a permutation of the instance's cities.
///
/// Positions `0` and `n` hold the fixed start city. Every move operator in
/// this crate touches only the interior positions `1..n`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Tour;
///
/// let tour = Tour::closed(&[3, 1, 2]);
/// assert_eq!(tour.stops(), &[3, 1, 2, 3]);
/// assert_eq!(tour.num_cities(), 3);
/// assert_eq!(tour.start(), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tour {
    stops: Vec<usize>,
}

impl Tour {
    /// Closes an open visiting order by appending its first city.
    ///
    /// An empty order yields an empty tour.
    pub fn closed(order: &[usize]) -> Self {
        let mut stops = Vec::with_capacity(order.len() + 1);
        stops.extend_from_slice(order);
        if let Some(&first) = order.first() {
            stops.push(first);
        }
        Self { stops }
    }

    /// Wraps an already-closed stop sequence (`first == last`).
    ///
    /// Returns `None` if the sequence is non-empty and not closed.
    pub fn from_stops(stops: Vec<usize>) -> Option<Self> {
        match (stops.first(), stops.last()) {
            (Some(first), Some(last)) if first != last || stops.len() < 2 => None,
            _ => Some(Self { stops }),
        }
    }

    /// The full stop sequence, including the closing return to the start.
    pub fn stops(&self) -> &[usize] {
        &self.stops
    }

    /// Consumes the tour and returns its stop sequence.
    pub fn into_stops(self) -> Vec<usize> {
        self.stops
    }

    /// The `n` visited cities without the closing stop.
    pub fn order(&self) -> &[usize] {
        let n = self.num_cities();
        &self.stops[..n]
    }

    /// Number of distinct cities visited.
    pub fn num_cities(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    /// Returns `true` if the tour visits no city.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The fixed start (and end) city.
    pub fn start(&self) -> Option<usize> {
        self.stops.first().copied()
    }

    /// Total tour length; missing matrix entries contribute infinity.
    pub fn length(&self, distances: &DistanceMatrix) -> f64 {
        tour_length(&self.stops, distances)
    }

    /// Returns `true` if this tour is closed and visits every id in `cities`
    /// exactly once.
    pub fn is_valid_for(&self, cities: &[usize]) -> bool {
        if cities.is_empty() {
            return self.stops.is_empty();
        }
        if self.stops.len() != cities.len() + 1 || self.stops.first() != self.stops.last() {
            return false;
        }
        let expected: HashSet<usize> = cities.iter().copied().collect();
        let mut seen = HashSet::with_capacity(cities.len());
        self.order()
            .iter()
            .all(|id| expected.contains(id) && seen.insert(*id))
            && seen.len() == expected.len()
    }
}
