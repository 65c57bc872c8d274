//! Dense symmetric distance matrix keyed by city id.

use std::collections::HashMap;

use crate::error::TspError;
use crate::models::City;

/// A dense n×n distance matrix stored in row-major order, addressed by
/// city id.
///
/// Both orderings of every pair are stored, so lookups are O(1) and
/// `get(a, b) == get(b, a)` holds by construction. Pairs that were never
/// filled, and ids the matrix does not know, resolve to `f64::INFINITY`
/// so searches simply never select them.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
///
/// let cities = vec![
///     City::new(1, 0.0, 0.0),
///     City::new(2, 3.0, 4.0),
///     City::new(3, 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert!((dm.get(1, 2) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.get(2, 1), dm.get(1, 2));
/// assert_eq!(dm.get(1, 99), f64::INFINITY);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    ids: Vec<usize>,
    index: HashMap<usize, usize>,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Creates a matrix over the given ids with every pair missing.
    ///
    /// A repeated id keeps its first position.
    pub fn new(ids: &[usize]) -> Self {
        let mut unique = Vec::with_capacity(ids.len());
        let mut index = HashMap::with_capacity(ids.len());
        for &id in ids {
            if !index.contains_key(&id) {
                index.insert(id, unique.len());
                unique.push(id);
            }
        }
        let size = unique.len();
        let mut data = vec![f64::INFINITY; size * size];
        for i in 0..size {
            data[i * size + i] = 0.0;
        }
        Self {
            ids: unique,
            index,
            data,
        }
    }

    /// Computes the Euclidean distance for every unordered pair of cities.
    ///
    /// The id order of `cities` is kept and fixes the nearest-neighbor
    /// start city and tie-break order. O(n²) time and space.
    pub fn from_cities(cities: &[City]) -> Self {
        let ids: Vec<usize> = cities.iter().map(City::id).collect();
        let mut dm = Self::new(&ids);
        let mut placed = vec![false; dm.size()];
        let mut located = Vec::with_capacity(dm.size());
        for city in cities {
            let slot = dm.index[&city.id()];
            if !placed[slot] {
                placed[slot] = true;
                located.push(*city);
            }
        }
        let n = located.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let d = located[i].distance_to(&located[j]);
                dm.set_slots(i, j, d);
            }
        }
        dm
    }

    /// Records the distance between two cities in both orderings.
    ///
    /// Returns [`TspError::UnknownCity`] if either id is not in the matrix.
    pub fn insert(&mut self, a: usize, b: usize, distance: f64) -> Result<(), TspError> {
        let i = self.slot(a).ok_or(TspError::UnknownCity(a))?;
        let j = self.slot(b).ok_or(TspError::UnknownCity(b))?;
        self.set_slots(i, j, distance);
        Ok(())
    }

    fn set_slots(&mut self, i: usize, j: usize, distance: f64) {
        let n = self.ids.len();
        self.data[i * n + j] = distance;
        self.data[j * n + i] = distance;
    }

    fn slot(&self, id: usize) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Returns the distance between two cities, or `None` if the pair is
    /// missing or an id is unknown.
    pub fn try_get(&self, a: usize, b: usize) -> Option<f64> {
        let d = self.get(a, b);
        d.is_finite().then_some(d)
    }

    /// Returns the distance between two cities.
    ///
    /// Missing pairs and unknown ids resolve to `f64::INFINITY`.
    pub fn get(&self, a: usize, b: usize) -> f64 {
        match (self.slot(a), self.slot(b)) {
            (Some(i), Some(j)) => self.data[i * self.ids.len() + j],
            _ => f64::INFINITY,
        }
    }

    /// City ids in insertion order.
    pub fn ids(&self) -> &[usize] {
        &self.ids
    }

    /// Returns `true` if the matrix knows this city id.
    pub fn contains(&self, id: usize) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if every off-diagonal pair has a finite distance.
    pub fn is_complete(&self) -> bool {
        let n = self.ids.len();
        (0..n).all(|i| ((i + 1)..n).all(|j| self.data[i * n + j].is_finite()))
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        let n = self.ids.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (self.data[i * n + j], self.data[j * n + i]);
                if a == b {
                    continue;
                }
                if (a - b).abs() > tol || a.is_nan() || b.is_nan() {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest of `candidates` to `from`.
    ///
    /// Ties go to the earliest candidate. Candidates at infinite distance
    /// are never selected. Returns `None` if no candidate is reachable.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            let d = self.get(from, c);
            if d < best.map_or(f64::INFINITY, |(_, bd)| bd) {
                best = Some((c, d));
            }
        }
        best.map(|(c, _)| c)
    }
}
