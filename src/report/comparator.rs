//! Run records and the method comparison table.

use std::fmt;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::distance::DistanceMatrix;
use crate::error::TspError;
use crate::models::Tour;
use crate::optimizer::{Optimized, TourOptimizer};

/// One optimizer run: method name, optimized length, wall-clock seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Method name.
    pub method: String,
    /// Optimized total distance.
    pub distance: f64,
    /// Elapsed wall-clock time in seconds.
    pub elapsed_secs: f64,
}

impl RunRecord {
    /// Creates a new record.
    pub fn new(method: impl Into<String>, distance: f64, elapsed_secs: f64) -> Self {
        Self {
            method: method.into(),
            distance,
            elapsed_secs,
        }
    }
}

/// Collects run records and renders them as a comparison table.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, Tour};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::TwoOptConfig;
/// use u_tsp::report::RunComparator;
/// use u_tsp::tabu::TabuConfig;
///
/// let dm = DistanceMatrix::from_cities(&[
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 1.0),
///     City::new(2, 1.0, 1.0),
///     City::new(3, 1.0, 0.0),
/// ]);
/// let tour = Tour::closed(&[0, 2, 1, 3]);
///
/// let mut comparator = RunComparator::new();
/// comparator.run(&TwoOptConfig::default(), &dm, &tour).unwrap();
/// comparator.run(&TabuConfig::default(), &dm, &tour).unwrap();
/// assert_eq!(comparator.records().len(), 2);
/// println!("{comparator}");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunComparator {
    records: Vec<RunRecord>,
}

impl RunComparator {
    /// Creates an empty comparator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an externally timed record.
    pub fn push(&mut self, record: RunRecord) {
        self.records.push(record);
    }

    /// Runs an optimizer, timing it and recording the result.
    pub fn run(
        &mut self,
        optimizer: &dyn TourOptimizer,
        distances: &DistanceMatrix,
        tour: &Tour,
    ) -> Result<Optimized, TspError> {
        self.run_with_cancel(optimizer, distances, tour, None)
    }

    /// Like [`run`](Self::run) with a cancellation token. A cancelled run
    /// is still recorded with its best-so-far length.
    pub fn run_with_cancel(
        &mut self,
        optimizer: &dyn TourOptimizer,
        distances: &DistanceMatrix,
        tour: &Tour,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<Optimized, TspError> {
        let start = Instant::now();
        let outcome = optimizer.optimize(distances, tour, cancel)?;
        let elapsed_secs = start.elapsed().as_secs_f64();
        info!(
            method = optimizer.name(),
            distance = outcome.length,
            elapsed_secs,
            "optimizer run recorded"
        );
        self.records
            .push(RunRecord::new(optimizer.name(), outcome.length, elapsed_secs));
        Ok(outcome)
    }

    /// Recorded runs in insertion order.
    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    /// The record with the shortest distance; ties go to the earliest.
    pub fn best(&self) -> Option<&RunRecord> {
        let mut best: Option<&RunRecord> = None;
        for record in &self.records {
            if best.is_none_or(|b| record.distance < b.distance) {
                best = Some(record);
            }
        }
        best
    }

    /// Serializes the records as pretty-printed JSON.
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> Result<String, TspError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}

impl fmt::Display for RunComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Method comparison")?;
        writeln!(
            f,
            "{:<20} {:<20} {}",
            "Method", "Optimized distance", "Elapsed (s)"
        )?;
        writeln!(f, "{}", "-".repeat(60))?;
        for record in &self.records {
            writeln!(
                f,
                "{:<20} {:<20.4} {:.4}",
                record.method, record.distance, record.elapsed_secs
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_search::TwoOptConfig;
    use crate::models::City;
    use crate::sa::SaConfig;

    #[test]
    fn test_table_layout() {
        let mut comparator = RunComparator::new();
        comparator.push(RunRecord::new("2-Opt", 12.34567, 0.5));
        comparator.push(RunRecord::new("Tabu Search", 11.0, 1.25));
        let table = comparator.to_string();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Method comparison");
        assert_eq!(lines[1], "Method               Optimized distance   Elapsed (s)");
        assert_eq!(lines[2], "-".repeat(60));
        assert_eq!(lines[3], "2-Opt                12.3457              0.5000");
        assert_eq!(lines[4], "Tabu Search          11.0000              1.2500");
    }

    #[test]
    fn test_best_record() {
        let mut comparator = RunComparator::new();
        assert!(comparator.best().is_none());
        comparator.push(RunRecord::new("a", 5.0, 0.1));
        comparator.push(RunRecord::new("b", 3.0, 0.1));
        comparator.push(RunRecord::new("c", 3.0, 0.1));
        assert_eq!(comparator.best().map(|r| r.method.as_str()), Some("b"));
    }

    #[test]
    fn test_run_records_timing() {
        let dm = DistanceMatrix::from_cities(&[
            City::new(0, 0.0, 0.0),
            City::new(1, 0.0, 1.0),
            City::new(2, 1.0, 1.0),
            City::new(3, 1.0, 0.0),
        ]);
        let tour = Tour::closed(&[0, 2, 1, 3]);
        let mut comparator = RunComparator::new();
        let out = comparator
            .run(&TwoOptConfig::default(), &dm, &tour)
            .expect("2-opt never fails");
        assert!((out.length - 4.0).abs() < 1e-10);

        let record = &comparator.records()[0];
        assert_eq!(record.method, "2-Opt");
        assert_eq!(record.distance, out.length);
        assert!(record.elapsed_secs >= 0.0);
    }

    #[test]
    fn test_failed_run_not_recorded() {
        let dm = DistanceMatrix::from_cities(&[City::new(0, 0.0, 0.0), City::new(1, 1.0, 0.0)]);
        let tour = Tour::closed(&[0, 1]);
        let mut comparator = RunComparator::new();
        let bad = SaConfig::default().with_initial_temperature(0.0);
        assert!(comparator.run(&bad, &dm, &tour).is_err());
        assert!(comparator.records().is_empty());
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_to_json() {
        let mut comparator = RunComparator::new();
        comparator.push(RunRecord::new("2-Opt", 4.0, 0.25));
        let json = comparator.to_json().expect("serializable");
        let parsed: Vec<RunRecord> = serde_json::from_str(&json).expect("round trip");
        assert_eq!(parsed, comparator.records());
    }
}
