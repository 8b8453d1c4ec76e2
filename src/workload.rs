//! Random workload generation.
//!
//! Produces synthetic process sets for experiments and policy
//! comparison demos. Generated sets always pass input validation:
//! bursts are strictly positive by construction.

use rand::Rng;
use std::ops::Range;

use crate::models::Process;

/// Specification for a randomly generated process set.
///
/// Ranges are half-open. An empty range pins the value to its start,
/// so `0.0..0.0` for arrivals means "everything arrives at t = 0".
///
/// # Example
///
/// ```
/// use cpu_sched::workload::WorkloadSpec;
///
/// let spec = WorkloadSpec::new(4)
///     .with_arrival_range(0.0..10.0)
///     .with_burst_range(1.0..8.0);
/// assert_eq!(spec.count, 4);
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadSpec {
    /// Number of processes to generate.
    pub count: usize,
    /// Arrival time range.
    pub arrival_range: Range<f64>,
    /// Burst time range; the start must be > 0.
    pub burst_range: Range<f64>,
    /// Priority range (lower value = higher priority).
    pub priority_range: Range<i32>,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            count: 5,
            arrival_range: 0.0..10.0,
            burst_range: 1.0..10.0,
            priority_range: 0..5,
        }
    }
}

impl WorkloadSpec {
    /// Creates a spec for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Sets the arrival time range.
    pub fn with_arrival_range(mut self, range: Range<f64>) -> Self {
        self.arrival_range = range;
        self
    }

    /// Sets the burst time range (start must be > 0).
    pub fn with_burst_range(mut self, range: Range<f64>) -> Self {
        self.burst_range = range;
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, range: Range<i32>) -> Self {
        self.priority_range = range;
        self
    }

    /// Generates the process set, ids `P1..Pn`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        (1..=self.count)
            .map(|i| {
                let arrival = sample_f64(rng, &self.arrival_range);
                let burst = sample_f64(rng, &self.burst_range);
                let priority = sample_i32(rng, &self.priority_range);
                Process::new(format!("P{i}"), arrival, burst).with_priority(priority)
            })
            .collect()
    }
}

fn sample_f64<R: Rng>(rng: &mut R, range: &Range<f64>) -> f64 {
    if range.is_empty() {
        range.start
    } else {
        rng.random_range(range.clone())
    }
}

fn sample_i32<R: Rng>(rng: &mut R, range: &Range<i32>) -> i32 {
    if range.is_empty() {
        range.start
    } else {
        rng.random_range(range.clone())
    }
}
