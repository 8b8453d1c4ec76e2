//! Simulation quality metrics.
//!
//! Aggregate indicators derived from a completed [`SimulationResult`]:
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Average Waiting Time | mean(completion - arrival - burst) |
//! | Maximum Waiting Time | largest single waiting time |
//! | Total Time | last timestamp - first timestamp |
//! | Completed Count | processes that ran to completion |
//!
//! The average over zero processes is undefined, so [`SimulationKpi::calculate`]
//! returns `None` for an empty result rather than dividing by zero.

use crate::models::SimulationResult;

/// Aggregate performance indicators for one simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationKpi {
    /// Mean waiting time across all processes.
    pub average_waiting_time: f64,
    /// Largest waiting time of any single process.
    pub max_waiting_time: f64,
    /// Total elapsed time covered by the schedule.
    pub total_time: f64,
    /// Number of processes that completed.
    pub completed_count: usize,
}

impl SimulationKpi {
    /// Computes KPIs from a simulation result.
    ///
    /// Returns `None` when the result contains no processes (the
    /// average would be undefined).
    pub fn calculate(result: &SimulationResult) -> Option<Self> {
        if result.waiting_times.is_empty() {
            return None;
        }

        let count = result.waiting_times.len();
        let sum: f64 = result.waiting_times.iter().map(|&(_, wt)| wt).sum();
        let max = result
            .waiting_times
            .iter()
            .map(|&(_, wt)| wt)
            .fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            average_waiting_time: sum / count as f64,
            max_waiting_time: max,
            total_time: result.total_time(),
            completed_count: result.completion_map.len(),
        })
    }
}
