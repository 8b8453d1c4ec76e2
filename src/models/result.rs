//! Simulation result model.
//!
//! A `SimulationResult` is the complete output of one algorithm run:
//! the execution timeline (segments + timestamps), per-process
//! completion times, and per-process waiting times. Results are pure
//! outputs — created fresh per run, immutable once returned.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Segment;

/// Complete output of one scheduling simulation.
///
/// # Invariants
/// - `timestamps` is non-decreasing with `len(schedule) + 1` entries;
///   `timestamps[i]` is the start of `schedule[i]` and the last entry
///   is the end of the final segment.
/// - `timestamps[i+1] - timestamps[i]` covers `schedule[i].duration`
///   (within the 2-decimal rounding applied to timestamps). Under the
///   policies that emit explicit idle segments (SRTF, priority) the two
///   are equal; FCFS and Round Robin absorb idle gaps into timestamp
///   jumps, so a delta may exceed its segment's duration by the gap.
/// - Every process appears in `completion_map` exactly once, after all
///   of its bursts have executed.
///
/// The completion map is ordered (`BTreeMap`) so that identical inputs
/// serialize to identical output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Ordered execution segments (processes and explicit idle gaps).
    pub schedule: Vec<Segment>,
    /// Segment boundary instants, rounded to 2 decimal places.
    pub timestamps: Vec<f64>,
    /// Process id → instant its remaining time first reached zero.
    pub completion_map: BTreeMap<String, f64>,
    /// Per-process waiting times, in input order.
    pub waiting_times: Vec<(String, f64)>,
}

impl SimulationResult {
    /// Number of schedule segments.
    pub fn segment_count(&self) -> usize {
        self.schedule.len()
    }

    /// Total elapsed time: last timestamp minus first (0 if empty).
    pub fn total_time(&self) -> f64 {
        match (self.timestamps.first(), self.timestamps.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }

    /// Completion time for a process, if it ran.
    pub fn completion_time(&self, id: &str) -> Option<f64> {
        self.completion_map.get(id).copied()
    }

    /// Waiting time for a process, if it ran.
    pub fn waiting_time(&self, id: &str) -> Option<f64> {
        self.waiting_times
            .iter()
            .find(|(pid, _)| pid == id)
            .map(|&(_, wt)| wt)
    }

    /// Total processor time a process held across all its segments.
    pub fn busy_time_for(&self, id: &str) -> f64 {
        self.schedule
            .iter()
            .filter(|s| s.subject.label() == id && !s.is_idle())
            .map(|s| s.duration)
            .sum()
    }

    /// Total idle time across the schedule.
    pub fn idle_time(&self) -> f64 {
        self.schedule
            .iter()
            .filter(|s| s.is_idle())
            .map(|s| s.duration)
            .sum()
    }
}
