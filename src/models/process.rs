//! Process model.
//!
//! A process is the schedulable unit of work: it arrives at a point in
//! time, requires a fixed amount of CPU time, and optionally carries a
//! priority. Processes are immutable inputs — per-run mutable state
//! (remaining time) lives in the engine, not here.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 3

use serde::{Deserialize, Serialize};

/// A process to be scheduled.
///
/// # Time Representation
/// All times are real numbers in arbitrary units (the consumer decides
/// whether a unit is a millisecond, a second, or a tick). `arrival_time`
/// must be ≥ 0 and `burst_time` must be > 0; the engine rejects anything
/// else at validation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (label shown in the schedule).
    pub id: String,
    /// Instant the process becomes eligible to run.
    pub arrival_time: f64,
    /// Total CPU time required before completion.
    pub burst_time: f64,
    /// Scheduling priority — lower value = higher priority.
    ///
    /// Only meaningful to priority scheduling; other policies ignore it.
    pub priority: i32,
}

impl Process {
    /// Creates a new process with default priority 0.
    pub fn new(id: impl Into<String>, arrival_time: f64, burst_time: f64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority (lower = higher priority).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Turnaround time for a given completion instant.
    #[inline]
    pub fn turnaround_time(&self, completion_time: f64) -> f64 {
        completion_time - self.arrival_time
    }

    /// Waiting time for a given completion instant.
    ///
    /// Turnaround minus required CPU time. Holds for preemptive and
    /// non-preemptive policies alike, no matter how often the process
    /// was interrupted.
    #[inline]
    pub fn waiting_time(&self, completion_time: f64) -> f64 {
        self.turnaround_time(completion_time) - self.burst_time
    }
}
