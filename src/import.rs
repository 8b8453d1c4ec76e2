//! Measured-execution-time import.
//!
//! Bridge from the external measurement collaborator, which runs real
//! workloads and reports a label → elapsed-seconds mapping. Each entry
//! becomes one process: the elapsed time (rounded to 2 decimal places)
//! is its burst, arrival times are assigned sequentially to preserve
//! the entry order, and priority defaults to 0.
//!
//! No coercion happens here beyond the rounding: a non-positive
//! measurement produces a process the engine rejects at validation.

use crate::engine::core::round2;
use crate::models::Process;

/// Converts measured execution times into a process list.
///
/// Entry `i` gets arrival time `i` so the processes display (and, under
/// FCFS, run) in measurement order.
///
/// # Example
///
/// ```
/// use cpu_sched::import::processes_from_measurements;
///
/// let measured = vec![
///     ("p1".to_string(), 4.217),
///     ("p2".to_string(), 6.903),
/// ];
/// let processes = processes_from_measurements(&measured);
/// assert_eq!(processes[0].arrival_time, 0.0);
/// assert_eq!(processes[1].arrival_time, 1.0);
/// assert_eq!(processes[0].burst_time, 4.22);
/// ```
pub fn processes_from_measurements(measurements: &[(String, f64)]) -> Vec<Process> {
    measurements
        .iter()
        .enumerate()
        .map(|(i, (label, elapsed))| Process::new(label.clone(), i as f64, round2(*elapsed)))
        .collect()
}
