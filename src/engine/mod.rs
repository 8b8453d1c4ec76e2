//! Scheduling algorithms and the simulation entry point.
//!
//! Four classical single-processor policies over purely CPU-bound
//! bursts with zero-cost preemption:
//!
//! | Policy | Preemption | Selection key |
//! |--------|-----------|---------------|
//! | FCFS | none | arrival time |
//! | Round Robin | quantum expiry | FIFO |
//! | SRTF | on arrival | remaining time |
//! | Priority | on arrival | priority value |
//!
//! The policy set is fixed and closed, so dispatch goes through the
//! [`SchedulingPolicy`] enum and [`simulate`] rather than open-ended
//! polymorphism. Each policy is also exposed as its own pure function.
//!
//! Given the same input, every policy produces an identical
//! [`SimulationResult`](crate::models::SimulationResult) — the engine
//! is a deterministic, single-threaded computation with no I/O.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub(crate) mod core;
mod fcfs;
mod priority;
mod round_robin;
mod srtf;

pub use fcfs::fcfs;
pub use priority::priority_scheduling;
pub use round_robin::round_robin;
pub use srtf::srtf;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Process, SimulationResult};
use crate::validation::ValidationError;

/// The closed set of scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SchedulingPolicy {
    /// First-Come-First-Served (non-preemptive).
    Fcfs,
    /// Round Robin with a fixed time quantum.
    RoundRobin {
        /// Maximum CPU allotment per dispatch; must be > 0.
        quantum: f64,
    },
    /// Shortest Remaining Time First (preemptive).
    Srtf,
    /// Priority scheduling, preemptive on arrival.
    Priority,
}

impl SchedulingPolicy {
    /// Display name of the policy.
    pub fn name(&self) -> &'static str {
        match self {
            SchedulingPolicy::Fcfs => "FCFS",
            SchedulingPolicy::RoundRobin { .. } => "Round Robin",
            SchedulingPolicy::Srtf => "SRTF",
            SchedulingPolicy::Priority => "Priority Scheduling",
        }
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs one simulation under the given policy.
///
/// Validates the input and dispatches to the policy's algorithm. The
/// result is a pure output: schedule segments, boundary timestamps
/// (rounded to 2 decimal places), completion times, and waiting times.
///
/// # Errors
/// Returns every validation problem found — non-positive bursts,
/// negative arrivals, duplicate ids, empty input, and (for Round
/// Robin) a non-positive quantum. Invalid input never produces a
/// partial schedule.
///
/// # Example
///
/// ```
/// use cpu_sched::{simulate, Process, SchedulingPolicy};
///
/// let processes = vec![
///     Process::new("A", 0.0, 5.0),
///     Process::new("B", 1.0, 3.0),
/// ];
/// let result = simulate(SchedulingPolicy::Fcfs, &processes).unwrap();
/// assert_eq!(result.timestamps, vec![0.0, 5.0, 8.0]);
/// ```
pub fn simulate(
    policy: SchedulingPolicy,
    processes: &[Process],
) -> Result<SimulationResult, Vec<ValidationError>> {
    match policy {
        SchedulingPolicy::Fcfs => fcfs(processes),
        SchedulingPolicy::RoundRobin { quantum } => round_robin(processes, quantum),
        SchedulingPolicy::Srtf => srtf(processes),
        SchedulingPolicy::Priority => priority_scheduling(processes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("A", 0.0, 5.0).with_priority(2),
            Process::new("B", 1.0, 3.0).with_priority(1),
            Process::new("C", 2.0, 8.0).with_priority(3),
        ]
    }

    fn all_policies() -> Vec<SchedulingPolicy> {
        vec![
            SchedulingPolicy::Fcfs,
            SchedulingPolicy::RoundRobin { quantum: 2.0 },
            SchedulingPolicy::Srtf,
            SchedulingPolicy::Priority,
        ]
    }

    #[test]
    fn test_simulate_dispatch_matches_direct_calls() {
        let processes = sample_processes();
        assert_eq!(
            simulate(SchedulingPolicy::Fcfs, &processes).unwrap(),
            fcfs(&processes).unwrap()
        );
        assert_eq!(
            simulate(SchedulingPolicy::RoundRobin { quantum: 2.0 }, &processes).unwrap(),
            round_robin(&processes, 2.0).unwrap()
        );
        assert_eq!(
            simulate(SchedulingPolicy::Srtf, &processes).unwrap(),
            srtf(&processes).unwrap()
        );
        assert_eq!(
            simulate(SchedulingPolicy::Priority, &processes).unwrap(),
            priority_scheduling(&processes).unwrap()
        );
    }

    #[test]
    fn test_all_policies_reject_empty_input() {
        for policy in all_policies() {
            let errors = simulate(policy, &[]).unwrap_err();
            assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInput);
        }
    }

    #[test]
    fn test_determinism_byte_identical_output() {
        let processes = sample_processes();
        for policy in all_policies() {
            let a = simulate(policy, &processes).unwrap();
            let b = simulate(policy, &processes).unwrap();
            assert_eq!(
                serde_json::to_string(&a).unwrap(),
                serde_json::to_string(&b).unwrap()
            );
        }
    }

    #[test]
    fn test_timestamp_invariants_hold_for_all_policies() {
        let processes = vec![
            Process::new("A", 3.0, 4.0).with_priority(2),
            Process::new("B", 0.0, 2.0).with_priority(1),
            Process::new("C", 9.0, 1.0).with_priority(3),
        ];
        for policy in all_policies() {
            let result = simulate(policy, &processes).unwrap();
            assert_eq!(
                result.timestamps.len(),
                result.segment_count() + 1,
                "{policy}"
            );
            for pair in result.timestamps.windows(2) {
                assert!(pair[1] >= pair[0], "{policy}: timestamps must not decrease");
            }
            // Timestamp deltas cover each segment. FCFS and Round Robin
            // absorb idle gaps into timestamp jumps, so a delta may
            // exceed its segment's duration; SRTF and Priority emit
            // explicit idle segments, so deltas match exactly.
            let explicit_idle = matches!(
                policy,
                SchedulingPolicy::Srtf | SchedulingPolicy::Priority
            );
            for (i, segment) in result.schedule.iter().enumerate() {
                let delta = result.timestamps[i + 1] - result.timestamps[i];
                assert!(delta + 0.01 + 1e-9 >= segment.duration, "{policy}: segment {i}");
                if explicit_idle {
                    assert!(
                        (delta - segment.duration).abs() < 0.01 + 1e-9,
                        "{policy}: segment {i}"
                    );
                }
            }
            // Conservation: every process gets exactly its burst
            for p in &processes {
                assert!((result.busy_time_for(&p.id) - p.burst_time).abs() < 1e-9);
            }
            // Waiting-time identity, and no negative slack
            for (id, wt) in &result.waiting_times {
                let p = processes.iter().find(|p| &p.id == id).unwrap();
                let completion = result.completion_time(id).unwrap();
                assert!((wt - (completion - p.arrival_time - p.burst_time)).abs() < 1e-9);
                assert!(*wt >= -1e-9, "{policy}: negative waiting time for {id}");
            }
        }
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(SchedulingPolicy::Fcfs.name(), "FCFS");
        assert_eq!(
            SchedulingPolicy::RoundRobin { quantum: 2.0 }.to_string(),
            "Round Robin"
        );
        assert_eq!(SchedulingPolicy::Srtf.name(), "SRTF");
        assert_eq!(SchedulingPolicy::Priority.name(), "Priority Scheduling");
    }
}
