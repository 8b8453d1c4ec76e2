//! Side-by-side policy comparison.
//!
//! Runs all four policies over one process set and reports per-policy
//! aggregate metrics — the data behind an average-waiting-time
//! comparison chart. Rendering is the visualizer's concern; this
//! module only produces the numbers.

use crate::engine::{simulate, SchedulingPolicy};
use crate::metrics::SimulationKpi;
use crate::models::Process;
use crate::validation::ValidationError;

/// Aggregate metrics for one policy over a shared process set.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyComparison {
    /// The policy that produced these numbers.
    pub policy: SchedulingPolicy,
    /// Mean waiting time under this policy.
    pub average_waiting_time: f64,
    /// Total elapsed time under this policy.
    pub total_time: f64,
}

/// Runs every policy over the same process set.
///
/// Results come back in fixed order: FCFS, Round Robin, SRTF,
/// Priority. The quantum applies to Round Robin only.
///
/// # Errors
/// Fails with the combined validation errors if the process set (or
/// quantum) is invalid; no partial comparison is produced.
pub fn compare_policies(
    processes: &[Process],
    quantum: f64,
) -> Result<Vec<PolicyComparison>, Vec<ValidationError>> {
    let policies = [
        SchedulingPolicy::Fcfs,
        SchedulingPolicy::RoundRobin { quantum },
        SchedulingPolicy::Srtf,
        SchedulingPolicy::Priority,
    ];

    let mut comparisons = Vec::with_capacity(policies.len());
    for policy in policies {
        let result = simulate(policy, processes)?;
        if let Some(kpi) = SimulationKpi::calculate(&result) {
            comparisons.push(PolicyComparison {
                policy,
                average_waiting_time: kpi.average_waiting_time,
                total_time: kpi.total_time,
            });
        }
    }
    Ok(comparisons)
}
