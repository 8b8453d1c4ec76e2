//! Shortest Remaining Time First (preemptive).
//!
//! The ready process with the least remaining time runs until it
//! completes or a new process arrives, whichever comes first. The
//! choice is re-evaluated only at arrival boundaries: between two
//! arrivals only the running process's remaining time changes, and it
//! only decreases, so nothing already waiting can overtake it.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.2

use super::core::{finalize, run_preemptive, ProcessArena};
use crate::models::{Process, SimulationResult};
use crate::validation::{validate_input, ValidationError};

/// Simulates preemptive Shortest-Remaining-Time-First scheduling.
///
/// Ties on remaining time are broken by arrival order. Gaps with no
/// ready process produce explicit idle segments.
pub fn srtf(processes: &[Process]) -> Result<SimulationResult, Vec<ValidationError>> {
    validate_input(processes)?;

    let mut arena = ProcessArena::from_processes(processes);
    let (timeline, completion_map) = run_preemptive(&mut arena, |state| state.remaining_time);
    Ok(finalize(&arena, timeline, completion_map))
}
