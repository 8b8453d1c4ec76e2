//! First-Come-First-Served.
//!
//! Non-preemptive: processes run to completion in arrival order, ties
//! broken by input order. Idle time before a late arrival is absorbed
//! into a timestamp jump rather than an explicit idle segment — the
//! one policy that needs no idle bookkeeping beyond the jump.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.1

use std::collections::BTreeMap;

use super::core::{finalize, ProcessArena, Timeline};
use crate::models::{Process, SimulationResult};
use crate::validation::{validate_input, ValidationError};

/// Simulates First-Come-First-Served scheduling.
///
/// Input order need not be sorted; processes with equal arrival times
/// keep their input order.
pub fn fcfs(processes: &[Process]) -> Result<SimulationResult, Vec<ValidationError>> {
    validate_input(processes)?;

    let arena = ProcessArena::from_processes(processes);
    let mut timeline = Timeline::new();
    let mut completion_map = BTreeMap::new();

    for handle in arena.handles_by_arrival() {
        let state = arena.get(handle);
        timeline.advance_to(state.arrival_time);
        timeline.run(&state.id, state.burst_time);
        completion_map.insert(state.id.clone(), timeline.clock());
    }

    Ok(finalize(&arena, timeline, completion_map))
}
