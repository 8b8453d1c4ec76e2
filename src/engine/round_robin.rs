//! Round Robin.
//!
//! Every process gets at most one time quantum per dispatch. All
//! processes are loaded into the FIFO queue up front in arrival order;
//! a process preempted by the quantum goes to the back of the queue,
//! behind everything already waiting. The clock is only ever pulled
//! forward by a popped process's own arrival time, which can matter
//! only for the very first dispatch.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::{BTreeMap, VecDeque};

use super::core::{finalize, Handle, ProcessArena, Timeline};
use crate::models::{Process, SimulationResult};
use crate::validation::{validate_input, validate_quantum, ValidationError};

/// Simulates Round Robin scheduling with the given time quantum.
pub fn round_robin(
    processes: &[Process],
    time_quantum: f64,
) -> Result<SimulationResult, Vec<ValidationError>> {
    let mut errors = Vec::new();
    if let Err(e) = validate_input(processes) {
        errors.extend(e);
    }
    if let Err(e) = validate_quantum(time_quantum) {
        errors.extend(e);
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let mut arena = ProcessArena::from_processes(processes);
    let mut queue: VecDeque<Handle> = arena.handles_by_arrival().into();
    let mut timeline = Timeline::new();
    let mut completion_map = BTreeMap::new();

    while let Some(handle) = queue.pop_front() {
        let id = arena.get(handle).id.clone();
        let arrival = arena.get(handle).arrival_time;
        let remaining = arena.get(handle).remaining_time;

        timeline.advance_to(arrival);

        if remaining <= time_quantum {
            timeline.run(&id, remaining);
            arena.get_mut(handle).remaining_time = 0.0;
            completion_map.insert(id, timeline.clock());
        } else {
            timeline.run(&id, time_quantum);
            arena.get_mut(handle).remaining_time -= time_quantum;
            queue.push_back(handle);
        }
    }

    Ok(finalize(&arena, timeline, completion_map))
}
