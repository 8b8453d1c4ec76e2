//! Shared event-driven primitives for the scheduling policies.
//!
//! All four policies are built from the same pieces:
//!
//! - [`ProcessArena`] — per-run mutable process state, indexed by a
//!   stable handle assigned at validation time. Queues hold handles,
//!   never copies, so there is exactly one view of a process's
//!   remaining time.
//! - [`Timeline`] — the simulation clock plus the segment/timestamp
//!   accumulator. Every segment's timestamp is its start instant; the
//!   closing timestamp is appended once at [`Timeline::finish`].
//! - [`run_preemptive`] — the arrival-boundary preemption loop shared
//!   by SRTF and priority scheduling, generic over the selection key.
//!
//! Re-evaluating the dispatch choice only at arrival boundaries is
//! sufficient: between two consecutive arrivals no waiting process's
//! key can improve relative to the running one, so only a new arrival
//! can overtake it.

use std::collections::{BTreeMap, VecDeque};

use crate::models::{Process, Segment, SimulationResult};

/// Stable index into a [`ProcessArena`].
pub(crate) type Handle = usize;

/// Engine-owned mutable state for one process during one run.
#[derive(Debug, Clone)]
pub(crate) struct RuntimeProcessState {
    pub id: String,
    pub arrival_time: f64,
    /// Original burst, captured at arena construction. Never mutated;
    /// waiting times are always derived from this, not from
    /// `remaining_time`.
    pub burst_time: f64,
    /// CPU time still required. Non-increasing; 0 means complete.
    pub remaining_time: f64,
    pub priority: i32,
}

/// Arena of per-run process state.
///
/// Handles are positions in input order, so iterating the arena yields
/// processes in the order the caller supplied them.
#[derive(Debug)]
pub(crate) struct ProcessArena {
    states: Vec<RuntimeProcessState>,
}

impl ProcessArena {
    pub fn from_processes(processes: &[Process]) -> Self {
        let states = processes
            .iter()
            .map(|p| RuntimeProcessState {
                id: p.id.clone(),
                arrival_time: p.arrival_time,
                burst_time: p.burst_time,
                remaining_time: p.burst_time,
                priority: p.priority,
            })
            .collect();
        Self { states }
    }

    pub fn get(&self, handle: Handle) -> &RuntimeProcessState {
        &self.states[handle]
    }

    pub fn get_mut(&mut self, handle: Handle) -> &mut RuntimeProcessState {
        &mut self.states[handle]
    }

    pub fn iter(&self) -> impl Iterator<Item = &RuntimeProcessState> {
        self.states.iter()
    }

    /// Handles sorted by arrival time, ties broken by input order.
    pub fn handles_by_arrival(&self) -> Vec<Handle> {
        let mut handles: Vec<Handle> = (0..self.states.len()).collect();
        handles.sort_by(|&a, &b| {
            self.states[a]
                .arrival_time
                .total_cmp(&self.states[b].arrival_time)
        });
        handles
    }
}

/// Rounds to 2 decimal places (the output contract for timestamps).
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Simulation clock plus segment/timestamp accumulator.
#[derive(Debug)]
pub(crate) struct Timeline {
    segments: Vec<Segment>,
    timestamps: Vec<f64>,
    clock: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            timestamps: Vec::new(),
            clock: 0.0,
        }
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Jumps the clock forward without emitting a segment.
    ///
    /// FCFS absorbs idle gaps this way: the jump shows up as a
    /// timestamp gap, not an explicit idle segment. No-op if `t` is
    /// not ahead of the clock.
    pub fn advance_to(&mut self, t: f64) {
        if t > self.clock {
            self.clock = t;
        }
    }

    /// Runs a process for `duration`, emitting its segment and start
    /// timestamp and advancing the clock.
    pub fn run(&mut self, id: &str, duration: f64) {
        self.timestamps.push(self.clock);
        self.segments.push(Segment::process(id, duration));
        self.clock += duration;
    }

    /// Emits an explicit idle segment covering the gap up to `t`.
    pub fn idle_until(&mut self, t: f64) {
        let gap = t - self.clock;
        if gap > 0.0 {
            self.timestamps.push(self.clock);
            self.segments.push(Segment::idle(gap));
            self.clock = t;
        }
    }

    /// Appends the closing timestamp and rounds all timestamps to 2
    /// decimal places.
    pub fn finish(mut self) -> (Vec<Segment>, Vec<f64>) {
        self.timestamps.push(self.clock);
        let timestamps = self.timestamps.into_iter().map(round2).collect();
        (self.segments, timestamps)
    }
}

/// Assembles the final result, deriving waiting times from the
/// original burst captured in the arena.
///
/// Waiting times are listed in input order. A process absent from the
/// completion map (impossible after validation, since every valid
/// process runs to completion) is simply skipped.
pub(crate) fn finalize(
    arena: &ProcessArena,
    timeline: Timeline,
    completion_map: BTreeMap<String, f64>,
) -> SimulationResult {
    let waiting_times = arena
        .iter()
        .filter_map(|state| {
            completion_map
                .get(&state.id)
                .map(|&completion| (state.id.clone(), completion - state.arrival_time - state.burst_time))
        })
        .collect();

    let (schedule, timestamps) = timeline.finish();
    SimulationResult {
        schedule,
        timestamps,
        completion_map,
        waiting_times,
    }
}

/// Arrival-boundary preemption loop shared by SRTF and priority
/// scheduling.
///
/// `key` scores a ready process; the lowest score is dispatched, ties
/// broken by ready-pool insertion order (arrival order — the sort is
/// stable). The dispatched process runs until it completes or the next
/// pending process arrives, whichever comes first; a preempted process
/// is re-inserted into the ready pool with its remaining time
/// decremented. Gaps with nothing ready produce explicit idle segments.
pub(crate) fn run_preemptive<K>(
    arena: &mut ProcessArena,
    key: K,
) -> (Timeline, BTreeMap<String, f64>)
where
    K: Fn(&RuntimeProcessState) -> f64,
{
    let mut pending: VecDeque<Handle> = arena.handles_by_arrival().into();
    let mut ready: Vec<Handle> = Vec::new();
    let mut timeline = Timeline::new();
    let mut completion_map = BTreeMap::new();

    while !pending.is_empty() || !ready.is_empty() {
        // Admit everything that has arrived by now
        while let Some(&handle) = pending.front() {
            if arena.get(handle).arrival_time > timeline.clock() {
                break;
            }
            pending.pop_front();
            ready.push(handle);
        }

        if ready.is_empty() {
            if let Some(&next) = pending.front() {
                timeline.idle_until(arena.get(next).arrival_time);
            }
            continue;
        }

        // Stable sort keeps arrival order among equal keys
        ready.sort_by(|&a, &b| key(arena.get(a)).total_cmp(&key(arena.get(b))));
        let handle = ready.remove(0);

        let next_arrival = pending
            .front()
            .map(|&h| arena.get(h).arrival_time)
            .unwrap_or(f64::INFINITY);
        let time_to_next_arrival = next_arrival - timeline.clock();

        let id = arena.get(handle).id.clone();
        let remaining = arena.get(handle).remaining_time;

        if remaining <= time_to_next_arrival {
            timeline.run(&id, remaining);
            arena.get_mut(handle).remaining_time = 0.0;
            completion_map.insert(id, timeline.clock());
        } else {
            // Preempted by the imminent arrival
            timeline.run(&id, time_to_next_arrival);
            arena.get_mut(handle).remaining_time -= time_to_next_arrival;
            ready.push(handle);
        }
    }

    (timeline, completion_map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_run_and_finish() {
        let mut t = Timeline::new();
        t.run("A", 5.0);
        t.run("B", 3.0);
        let (schedule, timestamps) = t.finish();
        assert_eq!(schedule.len(), 2);
        assert_eq!(timestamps, vec![0.0, 5.0, 8.0]);
    }

    #[test]
    fn test_timeline_advance_absorbs_gap() {
        let mut t = Timeline::new();
        t.advance_to(4.0);
        t.advance_to(2.0); // Never moves backwards
        assert_eq!(t.clock(), 4.0);
        t.run("A", 1.0);
        let (schedule, timestamps) = t.finish();
        // Gap shows up as a timestamp jump, not a segment
        assert_eq!(schedule.len(), 1);
        assert_eq!(timestamps, vec![4.0, 5.0]);
    }

    #[test]
    fn test_timeline_idle_segment() {
        let mut t = Timeline::new();
        t.idle_until(5.0);
        t.run("A", 3.0);
        let (schedule, timestamps) = t.finish();
        assert!(schedule[0].is_idle());
        assert_eq!(schedule[0].duration, 5.0);
        assert_eq!(timestamps, vec![0.0, 5.0, 8.0]);
    }

    #[test]
    fn test_timeline_idle_noop_when_caught_up() {
        let mut t = Timeline::new();
        t.run("A", 2.0);
        t.idle_until(2.0);
        let (schedule, _) = t.finish();
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn test_timestamp_rounding() {
        let mut t = Timeline::new();
        t.run("A", 1.0 / 3.0);
        let (_, timestamps) = t.finish();
        assert_eq!(timestamps, vec![0.0, 0.33]);
    }

    #[test]
    fn test_arena_arrival_order_stable() {
        let processes = vec![
            Process::new("B", 1.0, 2.0),
            Process::new("A", 0.0, 2.0),
            Process::new("C", 1.0, 2.0),
        ];
        let arena = ProcessArena::from_processes(&processes);
        let order = arena.handles_by_arrival();
        let ids: Vec<&str> = order.iter().map(|&h| arena.get(h).id.as_str()).collect();
        // Equal arrivals keep input order: B before C
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(5.678), 5.68);
        assert_eq!(round2(2.0), 2.0);
        assert_eq!(round2(0.333_333), 0.33);
    }
}
