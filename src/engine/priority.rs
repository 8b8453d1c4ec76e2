//! Priority scheduling (preemptive on arrival).
//!
//! Same control structure as SRTF with the priority value as the
//! selection key (lower value = higher priority). A priority never
//! changes during execution, so re-evaluating only at arrival
//! boundaries means a running process is interrupted exactly when a
//! higher-priority process arrives — never by elapsed time alone.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3.4

use super::core::{finalize, run_preemptive, ProcessArena};
use crate::models::{Process, SimulationResult};
use crate::validation::{validate_input, ValidationError};

/// Simulates preemptive-on-arrival priority scheduling.
///
/// Ties on priority are broken by arrival order.
pub fn priority_scheduling(processes: &[Process]) -> Result<SimulationResult, Vec<ValidationError>> {
    validate_input(processes)?;

    let mut arena = ProcessArena::from_processes(processes);
    let (timeline, completion_map) = run_preemptive(&mut arena, |state| state.priority as f64);
    Ok(finalize(&arena, timeline, completion_map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Segment;
    use crate::validation::ValidationErrorKind;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_priority_preempted_by_higher_priority_arrival() {
        let processes = vec![
            Process::new("A", 0.0, 5.0).with_priority(2),
            Process::new("B", 1.0, 4.0).with_priority(1),
        ];
        let result = priority_scheduling(&processes).unwrap();

        // A runs 0-1, B (higher priority) arrives and runs 1-5, A resumes 5-9
        assert_eq!(
            result.schedule,
            vec![
                Segment::process("A", 1.0),
                Segment::process("B", 4.0),
                Segment::process("A", 4.0),
            ]
        );
        assert_eq!(result.timestamps, vec![0.0, 1.0, 5.0, 9.0]);
        assert!(approx(result.completion_time("B").unwrap(), 5.0));
        assert!(approx(result.completion_time("A").unwrap(), 9.0));
        assert!(approx(result.waiting_time("A").unwrap(), 4.0));
    }

    #[test]
    fn test_priority_lower_priority_arrival_waits() {
        let processes = vec![
            Process::new("A", 0.0, 5.0).with_priority(1),
            Process::new("B", 1.0, 2.0).with_priority(3),
        ];
        let result = priority_scheduling(&processes).unwrap();

        // B's arrival closes A's segment but cannot overtake it
        assert_eq!(
            result.schedule,
            vec![
                Segment::process("A", 1.0),
                Segment::process("A", 4.0),
                Segment::process("B", 2.0),
            ]
        );
        assert!(approx(result.completion_time("A").unwrap(), 5.0));
        assert!(approx(result.completion_time("B").unwrap(), 7.0));
    }

    #[test]
    fn test_priority_equal_priorities_arrival_order() {
        let processes = vec![
            Process::new("A", 0.0, 3.0).with_priority(1),
            Process::new("B", 0.0, 3.0).with_priority(1),
        ];
        let result = priority_scheduling(&processes).unwrap();
        assert_eq!(result.schedule[0], Segment::process("A", 3.0));
        assert_eq!(result.schedule[1], Segment::process("B", 3.0));
    }

    #[test]
    fn test_priority_idle_gap() {
        let result =
            priority_scheduling(&[Process::new("A", 5.0, 3.0).with_priority(1)]).unwrap();
        assert_eq!(
            result.schedule,
            vec![Segment::idle(5.0), Segment::process("A", 3.0)]
        );
        assert_eq!(result.timestamps, vec![0.0, 5.0, 8.0]);
    }

    #[test]
    fn test_priority_negative_values_dispatch_first() {
        let processes = vec![
            Process::new("A", 0.0, 2.0).with_priority(0),
            Process::new("B", 0.0, 2.0).with_priority(-5),
        ];
        let result = priority_scheduling(&processes).unwrap();
        assert_eq!(result.schedule[0], Segment::process("B", 2.0));
    }

    #[test]
    fn test_priority_three_way() {
        let processes = vec![
            Process::new("A", 0.0, 4.0).with_priority(3),
            Process::new("B", 1.0, 3.0).with_priority(2),
            Process::new("C", 2.0, 2.0).with_priority(1),
        ];
        let result = priority_scheduling(&processes).unwrap();

        // A 0-1, B preempts 1-2, C preempts 2-4, B resumes 4-6, A resumes 6-9
        assert_eq!(
            result.schedule,
            vec![
                Segment::process("A", 1.0),
                Segment::process("B", 1.0),
                Segment::process("C", 2.0),
                Segment::process("B", 2.0),
                Segment::process("A", 3.0),
            ]
        );
        assert_eq!(result.timestamps, vec![0.0, 1.0, 2.0, 4.0, 6.0, 9.0]);
        for p in &processes {
            assert!(approx(result.busy_time_for(&p.id), p.burst_time));
        }
    }

    #[test]
    fn test_priority_empty_input() {
        let errors = priority_scheduling(&[]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInput);
    }
}
