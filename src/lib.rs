//! CPU scheduling simulation engine.
//!
//! Simulates single-processor process scheduling under four classical
//! policies — FCFS, Round Robin, SRTF, and preemptive priority — and
//! produces the exact execution timeline, per-process completion
//! times, and per-process waiting times for a given process set.
//!
//! The engine is a deterministic, purely functional computation over
//! an immutable input: no I/O, no blocking, no shared state. Consumers
//! (table editors, Gantt visualizers, comparison charts) sit outside
//! this crate and only exchange [`Process`] lists and
//! [`SimulationResult`] values with it.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `Segment`, `Subject`,
//!   `SimulationResult`
//! - **`validation`**: Input integrity checks (bursts, arrivals,
//!   duplicate ids, quantum)
//! - **`engine`**: The four policies and the `simulate` entry point
//! - **`metrics`**: Aggregate KPIs (average/maximum waiting time, total time)
//! - **`compare`**: All four policies over one process set, side by side
//! - **`import`**: Measured-execution-time import interface
//! - **`workload`**: Random process-set generation for experiments
//!
//! # Example
//!
//! ```
//! use cpu_sched::{simulate, Process, SchedulingPolicy, SimulationKpi};
//!
//! let processes = vec![
//!     Process::new("A", 0.0, 8.0),
//!     Process::new("B", 1.0, 4.0),
//! ];
//! let result = simulate(SchedulingPolicy::Srtf, &processes).unwrap();
//! assert_eq!(result.timestamps, vec![0.0, 1.0, 5.0, 12.0]);
//!
//! let kpi = SimulationKpi::calculate(&result).unwrap();
//! assert!((kpi.average_waiting_time - 2.0).abs() < 1e-9);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod compare;
pub mod engine;
pub mod import;
pub mod metrics;
pub mod models;
pub mod validation;
pub mod workload;

pub use compare::{compare_policies, PolicyComparison};
pub use engine::{fcfs, priority_scheduling, round_robin, simulate, srtf, SchedulingPolicy};
pub use metrics::SimulationKpi;
pub use models::{Process, Segment, SimulationResult, Subject};
pub use validation::{ValidationError, ValidationErrorKind};
