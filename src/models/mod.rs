//! Scheduling domain models.
//!
//! Core value types shared by every policy: the immutable [`Process`]
//! input record and the [`SimulationResult`] output (schedule segments,
//! timestamps, completion times, waiting times).
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Schedulable unit of work (input) |
//! | `Segment` / `Subject` | One timeline entry (output) |
//! | `SimulationResult` | Complete run output |

mod process;
mod result;
mod segment;

pub use process::Process;
pub use result::SimulationResult;
pub use segment::{Segment, Subject};
