//! Schedule segment model.
//!
//! A segment is one contiguous stretch of processor time: either a
//! process executing or the processor sitting idle waiting for the
//! next arrival. The ordered segment sequence is the schedule.

use serde::{Deserialize, Serialize};

/// What the processor is doing during a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Subject {
    /// A process (by id) is executing.
    Process(String),
    /// The processor is idle, pending a future arrival.
    Idle,
}

impl Subject {
    /// Display label: the process id, or `"Idle"`.
    pub fn label(&self) -> &str {
        match self {
            Subject::Process(id) => id,
            Subject::Idle => "Idle",
        }
    }

    /// Whether this subject is the idle sentinel.
    pub fn is_idle(&self) -> bool {
        matches!(self, Subject::Idle)
    }
}

/// One entry of a schedule: a subject and how long it held the processor.
///
/// Duration is always > 0; zero-length segments are never emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// The executing process, or idle.
    pub subject: Subject,
    /// How long the subject held the processor.
    pub duration: f64,
}

impl Segment {
    /// Creates an execution segment for a process.
    pub fn process(id: impl Into<String>, duration: f64) -> Self {
        Self {
            subject: Subject::Process(id.into()),
            duration,
        }
    }

    /// Creates an idle segment.
    pub fn idle(duration: f64) -> Self {
        Self {
            subject: Subject::Idle,
            duration,
        }
    }

    /// Whether this segment is idle time.
    pub fn is_idle(&self) -> bool {
        self.subject.is_idle()
    }
}
