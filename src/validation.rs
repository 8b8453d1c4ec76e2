//! Input validation for scheduling simulations.
//!
//! Checks structural integrity of a process set (and, for Round Robin,
//! the time quantum) before simulation. Detects:
//! - Empty input
//! - Non-positive burst times
//! - Negative arrival times
//! - Duplicate process ids
//! - Non-positive time quantum
//!
//! The engine never clamps or substitutes defaults: every failure is
//! surfaced to the caller, and all detected problems are reported at
//! once rather than stopping at the first.

use std::collections::HashSet;
use std::fmt;

use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Zero processes supplied; averages would be undefined.
    EmptyInput,
    /// A process requires zero or negative CPU time.
    NonPositiveBurst,
    /// A process arrives before t = 0.
    NegativeArrival,
    /// Two processes share the same id.
    DuplicateId,
    /// Round Robin called with a quantum ≤ 0.
    NonPositiveQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates a process set.
///
/// Checks:
/// 1. At least one process is supplied
/// 2. Every `burst_time` is strictly positive (and not NaN)
/// 3. Every `arrival_time` is ≥ 0 (and not NaN)
/// 4. No duplicate process ids
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process]) -> ValidationResult {
    if processes.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "No processes supplied",
        )]);
    }

    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    for p in processes {
        // `!(x > 0.0)` also rejects NaN
        if !(p.burst_time > 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst time {}",
                    p.id, p.burst_time
                ),
            ));
        }
        if !(p.arrival_time >= 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    p.id, p.arrival_time
                ),
            ));
        }
        if !seen_ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process id: {}", p.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a Round Robin time quantum.
pub fn validate_quantum(quantum: f64) -> ValidationResult {
    if quantum > 0.0 {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Time quantum must be > 0, got {quantum}"),
        )])
    }
}
