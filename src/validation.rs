//! Input validation for process sets.
//!
//! Checks the assumptions the schedulers rely on before any run starts.
//! Detects:
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst durations
//! - Process sets whose timeline would not fit the clock
//!
//! All problems are collected, not just the first one.
//!
//! # Time Horizon
//! Every schedule ends no later than `max(arrival) + Σ burst`. A set passes
//! only if that sum is representable as `i64` and `Σ burst` is at most
//! [`MAX_TOTAL_BURST`], so schedulers never overflow the clock and a
//! round-robin timeline stays bounded.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::Process;

/// Largest total CPU demand accepted for one process set.
///
/// Round-robin emits one timeline entry per unit of burst.
pub const MAX_TOTAL_BURST: i64 = 10_000_000;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process needs no CPU time (or a negative amount).
    NonPositiveBurst,
    /// `max(arrival) + Σ burst` overflows, or `Σ burst` exceeds
    /// [`MAX_TOTAL_BURST`].
    HorizonTooLarge,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. Every arrival is >= 0
/// 3. Every burst is > 0
/// 4. `max(arrival) + Σ burst` fits in `i64` and `Σ burst <= MAX_TOTAL_BURST`
///
/// An empty set is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {} has negative arrival {}", p.id, p.arrival),
            ));
        }

        if p.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {} has burst {}", p.id, p.burst),
            ));
        }
    }

    if let Some(error) = check_horizon(processes) {
        errors.push(error);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_horizon(processes: &[Process]) -> Option<ValidationError> {
    let latest_arrival = processes.iter().map(|p| p.arrival.max(0)).max().unwrap_or(0);
    let total_burst = processes
        .iter()
        .try_fold(0i64, |acc, p| acc.checked_add(p.burst.max(0)));

    match total_burst.and_then(|total| total.checked_add(latest_arrival).map(|_| total)) {
        None => Some(ValidationError::new(
            ValidationErrorKind::HorizonTooLarge,
            "Schedule end time overflows (latest arrival + total burst)",
        )),
        Some(total) if total > MAX_TOTAL_BURST => Some(ValidationError::new(
            ValidationErrorKind::HorizonTooLarge,
            format!("Total burst {total} exceeds the limit of {MAX_TOTAL_BURST}"),
        )),
        Some(_) => None,
    }
}
