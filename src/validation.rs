//! Admission validation for simulated processes.
//!
//! Checks a process definition before it enters the pending pool. Detects:
//! - Unusable identifiers (blank, or numeric zero unless allowed)
//! - Negative arrival times
//! - Non-positive burst times
//! - Duplicate identifiers (when the configuration forbids them)
//!
//! All problems of one definition are reported together. Validation never
//! mutates anything; callers admit only on `Ok(())`.

use crate::config::SimulatorConfig;
use crate::models::{Process, ProcessId};
use std::collections::HashSet;

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
    /// Identifier is blank, or a numeric zero while zero ids are refused.
    InvalidId,
    /// Arrival time below zero.
    NegativeArrivalTime,
    /// Burst time of zero or less.
    NonPositiveBurstTime,
    /// Identifier already used by another process.
    DuplicateId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates one process definition against the already admitted set.
///
/// Checks:
/// 1. Identifier is not blank
/// 2. Identifier is not a numeric zero, unless `config.allow_zero_id`
/// 3. `arrival_time >= 0`
/// 4. `burst_time > 0`
/// 5. Identifier not already admitted, unless `config.allow_duplicate_ids`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_process(
    process: &Process,
    admitted: &[Process],
    config: &SimulatorConfig,
) -> ValidationResult {
    let mut errors = check_fields(process, config);

    if !config.allow_duplicate_ids && admitted.iter().any(|p| p.id == process.id) {
        errors.push(duplicate(&process.id));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a batch of definitions, including duplicates within the batch.
///
/// # Returns
/// `Ok(())` if every definition is admissible, `Err(errors)` otherwise.
pub fn validate_input(
    processes: &[Process],
    admitted: &[Process],
    config: &SimulatorConfig,
) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids: HashSet<&ProcessId> = admitted.iter().map(|p| &p.id).collect();

    for process in processes {
        errors.extend(check_fields(process, config));
        if !ids.insert(&process.id) && !config.allow_duplicate_ids {
            errors.push(duplicate(&process.id));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_fields(process: &Process, config: &SimulatorConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if process.id.is_blank() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidId,
            "Process ID must not be empty",
        ));
    } else if process.id.is_zero() && !config.allow_zero_id {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidId,
            format!("Process ID '{}' is zero", process.id),
        ));
    }

    if process.arrival_time < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeArrivalTime,
            format!(
                "Process '{}' has negative arrival time {}",
                process.id, process.arrival_time
            ),
        ));
    }

    if process.burst_time <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveBurstTime,
            format!(
                "Process '{}' has non-positive burst time {}",
                process.id, process.burst_time
            ),
        ));
    }

    errors
}

fn duplicate(id: &ProcessId) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::DuplicateId,
        format!("Duplicate process ID: {id}"),
    )
}
