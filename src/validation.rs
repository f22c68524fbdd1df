//! Input validation for batch scheduling instances.
//!
//! Checks structural integrity of jobs and machine types before solving.
//! Detects:
//! - Jobs whose release time lies after their deadline
//! - Machine types that cannot hold a single job
//!
//! An empty machine list is not rejected here. It is a legal but
//! infeasible instance and surfaces from the solver as
//! [`SolveError::Infeasible`](crate::error::SolveError::Infeasible).

use serde::{Deserialize, Serialize};

use crate::models::Instance;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// A job's release time is after its deadline.
    InvertedWindow,
    /// A machine type has capacity 0.
    ZeroCapacity,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
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

/// Validates a batch scheduling instance.
///
/// Checks:
/// 1. Every job satisfies `release <= deadline`
/// 2. Every machine type has `capacity >= 1`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(instance: &Instance) -> ValidationResult {
    let mut errors = Vec::new();

    for (i, job) in instance.jobs.iter().enumerate() {
        if !job.is_well_formed() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedWindow,
                format!(
                    "Job {} has release {} after deadline {}",
                    i + 1,
                    job.release,
                    job.deadline
                ),
            ));
        }
    }

    for (t, machine) in instance.machines.iter().enumerate() {
        if machine.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCapacity,
                format!("Machine type {t} has capacity 0"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
