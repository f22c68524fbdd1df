//! Error types.
//!
//! Every failure is local and deterministic: re-running with the same input
//! yields the same error, so nothing here is retryable.

use thiserror::Error;

use crate::validation::ValidationError;

/// Failure while reading an instance file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read instance: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("declared {declared} {section} but found {found}")]
    ShapeMismatch {
        section: &'static str,
        declared: usize,
        found: usize,
    },

    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),

    #[error("invalid instance: {}", join_messages(.0))]
    Invalid(Vec<ValidationError>),
}

/// Failure inside the solver or during schedule reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// No allowed batch size ending at this job has a usable machine type.
    #[error("instance is infeasible: no machine type can serve any batch ending at job {job}")]
    Infeasible { job: usize },

    /// The choice table has no entry where reconstruction needs one.
    #[error("no batch choice recorded for job {job}")]
    MissingChoice { job: usize },

    #[error("total cost overflows at job {job}")]
    CostOverflow { job: usize },
}

/// Umbrella error for the end-to-end pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize schedule: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
