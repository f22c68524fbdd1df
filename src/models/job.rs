//! Job model.
//!
//! A job is a unit of work with a feasible execution window
//! `[release, deadline]`. Jobs are grouped into batches that execute at a
//! single shared instant, so the only timing information a job carries is
//! its window.
//!
//! # Indexing
//! Scheduling logic addresses jobs 1-indexed (index 0 is the "no jobs left"
//! sentinel of the cost table). Storage is a plain 0-indexed `Vec`; use
//! [`Instance::job`](super::Instance::job) for 1-indexed access.

use serde::{Deserialize, Serialize};

/// A job with an inclusive feasible window.
///
/// # Time Representation
/// Times are abstract integer instants. The consumer defines the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Job {
    /// Earliest instant the job may execute.
    pub release: i64,
    /// Latest instant the job may execute.
    pub deadline: i64,
}

impl Job {
    /// Creates a new job.
    ///
    /// The window is not checked here; see
    /// [`validate_instance`](crate::validation::validate_instance).
    pub fn new(release: i64, deadline: i64) -> Self {
        Self { release, deadline }
    }

    /// Whether the job may execute at instant `t`.
    #[inline]
    pub fn contains(&self, t: i64) -> bool {
        self.release <= t && t <= self.deadline
    }

    /// Number of distinct instants in the window (0 for an inverted window).
    #[inline]
    pub fn window_len(&self) -> u64 {
        if self.deadline < self.release {
            0
        } else {
            self.deadline.abs_diff(self.release).saturating_add(1)
        }
    }

    /// Whether `release <= deadline`.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.release <= self.deadline
    }
}
