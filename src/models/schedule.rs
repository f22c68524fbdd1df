//! Schedule (solution) model.
//!
//! A schedule partitions jobs `1..=n` into contiguous batches, each served
//! by one machine type at one shared start time.

use serde::{Deserialize, Serialize};

/// A group of jobs executed together on one machine type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// 1-indexed job indices, ascending and contiguous.
    pub job_indices: Vec<usize>,
    /// Index of the serving machine type.
    pub machine_type: usize,
    /// Latest release time among the batch's jobs.
    pub start_time: i64,
}

/// A complete batch schedule with its total machine cost.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Sum of `cost_per_use` over all batches.
    pub total_cost: u64,
    /// Batches ordered by increasing job index.
    pub batches: Vec<Batch>,
}

impl Batch {
    /// Creates a batch over jobs `first..=last`.
    pub fn new(first: usize, last: usize, machine_type: usize, start_time: i64) -> Self {
        Self {
            job_indices: (first..=last).collect(),
            machine_type,
            start_time,
        }
    }

    /// Number of jobs in the batch.
    #[inline]
    pub fn size(&self) -> usize {
        self.job_indices.len()
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of batches.
    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Total number of scheduled jobs.
    pub fn job_count(&self) -> usize {
        self.batches.iter().map(Batch::size).sum()
    }

    /// Whether the batches partition `1..=num_jobs` into ordered,
    /// contiguous, non-overlapping ranges.
    pub fn is_partition_of(&self, num_jobs: usize) -> bool {
        let mut next = 1;
        for batch in &self.batches {
            if batch.job_indices.is_empty() {
                return false;
            }
            for &q in &batch.job_indices {
                if q != next {
                    return false;
                }
                next += 1;
            }
        }
        next == num_jobs + 1
    }
}
