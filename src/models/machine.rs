//! Machine type model.
//!
//! A machine type processes one batch per use at a flat cost, accepting
//! at most `capacity` jobs in that batch. Machine types live in an ordered
//! sequence; the order is significant because batch-size lookups take the
//! first adequate type (see [`MachineOrder`](crate::solver::MachineOrder)).

use serde::{Deserialize, Serialize};

/// A batch-capable machine type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MachineType {
    /// Cost charged each time the machine type serves a batch.
    pub cost_per_use: u64,
    /// Maximum number of jobs in one batch.
    pub capacity: usize,
}

impl MachineType {
    /// Creates a new machine type.
    pub fn new(cost_per_use: u64, capacity: usize) -> Self {
        Self {
            cost_per_use,
            capacity,
        }
    }

    /// Whether a batch of `batch_size` jobs fits on this machine type.
    #[inline]
    pub fn fits(&self, batch_size: usize) -> bool {
        self.capacity >= batch_size
    }
}
