//! Cost and choice tables.
//!
//! Entry `q` holds the minimum cost of scheduling jobs `1..=q` and the
//! last-batch decision that achieves it. Index 0 is the empty prefix:
//! its cost is 0 and it never carries a choice. Each entry is written at
//! most once, cost and choice together.

use serde::{Deserialize, Serialize};

/// The last-batch decision justifying a cost entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BatchChoice {
    /// Number of jobs in the batch ending at this index (>= 1).
    pub batch_size: usize,
    /// Machine type serving that batch.
    pub machine_type: usize,
}

/// Memoized cost table `A` and choice table `C`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoTable {
    costs: Vec<Option<u64>>,
    choices: Vec<Option<BatchChoice>>,
}

impl MemoTable {
    /// Creates tables for `num_jobs` jobs with only the base case filled.
    pub fn new(num_jobs: usize) -> Self {
        let mut costs = vec![None; num_jobs + 1];
        costs[0] = Some(0);
        Self {
            costs,
            choices: vec![None; num_jobs + 1],
        }
    }

    /// Number of jobs the tables cover.
    #[inline]
    pub fn num_jobs(&self) -> usize {
        self.costs.len() - 1
    }

    /// Minimum cost of scheduling jobs `1..=q`, if known.
    #[inline]
    pub fn cost(&self, q: usize) -> Option<u64> {
        self.costs.get(q).copied().flatten()
    }

    /// Choice recorded for index `q`, if any.
    #[inline]
    pub fn choice(&self, q: usize) -> Option<BatchChoice> {
        self.choices.get(q).copied().flatten()
    }

    /// Records the solution for index `q >= 1`.
    ///
    /// Writing the same index twice breaks the memoization contract.
    pub(crate) fn record(&mut self, q: usize, cost: u64, choice: BatchChoice) {
        debug_assert!(q >= 1, "index 0 is the fixed base case");
        debug_assert!(self.costs[q].is_none(), "index {q} already recorded");
        self.costs[q] = Some(cost);
        self.choices[q] = Some(choice);
    }
}
