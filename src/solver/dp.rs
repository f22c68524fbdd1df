//! Minimum-cost batching by dynamic programming.
//!
//! # Recurrence
//!
//! ```text
//! A[0] = 0
//! A[q] = min over b in 1..=overlap(q) with a machine for b:
//!            A[q - b] + cost(first machine type with capacity >= b)
//! ```
//!
//! Every `A[q]` depends only on smaller indices, so the table is filled
//! from index 1 upward in a single pass. Ties keep the smallest batch
//! size (strict `<`).
//!
//! # Complexity
//! O(n * (w + k * m)) where n = jobs, w = widest job window,
//! k = largest overlap window, m = machine types.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::memo::{BatchChoice, MemoTable};
use super::overlap::max_batchable;
use super::reconstruct::reconstruct;
use crate::error::SolveError;
use crate::models::{Instance, MachineType, Schedule};

/// Order in which machine types are tried for a given batch size.
///
/// The first adequate machine type in this order serves the batch; no
/// other machine type is considered for that batch size, even a cheaper
/// one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineOrder {
    /// Instance order. Callers wanting the cheapest adequate machine must
    /// sort machine types by ascending cost themselves.
    #[default]
    Sequence,
    /// Ascending `cost_per_use`, ties kept in instance order.
    CheapestFirst,
}

/// Dynamic-programming batch scheduler.
///
/// # Example
///
/// ```
/// use u_batch::models::Instance;
/// use u_batch::solver::BatchSolver;
///
/// let instance = Instance::default()
///     .with_job(0, 2)
///     .with_job(1, 3)
///     .with_job(2, 4)
///     .with_machine(5, 3);
///
/// let solution = BatchSolver::new().solve(&instance).unwrap();
/// assert_eq!(solution.total_cost(), 5);
///
/// let schedule = solution.schedule(&instance).unwrap();
/// assert_eq!(schedule.batches.len(), 1);
/// assert_eq!(schedule.batches[0].job_indices, vec![1, 2, 3]);
/// assert_eq!(schedule.batches[0].start_time, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchSolver {
    machine_order: MachineOrder,
}

/// Filled cost and choice tables for one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    table: MemoTable,
    total_cost: u64,
}

impl BatchSolver {
    /// Creates a solver using instance machine order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the machine type order used for first-fit selection.
    pub fn with_machine_order(mut self, order: MachineOrder) -> Self {
        self.machine_order = order;
        self
    }

    /// Returns the configured machine order.
    pub fn machine_order(&self) -> MachineOrder {
        self.machine_order
    }

    /// Computes the minimum total cost of scheduling every job.
    ///
    /// # Errors
    /// - [`SolveError::Infeasible`] if some prefix of jobs has no usable
    ///   last batch (e.g. there are no machine types).
    /// - [`SolveError::CostOverflow`] if a prefix cost exceeds `u64`.
    pub fn solve(&self, instance: &Instance) -> Result<Solution, SolveError> {
        let n = instance.num_jobs();
        let priority = self.machine_priority(&instance.machines);
        let mut table = MemoTable::new(n);

        for q in 1..=n {
            let max_batch = max_batchable(&instance.jobs, q);
            let mut best: Option<(u64, BatchChoice)> = None;

            for batch_size in 1..=max_batch {
                // Capacity is monotone: larger batches cannot fit either.
                let Some(machine_type) = first_fit(&instance.machines, &priority, batch_size)
                else {
                    debug!("job {q}: no machine type can hold {batch_size} jobs");
                    break;
                };
                let Some(prev) = table.cost(q - batch_size) else {
                    continue;
                };
                let candidate = prev
                    .checked_add(instance.machines[machine_type].cost_per_use)
                    .ok_or(SolveError::CostOverflow { job: q })?;

                if best.is_none_or(|(cost, _)| candidate < cost) {
                    best = Some((
                        candidate,
                        BatchChoice {
                            batch_size,
                            machine_type,
                        },
                    ));
                }
            }

            let Some((cost, choice)) = best else {
                return Err(SolveError::Infeasible { job: q });
            };
            debug!(
                "job {q}: window {max_batch}, cost {cost}, last batch {} on machine type {}",
                choice.batch_size, choice.machine_type
            );
            table.record(q, cost, choice);
        }

        let total_cost = table.cost(n).unwrap_or(0);
        info!("solved {n} jobs with minimum cost {total_cost}");
        Ok(Solution { table, total_cost })
    }

    /// Solves and reconstructs the batch schedule in one step.
    pub fn schedule(&self, instance: &Instance) -> Result<Schedule, SolveError> {
        self.solve(instance)?.schedule(instance)
    }

    fn machine_priority(&self, machines: &[MachineType]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..machines.len()).collect();
        if self.machine_order == MachineOrder::CheapestFirst {
            order.sort_by_key(|&t| machines[t].cost_per_use);
        }
        order
    }
}

impl Solution {
    /// Minimum cost of scheduling all jobs.
    pub fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// Minimum cost of scheduling jobs `1..=q` (`q = 0` gives 0).
    pub fn min_cost(&self, q: usize) -> Option<u64> {
        self.table.cost(q)
    }

    /// Last-batch choice recorded for index `q`.
    pub fn choice(&self, q: usize) -> Option<BatchChoice> {
        self.table.choice(q)
    }

    /// The underlying memo tables.
    pub fn table(&self) -> &MemoTable {
        &self.table
    }

    /// Reconstructs the batch schedule from the recorded choices.
    pub fn schedule(&self, instance: &Instance) -> Result<Schedule, SolveError> {
        reconstruct(instance, &self.table)
    }
}

/// First machine type in `priority` order able to hold `batch_size` jobs.
fn first_fit(machines: &[MachineType], priority: &[usize], batch_size: usize) -> Option<usize> {
    priority
        .iter()
        .copied()
        .find(|&t| machines[t].fits(batch_size))
}
