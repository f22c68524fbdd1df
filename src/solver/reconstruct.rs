//! Backward reconstruction of the batch schedule from recorded choices.

use crate::error::SolveError;
use crate::models::{Batch, Instance, Schedule};

use super::memo::MemoTable;

/// Walks the choice table from the last job back to index 0.
///
/// Each recorded choice at `q` yields the batch `q - size + 1 ..= q`,
/// started at the latest release among its jobs. Batches are returned in
/// ascending job order and `total_cost` is the sum of their machine
/// costs.
///
/// # Errors
/// [`SolveError::MissingChoice`] if an index on the walk has no recorded
/// choice (the tables were not filled by a successful solve).
pub fn reconstruct(instance: &Instance, table: &MemoTable) -> Result<Schedule, SolveError> {
    let mut batches = Vec::new();
    let mut total_cost: u64 = 0;
    let mut q = instance.num_jobs();

    while q > 0 {
        let choice = table.choice(q).ok_or(SolveError::MissingChoice { job: q })?;
        let first = (q + 1)
            .checked_sub(choice.batch_size)
            .filter(|&f| f >= 1 && f <= q)
            .ok_or(SolveError::MissingChoice { job: q })?;
        let start_time = (first..=q)
            .map(|i| instance.job(i).release)
            .max()
            .ok_or(SolveError::MissingChoice { job: q })?;

        let cost = instance
            .machine(choice.machine_type)
            .map(|m| m.cost_per_use)
            .ok_or(SolveError::MissingChoice { job: q })?;
        total_cost = total_cost
            .checked_add(cost)
            .ok_or(SolveError::CostOverflow { job: q })?;

        batches.push(Batch::new(first, q, choice.machine_type, start_time));
        q = first - 1;
    }

    batches.reverse();
    Ok(Schedule {
        total_cost,
        batches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::InstanceGenerator;
    use crate::solver::{BatchChoice, BatchSolver};

    #[test]
    fn test_reconstruct_orders_batches_ascending() {
        let inst = Instance::default()
            .with_job(0, 1)
            .with_job(5, 6)
            .with_job(5, 7)
            .with_machine(3, 5);
        let sol = BatchSolver::new().solve(&inst).unwrap();
        let schedule = reconstruct(&inst, sol.table()).unwrap();

        assert_eq!(schedule.batches.len(), 2);
        assert_eq!(schedule.batches[0], Batch::new(1, 1, 0, 0));
        assert_eq!(schedule.batches[1], Batch::new(2, 3, 0, 5));
        assert_eq!(schedule.total_cost, 6);
    }

    #[test]
    fn test_start_time_is_latest_release() {
        let inst = Instance::default()
            .with_job(3, 9)
            .with_job(1, 9)
            .with_job(2, 9)
            .with_machine(1, 3);
        let schedule = BatchSolver::new().schedule(&inst).unwrap();
        assert_eq!(schedule.batches.len(), 1);
        assert_eq!(schedule.batches[0].start_time, 3);
    }

    #[test]
    fn test_missing_choice_is_reported() {
        let inst = Instance::default()
            .with_job(0, 1)
            .with_job(0, 1)
            .with_machine(1, 1);
        let mut table = MemoTable::new(2);
        table.record(
            2,
            1,
            BatchChoice {
                batch_size: 1,
                machine_type: 0,
            },
        );
        assert_eq!(
            reconstruct(&inst, &table),
            Err(SolveError::MissingChoice { job: 1 })
        );
    }

    #[test]
    fn test_unsolved_table_is_reported() {
        let inst = Instance::default().with_job(0, 1).with_machine(1, 1);
        assert_eq!(
            reconstruct(&inst, &MemoTable::new(1)),
            Err(SolveError::MissingChoice { job: 1 })
        );
    }

    #[test]
    fn test_schedule_properties_on_random_instances() {
        for seed in 0..30 {
            let inst = InstanceGenerator::new(40, 4).with_seed(seed).generate();
            let sol = BatchSolver::new().solve(&inst).unwrap();
            let schedule = sol.schedule(&inst).unwrap();

            assert!(schedule.is_partition_of(inst.num_jobs()), "seed {seed}");
            let cost_sum: u64 = schedule
                .batches
                .iter()
                .map(|b| inst.machines[b.machine_type].cost_per_use)
                .sum();
            assert_eq!(cost_sum, sol.total_cost(), "seed {seed}");
            for b in &schedule.batches {
                assert!(b.size() <= inst.machines[b.machine_type].capacity);
                let release_max = b.job_indices.iter().map(|&q| inst.job(q).release).max();
                assert_eq!(Some(b.start_time), release_max);
            }
        }
    }
}
