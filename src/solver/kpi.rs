//! Schedule quality metrics (KPIs).
//!
//! Computes summary indicators from a reconstructed batch schedule and
//! its instance.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total Cost | Sum of machine cost per batch |
//! | Batch Count | Number of machine uses |
//! | Avg Batch Size | Jobs / batches |
//! | Max Batch Size | Largest single batch |
//! | Capacity Utilization | Jobs / summed capacity of used machines |
//! | Machine Usage | Batches served per machine type |

use serde::{Deserialize, Serialize};

use crate::models::{Instance, Schedule};

/// Batch schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Sum of `cost_per_use` over all batches.
    pub total_cost: u64,
    /// Number of batches.
    pub batch_count: usize,
    /// Mean jobs per batch (0.0 for an empty schedule).
    pub avg_batch_size: f64,
    /// Largest batch.
    pub max_batch_size: usize,
    /// Scheduled jobs over the summed capacity of every machine use (0.0..1.0).
    pub capacity_utilization: f64,
    /// Batches served, indexed by machine type.
    pub machine_usage: Vec<usize>,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and its instance.
    ///
    /// Batches naming a machine type the instance does not have are
    /// counted in `batch_count` but contribute no cost or capacity.
    pub fn calculate(schedule: &Schedule, instance: &Instance) -> Self {
        let mut machine_usage = vec![0; instance.num_machines()];
        let mut total_cost: u64 = 0;
        let mut total_capacity: usize = 0;
        let mut jobs: usize = 0;
        let mut max_batch_size = 0;

        for batch in &schedule.batches {
            jobs += batch.size();
            max_batch_size = max_batch_size.max(batch.size());
            if let Some(machine) = instance.machine(batch.machine_type) {
                machine_usage[batch.machine_type] += 1;
                total_cost = total_cost.saturating_add(machine.cost_per_use);
                total_capacity = total_capacity.saturating_add(machine.capacity);
            }
        }

        let batch_count = schedule.batch_count();
        let avg_batch_size = if batch_count == 0 {
            0.0
        } else {
            jobs as f64 / batch_count as f64
        };
        let capacity_utilization = if total_capacity == 0 {
            0.0
        } else {
            jobs as f64 / total_capacity as f64
        };

        Self {
            total_cost,
            batch_count,
            avg_batch_size,
            max_batch_size,
            capacity_utilization,
            machine_usage,
        }
    }

    /// Most used machine type, lowest index on ties.
    pub fn busiest_machine(&self) -> Option<usize> {
        self.machine_usage
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 0)
            .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))
            .map(|(t, _)| t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Batch;

    fn sample() -> (Schedule, Instance) {
        let inst = Instance::default()
            .with_job(0, 2)
            .with_job(1, 3)
            .with_job(2, 4)
            .with_job(9, 9)
            .with_machine(5, 4)
            .with_machine(2, 1);
        let schedule = Schedule {
            total_cost: 7,
            batches: vec![Batch::new(1, 3, 0, 2), Batch::new(4, 4, 1, 9)],
        };
        (schedule, inst)
    }

    #[test]
    fn test_kpi_basic() {
        let (schedule, inst) = sample();
        let kpi = ScheduleKpi::calculate(&schedule, &inst);
        assert_eq!(kpi.total_cost, 7);
        assert_eq!(kpi.batch_count, 2);
        assert_eq!(kpi.max_batch_size, 3);
        assert!((kpi.avg_batch_size - 2.0).abs() < 1e-10);
        // 4 jobs over capacity 4 + 1
        assert!((kpi.capacity_utilization - 0.8).abs() < 1e-10);
        assert_eq!(kpi.machine_usage, vec![1, 1]);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&Schedule::new(), &Instance::default());
        assert_eq!(kpi.total_cost, 0);
        assert_eq!(kpi.batch_count, 0);
        assert!((kpi.avg_batch_size - 0.0).abs() < 1e-10);
        assert!((kpi.capacity_utilization - 0.0).abs() < 1e-10);
        assert!(kpi.busiest_machine().is_none());
    }

    #[test]
    fn test_busiest_machine_tie_takes_lowest_index() {
        let (schedule, inst) = sample();
        let kpi = ScheduleKpi::calculate(&schedule, &inst);
        assert_eq!(kpi.busiest_machine(), Some(0));

        let mut skewed = schedule.clone();
        skewed.batches[0] = Batch::new(1, 1, 1, 0);
        let kpi = ScheduleKpi::calculate(&skewed, &inst);
        assert_eq!(kpi.busiest_machine(), Some(1));
    }
}
