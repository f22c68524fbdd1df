//! Problem instance: the ordered job and machine type sequences.
//!
//! Both sequences are populated once and read-only afterwards. Job order
//! matters to the overlap sweep (jobs are expected in an order where
//! index-adjacent jobs are the ones that can share an instant), and
//! machine order matters to first-fit machine selection.

use serde::{Deserialize, Serialize};

use super::{Job, MachineType};

/// A batch scheduling instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Jobs in scheduling order. `jobs[0]` is job 1.
    pub jobs: Vec<Job>,
    /// Machine types in priority order. `machines[0]` is machine type 0.
    pub machines: Vec<MachineType>,
}

impl Instance {
    /// Creates an instance from its two sequences.
    pub fn new(jobs: Vec<Job>, machines: Vec<MachineType>) -> Self {
        Self { jobs, machines }
    }

    /// Appends a job.
    pub fn with_job(mut self, release: i64, deadline: i64) -> Self {
        self.jobs.push(Job::new(release, deadline));
        self
    }

    /// Appends a machine type.
    pub fn with_machine(mut self, cost_per_use: u64, capacity: usize) -> Self {
        self.machines.push(MachineType::new(cost_per_use, capacity));
        self
    }

    /// Number of jobs.
    #[inline]
    pub fn num_jobs(&self) -> usize {
        self.jobs.len()
    }

    /// Number of machine types.
    #[inline]
    pub fn num_machines(&self) -> usize {
        self.machines.len()
    }

    /// Returns job `q` (1-indexed).
    ///
    /// # Panics
    /// If `q == 0` or `q > num_jobs()`.
    #[inline]
    pub fn job(&self, q: usize) -> &Job {
        &self.jobs[q - 1]
    }

    /// Returns machine type `index` (0-indexed), if present.
    #[inline]
    pub fn machine(&self, index: usize) -> Option<&MachineType> {
        self.machines.get(index)
    }

    /// Largest capacity across all machine types (0 if there are none).
    pub fn max_capacity(&self) -> usize {
        self.machines.iter().map(|m| m.capacity).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_builder() {
        let inst = Instance::default()
            .with_job(0, 2)
            .with_job(1, 3)
            .with_machine(5, 3)
            .with_machine(2, 1);

        assert_eq!(inst.num_jobs(), 2);
        assert_eq!(inst.num_machines(), 2);
        assert_eq!(*inst.job(1), Job::new(0, 2));
        assert_eq!(*inst.job(2), Job::new(1, 3));
        assert_eq!(inst.machine(1), Some(&MachineType::new(2, 1)));
        assert!(inst.machine(2).is_none());
        assert_eq!(inst.max_capacity(), 3);
    }

    #[test]
    fn test_empty_instance() {
        let inst = Instance::default();
        assert_eq!(inst.num_jobs(), 0);
        assert_eq!(inst.max_capacity(), 0);
    }

    #[test]
    #[should_panic]
    fn test_job_zero_is_sentinel() {
        let inst = Instance::default().with_job(0, 1);
        let _ = inst.job(0);
    }

    #[test]
    fn test_instance_serde_roundtrip() {
        let inst = Instance::default().with_job(0, 2).with_machine(5, 3);
        let json = serde_json::to_string(&inst).unwrap();
        let back: Instance = serde_json::from_str(&json).unwrap();
        assert_eq!(inst, back);
    }
}
