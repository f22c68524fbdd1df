//! Random instance generation.
//!
//! Produces well-formed instances for benchmarking and testing. Jobs are
//! emitted in ascending `(release, deadline)` order, which keeps
//! co-schedulable jobs index-adjacent. Machine types are emitted in
//! ascending cost order, so first-fit selection picks the cheapest
//! adequate type.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Instance, Job, MachineType};

/// Seeded random instance generator.
///
/// # Example
///
/// ```
/// use u_batch::generator::InstanceGenerator;
///
/// let inst = InstanceGenerator::new(10, 3).with_seed(42).generate();
/// assert_eq!(inst.num_jobs(), 10);
/// assert_eq!(inst.num_machines(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct InstanceGenerator {
    num_jobs: usize,
    num_machines: usize,
    horizon: i64,
    max_window: i64,
    max_cost: u64,
    max_capacity: usize,
    seed: Option<u64>,
}

impl InstanceGenerator {
    /// Creates a generator with default time and cost ranges.
    pub fn new(num_jobs: usize, num_machines: usize) -> Self {
        Self {
            num_jobs,
            num_machines,
            horizon: 100,
            max_window: 10,
            max_cost: 20,
            max_capacity: 5,
            seed: None,
        }
    }

    /// Sets the latest possible release time.
    pub fn with_horizon(mut self, horizon: i64) -> Self {
        self.horizon = horizon.max(0);
        self
    }

    /// Sets the widest window (`deadline - release`).
    pub fn with_max_window(mut self, max_window: i64) -> Self {
        self.max_window = max_window.max(0);
        self
    }

    /// Sets the largest machine cost.
    pub fn with_max_cost(mut self, max_cost: u64) -> Self {
        self.max_cost = max_cost;
        self
    }

    /// Sets the largest machine capacity (at least 1).
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity.max(1);
        self
    }

    /// Fixes the random seed for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generates an instance.
    pub fn generate(&self) -> Instance {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut jobs: Vec<Job> = (0..self.num_jobs)
            .map(|_| {
                let release = rng.random_range(0..=self.horizon);
                let width = rng.random_range(0..=self.max_window);
                Job::new(release, release.saturating_add(width))
            })
            .collect();
        jobs.sort_by_key(|j| (j.release, j.deadline));

        let mut machines: Vec<MachineType> = (0..self.num_machines)
            .map(|_| {
                MachineType::new(
                    rng.random_range(0..=self.max_cost),
                    rng.random_range(1..=self.max_capacity),
                )
            })
            .collect();
        machines.sort_by_key(|m| m.cost_per_use);

        Instance::new(jobs, machines)
    }
}
