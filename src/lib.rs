//! Minimum-cost batch scheduling for the U-Engine ecosystem.
//!
//! Assigns time-windowed jobs to batches served by capacitated machine
//! types, minimizing total machine cost. Every job in a batch must share
//! one execution instant inside its own window, and a batch may not
//! exceed its machine type's capacity.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `MachineType`, `Instance`,
//!   `Batch`, `Schedule`
//! - **`validation`**: Input integrity checks (inverted windows, zero capacity)
//! - **`solver`**: Overlap windows, the dynamic-programming solver,
//!   schedule reconstruction and KPIs
//! - **`io`**: Text instance loader and schedule writers
//! - **`generator`**: Seeded random instances
//!
//! # Example
//!
//! ```
//! use u_batch::io::InstanceLoader;
//! use u_batch::solver::BatchSolver;
//!
//! let instance = InstanceLoader::new()
//!     .from_str("2\n0 1\n5 6\n1\n3 5\n")
//!     .unwrap();
//! let schedule = BatchSolver::new().schedule(&instance).unwrap();
//! assert_eq!(schedule.total_cost, 6);
//! assert_eq!(schedule.batch_count(), 2);
//! ```
//!
//! # References
//!
//! - Brucker (2007), "Scheduling Algorithms", Ch. 8: Batching Problems
//! - Cormen et al. (2009), "Introduction to Algorithms", Ch. 15: Dynamic Programming

use std::path::Path;

pub mod error;
pub mod generator;
pub mod io;
pub mod models;
pub mod solver;
pub mod validation;

pub use error::{Error, LoadError, Result, SolveError};

/// Loads an instance file and solves it.
pub fn solve_file(
    path: impl AsRef<Path>,
    solver: &solver::BatchSolver,
) -> Result<(models::Instance, models::Schedule)> {
    let instance = io::InstanceLoader::new().from_path(path)?;
    let schedule = solver.schedule(&instance)?;
    Ok((instance, schedule))
}
