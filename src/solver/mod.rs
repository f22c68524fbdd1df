//! Minimum-cost batch solver and KPI evaluation.
//!
//! # Algorithm
//!
//! 1. For each job `q`, [`max_batchable`] bounds how many index-adjacent
//!    jobs ending at `q` can share one instant.
//! 2. [`BatchSolver`] fills the cost/choice tables ([`MemoTable`]) from
//!    job 1 upward, trying every allowed last-batch size with the first
//!    adequate machine type.
//! 3. [`reconstruct`] walks the choices backwards into a [`Schedule`].
//!
//! `ScheduleKpi` summarizes the result.
//!
//! [`Schedule`]: crate::models::Schedule

mod dp;
mod kpi;
mod memo;
mod overlap;
mod reconstruct;

pub use dp::{BatchSolver, MachineOrder, Solution};
pub use kpi::ScheduleKpi;
pub use memo::{BatchChoice, MemoTable};
pub use overlap::max_batchable;
pub use reconstruct::reconstruct;
