//! Batch scheduling domain models.
//!
//! Provides the data types for representing batch scheduling problems
//! and their solutions.
//!
//! # Domain Mappings
//!
//! | u-batch | Manufacturing | Laboratory | Logistics |
//! |---------|--------------|------------|-----------|
//! | Job | Heat-treatment lot | Sample | Parcel |
//! | MachineType | Furnace class | Analyzer | Truck class |
//! | Batch | Furnace load | Analyzer run | Truck departure |
//! | Schedule | Load plan | Run plan | Dispatch plan |

mod instance;
mod job;
mod machine;
mod schedule;

pub use instance::Instance;
pub use job::Job;
pub use machine::MachineType;
pub use schedule::{Batch, Schedule};
