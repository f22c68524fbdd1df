//! Instance input and schedule output.
//!
//! - [`InstanceLoader`] reads the text instance format.
//! - [`render_console`], [`write_schedule`] and [`save_schedule`] emit
//!   solved schedules; [`output_path_for`] names the schedule file after
//!   its input.
//! - [`write_instance`] emits instances (e.g. generated ones).

mod loader;
mod writer;

pub use loader::InstanceLoader;
pub use writer::{output_path_for, render_console, save_schedule, write_instance, write_schedule};
