//! Schedule and instance writers.
//!
//! # Schedule file format
//!
//! ```text
//! <numBatches>
//! <startTime> <machineType> <job> <job> ...   (one line per batch)
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::models::{Batch, Instance, Schedule};

/// Human-readable summary of a schedule, one line per batch.
///
/// # Example
///
/// ```
/// use u_batch::io::render_console;
/// use u_batch::models::{Batch, Schedule};
///
/// let schedule = Schedule { total_cost: 5, batches: vec![Batch::new(1, 3, 0, 2)] };
/// let text = render_console(&schedule);
/// assert!(text.contains("Time 2: Jobs [1 2 3] on Machine Type 0"));
/// ```
pub fn render_console(schedule: &Schedule) -> String {
    let mut lines = vec![
        format!("Minimum cost: {}", schedule.total_cost),
        format!("Number of batches: {}", schedule.batch_count()),
    ];
    lines.extend(schedule.batches.iter().map(|batch| {
        format!(
            "Time {}: Jobs [{}] on Machine Type {}",
            batch.start_time,
            job_list(batch),
            batch.machine_type
        )
    }));
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Writes a schedule in the persisted file format.
pub fn write_schedule<W: Write>(mut w: W, schedule: &Schedule) -> io::Result<()> {
    writeln!(w, "{}", schedule.batch_count())?;
    for batch in &schedule.batches {
        writeln!(
            w,
            "{} {} {}",
            batch.start_time,
            batch.machine_type,
            job_list(batch)
        )?;
    }
    w.flush()
}

/// Writes a schedule file at `path`.
pub fn save_schedule(path: impl AsRef<Path>, schedule: &Schedule) -> io::Result<()> {
    let file = File::create(path)?;
    write_schedule(BufWriter::new(file), schedule)
}

/// Writes an instance in the loader's text format.
pub fn write_instance<W: Write>(mut w: W, instance: &Instance) -> io::Result<()> {
    writeln!(w, "{}", instance.num_jobs())?;
    for job in &instance.jobs {
        writeln!(w, "{} {}", job.release, job.deadline)?;
    }
    writeln!(w, "{}", instance.num_machines())?;
    for m in &instance.machines {
        writeln!(w, "{} {}", m.cost_per_use, m.capacity)?;
    }
    w.flush()
}

/// Output path derived from an input path: `dir/name.ext` becomes
/// `dir/name_output.ext`.
pub fn output_path_for(input: impl AsRef<Path>) -> PathBuf {
    let input = input.as_ref();
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{stem}_output.{}", ext.to_string_lossy()),
        None => format!("{stem}_output"),
    };
    input.with_file_name(name)
}

fn job_list(batch: &Batch) -> String {
    batch
        .job_indices
        .iter()
        .map(|q| q.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
