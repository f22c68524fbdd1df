//! Text instance loader.
//!
//! # Format
//!
//! ```text
//! <numJobs>
//! <release> <deadline>        (numJobs lines)
//! <numMachines>
//! <costPerUse> <capacity>     (numMachines lines)
//! ```
//!
//! Blank lines are ignored. Sections are delimited by line shape: a
//! single integer starts a section, pairs fill it. A declared count that
//! disagrees with the number of pairs found is a shape mismatch.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::iter::Peekable;
use std::path::Path;

use log::debug;

use crate::error::LoadError;
use crate::models::{Instance, Job, MachineType};
use crate::validation::validate_instance;

/// Reads instances in the line-oriented text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceLoader {
    validate: bool,
}

impl Default for InstanceLoader {
    fn default() -> Self {
        Self { validate: true }
    }
}

#[derive(Debug)]
struct Row {
    line: usize,
    values: Vec<i64>,
}

impl InstanceLoader {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether loaded instances are checked with
    /// [`validate_instance`]. Enabled by default.
    #[inline]
    pub fn validate(mut self, yes: bool) -> Self {
        self.validate = yes;
        self
    }

    pub fn from_bufread<R: BufRead>(&self, br: R) -> Result<Instance, LoadError> {
        let mut rows = read_rows(br)?.into_iter().peekable();

        let num_jobs = read_count(&mut rows, "job count")?;
        let jobs: Vec<Job> = take_pairs(&mut rows)
            .into_iter()
            .map(|(_, release, deadline)| Job::new(release, deadline))
            .collect();
        if jobs.len() != num_jobs {
            return Err(LoadError::ShapeMismatch {
                section: "jobs",
                declared: num_jobs,
                found: jobs.len(),
            });
        }

        let num_machines = read_count(&mut rows, "machine count")?;
        let machines = take_pairs(&mut rows)
            .into_iter()
            .map(|(line, cost, capacity)| {
                let cost_per_use = u64::try_from(cost).map_err(|_| LoadError::Parse {
                    line,
                    message: format!("machine cost must be non-negative, got {cost}"),
                })?;
                let capacity = usize::try_from(capacity).map_err(|_| LoadError::Parse {
                    line,
                    message: format!("machine capacity must be non-negative, got {capacity}"),
                })?;
                Ok(MachineType::new(cost_per_use, capacity))
            })
            .collect::<Result<Vec<_>, LoadError>>()?;
        if machines.len() != num_machines {
            return Err(LoadError::ShapeMismatch {
                section: "machine types",
                declared: num_machines,
                found: machines.len(),
            });
        }

        if let Some(row) = rows.next() {
            return Err(LoadError::Parse {
                line: row.line,
                message: "unexpected data after machine types".to_string(),
            });
        }

        let instance = Instance::new(jobs, machines);
        if self.validate {
            validate_instance(&instance).map_err(LoadError::Invalid)?;
        }

        debug!(
            "loaded {} jobs and {} machine types (largest capacity {})",
            instance.num_jobs(),
            instance.num_machines(),
            instance.max_capacity()
        );
        Ok(instance)
    }

    #[inline]
    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<Instance, LoadError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Instance, LoadError> {
        self.from_bufread(BufReader::new(r))
    }

    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Instance, LoadError> {
        self.from_reader(s.as_bytes())
    }
}

fn read_rows<R: BufRead>(br: R) -> Result<Vec<Row>, LoadError> {
    let mut rows = Vec::new();
    for (i, line) in br.lines().enumerate() {
        let line = line?;
        let values = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<i64>().map_err(|e| LoadError::Parse {
                    line: i + 1,
                    message: format!("invalid integer '{tok}': {e}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if !values.is_empty() {
            rows.push(Row {
                line: i + 1,
                values,
            });
        }
    }
    Ok(rows)
}

fn read_count<I>(rows: &mut Peekable<I>, what: &'static str) -> Result<usize, LoadError>
where
    I: Iterator<Item = Row>,
{
    let row = rows.next().ok_or(LoadError::UnexpectedEof(what))?;
    match row.values.as_slice() {
        [n] => usize::try_from(*n).map_err(|_| LoadError::Parse {
            line: row.line,
            message: format!("{what} must be non-negative, got {n}"),
        }),
        _ => Err(LoadError::Parse {
            line: row.line,
            message: format!("expected {what}, found {} values", row.values.len()),
        }),
    }
}

fn take_pairs<I>(rows: &mut Peekable<I>) -> Vec<(usize, i64, i64)>
where
    I: Iterator<Item = Row>,
{
    let mut pairs = Vec::new();
    while let Some(row) = rows.next_if(|r| r.values.len() == 2) {
        pairs.push((row.line, row.values[0], row.values[1]));
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "3\n0 2\n1 3\n2 4\n2\n5 3\n2 1\n";

    #[test]
    fn test_load_sample() {
        let inst = InstanceLoader::new().from_str(SAMPLE).unwrap();
        assert_eq!(
            inst.jobs,
            vec![Job::new(0, 2), Job::new(1, 3), Job::new(2, 4)]
        );
        assert_eq!(
            inst.machines,
            vec![MachineType::new(5, 3), MachineType::new(2, 1)]
        );
    }

    #[test]
    fn test_blank_lines_and_spacing() {
        let inst = InstanceLoader::new()
            .from_str("\n2\n  0   1 \n\n5\t6\n1\n3 5\n\n")
            .unwrap();
        assert_eq!(inst.num_jobs(), 2);
        assert_eq!(inst.num_machines(), 1);
    }

    #[test]
    fn test_job_count_mismatch() {
        let err = InstanceLoader::new()
            .from_str("3\n0 2\n1 3\n1\n5 3\n")
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::ShapeMismatch {
                section: "jobs",
                declared: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_machine_count_mismatch() {
        let err = InstanceLoader::new()
            .from_str("1\n0 2\n2\n5 3\n")
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::ShapeMismatch {
                section: "machine types",
                declared: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_missing_machine_section() {
        let err = InstanceLoader::new().from_str("1\n0 2\n").unwrap_err();
        assert!(matches!(err, LoadError::UnexpectedEof("machine count")));
    }

    #[test]
    fn test_empty_input() {
        let err = InstanceLoader::new().from_str("").unwrap_err();
        assert!(matches!(err, LoadError::UnexpectedEof("job count")));
    }

    #[test]
    fn test_bad_integer_reports_line() {
        let err = InstanceLoader::new()
            .from_str("1\n0 x\n1\n5 3\n")
            .unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_three_values_on_a_line() {
        let err = InstanceLoader::new()
            .from_str("1\n0 2 4\n1\n5 3\n")
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::ShapeMismatch {
                section: "jobs",
                declared: 1,
                found: 0
            }
        ));
    }

    #[test]
    fn test_negative_cost_rejected() {
        let err = InstanceLoader::new()
            .from_str("1\n0 2\n1\n-5 3\n")
            .unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 4, .. }));
    }

    #[test]
    fn test_trailing_data_rejected() {
        let err = InstanceLoader::new()
            .from_str("1\n0 2\n1\n5 3\n7\n")
            .unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 5, .. }));
    }

    #[test]
    fn test_validation_toggle() {
        let text = "1\n5 2\n1\n5 3\n";
        assert!(matches!(
            InstanceLoader::new().from_str(text),
            Err(LoadError::Invalid(_))
        ));
        assert!(InstanceLoader::new().validate(false).from_str(text).is_ok());
    }

    #[test]
    fn test_zero_machines_loads() {
        let inst = InstanceLoader::new().from_str("1\n0 2\n0\n").unwrap();
        assert_eq!(inst.num_machines(), 0);
    }
}
