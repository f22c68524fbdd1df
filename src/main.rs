mod logger;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use u_batch::generator::InstanceGenerator;
use u_batch::io::{output_path_for, render_console, save_schedule, write_instance};
use u_batch::solver::{BatchSolver, MachineOrder, ScheduleKpi};

#[derive(Debug, Parser)]
#[command(name = "u-batch", version, about = "Minimum-cost batch scheduling")]
struct Cli {
    /// Log every solver step (overrides RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve an instance file and write its schedule
    Solve {
        /// Instance file
        #[arg(short, long)]
        input: PathBuf,
        /// Schedule file (defaults to <input>_output.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Try machine types in ascending cost order instead of file order
        #[arg(long)]
        cheapest_first: bool,
        /// Print the schedule as JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },
    /// Write a random instance file
    Generate {
        #[arg(long)]
        jobs: usize,
        #[arg(long)]
        machines: usize,
        #[arg(long)]
        seed: Option<u64>,
        /// Latest release time
        #[arg(long, default_value_t = 100)]
        horizon: i64,
        /// Widest job window
        #[arg(long, default_value_t = 10)]
        max_window: i64,
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.debug);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> u_batch::Result<()> {
    match command {
        Command::Solve {
            input,
            output,
            cheapest_first,
            json,
        } => {
            let order = if cheapest_first {
                MachineOrder::CheapestFirst
            } else {
                MachineOrder::Sequence
            };
            let solver = BatchSolver::new().with_machine_order(order);
            log::info!(
                "Solving '{}' with {:?} machine order",
                input.display(),
                solver.machine_order()
            );

            let (instance, schedule) = u_batch::solve_file(&input, &solver)?;
            let kpi = ScheduleKpi::calculate(&schedule, &instance);
            log::info!(
                "{} jobs in {} batches, avg size {:.2}, capacity utilization {:.1}%",
                schedule.job_count(),
                kpi.batch_count,
                kpi.avg_batch_size,
                kpi.capacity_utilization * 100.0
            );
            if let Some(t) = kpi.busiest_machine() {
                log::info!(
                    "Busiest machine type {t} served {} batches",
                    kpi.machine_usage[t]
                );
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&schedule)?);
            } else {
                print!("{}", render_console(&schedule));
            }

            let output = output.unwrap_or_else(|| output_path_for(&input));
            save_schedule(&output, &schedule)?;
            log::info!("Schedule written to '{}'", output.display());
        }
        Command::Generate {
            jobs,
            machines,
            seed,
            horizon,
            max_window,
            output,
        } => {
            let mut generator = InstanceGenerator::new(jobs, machines)
                .with_horizon(horizon)
                .with_max_window(max_window);
            if let Some(seed) = seed {
                generator = generator.with_seed(seed);
            }
            let instance = generator.generate();
            write_instance(BufWriter::new(File::create(&output)?), &instance)?;
            log::info!(
                "Wrote {} jobs and {} machine types to '{}'",
                instance.num_jobs(),
                instance.num_machines(),
                output.display()
            );
        }
    }
    Ok(())
}
