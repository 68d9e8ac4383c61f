use crate::bench::{self, NullReporter, Reporter};
use crate::dataset;
use crate::errors::BenchError;
use crate::report::{self, ConsoleReporter};
use std::path::PathBuf;

pub enum Command {
    Run {
        data_dir: PathBuf,
        results_dir: PathBuf,
        synthetic: bool,
        headless: bool,
        write_results: bool,
    },
    Generate {
        data_dir: PathBuf,
    },
}

/// Executes a programmatic command.
///
/// # Errors
/// Propagates dataset, sort and reporting errors; callers decide the exit
/// status.
pub fn run(cmd: Command) -> Result<(), BenchError> {
    match cmd {
        Command::Run { data_dir, results_dir, synthetic, headless, write_results } => {
            print_banner();
            let suite = if synthetic {
                let mut rng = rand::rng();
                dataset::synthetic_suite(&bench::DEFAULT_SIZES, &mut rng)
            } else {
                dataset::load_suite(&data_dir, &bench::DEFAULT_SIZES)?
            };
            let mut reporter: Box<dyn Reporter> = if headless {
                Box::new(NullReporter)
            } else {
                Box::new(ConsoleReporter::new(suite.len()))
            };
            let samples = bench::run(&suite, reporter.as_mut())?;
            print!("{}", report::render_analysis(&samples));
            if write_results {
                let path = report::write_results_csv(&samples, &results_dir)?;
                println!("results saved to {}", path.display());
            }
            Ok(())
        }
        Command::Generate { data_dir } => {
            for &size in &bench::DEFAULT_SIZES {
                let path = dataset::ensure_schedule(&data_dir, size)?;
                println!("schedule ready at {}", path.display());
            }
            Ok(())
        }
    }
}

fn print_banner() {
    println!("{}", "=".repeat(60));
    println!("Insertion sort comparison: iterative vs recursive");
    println!("Flight departure schedules");
    println!("{}", "=".repeat(60));
    println!();
}
