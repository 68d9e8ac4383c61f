//! Benchmark harness: times both sort variants over each dataset size.

use crate::errors::BenchError;
use crate::sort;
use serde::Serialize;
use std::time::Instant;

/// Dataset sizes of the reference runs.
pub const DEFAULT_SIZES: [usize; 4] = [100, 500, 1000, 2000];

/// One benchmark iteration: both variants timed over one dataset size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchSample {
    pub size: usize,
    pub iterative_secs: f64,
    pub recursive_secs: f64,
}

impl BenchSample {
    #[must_use]
    pub fn delta_secs(&self) -> f64 {
        (self.recursive_secs - self.iterative_secs).abs()
    }
}

/// Collaborator notified with the full sample history after each iteration.
///
/// The harness runs the same with or without a live implementation; console
/// pacing and chart redraws stay outside the timed sections.
pub trait Reporter {
    fn on_sample(&mut self, history: &[BenchSample]);
}

/// Reporter that does nothing, for headless and test runs.
#[derive(Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn on_sample(&mut self, _history: &[BenchSample]) {}
}

/// Runs both sort variants over every dataset in `suite`, in order, and
/// returns the accumulated samples.
///
/// Each variant decodes the shared input into its own buffer, so neither run
/// observes the other's work. The reporter sees the history after every
/// iteration.
///
/// # Errors
/// The first sort failure aborts the whole run; there are no retries.
pub fn run(
    suite: &[(usize, Vec<String>)],
    reporter: &mut dyn Reporter,
) -> Result<Vec<BenchSample>, BenchError> {
    let mut samples = Vec::with_capacity(suite.len());
    for (size, data) in suite {
        let start = Instant::now();
        let _ = sort::iterative::sort_times(data)?;
        let iterative_secs = start.elapsed().as_secs_f64();

        let start = Instant::now();
        let _ = sort::recursive::sort_times(data)?;
        let recursive_secs = start.elapsed().as_secs_f64();

        log::info!(
            "bench: n={size} iterative={iterative_secs:.6}s recursive={recursive_secs:.6}s"
        );
        samples.push(BenchSample { size: *size, iterative_secs, recursive_secs });
        reporter.on_sample(&samples);
    }
    Ok(samples)
}
