//! flightbench compares an iterative and a recursive insertion sort over
//! flight-departure-time datasets of increasing size, reporting per-size
//! timings, a growth-trend chart and a winner analysis.

pub mod bench;
pub mod cli;
pub mod dataset;
pub mod errors;
pub mod logger;
pub mod report;
pub mod sort;
pub mod timecode;

pub use bench::{BenchSample, DEFAULT_SIZES, NullReporter, Reporter};
pub use errors::BenchError;
pub use timecode::FlightTime;
