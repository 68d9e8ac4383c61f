//! Flight-schedule datasets: CSV loading and synthetic generation.

use crate::errors::BenchError;
use crate::timecode::{FlightTime, MINUTES_PER_DAY};
use fake::{Fake, faker::address::en::CityName, faker::company::en::CompanyName};
use rand::Rng;
use std::path::{Path, PathBuf};

/// Header of the one column the benchmark consumes.
pub const TIME_COLUMN: &str = "flight_time";

/// `{dir}/flight_schedule_{size}.csv`
#[must_use]
pub fn schedule_path(dir: &Path, size: usize) -> PathBuf {
    dir.join(format!("flight_schedule_{size}.csv"))
}

/// Reads the `flight_time` column of a headered schedule CSV as raw strings.
///
/// # Errors
/// `DatasetNotFound` if the file is missing, `MissingColumn` if the header
/// has no `flight_time` field, and CSV errors for unreadable records.
pub fn load_times(path: &Path) -> Result<Vec<String>, BenchError> {
    if !path.exists() {
        return Err(BenchError::DatasetNotFound(path.display().to_string()));
    }
    let mut rdr = csv::Reader::from_path(path)?;
    let col = rdr
        .headers()?
        .iter()
        .position(|h| h == TIME_COLUMN)
        .ok_or_else(|| BenchError::MissingColumn(TIME_COLUMN.to_string()))?;
    let mut times = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        if let Some(field) = rec.get(col) {
            times.push(field.to_string());
        }
    }
    log::info!("loaded {} departure times from {}", times.len(), path.display());
    Ok(times)
}

/// Loads one dataset per size, in the given order.
pub fn load_suite(dir: &Path, sizes: &[usize]) -> Result<Vec<(usize, Vec<String>)>, BenchError> {
    sizes
        .iter()
        .map(|&size| Ok((size, load_times(&schedule_path(dir, size))?)))
        .collect()
}

/// Generates `n` random well-formed `HH:MM` strings.
pub fn generate_times(n: usize, rng: &mut impl Rng) -> Vec<String> {
    (0..n)
        .map(|_| {
            let minutes = rng.random_range(0..MINUTES_PER_DAY);
            FlightTime::from_minutes(minutes)
                .expect("generated minutes are in range")
                .to_string()
        })
        .collect()
}

/// In-memory suite for file-less runs.
pub fn synthetic_suite(sizes: &[usize], rng: &mut impl Rng) -> Vec<(usize, Vec<String>)> {
    sizes.iter().map(|&size| (size, generate_times(size, rng))).collect()
}

/// Writes a synthetic schedule CSV with `rows` records.
///
/// Only `flight_time` is consumed by the benchmark; the remaining columns
/// make the file look like a real schedule export.
///
/// # Errors
/// Returns CSV/I-O errors from the writer.
pub fn write_schedule(path: &Path, rows: usize, rng: &mut impl Rng) -> Result<(), BenchError> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["flight_number", "airline", "destination", TIME_COLUMN])?;
    for _ in 0..rows {
        let code: String = (0..2).map(|_| rng.random_range(b'A'..=b'Z') as char).collect();
        let flight_number = format!("{code}{:03}", rng.random_range(1..=999));
        let airline: String = CompanyName().fake();
        let destination: String = CityName().fake();
        let minutes = rng.random_range(0..MINUTES_PER_DAY);
        let time = FlightTime::from_minutes(minutes)
            .expect("generated minutes are in range")
            .to_string();
        wtr.write_record([flight_number, airline, destination, time])?;
    }
    wtr.flush().map_err(|e| BenchError::Io(e.to_string()))?;
    log::info!("generated {} rows at {}", rows, path.display());
    Ok(())
}

/// Generates the schedule file for `size` under `dir` if it does not already
/// exist, and returns its path.
///
/// # Errors
/// Returns I/O and CSV errors from directory creation or the writer.
pub fn ensure_schedule(dir: &Path, size: usize) -> Result<PathBuf, BenchError> {
    let path = schedule_path(dir, size);
    if path.exists() {
        log::info!("schedule {} already exists, skipping generation", path.display());
        return Ok(path);
    }
    std::fs::create_dir_all(dir).map_err(|e| BenchError::Io(e.to_string()))?;
    let mut rng = rand::rng();
    write_schedule(&path, size, &mut rng)?;
    Ok(path)
}
