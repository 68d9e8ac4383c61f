//! Console rendering and persistence of benchmark results.

use crate::bench::{BenchSample, Reporter};
use crate::errors::BenchError;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CHART_WIDTH: usize = 60;
const CHART_HEIGHT: usize = 14;

/// Fixed-width comparison table over the full sample history.
#[must_use]
pub fn render_table(samples: &[BenchSample]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "     n   iterative (s)   recursive (s)       delta (s)");
    let _ = writeln!(out, "------ --------------- --------------- ---------------");
    for s in samples {
        let _ = writeln!(
            out,
            "{:>6} {:>15.6} {:>15.6} {:>15.6}",
            s.size,
            s.iterative_secs,
            s.recursive_secs,
            s.delta_secs()
        );
    }
    out
}

/// ASCII growth-trend chart: x = dataset size, y = elapsed seconds,
/// `o` marks the iterative series, `s` the recursive one, `*` an overlap.
#[must_use]
pub fn render_chart(samples: &[BenchSample], width: usize, height: usize) -> String {
    if samples.is_empty() || width < 8 || height < 2 {
        return String::new();
    }
    let max_secs = samples
        .iter()
        .map(|s| s.iterative_secs.max(s.recursive_secs))
        .fold(0.0_f64, f64::max);
    let max_size = samples.iter().map(|s| s.size).max().unwrap_or(1).max(1);

    let mut grid = vec![vec![' '; width]; height];
    for s in samples {
        let x = (s.size * (width - 1)) / max_size;
        plot(&mut grid, x, row_for(s.iterative_secs, max_secs, height), 'o');
        plot(&mut grid, x, row_for(s.recursive_secs, max_secs, height), 's');
    }

    let mut out = String::new();
    for (row, cells) in grid.iter().enumerate() {
        let label = if row == 0 {
            format!("{max_secs:>10.6}")
        } else if row == height - 1 {
            format!("{:>10.6}", 0.0)
        } else {
            " ".repeat(10)
        };
        let line: String = cells.iter().collect();
        let _ = writeln!(out, "{label} |{}", line.trim_end());
    }
    let _ = writeln!(out, "{} +{}", " ".repeat(10), "-".repeat(width));
    let _ = writeln!(out, "{} {}", " ".repeat(10), x_labels(samples, width, max_size));
    let _ = writeln!(out, "{} o iterative   s recursive   * overlap", " ".repeat(10));
    out
}

fn row_for(secs: f64, max_secs: f64, height: usize) -> usize {
    if max_secs <= 0.0 {
        return height - 1;
    }
    let frac = (secs / max_secs).clamp(0.0, 1.0);
    let row = ((1.0 - frac) * (height - 1) as f64).round() as usize;
    row.min(height - 1)
}

fn plot(grid: &mut [Vec<char>], x: usize, y: usize, marker: char) {
    let cell = &mut grid[y][x];
    *cell = if *cell == ' ' || *cell == marker { marker } else { '*' };
}

fn x_labels(samples: &[BenchSample], width: usize, max_size: usize) -> String {
    let mut row = vec![' '; width];
    for s in samples {
        let text = s.size.to_string();
        let x = (s.size * (width - 1)) / max_size;
        let start = x.min(width.saturating_sub(text.len()));
        for (i, ch) in text.chars().enumerate() {
            row[start + i] = ch;
        }
    }
    row.into_iter().collect::<String>().trim_end().to_string()
}

/// Average elapsed time per variant, the faster one and its margin.
#[must_use]
pub fn render_analysis(samples: &[BenchSample]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "-".repeat(60));
    if samples.is_empty() {
        let _ = writeln!(out, "no samples recorded");
        return out;
    }
    let n = samples.len() as f64;
    let avg_iter = samples.iter().map(|s| s.iterative_secs).sum::<f64>() / n;
    let avg_rec = samples.iter().map(|s| s.recursive_secs).sum::<f64>() / n;
    let _ = writeln!(out, "average iterative: {avg_iter:.6} s");
    let _ = writeln!(out, "average recursive: {avg_rec:.6} s");
    let (faster, slower_avg, diff) = if avg_iter < avg_rec {
        ("iterative", avg_rec, avg_rec - avg_iter)
    } else {
        ("recursive", avg_iter, avg_iter - avg_rec)
    };
    let margin = if slower_avg > 0.0 { diff / slower_avg * 100.0 } else { 0.0 };
    let _ = writeln!(out, "{faster} faster by {margin:.2}% on average");
    out
}

/// Persists the sample history to `{dir}/benchmark_insertion_{datetime}.csv`.
///
/// # Errors
/// Returns I/O and CSV errors from directory creation or the writer.
pub fn write_results_csv(samples: &[BenchSample], dir: &Path) -> Result<PathBuf, BenchError> {
    std::fs::create_dir_all(dir).map_err(|e| BenchError::Io(e.to_string()))?;
    let datetime = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!("benchmark_insertion_{datetime}.csv"));
    let mut wtr = csv::Writer::from_path(&path)?;
    for s in samples {
        wtr.serialize(s)?;
    }
    wtr.flush().map_err(|e| BenchError::Io(e.to_string()))?;
    log::info!("results written to {}", path.display());
    Ok(path)
}

/// Reporter that re-renders the table and chart after every iteration and
/// pauses briefly so the console stays readable at human pace.
pub struct ConsoleReporter {
    total: usize,
    pause: Option<Duration>,
    chart: bool,
}

impl ConsoleReporter {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self { total, pause: Some(Duration::from_millis(500)), chart: true }
    }

    #[must_use]
    pub fn pause(mut self, pause: Option<Duration>) -> Self {
        self.pause = pause;
        self
    }

    #[must_use]
    pub fn chart(mut self, chart: bool) -> Self {
        self.chart = chart;
        self
    }
}

impl Reporter for ConsoleReporter {
    fn on_sample(&mut self, history: &[BenchSample]) {
        println!("Benchmark {}/{}", history.len(), self.total);
        print!("{}", render_table(history));
        println!();
        if self.chart {
            print!("{}", render_chart(history, CHART_WIDTH, CHART_HEIGHT));
            println!();
        }
        if let Some(p) = self.pause {
            std::thread::sleep(p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(size: usize, it: f64, rec: f64) -> BenchSample {
        BenchSample { size, iterative_secs: it, recursive_secs: rec }
    }

    #[test]
    fn table_lists_one_row_per_sample() {
        let out = render_table(&[sample(100, 0.000123, 0.000456), sample(500, 0.001, 0.002)]);
        assert!(out.contains("   100        0.000123        0.000456        0.000333"));
        assert_eq!(out.lines().count(), 4);
    }

    #[test]
    fn analysis_picks_faster_variant_and_margin() {
        let out = render_analysis(&[sample(100, 1.0, 2.0), sample(500, 1.0, 2.0)]);
        assert!(out.contains("average iterative: 1.000000 s"));
        assert!(out.contains("average recursive: 2.000000 s"));
        assert!(out.contains("iterative faster by 50.00% on average"));
    }

    #[test]
    fn analysis_handles_empty_history() {
        assert!(render_analysis(&[]).contains("no samples recorded"));
    }

    #[test]
    fn chart_places_both_series() {
        let out = render_chart(&[sample(100, 0.5, 1.0), sample(2000, 1.0, 2.0)], 40, 10);
        assert!(out.contains('o'));
        assert!(out.contains('s'));
        assert!(out.contains("2000"));
    }

    #[test]
    fn chart_marks_overlapping_points() {
        let out = render_chart(&[sample(100, 1.0, 1.0)], 40, 10);
        assert!(out.contains('*'));
    }

    #[test]
    fn row_for_spans_full_height() {
        assert_eq!(row_for(0.0, 1.0, 10), 9);
        assert_eq!(row_for(1.0, 1.0, 10), 0);
        assert_eq!(row_for(0.0, 0.0, 10), 9);
    }
}
