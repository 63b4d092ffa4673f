//! CSV benchmark records for the CLI harness.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::Result;

/// CSV file used when the CLI is passed the literal `"csv"`.
pub const DEFAULT_CSV: &str = "results.csv";

const CSV_HEADER: &str = "implementation,function,grid_size,processors,elapsed_secs,\
est_flops,flops_per_sec,segments,segments_per_sec,timestamp";

/// Arithmetic per cell outside the field evaluations: coordinate mapping,
/// classification and edge interpolation.
const CELL_OVERHEAD_FLOPS: u64 = 12;

/// One benchmark measurement, serialized as a CSV row.
#[derive(Debug, Clone)]
pub struct BenchRecord {
    pub implementation: &'static str,
    pub function: &'static str,
    pub grid_size: usize,
    pub processors: usize,
    pub elapsed_secs: f64,
    pub est_flops: u64,
    pub segments: usize,
    pub timestamp: u64,
}

impl BenchRecord {
    pub fn flops_per_sec(&self) -> f64 {
        self.est_flops as f64 / self.elapsed_secs
    }

    pub fn segments_per_sec(&self) -> f64 {
        self.segments as f64 / self.elapsed_secs
    }

    fn csv_row(&self) -> String {
        format!(
            "{},{},{},{},{:.6},{},{:.1},{},{:.1},{}",
            self.implementation,
            self.function,
            self.grid_size,
            self.processors,
            self.elapsed_secs,
            self.est_flops,
            self.flops_per_sec(),
            self.segments,
            self.segments_per_sec(),
            self.timestamp,
        )
    }
}

/// Synthetic FLOP estimate for one extraction pass: every cell evaluates the
/// field at its four corners plus a fixed classification overhead.
pub fn estimate_flops(grid_size: usize, flops_per_eval: u64) -> u64 {
    let cells = (grid_size * grid_size) as u64;
    cells * (4 * flops_per_eval + CELL_OVERHEAD_FLOPS)
}

/// Appends `record` to the CSV file at `path`, writing the header first when
/// the file is new or empty.
pub fn append_csv(record: &BenchRecord, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let need_header = std::fs::metadata(path).map_or(true, |meta| meta.len() == 0);

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if need_header {
        writeln!(file, "{CSV_HEADER}")?;
    }
    writeln!(file, "{}", record.csv_row())?;

    tracing::debug!(path = %path.display(), "benchmark record appended");
    Ok(())
}

/// Unix timestamp in whole seconds for a CSV row.
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}
