//! Benchmark harness: runs one contour extraction pass, renders the result
//! to a PNG, and appends a timing record to a CSV file.
//!
//! Usage: `isobench [grid_size] [image_size] [csv_filename|"csv"] [function]`

use std::process::ExitCode;
use std::thread;
use std::time::Instant;

use tracing::{error, info, warn};

use iso_squares::{
    bench::{BenchRecord, DEFAULT_CSV, append_csv, estimate_flops, unix_timestamp},
    error::{ContourError, Result},
    extract_contours,
    fields::SampleField,
    render::render_to_image,
};

const DEFAULT_GRID_SIZE: usize = 256;
const DEFAULT_IMAGE_SIZE: usize = 1024;
const DOMAIN_MIN: f64 = -2.0;
const DOMAIN_MAX: f64 = 2.0;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "benchmark failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let grid_size = parse_size(args.first(), DEFAULT_GRID_SIZE)?;
    let image_size = parse_size(args.get(1), DEFAULT_IMAGE_SIZE)?;
    let csv_path = match args.get(2).map(String::as_str) {
        None | Some("csv") => DEFAULT_CSV,
        Some(path) => path,
    };
    let field = SampleField::from_name(args.get(3).map_or("circle", String::as_str))?;

    let processors = thread::available_parallelism().map_or(1, |n| n.get());
    info!(function = field.name(), grid_size, processors, "running marching squares");

    let started = Instant::now();
    let segments = extract_contours(&field.as_fn(), grid_size, DOMAIN_MIN, DOMAIN_MAX);
    let elapsed_secs = started.elapsed().as_secs_f64();
    info!(segments = segments.len(), elapsed_secs, "extraction complete");

    // Rasterizer and CSV failures are local: the segment collection is
    // already computed, so log and carry on.
    let png_path = format!("{}.png", field.name());
    if let Err(err) = render_to_image(
        &segments,
        &png_path,
        DOMAIN_MIN,
        DOMAIN_MAX,
        image_size as u32,
        image_size as u32,
    ) {
        warn!(%err, path = png_path, "failed to write image");
    }

    let record = BenchRecord {
        implementation: "rayon",
        function: field.name(),
        grid_size,
        processors,
        elapsed_secs,
        est_flops: estimate_flops(grid_size, field.flops_per_eval()),
        segments: segments.len(),
        timestamp: unix_timestamp(),
    };
    if let Err(err) = append_csv(&record, csv_path) {
        warn!(%err, path = csv_path, "failed to append benchmark record");
    }

    Ok(())
}

/// Parses a positive size argument, falling back to `default` when absent.
fn parse_size(arg: Option<&String>, default: usize) -> Result<usize> {
    match arg {
        None => Ok(default),
        Some(raw) => match raw.parse::<i64>() {
            Ok(n) if n > 0 => Ok(n as usize),
            _ => Err(ContourError::InvalidSize),
        },
    }
}
