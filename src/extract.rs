use std::ops::Range;
use std::thread;
use std::time::Instant;

use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::{
    cell::march_cell,
    types::{GridSpec, LineSegment, ScalarField, Value},
};

/// Extracts the zero-level iso-contour of `field` over a
/// `grid_size × grid_size` grid covering `[domain_min, domain_max]²`.
///
/// Work is split across one chunk per available core. The returned segments
/// form a deterministic multiset — two runs over the same inputs produce the
/// same segments — but their sequence order is unspecified.
///
/// Preconditions (debug-checked only): `grid_size > 0` and
/// `domain_max > domain_min`. `field` must be total over the domain; the
/// engine treats every returned value as a valid real number.
pub fn extract_contours(
    field: &ScalarField<'_>,
    grid_size: usize,
    domain_min: Value,
    domain_max: Value,
) -> Vec<LineSegment> {
    let workers = thread::available_parallelism().map_or(1, |n| n.get());
    extract_contours_chunked(field, &GridSpec::new(grid_size, domain_min, domain_max), workers)
}

/// Same pass as [`extract_contours`], with an explicit number of row chunks.
///
/// The cell grid is split into `chunks` contiguous row ranges, one rayon task
/// each. Every task fills a private segment buffer while walking its rows in
/// raster order; the buffers are concatenated once all tasks finish, so the
/// hot loop holds no lock and no two tasks ever touch the same memory. The
/// chunk count changes only the interleaving of the output, never its
/// multiset of segments.
pub fn extract_contours_chunked(
    field: &ScalarField<'_>,
    spec: &GridSpec,
    chunks: usize,
) -> Vec<LineSegment> {
    let started = Instant::now();

    let per_chunk: Vec<Vec<LineSegment>> = row_ranges(spec.grid_size, chunks)
        .into_par_iter()
        .map(|rows| {
            let mut local = Vec::new();
            for row in rows {
                for col in 0..spec.grid_size {
                    march_cell(field, spec, col, row, &mut local);
                }
            }
            local
        })
        .collect();

    let total = per_chunk.iter().map(Vec::len).sum();
    let mut segments = Vec::with_capacity(total);
    for mut local in per_chunk {
        segments.append(&mut local);
    }

    tracing::debug!(
        grid_size = spec.grid_size,
        chunks,
        segments = segments.len(),
        elapsed = ?started.elapsed(),
        "contour pass complete"
    );

    segments
}

/// Splits `0..rows` into at most `chunks` contiguous, near-equal ranges.
fn row_ranges(rows: usize, chunks: usize) -> Vec<Range<usize>> {
    let chunks = chunks.clamp(1, rows.max(1));
    let base = rows / chunks;
    let extra = rows % chunks;

    let mut ranges = Vec::with_capacity(chunks);
    let mut start = 0;
    for k in 0..chunks {
        let len = base + usize::from(k < extra);
        ranges.push(start..start + len);
        start += len;
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Order-independent comparison key: segments are bitwise identical
    /// across runs, so sorting by bit patterns gives a canonical order.
    fn canonical(mut segments: Vec<LineSegment>) -> Vec<LineSegment> {
        let key = |s: &LineSegment| {
            (
                s.a.x.to_bits(),
                s.a.y.to_bits(),
                s.b.x.to_bits(),
                s.b.y.to_bits(),
            )
        };
        segments.sort_by_key(key);
        segments
    }

    #[test]
    fn row_ranges_cover_all_rows_contiguously() {
        for (rows, chunks) in [(8, 3), (7, 7), (5, 16), (1, 1), (100, 6)] {
            let ranges = row_ranges(rows, chunks);
            let mut next = 0;
            for range in &ranges {
                assert_eq!(range.start, next, "rows={rows} chunks={chunks}");
                assert!(range.end > range.start);
                next = range.end;
            }
            assert_eq!(next, rows);
        }
    }

    #[test]
    fn row_ranges_never_exceed_requested_chunks() {
        assert_eq!(row_ranges(4, 16).len(), 4);
        assert_eq!(row_ranges(16, 4).len(), 4);
    }

    #[test]
    fn constant_positive_field_yields_no_segments() {
        let segments = extract_contours(&|_, _| 1.0, 16, -2.0, 2.0);
        assert!(segments.is_empty());
    }

    #[test]
    fn constant_negative_field_yields_no_segments() {
        let segments = extract_contours(&|_, _| -3.5, 16, -2.0, 2.0);
        assert!(segments.is_empty());
    }

    #[test]
    fn repeated_runs_agree_as_multisets() {
        let field = |x: Value, y: Value| x * x + y * y - 1.0;
        let first = extract_contours(&field, 32, -2.0, 2.0);
        let second = extract_contours(&field, 32, -2.0, 2.0);
        assert!(!first.is_empty());
        assert_eq!(canonical(first), canonical(second));
    }

    #[test]
    fn chunk_count_does_not_change_the_multiset() {
        let field = |x: Value, y: Value| (x * 3.0).sin() * (y * 3.0).cos() - 0.2;
        let spec = GridSpec::new(24, -2.0, 2.0);
        let serial = extract_contours_chunked(&field, &spec, 1);
        assert!(!serial.is_empty());
        for chunks in [2, 3, 8, 64] {
            let parallel = extract_contours_chunked(&field, &spec, chunks);
            assert_eq!(
                canonical(serial.clone()),
                canonical(parallel),
                "chunks={chunks}"
            );
        }
    }
}
