//! PNG rasterizer for contour segments.
//!
//! Consumes the extraction output plus the domain bounds; the engine itself
//! never touches pixels or files.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::{
    error::Result,
    types::{LineSegment, Point, Value},
};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const LINE_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Brush width in pixels for drawn segments.
const LINE_WIDTH: u32 = 2;

/// Rasterizes `segments` into a `img_w × img_h` PNG at `path`.
///
/// Segments with both endpoints outside the `[domain_min, domain_max]²` box
/// are dropped. A single out-of-box endpoint is clamped independently per
/// axis, which can change the segment's slope — observed behavior, kept
/// as-is rather than clipped against the true box intersection.
pub fn render_to_image(
    segments: &[LineSegment],
    path: impl AsRef<Path>,
    domain_min: Value,
    domain_max: Value,
    img_w: u32,
    img_h: u32,
) -> Result<()> {
    let mut img = RgbImage::from_pixel(img_w, img_h, BACKGROUND);

    for segment in segments {
        let Some((a, b)) = clip_segment(segment, domain_min, domain_max) else {
            continue;
        };

        let x1 = to_pixel(a.x, domain_min, domain_max, img_w);
        let y1 = to_pixel(a.y, domain_min, domain_max, img_h);
        let x2 = to_pixel(b.x, domain_min, domain_max, img_w);
        let y2 = to_pixel(b.y, domain_min, domain_max, img_h);

        draw_line(&mut img, x1, y1, x2, y2, LINE_WIDTH);
    }

    img.save(path.as_ref())?;
    tracing::info!(path = %path.as_ref().display(), segments = segments.len(), "image written");
    Ok(())
}

/// Applies the per-axis clamping rule to one segment.
///
/// Returns `None` when both endpoints are outside the domain box; otherwise
/// each out-of-box endpoint has each coordinate clamped independently.
fn clip_segment(segment: &LineSegment, min: Value, max: Value) -> Option<(Point, Point)> {
    let out_a = outside(segment.a, min, max);
    let out_b = outside(segment.b, min, max);
    if out_a && out_b {
        return None;
    }

    let clamp_point = |p: Point| Point::new(p.x.clamp(min, max), p.y.clamp(min, max));
    let a = if out_a { clamp_point(segment.a) } else { segment.a };
    let b = if out_b { clamp_point(segment.b) } else { segment.b };
    Some((a, b))
}

fn outside(p: Point, min: Value, max: Value) -> bool {
    p.x < min || p.x > max || p.y < min || p.y > max
}

/// Maps a domain coordinate into `[0, size - 1]` pixel space.
fn to_pixel(v: Value, min: Value, max: Value, size: u32) -> i64 {
    let p = ((v - min) / (max - min) * size as Value) as i64;
    p.clamp(0, i64::from(size) - 1)
}

/// Draws a thick line by stamping the single-pixel Bresenham line with a
/// square brush of side `width`.
fn draw_line(img: &mut RgbImage, x1: i64, y1: i64, x2: i64, y2: i64, width: u32) {
    let half = i64::from(width.max(1) / 2);
    for ox in -half..=half {
        for oy in -half..=half {
            draw_line_thin(img, x1 + ox, y1 + oy, x2 + ox, y2 + oy);
        }
    }
}

/// Bresenham's line algorithm. Pixels falling outside the image are skipped.
fn draw_line_thin(img: &mut RgbImage, mut x1: i64, mut y1: i64, x2: i64, y2: i64) {
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        if x1 >= 0 && x1 < i64::from(img.width()) && y1 >= 0 && y1 < i64::from(img.height()) {
            img.put_pixel(x1 as u32, y1 as u32, LINE_COLOR);
        }
        if x1 == x2 && y1 == y2 {
            break;
        }
        let e2 = err * 2;
        if e2 > -dy {
            err -= dy;
            x1 += sx;
        }
        if e2 < dx {
            err += dx;
            y1 += sy;
        }
    }
}
