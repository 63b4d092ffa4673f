//! Named sample scalar fields for benchmarks and demos.
//!
//! Each field is a closed-form (or noise-backed) implicit function whose zero
//! level set is the contour of interest. All fields are pure and reentrant,
//! so one instance can be shared across every extraction worker.

use std::f64::consts::TAU;

use noise::{NoiseFn, OpenSimplex};

use crate::{
    error::{ContourError, Result},
    types::Value,
};

/// Seed for the noise-backed fields. Fixed so runs are repeatable.
const NOISE_SEED: u32 = 42;

const MANDELBROT_MAX_ITER: u32 = 32;

const CAVE_OCTAVES: u32 = 4;

/// Iso-level offset for `cave_noise`; shifts the zero set off the noise
/// median so the contour encloses cave-like pockets.
const CAVE_BIAS: Value = 0.1;

/// A named implicit test field.
pub enum SampleField {
    /// `x² + y² − 1`: the unit circle.
    Circle,
    /// `sin(2πx)·sin(2πy)`: sign alternates in a checkerboard of half-unit tiles.
    Checkerboard,
    /// `y − tan(x)`.
    Tangent,
    /// Single-octave OpenSimplex noise.
    Noisy(OpenSimplex),
    /// `y − sin(x)`.
    Wave,
    /// Rings winding around the origin.
    Spiral,
    /// Signed escape measure of the Mandelbrot set (negative inside).
    Mandelbrot,
    /// Biased multi-octave noise; its zero set outlines cave pockets.
    CaveNoise(OpenSimplex),
}

impl SampleField {
    /// Looks up a field by its CLI name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "circle" => Ok(Self::Circle),
            "checkerboard" => Ok(Self::Checkerboard),
            "tangent" => Ok(Self::Tangent),
            "noisy" => Ok(Self::Noisy(OpenSimplex::new(NOISE_SEED))),
            "wave" => Ok(Self::Wave),
            "spiral" => Ok(Self::Spiral),
            "mandelbrot" => Ok(Self::Mandelbrot),
            "cave_noise" => Ok(Self::CaveNoise(OpenSimplex::new(NOISE_SEED))),
            other => Err(ContourError::UnknownField(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Checkerboard => "checkerboard",
            Self::Tangent => "tangent",
            Self::Noisy(_) => "noisy",
            Self::Wave => "wave",
            Self::Spiral => "spiral",
            Self::Mandelbrot => "mandelbrot",
            Self::CaveNoise(_) => "cave_noise",
        }
    }

    /// Evaluates the field at a domain point.
    pub fn eval(&self, x: Value, y: Value) -> Value {
        match self {
            Self::Circle => x * x + y * y - 1.0,
            Self::Checkerboard => (TAU * x).sin() * (TAU * y).sin(),
            Self::Tangent => y - x.tan(),
            Self::Noisy(noise) => noise.get([x, y]),
            Self::Wave => y - x.sin(),
            Self::Spiral => {
                let r = x.hypot(y);
                (4.0 * r - y.atan2(x)).sin()
            }
            Self::Mandelbrot => mandelbrot(x, y),
            Self::CaveNoise(noise) => fbm(noise, x, y) - CAVE_BIAS,
        }
    }

    /// Rough floating-point operation count per evaluation, used by the
    /// benchmark harness for its synthetic FLOP estimate.
    pub fn flops_per_eval(&self) -> u64 {
        match self {
            Self::Circle => 4,
            Self::Checkerboard => 8,
            Self::Tangent => 3,
            Self::Noisy(_) => 40,
            Self::Wave => 2,
            Self::Spiral => 12,
            Self::Mandelbrot => u64::from(MANDELBROT_MAX_ITER) * 10,
            Self::CaveNoise(_) => u64::from(CAVE_OCTAVES) * 45,
        }
    }

    /// Adapter so a field can be passed where a
    /// [`ScalarField`](crate::types::ScalarField) is expected:
    ///
    /// ```rust,ignore
    /// let field = SampleField::from_name("circle")?;
    /// let segments = extract_contours(&field.as_fn(), 256, -2.0, 2.0);
    /// ```
    pub fn as_fn(&self) -> impl Fn(Value, Value) -> Value + Sync + '_ {
        move |x, y| self.eval(x, y)
    }
}

/// Signed escape measure for the Mandelbrot set at `c = (cx, cy)`:
/// non-positive when the orbit stays bounded, positive once it escapes.
fn mandelbrot(cx: Value, cy: Value) -> Value {
    let (mut zx, mut zy) = (0.0, 0.0);
    for _ in 0..MANDELBROT_MAX_ITER {
        let nx = zx * zx - zy * zy + cx;
        let ny = 2.0 * zx * zy + cy;
        zx = nx;
        zy = ny;
        if zx * zx + zy * zy > 4.0 {
            return zx.hypot(zy) - 2.0;
        }
    }
    zx.hypot(zy) - 2.0
}

/// Multi-octave fractional Brownian motion over OpenSimplex noise,
/// normalised back into roughly `[-1, 1]`.
fn fbm(noise: &OpenSimplex, x: Value, y: Value) -> Value {
    let mut sum = 0.0;
    let mut norm = 0.0;
    let mut amp = 1.0;
    let mut freq = 1.0;
    for _ in 0..CAVE_OCTAVES {
        sum += amp * noise.get([x * freq, y * freq]);
        norm += amp;
        amp *= 0.5;
        freq *= 2.0;
    }
    sum / norm
}
