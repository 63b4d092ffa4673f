pub mod bench;
pub mod cell;
pub mod error;
pub mod extract;
pub mod fields;
pub mod interp;
pub mod render;
pub mod tables;
pub mod types;

pub use extract::{extract_contours, extract_contours_chunked};
pub use types::{GridSpec, LineSegment, Point, ScalarField, Value};
