use nalgebra::Point2;

/// Scalar field value at a point in the domain.
pub type Value = f64;

/// A 2D point with [`Value`] components.
pub type Point = Point2<Value>;

/// An implicit scalar field: maps a domain point `(x, y)` to a [`Value`].
///
/// Must be pure and reentrant — every extraction worker invokes it
/// concurrently with no ordering guarantee. The contour is the zero level
/// set; values **above** zero are the "positive" side.
pub type ScalarField<'a> = dyn Fn(Value, Value) -> Value + Sync + 'a;

/// A contour line segment with both endpoints in domain space.
///
/// Segment order and orientation within the output collection carry no
/// meaning beyond the per-cell dispatch table that produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub a: Point,
    pub b: Point,
}

impl LineSegment {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
}

/// Grid and domain parameters for one extraction pass.
///
/// Defines a `grid_size × grid_size` cell grid covering
/// `[domain_min, domain_max]²` with uniform cell spacing [`dt`](GridSpec::dt).
#[derive(Debug, Clone, Copy)]
pub struct GridSpec {
    /// Number of cells along each axis.
    pub grid_size: usize,
    pub domain_min: Value,
    pub domain_max: Value,
}

impl GridSpec {
    /// Creates a grid spec.
    ///
    /// # Panics
    /// Panics (in debug) if `grid_size` is zero or the domain is empty.
    /// Release builds do not validate — a degenerate spec is a caller bug.
    pub fn new(grid_size: usize, domain_min: Value, domain_max: Value) -> Self {
        debug_assert!(grid_size > 0);
        debug_assert!(domain_max > domain_min);
        Self {
            grid_size,
            domain_min,
            domain_max,
        }
    }

    /// Domain-space width of one grid cell.
    pub fn dt(&self) -> Value {
        (self.domain_max - self.domain_min) / self.grid_size as Value
    }
}
