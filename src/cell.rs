use crate::{
    interp::{crossing_t, index_to_domain, lerp},
    tables::{CellEdge, SEGMENT_TABLE},
    types::{GridSpec, LineSegment, Point, ScalarField, Value},
};

/// One grid cell's corner coordinates and sampled field values.
///
/// Corner layout in domain space:
///
/// ```text
///   D ---- C     y_n
///   |      |
///   A ---- B     y_s
///  x_w    x_e
/// ```
///
/// Transient — built per cell during the traversal, never stored.
pub struct CellCorners {
    x_w: Value,
    x_e: Value,
    y_s: Value,
    y_n: Value,
    /// Field value at the south-west corner.
    a: Value,
    /// Field value at the south-east corner.
    b: Value,
    /// Field value at the north-east corner.
    c: Value,
    /// Field value at the north-west corner.
    d: Value,
}

impl CellCorners {
    /// Samples `field` at the four corners of the cell at `(col, row)`.
    pub fn sample(field: &ScalarField<'_>, spec: &GridSpec, col: usize, row: usize) -> Self {
        let x_w = index_to_domain(col, spec.domain_min, spec.domain_max, spec.grid_size);
        let x_e = index_to_domain(col + 1, spec.domain_min, spec.domain_max, spec.grid_size);
        let y_s = index_to_domain(row, spec.domain_min, spec.domain_max, spec.grid_size);
        let y_n = index_to_domain(row + 1, spec.domain_min, spec.domain_max, spec.grid_size);

        Self {
            x_w,
            x_e,
            y_s,
            y_n,
            a: field(x_w, y_s),
            b: field(x_e, y_s),
            c: field(x_e, y_n),
            d: field(x_w, y_n),
        }
    }

    /// The 4-bit corner-sign case index into
    /// [`SEGMENT_TABLE`](crate::tables::SEGMENT_TABLE).
    ///
    /// A bit is set iff the corner value is `> 0`; a value of exactly zero
    /// counts as the non-positive side.
    pub fn case(&self) -> usize {
        let mut case = usize::from(self.a > 0.0);
        case |= usize::from(self.b > 0.0) << 1;
        case |= usize::from(self.c > 0.0) << 2;
        case |= usize::from(self.d > 0.0) << 3;
        case
    }

    /// Domain-space point where the contour crosses `edge`.
    ///
    /// Only valid for edges whose corner sign bits differ; the dispatch table
    /// never selects any other edge, so the interpolation divisor is nonzero.
    pub fn crossing(&self, edge: CellEdge) -> Point {
        match edge {
            CellEdge::Bottom => {
                Point::new(lerp(self.x_w, self.x_e, crossing_t(self.a, self.b)), self.y_s)
            }
            CellEdge::Right => {
                Point::new(self.x_e, lerp(self.y_s, self.y_n, crossing_t(self.b, self.c)))
            }
            CellEdge::Top => {
                Point::new(lerp(self.x_e, self.x_w, crossing_t(self.c, self.d)), self.y_n)
            }
            CellEdge::Left => {
                Point::new(self.x_w, lerp(self.y_n, self.y_s, crossing_t(self.d, self.a)))
            }
        }
    }
}

/// Classifies the cell at `(col, row)` and appends its contour segments
/// (0, 1, or 2 of them) to `out`.
pub fn march_cell(
    field: &ScalarField<'_>,
    spec: &GridSpec,
    col: usize,
    row: usize,
    out: &mut Vec<LineSegment>,
) {
    let corners = CellCorners::sample(field, spec, col, row);
    for &(e0, e1) in SEGMENT_TABLE[corners.case()] {
        out.push(LineSegment::new(corners.crossing(e0), corners.crossing(e1)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_cell(a: Value, b: Value, c: Value, d: Value) -> CellCorners {
        CellCorners {
            x_w: 0.0,
            x_e: 1.0,
            y_s: 0.0,
            y_n: 1.0,
            a,
            b,
            c,
            d,
        }
    }

    #[test]
    fn case_bit_order_matches_corner_layout() {
        assert_eq!(unit_cell(1.0, -1.0, -1.0, -1.0).case(), 0b0001);
        assert_eq!(unit_cell(-1.0, 1.0, -1.0, -1.0).case(), 0b0010);
        assert_eq!(unit_cell(-1.0, -1.0, 1.0, -1.0).case(), 0b0100);
        assert_eq!(unit_cell(-1.0, -1.0, -1.0, 1.0).case(), 0b1000);
        assert_eq!(unit_cell(1.0, 1.0, 1.0, 1.0).case(), 0b1111);
    }

    #[test]
    fn zero_corner_counts_as_non_positive() {
        assert_eq!(unit_cell(0.0, 0.0, 0.0, 0.0).case(), 0);
        assert_eq!(unit_cell(0.0, 1.0, 1.0, 1.0).case(), 0b1110);
    }

    #[test]
    fn crossings_lie_on_their_edges() {
        // Corners -1/+1 put every crossing at the edge midpoint.
        let corners = unit_cell(-1.0, 1.0, -1.0, 1.0);

        let bottom = corners.crossing(CellEdge::Bottom);
        assert_relative_eq!(bottom.x, 0.5);
        assert_relative_eq!(bottom.y, 0.0);

        let right = corners.crossing(CellEdge::Right);
        assert_relative_eq!(right.x, 1.0);
        assert_relative_eq!(right.y, 0.5);

        let top = corners.crossing(CellEdge::Top);
        assert_relative_eq!(top.x, 0.5);
        assert_relative_eq!(top.y, 1.0);

        let left = corners.crossing(CellEdge::Left);
        assert_relative_eq!(left.x, 0.0);
        assert_relative_eq!(left.y, 0.5);
    }

    #[test]
    fn asymmetric_corners_shift_the_crossing() {
        // A = -1, B = 3: the bottom crossing sits a quarter along the edge.
        let corners = unit_cell(-1.0, 3.0, 1.0, 1.0);
        let bottom = corners.crossing(CellEdge::Bottom);
        assert_relative_eq!(bottom.x, 0.25);
        assert_relative_eq!(bottom.y, 0.0);
    }

    #[test]
    fn march_cell_emits_per_table() {
        let spec = GridSpec::new(1, 0.0, 1.0);

        // Uniform positive field: nothing.
        let mut out = Vec::new();
        march_cell(&|_, _| 1.0, &spec, 0, 0, &mut out);
        assert!(out.is_empty());

        // Positive only near the SW corner: one segment, left ↔ bottom.
        let mut out = Vec::new();
        march_cell(&|x, y| 0.5 - x - y, &spec, 0, 0, &mut out);
        assert_eq!(out.len(), 1);
        let seg = out[0];
        assert_relative_eq!(seg.a.x, 0.0); // left edge
        assert_relative_eq!(seg.a.y, 0.5);
        assert_relative_eq!(seg.b.x, 0.5); // bottom edge
        assert_relative_eq!(seg.b.y, 0.0);
    }

    #[test]
    fn saddle_cell_emits_two_segments() {
        // Positive at SW and NE, negative at SE and NW: case 5.
        let spec = GridSpec::new(1, -1.0, 1.0);
        let mut out = Vec::new();
        march_cell(&|x, y| x * y, &spec, 0, 0, &mut out);
        assert_eq!(out.len(), 2);
    }
}
