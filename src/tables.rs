//! Marching-squares case dispatch table.
//!
//! A cell's 4-bit case index is built from its corner sign bits
//! (bit set iff the corner value is `> 0`):
//!
//! ```text
//!   D ---- C          bit0 = A (south-west)
//!   |      |          bit1 = B (south-east)
//!   A ---- B          bit2 = C (north-east)
//!                     bit3 = D (north-west)
//! ```
//!
//! `SEGMENT_TABLE[case]` lists the cell-edge pairs whose zero crossings are
//! joined into a line segment: none for the uniform cases, one pair for the
//! single-crossing cases, two pairs for the saddles.

use self::CellEdge::*;

/// One of the four edges of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellEdge {
    /// A–B, the southern edge.
    Bottom,
    /// B–C, the eastern edge.
    Right,
    /// C–D, the northern edge.
    Top,
    /// D–A, the western edge.
    Left,
}

/// Segment emission rules indexed by the 4-bit corner-sign case.
///
/// Cases 5 and 10 are the ambiguous saddle configurations. They are resolved
/// by a fixed pairing — no cell-center sampling — which is a deliberate
/// simplification of this engine, kept for output compatibility. Known
/// limitation: a full ambiguity-resolving variant could pick the other
/// pairing depending on the field's value at the cell center.
pub const SEGMENT_TABLE: [&[(CellEdge, CellEdge)]; 16] = [
    &[],                             // 0: all corners non-positive
    &[(Left, Bottom)],               // 1
    &[(Bottom, Right)],              // 2
    &[(Left, Right)],                // 3
    &[(Top, Right)],                 // 4
    &[(Left, Top), (Bottom, Right)], // 5: saddle
    &[(Bottom, Top)],                // 6
    &[(Left, Top)],                  // 7
    &[(Left, Top)],                  // 8
    &[(Bottom, Top)],                // 9
    &[(Top, Right), (Left, Bottom)], // 10: complementary saddle
    &[(Top, Right)],                 // 11
    &[(Left, Right)],                // 12
    &[(Bottom, Right)],              // 13
    &[(Left, Bottom)],               // 14
    &[],                             // 15: all corners positive
];
