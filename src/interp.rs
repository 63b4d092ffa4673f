use crate::types::Value;

/// Maps a grid index `v` in `[0, grid_size]` to its domain coordinate.
///
/// `index_to_domain(0, ..) == min` and `index_to_domain(grid_size, ..) == max`
/// exactly; cell construction requests index `grid_size` at the outer
/// boundary, which stays inside the domain.
pub fn index_to_domain(v: usize, min: Value, max: Value, grid_size: usize) -> Value {
    min + (max - min) * v as Value / grid_size as Value
}

/// Return the fractional position along an edge where the field linearly
/// crosses zero, given the corner values `a` and `b`.
///
/// Precondition: the sign bits of `a` and `b` differ (exactly one of them is
/// `> 0`), so `b - a` is nonzero. The dispatch table only ever selects edges
/// with opposite sign bits; there is no runtime check.
pub fn crossing_t(a: Value, b: Value) -> Value {
    -a / (b - a)
}

/// Linear interpolation between `a` and `b` by factor `t`.
pub fn lerp(a: Value, b: Value, t: Value) -> Value {
    a + (b - a) * t
}
