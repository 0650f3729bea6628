use warren_core::Coord;

/// Manhattan (L1) distance between two coordinates.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.r - b.r).abs() + (a.c - b.c).abs()
}
