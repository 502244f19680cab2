//! Exact affine solves from sparse point correspondences.
//!
//! Three non-colinear point pairs fully determine a 2D affine map, so no
//! least-squares machinery is involved: the solve is a closed-form 2x2
//! inversion.

use crate::foundation::core::{Affine, Point};

/// Tolerance below which a linear system is treated as singular.
pub(crate) const SINGULAR_EPS: f64 = 1e-9;

/// Twice the signed area of the triangle `a b c`.
pub fn signed_area_x2(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Whether three points are (numerically) colinear.
pub fn colinear(a: Point, b: Point, c: Point) -> bool {
    signed_area_x2(a, b, c).abs() < SINGULAR_EPS
}

/// Solve the unique affine transform mapping `src[i]` to `dst[i]` for all
/// three correspondences exactly.
///
/// Returns `None` when the source points are colinear (the system has no
/// unique solution). A colinear *destination* still yields a map, but one
/// with zero determinant; warps check for that separately before inverting.
pub fn solve_affine(src: [Point; 3], dst: [Point; 3]) -> Option<Affine> {
    let d1 = src[1] - src[0];
    let d2 = src[2] - src[0];
    let det = d1.x * d2.y - d1.y * d2.x;
    if det.abs() < SINGULAR_EPS {
        return None;
    }
    let inv = 1.0 / det;

    let e1 = dst[1] - dst[0];
    let e2 = dst[2] - dst[0];

    // Linear part M = [e1 e2] * [d1 d2]^-1, kurbo coefficient order
    // [a, b, c, d, e, f] with x' = a*x + c*y + e, y' = b*x + d*y + f.
    let a = (e1.x * d2.y - e2.x * d1.y) * inv;
    let b = (e1.y * d2.y - e2.y * d1.y) * inv;
    let c = (e2.x * d1.x - e1.x * d2.x) * inv;
    let d = (e2.y * d1.x - e1.y * d2.x) * inv;
    let e = dst[0].x - a * src[0].x - c * src[0].y;
    let f = dst[0].y - b * src[0].x - d * src[0].y;

    Some(Affine::new([a, b, c, d, e, f]))
}

/// Invert `m`, or `None` when its linear part is singular (degenerate
/// destination geometry).
pub fn invert(m: Affine) -> Option<Affine> {
    if m.determinant().abs() < SINGULAR_EPS {
        return None;
    }
    Some(m.inverse())
}
