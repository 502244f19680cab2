//! Delaunay triangulation of a 2D point set (Bowyer–Watson).
//!
//! Used once at mask-asset load time to partition the mask's control points
//! into independently warpable triangles. The output topology is a pure
//! function of the input points: index triples are normalized and sorted so
//! that identical point sets always yield identical triangulations.

use crate::foundation::core::Point;
use crate::foundation::error::{PiglensError, PiglensResult};
use crate::geometry::affine::signed_area_x2;

#[derive(Clone, Copy, PartialEq, Eq)]
struct Edge(usize, usize);

impl Edge {
    fn normalized(a: usize, b: usize) -> Self {
        if a < b { Self(a, b) } else { Self(b, a) }
    }
}

/// Triangulate `points`, returning triangles as index triples into `points`.
///
/// Fails when fewer than 3 points are given or when the set carries no area
/// (all points colinear or duplicated), since that cannot produce a
/// non-degenerate triangulation.
pub fn triangulate(points: &[Point]) -> PiglensResult<Vec<[usize; 3]>> {
    if points.len() < 3 {
        return Err(PiglensError::geometry(
            "triangulation needs at least 3 points",
        ));
    }

    // Super-triangle large enough to enclose every input point.
    let (min_x, max_x) = min_max(points.iter().map(|p| p.x));
    let (min_y, max_y) = min_max(points.iter().map(|p| p.y));
    let span = (max_x - min_x).max(max_y - min_y).max(1.0);
    let mid = Point::new((min_x + max_x) * 0.5, (min_y + max_y) * 0.5);

    let mut verts: Vec<Point> = points.to_vec();
    let s0 = verts.len();
    verts.push(Point::new(mid.x - 20.0 * span, mid.y - span));
    verts.push(Point::new(mid.x + 20.0 * span, mid.y - span));
    verts.push(Point::new(mid.x, mid.y + 20.0 * span));

    let mut triangles: Vec<[usize; 3]> = vec![[s0, s0 + 1, s0 + 2]];

    for (pi, &p) in points.iter().enumerate() {
        let mut bad = Vec::<usize>::new();
        for (ti, tri) in triangles.iter().enumerate() {
            if circumcircle_contains(verts[tri[0]], verts[tri[1]], verts[tri[2]], p) {
                bad.push(ti);
            }
        }

        // Boundary of the cavity: edges belonging to exactly one bad triangle.
        let mut boundary = Vec::<Edge>::new();
        for &ti in &bad {
            let tri = triangles[ti];
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let e = Edge::normalized(a, b);
                if let Some(pos) = boundary.iter().position(|&x| x == e) {
                    boundary.swap_remove(pos);
                } else {
                    boundary.push(e);
                }
            }
        }

        for &ti in bad.iter().rev() {
            triangles.swap_remove(ti);
        }
        for e in boundary {
            triangles.push([e.0, e.1, pi]);
        }
    }

    let mut out: Vec<[usize; 3]> = triangles
        .into_iter()
        .filter(|tri| tri.iter().all(|&v| v < s0))
        .map(|mut tri| {
            tri.sort_unstable();
            tri
        })
        .filter(|&[a, b, c]| signed_area_x2(points[a], points[b], points[c]).abs() > 1e-9)
        .collect();
    out.sort_unstable();
    out.dedup();

    if out.is_empty() {
        return Err(PiglensError::geometry(
            "degenerate triangulation: points are colinear or duplicated",
        ));
    }
    Ok(out)
}

fn min_max(vals: impl Iterator<Item = f64>) -> (f64, f64) {
    vals.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Whether `p` lies strictly inside the circumcircle of triangle `a b c`.
fn circumcircle_contains(a: Point, b: Point, c: Point, p: Point) -> bool {
    let (ax, ay) = (a.x - p.x, a.y - p.y);
    let (bx, by) = (b.x - p.x, b.y - p.y);
    let (cx, cy) = (c.x - p.x, c.y - p.y);
    let det = (ax * ax + ay * ay) * (bx * cy - cx * by)
        - (bx * bx + by * by) * (ax * cy - cx * ay)
        + (cx * cx + cy * cy) * (ax * by - bx * ay);
    // det > 0 iff inside for a counterclockwise triangle; flip for clockwise.
    if signed_area_x2(a, b, c) > 0.0 {
        det > 0.0
    } else {
        det < 0.0
    }
}
