//! Piecewise-affine mesh warp: re-warp each precomputed mask triangle against
//! live landmark destinations and blend into the frame.
//!
//! Each triangle is processed independently over its own bounding rectangle:
//! the source patch is cropped, warped with border reflection (reflection
//! avoids the dark fringes transparent borders would bleed into shared
//! edges), masked to the destination triangle, and alpha-blended. The union
//! of triangles approximates the destination region; shared edges may
//! double-blend, which is an accepted artifact.

use crate::{
    assets::store::{MaskAsset, RasterAsset},
    foundation::core::{FrameRgb, Point, Vec2},
    geometry::affine,
    render::sticker::composite_straight,
};

/// Integer bounding rectangle of a point triple.
#[derive(Clone, Copy, Debug)]
struct BoundRect {
    x0: i64,
    y0: i64,
    w: i64,
    h: i64,
}

impl BoundRect {
    fn of_triangle(tri: [Point; 3]) -> Self {
        let min_x = tri.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = tri.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let min_y = tri.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = tri.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        let x0 = min_x.floor() as i64;
        let y0 = min_y.floor() as i64;
        Self {
            x0,
            y0,
            w: (max_x.ceil() as i64 - x0) + 1,
            h: (max_y.ceil() as i64 - y0) + 1,
        }
    }

    fn origin(self) -> Vec2 {
        Vec2::new(self.x0 as f64, self.y0 as f64)
    }
}

/// Warp every triangle of `mask` onto `frame`.
///
/// `dst_points` are the per-frame destination pixel points, one per anchor in
/// the mask's correspondence table, resolved by the caller. The triangle
/// topology was fixed at asset load; only these coordinates vary per frame.
pub fn warp_mask(frame: &mut FrameRgb, mask: &MaskAsset, dst_points: &[Point]) {
    debug_assert_eq!(dst_points.len(), mask.anchors.len());

    for &[a, b, c] in mask.triangles() {
        let src_tri = [mask.anchors[a].1, mask.anchors[b].1, mask.anchors[c].1];
        let dst_tri = [dst_points[a], dst_points[b], dst_points[c]];
        warp_triangle(frame, &mask.raster, src_tri, dst_tri);
    }
}

/// Warp one triangular patch of `raster` onto `frame`.
fn warp_triangle(frame: &mut FrameRgb, raster: &RasterAsset, src_tri: [Point; 3], dst_tri: [Point; 3]) {
    let src_rect = BoundRect::of_triangle(src_tri);
    let dst_rect = BoundRect::of_triangle(dst_tri);

    // Overlap between the destination rectangle and the frame extent.
    let x0 = dst_rect.x0.max(0);
    let y0 = dst_rect.y0.max(0);
    let x1 = (dst_rect.x0 + dst_rect.w).min(i64::from(frame.width()));
    let y1 = (dst_rect.y0 + dst_rect.h).min(i64::from(frame.height()));
    if x0 >= x1 || y0 >= y1 {
        tracing::trace!("triangle skipped: destination rectangle off-frame");
        return;
    }

    // Rect-local correspondence, as cropping shifts both coordinate frames.
    let src_local = src_tri.map(|p| p - src_rect.origin());
    let dst_local = dst_tri.map(|p| p - dst_rect.origin());
    let Some(m) = affine::solve_affine(src_local, dst_local) else {
        tracing::trace!("triangle skipped: colinear source points");
        return;
    };
    let Some(inv) = affine::invert(m) else {
        tracing::trace!("triangle skipped: degenerate destination triangle");
        return;
    };

    // Source patch clamped to the raster; reflection happens at its borders.
    let crop_x0 = src_rect.x0.clamp(0, i64::from(raster.width) - 1);
    let crop_y0 = src_rect.y0.clamp(0, i64::from(raster.height) - 1);
    let crop_w = (src_rect.x0 + src_rect.w).clamp(crop_x0 + 1, i64::from(raster.width)) - crop_x0;
    let crop_h = (src_rect.y0 + src_rect.h).clamp(crop_y0 + 1, i64::from(raster.height)) - crop_y0;

    for y in y0..y1 {
        for x in x0..x1 {
            let local = Point::new((x - dst_rect.x0) as f64, (y - dst_rect.y0) as f64);
            // Binary fill mask of the destination triangle, intersected with
            // the warped alpha below.
            if !point_in_triangle(local, dst_local) {
                continue;
            }
            let p = inv * local;
            let src = sample_bilinear_reflect(
                raster,
                crop_x0,
                crop_y0,
                crop_w,
                crop_h,
                p.x + (src_rect.x0 - crop_x0) as f64,
                p.y + (src_rect.y0 - crop_y0) as f64,
            );
            if src[3] <= 0.0 {
                continue;
            }
            let (xu, yu) = (x as u32, y as u32);
            frame.set_pixel(xu, yu, composite_straight(frame.pixel(xu, yu), src));
        }
    }
}

/// Inclusive point-in-triangle test (edges count as inside).
fn point_in_triangle(p: Point, tri: [Point; 3]) -> bool {
    let s0 = affine::signed_area_x2(tri[0], tri[1], p);
    let s1 = affine::signed_area_x2(tri[1], tri[2], p);
    let s2 = affine::signed_area_x2(tri[2], tri[0], p);
    let eps = 1e-9;
    (s0 >= -eps && s1 >= -eps && s2 >= -eps) || (s0 <= eps && s1 <= eps && s2 <= eps)
}

/// Bilinear RGBA sample within the crop rectangle, reflecting coordinates at
/// its borders without repeating the edge row (reflect-101).
fn sample_bilinear_reflect(
    raster: &RasterAsset,
    crop_x0: i64,
    crop_y0: i64,
    crop_w: i64,
    crop_h: i64,
    x: f64,
    y: f64,
) -> [f64; 4] {
    let xf = x.floor();
    let yf = y.floor();
    let fx = x - xf;
    let fy = y - yf;
    let (xi, yi) = (xf as i64, yf as i64);

    let tap = |tx: i64, ty: i64| -> [f64; 4] {
        let tx = crop_x0 + reflect_101(tx, crop_w);
        let ty = crop_y0 + reflect_101(ty, crop_h);
        let px = raster.pixel(tx as u32, ty as u32);
        [
            f64::from(px[0]),
            f64::from(px[1]),
            f64::from(px[2]),
            f64::from(px[3]),
        ]
    };

    let (p00, p10, p01, p11) = (tap(xi, yi), tap(xi + 1, yi), tap(xi, yi + 1), tap(xi + 1, yi + 1));
    let mut out = [0.0; 4];
    for c in 0..4 {
        let top = p00[c] * (1.0 - fx) + p10[c] * fx;
        let bot = p01[c] * (1.0 - fx) + p11[c] * fx;
        out[c] = top * (1.0 - fy) + bot * fy;
    }
    out
}

/// Reflect index `i` into `[0, n)` without repeating the boundary sample.
fn reflect_101(i: i64, n: i64) -> i64 {
    if n == 1 {
        return 0;
    }
    let period = 2 * (n - 1);
    let mut i = i % period;
    if i < 0 {
        i += period;
    }
    if i >= n { period - i } else { i }
}

#[cfg(test)]
#[path = "../../tests/unit/render/mesh.rs"]
mod tests;
