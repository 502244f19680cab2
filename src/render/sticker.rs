//! Affine sticker overlay: warp an RGBA sticker through an exact 3-point
//! affine transform and alpha-composite it onto the frame.
//!
//! Warping is inverse-mapped with bilinear sampling; samples taken outside
//! the sticker canvas are fully transparent. A singular destination (colinear
//! anchor points under extreme pose) skips the pass and leaves the frame
//! untouched; per-frame rendering never raises.

use crate::{
    assets::store::{RasterAsset, StickerAsset},
    foundation::core::{Affine, FrameRgb, Point},
    geometry::affine,
};

/// Warp `sticker` so its control points land on `dst` and composite onto
/// `frame`.
pub fn overlay_sticker(frame: &mut FrameRgb, sticker: &StickerAsset, dst: [Point; 3]) {
    let Some(m) = affine::solve_affine(sticker.control_points, dst) else {
        tracing::trace!("sticker skipped: colinear control points");
        return;
    };
    warp_raster_onto_frame(frame, &sticker.raster, m);
}

/// Composite `raster` scaled to `target_width` pixels (aspect preserved) and
/// centered on `center`.
///
/// Expressed through the same warp path as anchored stickers: the raster's
/// corner points are mapped onto the axis-aligned target rectangle.
pub fn overlay_scaled_centered(frame: &mut FrameRgb, raster: &RasterAsset, center: Point, target_width: f64) {
    if target_width <= 0.0 {
        return;
    }
    let scale = target_width / f64::from(raster.width);
    let target_height = f64::from(raster.height) * scale;
    let x0 = center.x - target_width / 2.0;
    let y0 = center.y - target_height / 2.0;

    let src = [
        Point::new(0.0, 0.0),
        Point::new(f64::from(raster.width), 0.0),
        Point::new(0.0, f64::from(raster.height)),
    ];
    let dst = [
        Point::new(x0, y0),
        Point::new(x0 + target_width, y0),
        Point::new(x0, y0 + target_height),
    ];
    let Some(m) = affine::solve_affine(src, dst) else {
        return;
    };
    warp_raster_onto_frame(frame, raster, m);
}

/// Warp the full raster canvas through `m` into frame space and blend.
fn warp_raster_onto_frame(frame: &mut FrameRgb, raster: &RasterAsset, m: Affine) {
    let Some(inv) = affine::invert(m) else {
        tracing::trace!("sticker skipped: degenerate destination geometry");
        return;
    };

    // Transformed corners bound every non-transparent output pixel; anything
    // outside samples as fully transparent.
    let w = f64::from(raster.width);
    let h = f64::from(raster.height);
    let corners = [
        m * Point::new(0.0, 0.0),
        m * Point::new(w, 0.0),
        m * Point::new(w, h),
        m * Point::new(0.0, h),
    ];
    let min_x = corners.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max_x = corners.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let min_y = corners.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = corners.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    let x0 = (min_x.floor() as i64).max(0);
    let y0 = (min_y.floor() as i64).max(0);
    let x1 = (max_x.ceil() as i64).min(i64::from(frame.width()) - 1);
    let y1 = (max_y.ceil() as i64).min(i64::from(frame.height()) - 1);
    if x0 > x1 || y0 > y1 {
        tracing::trace!("sticker skipped: overlay rectangle off-frame");
        return;
    }

    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = inv * Point::new(x as f64, y as f64);
            let src = sample_bilinear_transparent(raster, p.x, p.y);
            if src[3] <= 0.0 {
                continue;
            }
            let (xu, yu) = (x as u32, y as u32);
            frame.set_pixel(xu, yu, composite_straight(frame.pixel(xu, yu), src));
        }
    }
}

/// Per-channel straight-alpha composite: `out = (1-a)*dst + a*src`.
pub(crate) fn composite_straight(dst: [u8; 3], src: [f64; 4]) -> [u8; 3] {
    let a = (src[3] / 255.0).clamp(0.0, 1.0);
    if a <= 0.0 {
        return dst;
    }
    let mut out = [0u8; 3];
    for c in 0..3 {
        let v = (1.0 - a) * f64::from(dst[c]) + a * src[c];
        out[c] = v.round().clamp(0.0, 255.0) as u8;
    }
    out
}

/// Bilinear RGBA sample at `(x, y)`; taps outside the raster contribute
/// fully transparent black.
pub(crate) fn sample_bilinear_transparent(raster: &RasterAsset, x: f64, y: f64) -> [f64; 4] {
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let tap = |tx: i64, ty: i64| -> [f64; 4] {
        if tx < 0 || ty < 0 || tx >= i64::from(raster.width) || ty >= i64::from(raster.height) {
            return [0.0; 4];
        }
        let px = raster.pixel(tx as u32, ty as u32);
        [
            f64::from(px[0]),
            f64::from(px[1]),
            f64::from(px[2]),
            f64::from(px[3]),
        ]
    };

    let (p00, p10, p01, p11) = (tap(x0, y0), tap(x0 + 1, y0), tap(x0, y0 + 1), tap(x0 + 1, y0 + 1));
    let mut out = [0.0; 4];
    for c in 0..4 {
        let top = p00[c] * (1.0 - fx) + p10[c] * fx;
        let bot = p01[c] * (1.0 - fx) + p11[c] * fx;
        out[c] = top * (1.0 - fy) + bot * fy;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/sticker.rs"]
mod tests;
