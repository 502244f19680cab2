//! Anchor mapping: from landmark indices to the 3 destination pixel points a
//! sticker's control points map onto.

use crate::{
    foundation::core::{Canvas, Point, Vec2},
    landmarks::{LandmarkFrame, LandmarkRegion, LandmarkSet},
};

/// How a sticker derives its destination triangle from a landmark region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorSpec {
    /// Three landmark indices used directly as the destination triangle.
    Triangle([usize; 3]),
    /// Two landmark indices forming the base; the third point is synthesized
    /// from their midpoint and separation.
    PairWithTip {
        /// Base landmark indices.
        base: [usize; 2],
        /// Tip displacement as factors of the base distance, or `None` for
        /// the default straight-up placement.
        tip_offset: Option<Vec2>,
    },
}

/// Resolve an [`AnchorSpec`] against the current frame's landmarks.
///
/// Returns `None` when the region is absent this frame or an index is out of
/// range, signalling the pass to skip without computing any geometry.
///
/// The 2-point tip is axis-aligned: the default `midpoint + (0, -1.5*d)`
/// points straight up in image axes rather than rotating into the pair's
/// local frame, so placement is correct only for roughly upright subjects.
pub fn resolve_anchors(
    landmarks: &LandmarkFrame,
    region: LandmarkRegion,
    spec: AnchorSpec,
    canvas: Canvas,
) -> Option<[Point; 3]> {
    let set = landmarks.region(region)?;
    match spec {
        AnchorSpec::Triangle([a, b, c]) => Some([
            set.pixel_point(a, canvas)?,
            set.pixel_point(b, canvas)?,
            set.pixel_point(c, canvas)?,
        ]),
        AnchorSpec::PairWithTip { base, tip_offset } => {
            let p1 = set.pixel_point(base[0], canvas)?;
            let p2 = set.pixel_point(base[1], canvas)?;
            Some([p1, p2, synthesize_tip(p1, p2, tip_offset)])
        }
    }
}

fn synthesize_tip(p1: Point, p2: Point, tip_offset: Option<Vec2>) -> Point {
    let mid = p1.midpoint(p2);
    let d = p1.distance(p2);
    match tip_offset {
        Some(f) => mid + Vec2::new(f.x * d, f.y * d),
        None => mid + Vec2::new(0.0, -1.5 * d),
    }
}

/// Midpoint and Euclidean distance of two landmark indices in pixel space.
///
/// Shared by the centered overlays (tail, bacon head, pork chops), which
/// scale their footprint by the pair distance.
pub fn pair_center_and_distance(
    set: &LandmarkSet,
    indices: [usize; 2],
    canvas: Canvas,
) -> Option<(Point, f64)> {
    let p1 = set.pixel_point(indices[0], canvas)?;
    let p2 = set.pixel_point(indices[1], canvas)?;
    Some((p1.midpoint(p2), p1.distance(p2)))
}
