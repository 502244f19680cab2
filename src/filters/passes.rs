//! Per-feature filter passes and their landmark wiring.
//!
//! Every pass has the same shape: look up the landmarks it needs through the
//! shared presence query, derive destination geometry, and hand off to a
//! renderer. A pass that cannot find its landmarks this frame is a no-op.

use crate::{
    assets::store::{AssetStore, MaskAnchor, MaskAsset, SyntheticAnchor},
    effects::color::PigVision,
    filters::anchors::{self, AnchorSpec},
    foundation::core::{Canvas, FrameRgb, Point, Vec2},
    landmarks::{LandmarkFrame, LandmarkRegion, LandmarkSet},
    render::{mesh, sticker},
};

// Pose landmark indices (detector order).
const POSE_LEFT_SHOULDER: usize = 11;
const POSE_RIGHT_SHOULDER: usize = 12;
const POSE_LEFT_HIP: usize = 23;
const POSE_RIGHT_HIP: usize = 24;
const POSE_HIP_PAIR: [usize; 2] = [POSE_LEFT_HIP, POSE_RIGHT_HIP];
const POSE_HEAD_PAIR: [usize; 2] = [8, 7];
const POSE_LEFT_HAND_PAIR: [usize; 2] = [20, 18];
const POSE_RIGHT_HAND_PAIR: [usize; 2] = [19, 17];

// Face-mesh landmark indices used for sticker anchoring and mask
// extrapolation.
const FACE_NOSE_ANCHORS: AnchorSpec = AnchorSpec::Triangle([195, 48, 278]);
const FACE_EAR_LEFT_ANCHORS: AnchorSpec = AnchorSpec::PairWithTip {
    base: [127, 54],
    tip_offset: Some(Vec2::new(-1.5, -0.5)),
};
const FACE_EAR_RIGHT_ANCHORS: AnchorSpec = AnchorSpec::PairWithTip {
    base: [284, 356],
    tip_offset: Some(Vec2::new(1.5, -0.5)),
};
const FACE_JAW_LEFT: usize = 234;
const FACE_JAW_RIGHT: usize = 454;
const FACE_CHIN: usize = 152;
const FACE_TEMPLE_LEFT: usize = 127;
const FACE_TEMPLE_RIGHT: usize = 356;

const VISIBILITY_THRESHOLD: f64 = 0.5;
const HAND_VISIBILITY_THRESHOLD: f64 = 0.3;

/// Curly tail centered between the hips, shown only when the subject faces
/// away from the camera. Footprint width tracks the hip distance.
pub fn pig_tail(frame: &mut FrameRgb, landmarks: &LandmarkFrame, assets: &AssetStore) {
    let Some(pose) = landmarks.region(LandmarkRegion::Pose) else {
        return;
    };
    if !is_back_view(pose) {
        return;
    }
    let Some((center, dist)) = anchors::pair_center_and_distance(pose, POSE_HIP_PAIR, frame.canvas())
    else {
        return;
    };
    sticker::overlay_scaled_centered(frame, &assets.pig_tail, center, dist.max(1.0));
}

/// Whether the subject has their back to the camera.
///
/// Shoulder x-order decides when both shoulders are confidently visible;
/// hips are the fallback. Mirrored landmark order (left appearing left of
/// right in image space) means we are looking at the subject's back.
fn is_back_view(pose: &LandmarkSet) -> bool {
    let vis = |idx: usize| {
        pose.point(idx)
            .map(|lm| lm.visibility_or_zero())
            .unwrap_or(0.0)
    };
    let x = |idx: usize| pose.point(idx).map(|lm| lm.x);

    if vis(POSE_LEFT_SHOULDER) > VISIBILITY_THRESHOLD && vis(POSE_RIGHT_SHOULDER) > VISIBILITY_THRESHOLD {
        matches!(
            (x(POSE_LEFT_SHOULDER), x(POSE_RIGHT_SHOULDER)),
            (Some(l), Some(r)) if l < r
        )
    } else if vis(POSE_LEFT_HIP) > VISIBILITY_THRESHOLD && vis(POSE_RIGHT_HIP) > VISIBILITY_THRESHOLD {
        matches!(
            (x(POSE_LEFT_HIP), x(POSE_RIGHT_HIP)),
            (Some(l), Some(r)) if l < r
        )
    } else {
        false
    }
}

/// Pig snout anchored to three face-mesh landmarks.
pub fn pig_nose(frame: &mut FrameRgb, landmarks: &LandmarkFrame, assets: &AssetStore) {
    overlay_face_sticker(frame, landmarks, assets, FACE_NOSE_ANCHORS, Sticker::Nose);
}

/// Left pig ear anchored above the left temple.
pub fn pig_ear_left(frame: &mut FrameRgb, landmarks: &LandmarkFrame, assets: &AssetStore) {
    overlay_face_sticker(frame, landmarks, assets, FACE_EAR_LEFT_ANCHORS, Sticker::EarLeft);
}

/// Right pig ear anchored above the right temple.
pub fn pig_ear_right(frame: &mut FrameRgb, landmarks: &LandmarkFrame, assets: &AssetStore) {
    overlay_face_sticker(frame, landmarks, assets, FACE_EAR_RIGHT_ANCHORS, Sticker::EarRight);
}

enum Sticker {
    Nose,
    EarLeft,
    EarRight,
}

fn overlay_face_sticker(
    frame: &mut FrameRgb,
    landmarks: &LandmarkFrame,
    assets: &AssetStore,
    spec: AnchorSpec,
    which: Sticker,
) {
    let Some(dst) = anchors::resolve_anchors(landmarks, LandmarkRegion::Face, spec, frame.canvas())
    else {
        tracing::trace!("face sticker skipped: landmarks unavailable");
        return;
    };
    let asset = match which {
        Sticker::Nose => &assets.pig_nose,
        Sticker::EarLeft => &assets.pig_ear_left,
        Sticker::EarRight => &assets.pig_ear_right,
    };
    sticker::overlay_sticker(frame, asset, dst);
}

/// Full pig face mask warped over the face mesh.
pub fn pig_full_mask(frame: &mut FrameRgb, landmarks: &LandmarkFrame, assets: &AssetStore) {
    let Some(face) = landmarks.region(LandmarkRegion::Face) else {
        tracing::trace!("full mask skipped: no face this frame");
        return;
    };
    let Some(dst_points) = resolve_mask_destinations(face, &assets.pig_full, frame.canvas()) else {
        tracing::trace!("full mask skipped: landmark indices unavailable");
        return;
    };
    mesh::warp_mask(frame, &assets.pig_full, &dst_points);
}

/// Resolve every mask anchor to its destination pixel point.
///
/// Landmark anchors convert directly; synthetic ear/neck anchors are
/// extrapolated from jawline, temple, and chin positions since the face mesh
/// carries no points there.
fn resolve_mask_destinations(
    face: &LandmarkSet,
    mask: &MaskAsset,
    canvas: Canvas,
) -> Option<Vec<Point>> {
    let jaw_left = face.pixel_point(FACE_JAW_LEFT, canvas)?;
    let jaw_right = face.pixel_point(FACE_JAW_RIGHT, canvas)?;
    let chin = face.pixel_point(FACE_CHIN, canvas)?;
    let temple_left = face.pixel_point(FACE_TEMPLE_LEFT, canvas)?;
    let temple_right = face.pixel_point(FACE_TEMPLE_RIGHT, canvas)?;
    let jaw_mid = jaw_left.midpoint(jaw_right);

    let synthetic = |anchor: SyntheticAnchor| match anchor {
        SyntheticAnchor::EarLeft => temple_left + (temple_left - jaw_left) * 1.2,
        SyntheticAnchor::EarRight => temple_right + (temple_right - jaw_right) * 1.2,
        SyntheticAnchor::NeckLeft => jaw_left + (chin - jaw_left) * 0.6,
        SyntheticAnchor::NeckCenter => jaw_mid + (chin - jaw_mid) * 0.6,
        SyntheticAnchor::NeckRight => jaw_right + (chin - jaw_right) * 0.6,
    };

    mask.anchors
        .iter()
        .map(|&(anchor, _)| match anchor {
            MaskAnchor::Landmark(idx) => face.pixel_point(idx, canvas),
            MaskAnchor::Synthetic(kind) => Some(synthetic(kind)),
        })
        .collect()
}

/// Bacon strip centered on the head, twice the head-landmark distance wide.
pub fn bacon_head(frame: &mut FrameRgb, landmarks: &LandmarkFrame, assets: &AssetStore) {
    let Some(pose) = landmarks.region(LandmarkRegion::Pose) else {
        return;
    };
    let Some((center, dist)) =
        anchors::pair_center_and_distance(pose, POSE_HEAD_PAIR, frame.canvas())
    else {
        return;
    };
    sticker::overlay_scaled_centered(frame, &assets.bacon_head, center, dist.max(1.0) * 2.0);
}

/// Pork chop covering the left hand.
pub fn pork_chop_left(frame: &mut FrameRgb, landmarks: &LandmarkFrame, assets: &AssetStore) {
    pork_chop(frame, landmarks, &assets.pork_chop_left, POSE_LEFT_HAND_PAIR);
}

/// Pork chop covering the right hand.
pub fn pork_chop_right(frame: &mut FrameRgb, landmarks: &LandmarkFrame, assets: &AssetStore) {
    pork_chop(frame, landmarks, &assets.pork_chop_right, POSE_RIGHT_HAND_PAIR);
}

fn pork_chop(
    frame: &mut FrameRgb,
    landmarks: &LandmarkFrame,
    chop: &crate::assets::store::RasterAsset,
    pair: [usize; 2],
) {
    let Some(pose) = landmarks.region(LandmarkRegion::Pose) else {
        return;
    };
    // Hands flail off-screen often; require a minimum confidence on both
    // wrist-side landmarks before covering them.
    for idx in pair {
        let visible = pose
            .point(idx)
            .is_some_and(|lm| lm.visibility_or_zero() >= HAND_VISIBILITY_THRESHOLD);
        if !visible {
            return;
        }
    }
    let Some((center, dist)) = anchors::pair_center_and_distance(pose, pair, frame.canvas()) else {
        return;
    };
    sticker::overlay_scaled_centered(frame, chop, center, dist.max(1.0) * 6.0);
}

/// Stateless pig-vision recolor; runs whenever selected, landmark-free.
pub fn pig_vision(frame: &mut FrameRgb) {
    PigVision::default().apply(frame);
}
