//! Level-driven pass composition.
//!
//! The level-to-passes mapping is a fixed lookup table rather than branching
//! logic: new levels or themes are additions to data, not new code paths.
//! Levels are generally cumulative, except that level 4 substitutes the full
//! mask for the per-feature face stickers and level 5 swaps the theme
//! entirely.

use crate::{
    assets::store::AssetStore,
    filters::passes,
    foundation::core::{FilterLevel, FrameRgb},
    landmarks::LandmarkFrame,
};

/// Identifier of one filter pass in the level table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PassId {
    /// Curly tail on the hips (back view only).
    PigTail,
    /// Snout sticker on the face.
    PigNose,
    /// Left ear sticker.
    PigEarLeft,
    /// Right ear sticker.
    PigEarRight,
    /// Red-suppressing recolor plus blur.
    PigVision,
    /// Full pig face mask warp.
    PigFullMask,
    /// Bacon strip over the head.
    BaconHead,
    /// Pork chop over the left hand.
    PorkChopLeft,
    /// Pork chop over the right hand.
    PorkChopRight,
}

/// Ordered pass lists per level. Index = level value.
const LEVEL_PASSES: [&[PassId]; 6] = [
    &[],
    &[PassId::PigTail],
    &[
        PassId::PigTail,
        PassId::PigNose,
        PassId::PigEarLeft,
        PassId::PigEarRight,
    ],
    &[
        PassId::PigTail,
        PassId::PigNose,
        PassId::PigEarLeft,
        PassId::PigEarRight,
        PassId::PigVision,
    ],
    // The full mask replaces the per-feature face stickers.
    &[PassId::PigTail, PassId::PigFullMask, PassId::PigVision],
    // Final level: bacon theme swap.
    &[
        PassId::BaconHead,
        PassId::PorkChopLeft,
        PassId::PorkChopRight,
        PassId::PigVision,
    ],
];

/// Ordered pass list for `level`. Pure: identical level, identical list.
pub fn passes_for_level(level: FilterLevel) -> &'static [PassId] {
    LEVEL_PASSES[level.as_usize()]
}

/// Execute one pass against the frame.
pub fn apply_pass(
    frame: &mut FrameRgb,
    landmarks: &LandmarkFrame,
    assets: &AssetStore,
    pass: PassId,
) {
    match pass {
        PassId::PigTail => passes::pig_tail(frame, landmarks, assets),
        PassId::PigNose => passes::pig_nose(frame, landmarks, assets),
        PassId::PigEarLeft => passes::pig_ear_left(frame, landmarks, assets),
        PassId::PigEarRight => passes::pig_ear_right(frame, landmarks, assets),
        PassId::PigVision => passes::pig_vision(frame),
        PassId::PigFullMask => passes::pig_full_mask(frame, landmarks, assets),
        PassId::BaconHead => passes::bacon_head(frame, landmarks, assets),
        PassId::PorkChopLeft => passes::pork_chop_left(frame, landmarks, assets),
        PassId::PorkChopRight => passes::pork_chop_right(frame, landmarks, assets),
    }
}

/// Compose and run the full pipeline for one frame.
///
/// Passes run strictly in table order; each mutates the frame in place and
/// never changes its dimensions. For any level and any landmark availability
/// this returns with a valid frame: level 0, or nothing detected, leaves it
/// untouched.
#[tracing::instrument(skip(frame, landmarks, assets), fields(level = level.as_u8()))]
pub fn apply_level(
    frame: &mut FrameRgb,
    landmarks: &LandmarkFrame,
    assets: &AssetStore,
    level: FilterLevel,
) {
    for &pass in passes_for_level(level) {
        apply_pass(frame, landmarks, assets, pass);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filters/pipeline.rs"]
mod tests;
