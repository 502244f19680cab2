//! piglens is a per-frame geometric compositing engine for landmark-anchored
//! video overlays.
//!
//! Given an RGB frame, the current detector output (optional landmark sets
//! per body region), and a discrete filter level in `[0, 5]`, the engine
//! composites progressively sillier pig-themed overlays onto the frame:
//!
//! 1. **Anchor**: landmark indices become destination pixel points
//!    ([`resolve_anchors`]), synthesizing a tip point for 2-landmark stickers.
//! 2. **Warp**: stickers are placed by an exact 3-point affine solve with
//!    bilinear warping ([`overlay_sticker`]); the full-face mask is warped
//!    triangle by triangle over a Delaunay topology fixed at load
//!    ([`warp_mask`]).
//! 3. **Compose**: a fixed level table selects the ordered pass list
//!    ([`passes_for_level`]); [`apply_level`] runs it over the frame.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Never abort mid-frame**: missing landmarks, degenerate transforms, and
//!   off-frame overlays all degrade to "skip this pass, frame unchanged".
//! - **No IO in renderers**: all asset loading and validation is front-loaded
//!   in [`AssetStore::load`], which is fatal on failure.
//! - **Synchronous and single-threaded** per invocation; only immutable state
//!   (assets, triangulations) survives across frames.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod effects;
mod filters;
mod foundation;
mod geometry;
mod landmarks;
mod render;

pub use assets::decode::{decode_rgba_image, parse_correspondence_table};
pub use assets::store::{
    AssetStore, MaskAnchor, MaskAsset, RasterAsset, StickerAsset, SyntheticAnchor,
};
pub use effects::color::PigVision;
pub use filters::anchors::{AnchorSpec, pair_center_and_distance, resolve_anchors};
pub use filters::pipeline::{PassId, apply_level, apply_pass, passes_for_level};
pub use foundation::core::{Affine, Canvas, FilterLevel, FrameRgb, Point, Vec2};
pub use foundation::error::{PiglensError, PiglensResult};
pub use geometry::affine::{colinear, signed_area_x2, solve_affine};
pub use geometry::delaunay::triangulate;
pub use landmarks::{Landmark, LandmarkFrame, LandmarkRegion, LandmarkSet};
pub use render::mesh::warp_mask;
pub use render::sticker::{overlay_scaled_centered, overlay_sticker};
