use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;

use crate::{
    assets::decode,
    foundation::core::Point,
    foundation::error::{PiglensError, PiglensResult},
    geometry::{affine, delaunay},
};

/// Straight-alpha RGBA8 raster with fixed dimensions.
#[derive(Clone, Debug)]
pub struct RasterAsset {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major straight-alpha RGBA8.
    pub rgba8: Arc<Vec<u8>>,
}

impl RasterAsset {
    /// Wrap a raw RGBA8 buffer; used by tests to inject fixtures without
    /// touching the filesystem.
    pub fn from_rgba8(width: u32, height: u32, rgba8: Vec<u8>) -> PiglensResult<Self> {
        if width == 0 || height == 0 {
            return Err(PiglensError::validation("raster dimensions must be > 0"));
        }
        if rgba8.len() != (width as usize) * (height as usize) * 4 {
            return Err(PiglensError::validation(
                "raster buffer must be width*height*4 bytes",
            ));
        }
        Ok(Self {
            width,
            height,
            rgba8: Arc::new(rgba8),
        })
    }

    /// Read one RGBA pixel. Caller guarantees `x < width`, `y < height`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) as usize) * 4;
        [
            self.rgba8[i],
            self.rgba8[i + 1],
            self.rgba8[i + 2],
            self.rgba8[i + 3],
        ]
    }
}

/// Sticker raster plus its 3 control points in local pixel space.
///
/// The control points pair with landmark-derived destination points to
/// determine the overlay's affine placement; they are validated non-colinear
/// at load so the per-frame solve cannot fail on the source side.
#[derive(Clone, Debug)]
pub struct StickerAsset {
    /// Sticker pixels.
    pub raster: RasterAsset,
    /// Control points in the sticker's own pixel space.
    pub control_points: [Point; 3],
}

impl StickerAsset {
    /// Validated construction.
    pub fn new(raster: RasterAsset, control_points: [Point; 3]) -> PiglensResult<Self> {
        if affine::colinear(control_points[0], control_points[1], control_points[2]) {
            return Err(PiglensError::geometry(
                "sticker control points must not be colinear",
            ));
        }
        Ok(Self {
            raster,
            control_points,
        })
    }
}

/// Synthetic mask anchors with no face-mesh landmark of their own.
///
/// The face mesh has no ear or neck points, so their frame positions are
/// extrapolated from jawline, temple, and chin landmarks each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyntheticAnchor {
    /// Left ear, extrapolated outward from the left temple.
    EarLeft,
    /// Right ear, extrapolated outward from the right temple.
    EarRight,
    /// Left neck point below the left jaw.
    NeckLeft,
    /// Center neck point below the chin.
    NeckCenter,
    /// Right neck point below the right jaw.
    NeckRight,
}

/// One mask correspondence source: a detector landmark or a synthetic point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaskAnchor {
    /// Face-mesh landmark index.
    Landmark(usize),
    /// Extrapolated anchor.
    Synthetic(SyntheticAnchor),
}

/// Full-face mask asset: raster, ordered anchor table, and the Delaunay
/// topology computed once at load.
///
/// Only destination coordinates change per frame; the triangle index triples
/// are immutable for the asset's lifetime.
#[derive(Clone, Debug)]
pub struct MaskAsset {
    /// Mask pixels.
    pub raster: RasterAsset,
    /// Ordered `(anchor, mask point)` correspondence table.
    pub anchors: Vec<(MaskAnchor, Point)>,
    triangles: Vec<[usize; 3]>,
}

impl MaskAsset {
    /// Validated construction: triangulates the mask points and rejects
    /// degenerate tables (fewer than 3 rows, all colinear).
    pub fn new(raster: RasterAsset, anchors: Vec<(MaskAnchor, Point)>) -> PiglensResult<Self> {
        let mask_points: Vec<Point> = anchors.iter().map(|&(_, p)| p).collect();
        let triangles = delaunay::triangulate(&mask_points)?;
        Ok(Self {
            raster,
            anchors,
            triangles,
        })
    }

    /// Precomputed triangle topology (index triples into the anchor table).
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }
}

/// Mask-space coordinates of the synthetic ear/neck anchors for the full pig
/// mask, matching its painted artwork.
const PIG_FULL_SYNTHETIC_POINTS: [(SyntheticAnchor, Point); 5] = [
    (SyntheticAnchor::EarLeft, Point::new(10.0, 0.0)),
    (SyntheticAnchor::EarRight, Point::new(520.0, 40.0)),
    (SyntheticAnchor::NeckLeft, Point::new(50.0, 600.0)),
    (SyntheticAnchor::NeckCenter, Point::new(250.0, 710.0)),
    (SyntheticAnchor::NeckRight, Point::new(500.0, 600.0)),
];

/// Control points of the shipped face stickers, in each sticker's pixel
/// space (base-left, base-right / tip ordering matches the anchor mapper).
const PIG_NOSE_CONTROL_POINTS: [Point; 3] = [
    Point::new(70.0, 0.0),
    Point::new(0.0, 60.0),
    Point::new(140.0, 60.0),
];
const PIG_EAR_LEFT_CONTROL_POINTS: [Point; 3] = [
    Point::new(125.0, 160.0),
    Point::new(200.0, 90.0),
    Point::new(25.0, 20.0),
];
const PIG_EAR_RIGHT_CONTROL_POINTS: [Point; 3] = [
    Point::new(0.0, 90.0),
    Point::new(80.0, 165.0),
    Point::new(190.0, 20.0),
];

/// Immutable store of all loaded overlay assets.
///
/// All IO happens in [`AssetStore::load`], before any per-frame processing:
/// a missing or malformed asset is a deployment defect and fails startup.
/// After load the store is read-only and safe to share across repeated
/// pipeline invocations.
#[derive(Clone, Debug)]
pub struct AssetStore {
    /// Pig tail sticker, centered on the hips (plain raster, no anchors).
    pub pig_tail: RasterAsset,
    /// Pig nose sticker, anchored to three face landmarks.
    pub pig_nose: StickerAsset,
    /// Left pig ear sticker, anchored to two face landmarks plus tip offset.
    pub pig_ear_left: StickerAsset,
    /// Right pig ear sticker, anchored to two face landmarks plus tip offset.
    pub pig_ear_right: StickerAsset,
    /// Full pig face mask with its correspondence table.
    pub pig_full: MaskAsset,
    /// Bacon strip centered on the head (level-5 theme).
    pub bacon_head: RasterAsset,
    /// Pork chop covering the left hand (level-5 theme).
    pub pork_chop_left: RasterAsset,
    /// Pork chop covering the right hand (level-5 theme).
    pub pork_chop_right: RasterAsset,
}

impl AssetStore {
    /// Load and validate every asset under `root` (the directory holding
    /// `stickers/`).
    #[tracing::instrument(skip(root), fields(root = %root.as_ref().display()))]
    pub fn load(root: impl AsRef<Path>) -> PiglensResult<Self> {
        let root = root.as_ref();

        let pig_full_raster = read_image(root, "stickers/pig_full.png")?;
        let table_path = root.join("stickers/pig_full_points.csv");
        let table_text = std::fs::read_to_string(&table_path)
            .with_context(|| format!("read correspondence table '{}'", table_path.display()))?;
        let mut anchors: Vec<(MaskAnchor, Point)> = decode::parse_correspondence_table(&table_text)?
            .into_iter()
            .map(|(idx, p)| (MaskAnchor::Landmark(idx), p))
            .collect();
        anchors.extend(
            PIG_FULL_SYNTHETIC_POINTS
                .iter()
                .map(|&(a, p)| (MaskAnchor::Synthetic(a), p)),
        );

        let store = Self {
            pig_tail: read_image(root, "stickers/pig_tail.png")?,
            pig_nose: StickerAsset::new(
                read_image(root, "stickers/pig_nose.png")?,
                PIG_NOSE_CONTROL_POINTS,
            )?,
            pig_ear_left: StickerAsset::new(
                read_image(root, "stickers/pig_ear_left.png")?,
                PIG_EAR_LEFT_CONTROL_POINTS,
            )?,
            pig_ear_right: StickerAsset::new(
                read_image(root, "stickers/pig_ear_right.png")?,
                PIG_EAR_RIGHT_CONTROL_POINTS,
            )?,
            pig_full: MaskAsset::new(pig_full_raster, anchors)?,
            bacon_head: read_image(root, "stickers/bacon_head.png")?,
            pork_chop_left: read_image(root, "stickers/pork_chop_left.png")?,
            pork_chop_right: read_image(root, "stickers/pork_chop_right.png")?,
        };

        tracing::debug!(
            mask_triangles = store.pig_full.triangles().len(),
            "asset store loaded"
        );
        Ok(store)
    }
}

fn read_image(root: &Path, rel: &str) -> PiglensResult<RasterAsset> {
    let path: PathBuf = root.join(rel);
    let bytes = std::fs::read(&path)
        .with_context(|| format!("read asset bytes from '{}'", path.display()))?;
    decode::decode_rgba_image(&bytes)
        .map_err(|e| PiglensError::asset(format!("decode '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
