use std::sync::Arc;

use anyhow::Context;

use crate::{
    assets::store::RasterAsset,
    foundation::core::Point,
    foundation::error::{PiglensError, PiglensResult},
};

/// Decode encoded image bytes into a straight-alpha RGBA8 raster.
///
/// Stickers composite with straight alpha (`out = (1-a)*frame + a*src`), so
/// unlike a premultiplied pipeline the color channels are kept as decoded.
pub fn decode_rgba_image(bytes: &[u8]) -> PiglensResult<RasterAsset> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(RasterAsset {
        width,
        height,
        rgba8: Arc::new(rgba.into_raw()),
    })
}

/// Parse a mask correspondence table.
///
/// One row per control point, `landmark_index,x,y`, coordinates in the mask's
/// own pixel space. Blank lines are ignored; anything else malformed is a
/// fatal asset defect.
pub fn parse_correspondence_table(text: &str) -> PiglensResult<Vec<(usize, Point)>> {
    let mut rows = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut cols = line.split(',').map(str::trim);
        let (Some(idx), Some(x), Some(y), None) =
            (cols.next(), cols.next(), cols.next(), cols.next())
        else {
            return Err(PiglensError::asset(format!(
                "correspondence row {} must have exactly 3 columns",
                lineno + 1
            )));
        };
        let idx: usize = idx.parse().map_err(|_| {
            PiglensError::asset(format!(
                "correspondence row {}: bad landmark index '{idx}'",
                lineno + 1
            ))
        })?;
        let x: f64 = x.parse().map_err(|_| {
            PiglensError::asset(format!("correspondence row {}: bad x '{x}'", lineno + 1))
        })?;
        let y: f64 = y.parse().map_err(|_| {
            PiglensError::asset(format!("correspondence row {}: bad y '{y}'", lineno + 1))
        })?;
        rows.push((idx, Point::new(x, y)));
    }
    if rows.is_empty() {
        return Err(PiglensError::asset("correspondence table is empty"));
    }
    Ok(rows)
}
