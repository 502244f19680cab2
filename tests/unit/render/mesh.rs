use super::*;
use crate::assets::store::{MaskAnchor, MaskAsset};

fn solid_raster(w: u32, h: u32, rgba: [u8; 4]) -> RasterAsset {
    let data: Vec<u8> = rgba
        .iter()
        .copied()
        .cycle()
        .take((w * h * 4) as usize)
        .collect();
    RasterAsset::from_rgba8(w, h, data).unwrap()
}

fn triangle_mask(raster: RasterAsset) -> MaskAsset {
    MaskAsset::new(
        raster,
        vec![
            (MaskAnchor::Landmark(0), Point::new(0.0, 0.0)),
            (MaskAnchor::Landmark(1), Point::new(10.0, 0.0)),
            (MaskAnchor::Landmark(2), Point::new(0.0, 10.0)),
        ],
    )
    .unwrap()
}

#[test]
fn reflect_101_maps_like_a_mirror_without_edge_repeat() {
    // n = 4: ... 2 1 | 0 1 2 3 | 2 1 ...
    assert_eq!(reflect_101(-2, 4), 2);
    assert_eq!(reflect_101(-1, 4), 1);
    assert_eq!(reflect_101(0, 4), 0);
    assert_eq!(reflect_101(3, 4), 3);
    assert_eq!(reflect_101(4, 4), 2);
    assert_eq!(reflect_101(5, 4), 1);
    assert_eq!(reflect_101(0, 1), 0);
    assert_eq!(reflect_101(9, 1), 0);
}

#[test]
fn two_times_scaled_destination_magnifies_source_triangle() {
    // Left half dark, right half bright; destination triangle is the source
    // triangle scaled by 2.
    let mut data = vec![0u8; 12 * 12 * 4];
    for y in 0..12u32 {
        for x in 0..12u32 {
            let i = ((y * 12 + x) * 4) as usize;
            let v = if x < 6 { 40 } else { 220 };
            data[i..i + 4].copy_from_slice(&[v, v, v, 255]);
        }
    }
    let mask = triangle_mask(RasterAsset::from_rgba8(12, 12, data).unwrap());

    let mut frame = FrameRgb::new(32, 32).unwrap();
    let dst = [
        Point::new(0.0, 0.0),
        Point::new(20.0, 0.0),
        Point::new(0.0, 20.0),
    ];
    warp_mask(&mut frame, &mask, &dst);

    // Destination (4, 2) samples source (2, 1): dark half.
    assert_eq!(frame.pixel(4, 2), [40, 40, 40]);
    // Destination (14, 2) samples source (7, 1): bright half.
    assert_eq!(frame.pixel(14, 2), [220, 220, 220]);
    // Outside the destination triangle but inside its bounding rect: the
    // fill mask suppresses bleed.
    assert_eq!(frame.pixel(19, 19), [0, 0, 0]);
}

#[test]
fn identity_destination_copies_triangle_region() {
    let mask = triangle_mask(solid_raster(12, 12, [10, 120, 210, 255]));
    let mut frame = FrameRgb::new(16, 16).unwrap();
    let dst = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(0.0, 10.0),
    ];
    warp_mask(&mut frame, &mask, &dst);
    assert_eq!(frame.pixel(2, 2), [10, 120, 210]);
    assert_eq!(frame.pixel(14, 14), [0, 0, 0]);
}

#[test]
fn off_frame_destination_rect_is_skipped() {
    let mask = triangle_mask(solid_raster(12, 12, [255, 0, 0, 255]));
    let mut frame = FrameRgb::new(16, 16).unwrap();
    let before = frame.clone();
    let dst = [
        Point::new(100.0, 100.0),
        Point::new(110.0, 100.0),
        Point::new(100.0, 110.0),
    ];
    warp_mask(&mut frame, &mask, &dst);
    assert_eq!(frame, before);
}

#[test]
fn degenerate_destination_triangle_is_skipped() {
    let mask = triangle_mask(solid_raster(12, 12, [255, 0, 0, 255]));
    let mut frame = FrameRgb::new(16, 16).unwrap();
    let before = frame.clone();
    let dst = [
        Point::new(1.0, 1.0),
        Point::new(5.0, 5.0),
        Point::new(9.0, 9.0),
    ];
    warp_mask(&mut frame, &mask, &dst);
    assert_eq!(frame, before);
}

#[test]
fn transparent_mask_pixels_leave_frame_unchanged() {
    let mask = triangle_mask(solid_raster(12, 12, [255, 255, 255, 0]));
    let mut frame = FrameRgb::new(16, 16).unwrap();
    frame.set_pixel(2, 2, [1, 2, 3]);
    let before = frame.clone();
    let dst = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(0.0, 10.0),
    ];
    warp_mask(&mut frame, &mask, &dst);
    assert_eq!(frame, before);
}

#[test]
fn shared_edges_double_blend() {
    // Known artifact: triangles blend independently, so pixels on a shared
    // edge are composited once per triangle. With 50% alpha the edge ends up
    // visibly brighter than the single-blended interior.
    let mask = MaskAsset::new(
        solid_raster(12, 12, [200, 200, 200, 128]),
        vec![
            (MaskAnchor::Landmark(0), Point::new(0.0, 0.0)),
            (MaskAnchor::Landmark(1), Point::new(10.0, 0.0)),
            (MaskAnchor::Landmark(2), Point::new(10.0, 10.0)),
            (MaskAnchor::Landmark(3), Point::new(0.0, 10.0)),
        ],
    )
    .unwrap();
    assert_eq!(mask.triangles().len(), 2);

    let mut frame = FrameRgb::new(16, 16).unwrap();
    let dst: Vec<Point> = mask.anchors.iter().map(|&(_, p)| p).collect();
    warp_mask(&mut frame, &mask, &dst);

    // (5, 5) lies on the diagonal whichever way it was triangulated.
    let edge = frame.pixel(5, 5)[0];
    let interior = frame.pixel(1, 8)[0];
    assert_eq!(interior, 100);
    assert!(edge > interior + 30, "edge {edge} vs interior {interior}");
}
