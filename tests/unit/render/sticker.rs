use super::*;

fn solid_raster(w: u32, h: u32, rgba: [u8; 4]) -> RasterAsset {
    let data: Vec<u8> = rgba
        .iter()
        .copied()
        .cycle()
        .take((w * h * 4) as usize)
        .collect();
    RasterAsset::from_rgba8(w, h, data).unwrap()
}

fn corner_triangle(w: u32, h: u32) -> [Point; 3] {
    [
        Point::new(0.0, 0.0),
        Point::new(f64::from(w), 0.0),
        Point::new(0.0, f64::from(h)),
    ]
}

#[test]
fn composite_alpha_zero_is_identity() {
    let dst = [13, 57, 201];
    assert_eq!(composite_straight(dst, [255.0, 255.0, 255.0, 0.0]), dst);
}

#[test]
fn composite_alpha_full_replaces() {
    assert_eq!(
        composite_straight([13, 57, 201], [250.0, 10.0, 0.0, 255.0]),
        [250, 10, 0]
    );
}

#[test]
fn composite_half_alpha_mixes() {
    let out = composite_straight([0, 0, 0], [200.0, 100.0, 50.0, 127.5]);
    assert_eq!(out, [100, 50, 25]);
}

#[test]
fn bilinear_sample_outside_is_transparent() {
    let r = solid_raster(2, 2, [255, 0, 0, 255]);
    assert_eq!(sample_bilinear_transparent(&r, -5.0, 0.0)[3], 0.0);
    assert_eq!(sample_bilinear_transparent(&r, 0.0, 7.0)[3], 0.0);
    assert_eq!(sample_bilinear_transparent(&r, 0.5, 0.5)[3], 255.0);
}

#[test]
fn bilinear_sample_interpolates_between_pixels() {
    let mut data = vec![0u8; 2 * 1 * 4];
    data[0..4].copy_from_slice(&[0, 0, 0, 255]);
    data[4..8].copy_from_slice(&[100, 0, 0, 255]);
    let r = RasterAsset::from_rgba8(2, 1, data).unwrap();
    let px = sample_bilinear_transparent(&r, 0.5, 0.0);
    assert!((px[0] - 50.0).abs() < 1e-9);
}

#[test]
fn identity_placement_copies_sticker_pixels() {
    let sticker = StickerAsset::new(solid_raster(2, 2, [10, 200, 30, 255]), corner_triangle(2, 2))
        .unwrap();
    let mut frame = FrameRgb::new(8, 8).unwrap();
    overlay_sticker(&mut frame, &sticker, corner_triangle(2, 2));
    assert_eq!(frame.pixel(0, 0), [10, 200, 30]);
    assert_eq!(frame.pixel(1, 1), [10, 200, 30]);
    assert_eq!(frame.pixel(4, 4), [0, 0, 0]);
}

#[test]
fn fully_transparent_sticker_changes_nothing() {
    let sticker =
        StickerAsset::new(solid_raster(4, 4, [255, 255, 255, 0]), corner_triangle(4, 4)).unwrap();
    let mut frame = FrameRgb::new(8, 8).unwrap();
    frame.set_pixel(1, 1, [7, 8, 9]);
    let before = frame.clone();
    overlay_sticker(&mut frame, &sticker, corner_triangle(4, 4));
    assert_eq!(frame, before);
}

#[test]
fn colinear_destination_skips_pass() {
    let sticker = StickerAsset::new(solid_raster(4, 4, [255, 0, 0, 255]), corner_triangle(4, 4))
        .unwrap();
    let mut frame = FrameRgb::new(8, 8).unwrap();
    let before = frame.clone();
    overlay_sticker(
        &mut frame,
        &sticker,
        [
            Point::new(1.0, 1.0),
            Point::new(3.0, 3.0),
            Point::new(5.0, 5.0),
        ],
    );
    assert_eq!(frame, before);
}

#[test]
fn off_frame_destination_skips_pass() {
    let sticker = StickerAsset::new(solid_raster(4, 4, [255, 0, 0, 255]), corner_triangle(4, 4))
        .unwrap();
    let mut frame = FrameRgb::new(8, 8).unwrap();
    let before = frame.clone();
    overlay_sticker(
        &mut frame,
        &sticker,
        [
            Point::new(100.0, 100.0),
            Point::new(104.0, 100.0),
            Point::new(100.0, 104.0),
        ],
    );
    assert_eq!(frame, before);
}

#[test]
fn warp_reproduces_control_point_mapping() {
    // A sticker with one bright pixel at its first control point must land
    // that pixel on the first destination point.
    let mut data = vec![0u8; 4 * 4 * 4];
    data[0..4].copy_from_slice(&[255, 255, 255, 255]);
    let sticker = StickerAsset::new(
        RasterAsset::from_rgba8(4, 4, data).unwrap(),
        corner_triangle(4, 4),
    )
    .unwrap();
    let mut frame = FrameRgb::new(32, 32).unwrap();
    overlay_sticker(
        &mut frame,
        &sticker,
        [
            Point::new(10.0, 12.0),
            Point::new(18.0, 12.0),
            Point::new(10.0, 20.0),
        ],
    );
    assert_eq!(frame.pixel(10, 12), [255, 255, 255]);
}

#[test]
fn scaled_centered_overlay_tracks_center_and_width() {
    let raster = solid_raster(10, 10, [50, 60, 70, 255]);
    let mut frame = FrameRgb::new(256, 256).unwrap();
    overlay_scaled_centered(&mut frame, &raster, Point::new(120.0, 200.0), 40.0);

    // Footprint spans x in [100, 140), y in [180, 220).
    assert_eq!(frame.pixel(120, 200), [50, 60, 70]);
    assert_eq!(frame.pixel(101, 181), [50, 60, 70]);
    assert_eq!(frame.pixel(98, 200), [0, 0, 0]);
    assert_eq!(frame.pixel(120, 222), [0, 0, 0]);
}

#[test]
fn scaled_overlay_partially_off_frame_is_clipped() {
    let raster = solid_raster(10, 10, [90, 0, 0, 255]);
    let mut frame = FrameRgb::new(16, 16).unwrap();
    overlay_scaled_centered(&mut frame, &raster, Point::new(0.0, 0.0), 10.0);
    assert_eq!(frame.pixel(2, 2), [90, 0, 0]);
    assert_eq!(frame.pixel(10, 10), [0, 0, 0]);
}
