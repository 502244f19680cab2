use super::*;

fn raster(w: u32, h: u32) -> RasterAsset {
    RasterAsset::from_rgba8(w, h, vec![0u8; (w * h * 4) as usize]).unwrap()
}

#[test]
fn raster_from_rgba8_validates_length() {
    assert!(RasterAsset::from_rgba8(2, 2, vec![0; 16]).is_ok());
    assert!(RasterAsset::from_rgba8(2, 2, vec![0; 15]).is_err());
    assert!(RasterAsset::from_rgba8(0, 2, vec![]).is_err());
}

#[test]
fn sticker_rejects_colinear_control_points() {
    let colinear = [
        Point::new(0.0, 0.0),
        Point::new(5.0, 5.0),
        Point::new(10.0, 10.0),
    ];
    assert!(StickerAsset::new(raster(4, 4), colinear).is_err());

    let ok = [
        Point::new(70.0, 0.0),
        Point::new(0.0, 60.0),
        Point::new(140.0, 60.0),
    ];
    assert!(StickerAsset::new(raster(4, 4), ok).is_ok());
}

#[test]
fn mask_rejects_degenerate_tables() {
    let too_few = vec![
        (MaskAnchor::Landmark(0), Point::new(0.0, 0.0)),
        (MaskAnchor::Landmark(1), Point::new(1.0, 0.0)),
    ];
    assert!(MaskAsset::new(raster(4, 4), too_few).is_err());

    let colinear = vec![
        (MaskAnchor::Landmark(0), Point::new(0.0, 0.0)),
        (MaskAnchor::Landmark(1), Point::new(1.0, 1.0)),
        (MaskAnchor::Landmark(2), Point::new(2.0, 2.0)),
    ];
    assert!(MaskAsset::new(raster(4, 4), colinear).is_err());
}

#[test]
fn mask_topology_is_fixed_at_load() {
    let anchors = vec![
        (MaskAnchor::Landmark(10), Point::new(0.0, 0.0)),
        (MaskAnchor::Landmark(152), Point::new(8.0, 0.0)),
        (MaskAnchor::Landmark(454), Point::new(8.0, 8.0)),
        (
            MaskAnchor::Synthetic(SyntheticAnchor::NeckCenter),
            Point::new(0.0, 8.0),
        ),
    ];
    let a = MaskAsset::new(raster(8, 8), anchors.clone()).unwrap();
    let b = MaskAsset::new(raster(8, 8), anchors).unwrap();

    // Same correspondence table, same index triples, frame after frame.
    assert_eq!(a.triangles(), b.triangles());
    assert_eq!(a.triangles().len(), 2);
}

#[test]
fn load_fails_fast_on_missing_assets() {
    let err = AssetStore::load("/nonexistent/piglens-assets").unwrap_err();
    assert!(err.to_string().contains("pig"));
}
