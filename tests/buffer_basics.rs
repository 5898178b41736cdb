use graymap::{GrayImage, GrayMapError, PixelStats};

#[test]
fn new_image_is_black() {
    let img = GrayImage::new(4, 3, 255).unwrap();
    assert_eq!(img.width(), 4);
    assert_eq!(img.height(), 3);
    assert_eq!(img.maxval(), 255);
    assert_eq!(img.sample_count(), 12);
    assert!(img.as_raw().iter().all(|&v| v == 0));
}

#[test]
fn new_rejects_zero_maxval() {
    let err = GrayImage::new(2, 2, 0).unwrap_err();
    assert!(matches!(err, GrayMapError::InvalidMaxval { maxval: 0 }));
}

#[test]
fn zero_area_images_are_permitted() {
    let img = GrayImage::new(0, 5, 255).unwrap();
    assert!(img.is_empty());
    assert_eq!(img.stats(), None);
}

#[test]
fn get_after_set_roundtrips() {
    let mut img = GrayImage::new(3, 3, 200).unwrap();
    img.set(1, 2, 17);
    assert_eq!(img.get(1, 2), 17);
    // Raster index is y * width + x.
    assert_eq!(img.as_raw()[2 * 3 + 1], 17);
}

#[test]
#[should_panic(expected = "outside")]
fn get_out_of_range_panics() {
    let img = GrayImage::new(3, 3, 255).unwrap();
    img.get(3, 0);
}

#[test]
fn valid_pos_covers_edges() {
    let img = GrayImage::new(4, 2, 255).unwrap();
    assert!(img.is_valid_pos(0, 0));
    assert!(img.is_valid_pos(3, 1));
    assert!(!img.is_valid_pos(4, 0));
    assert!(!img.is_valid_pos(0, 2));
}

#[test]
fn valid_rect_uses_inclusive_far_edge() {
    let img = GrayImage::new(4, 4, 255).unwrap();
    assert!(img.is_valid_rect(0, 0, 4, 4));
    assert!(img.is_valid_rect(1, 1, 3, 3));
    assert!(!img.is_valid_rect(1, 1, 4, 3));
    assert!(!img.is_valid_rect(2, 2, 3, 1));
    // Zero-sized rectangles are valid anywhere up to the far edge.
    assert!(img.is_valid_rect(4, 4, 0, 0));
    assert!(!img.is_valid_rect(5, 0, 0, 0));
    // Overflowing extents must not wrap.
    assert!(!img.is_valid_rect(1, 1, usize::MAX, 1));
}

#[test]
fn rows_are_contiguous_slices() {
    let img = GrayImage::from_raw(vec![1, 2, 3, 4, 5, 6], 3, 2, 255).unwrap();
    assert_eq!(img.row(0), Some(&[1u8, 2, 3][..]));
    assert_eq!(img.row(1), Some(&[4u8, 5, 6][..]));
    assert_eq!(img.row(2), None);
}

#[test]
fn stats_reports_min_and_max() {
    let img = GrayImage::from_raw(vec![9, 3, 7, 250], 2, 2, 255).unwrap();
    assert_eq!(img.stats(), Some(PixelStats { min: 3, max: 250 }));
}

#[test]
fn from_raw_validates_length_and_range() {
    let err = GrayImage::from_raw(vec![0; 5], 2, 3, 255).unwrap_err();
    assert!(matches!(
        err,
        GrayMapError::BufferSizeMismatch {
            expected: 6,
            got: 5,
            ..
        }
    ));

    let err = GrayImage::from_raw(vec![0, 120], 2, 1, 100).unwrap_err();
    assert!(matches!(
        err,
        GrayMapError::SampleOutOfRange {
            value: 120,
            maxval: 100
        }
    ));
}

#[test]
fn equality_compares_geometry_and_samples() {
    let a = GrayImage::from_raw(vec![1, 2, 3, 4], 2, 2, 255).unwrap();
    let b = GrayImage::from_raw(vec![1, 2, 3, 4], 2, 2, 255).unwrap();
    let c = GrayImage::from_raw(vec![1, 2, 3, 4], 4, 1, 255).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}
