use graymap::GrayImage;
use rand::Rng;

fn random_image(width: usize, height: usize, maxval: u8) -> GrayImage {
    let mut rng = rand::rng();
    let data = (0..width * height)
        .map(|_| rng.random_range(0..=maxval))
        .collect();
    GrayImage::from_raw(data, width, height, maxval).unwrap()
}

#[test]
fn negate_maps_black_to_white() {
    let mut img = GrayImage::new(2, 2, 200).unwrap();
    img.negate();
    assert!(img.as_raw().iter().all(|&v| v == 200));
}

#[test]
fn negate_is_an_involution() {
    let original = random_image(13, 7, 255);
    let mut img = original.clone();
    img.negate();
    img.negate();
    assert_eq!(img, original);
}

#[test]
fn negate_involution_holds_below_full_range() {
    let original = random_image(5, 5, 100);
    let mut img = original.clone();
    img.negate();
    assert!(img.as_raw().iter().all(|&v| v <= 100));
    img.negate();
    assert_eq!(img, original);
}

#[test]
fn threshold_splits_at_the_level() {
    let mut img = GrayImage::from_raw(vec![0, 99, 100, 101, 200, 255], 3, 2, 255).unwrap();
    img.threshold(100);
    assert_eq!(img.as_raw(), &[0, 0, 255, 255, 255, 255]);
}

#[test]
fn threshold_white_is_maxval_not_255() {
    let mut img = GrayImage::from_raw(vec![10, 80], 2, 1, 100).unwrap();
    img.threshold(50);
    assert_eq!(img.as_raw(), &[0, 100]);
}

#[test]
fn threshold_zero_turns_everything_white() {
    let mut img = random_image(6, 4, 180);
    img.threshold(0);
    assert!(img.as_raw().iter().all(|&v| v == 180));
}

#[test]
fn brighten_identity_and_black() {
    let original = random_image(8, 8, 255);

    let mut same = original.clone();
    same.brighten(1.0);
    assert_eq!(same, original);

    let mut black = original.clone();
    black.brighten(0.0);
    assert!(black.as_raw().iter().all(|&v| v == 0));
}

#[test]
fn brighten_rounds_half_up() {
    // 3 * 1.5 = 4.5 rounds to 5; 1 * 0.5 = 0.5 rounds to 1.
    let mut img = GrayImage::from_raw(vec![3, 1], 2, 1, 255).unwrap();
    img.brighten(1.5);
    assert_eq!(img.as_raw()[0], 5);

    let mut img = GrayImage::from_raw(vec![1], 1, 1, 255).unwrap();
    img.brighten(0.5);
    assert_eq!(img.as_raw()[0], 1);
}

#[test]
fn brighten_saturates_at_maxval() {
    let mut img = GrayImage::from_raw(vec![90, 10], 2, 1, 100).unwrap();
    img.brighten(3.0);
    assert_eq!(img.as_raw(), &[100, 30]);
}

#[test]
#[should_panic(expected = "non-negative")]
fn brighten_rejects_negative_factor() {
    let mut img = GrayImage::new(1, 1, 255).unwrap();
    img.brighten(-0.5);
}
