//! Brute-force sub-image search.
//!
//! Deliberately the reference algorithm: a plain double loop over anchor
//! positions with early-exit comparison, O(W*H*w*h) worst case. No
//! indexing or hashing is involved; anchors are scanned in raster order
//! and the first match wins.

use crate::image::GrayImage;
use crate::trace::{trace_event, trace_span};

/// Returns true iff `pattern` matches `img` exactly at anchor `(x, y)`.
///
/// The comparison short-circuits on the first mismatching sample. The
/// anchor must be a valid position in `img`; this function does not
/// itself check that the whole pattern rectangle fits, so drivers must
/// bound their iteration (an out-of-range read panics).
pub fn match_at(img: &GrayImage, x: usize, y: usize, pattern: &GrayImage) -> bool {
    assert!(
        img.is_valid_pos(x, y),
        "anchor ({x}, {y}) outside {}x{} image",
        img.width(),
        img.height()
    );
    for i in 0..pattern.height() {
        for j in 0..pattern.width() {
            if img.get(x + j, y + i) != pattern.get(j, i) {
                return false;
            }
        }
    }
    true
}

/// Scans `img` for `pattern` and returns the first matching anchor.
///
/// Anchors run over `0..=img.width - pattern.width` horizontally and
/// `0..=img.height - pattern.height` vertically, in raster order, so
/// every candidate placement fits entirely inside `img`. Returns `None`
/// when the pattern is larger than the image in either dimension, when
/// either image has zero area, or when no anchor matches.
pub fn locate(img: &GrayImage, pattern: &GrayImage) -> Option<(usize, usize)> {
    let _guard = trace_span!("locate").entered();
    if img.is_empty() || pattern.is_empty() {
        return None;
    }
    if pattern.width() > img.width() || pattern.height() > img.height() {
        return None;
    }

    let max_x = img.width() - pattern.width();
    let max_y = img.height() - pattern.height();
    let mut anchors_tried: u64 = 0;
    for y in 0..=max_y {
        for x in 0..=max_x {
            anchors_tried += 1;
            if match_at(img, x, y, pattern) {
                trace_event!("locate_done", anchors = anchors_tried, found = true);
                return Some((x, y));
            }
        }
    }
    trace_event!("locate_done", anchors = anchors_tried, found = false);
    None
}
